//! Tests for the translation store
