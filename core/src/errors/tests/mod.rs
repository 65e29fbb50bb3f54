//! Tests for failure types
