//! Tests for translation resolution
