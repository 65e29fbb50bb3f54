//! Tests for the response normalizer

mod service_tests;
