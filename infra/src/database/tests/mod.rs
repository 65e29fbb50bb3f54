//! Database module tests

mod translation_repository_tests;
