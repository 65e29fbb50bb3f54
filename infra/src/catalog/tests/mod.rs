//! Catalog store tests
