//! Database integration tests

mod migrations_test;
