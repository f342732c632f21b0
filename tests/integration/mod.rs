//! Integration tests
//!
//! HTTP-level tests against the full router

pub mod api;
pub mod database;
