//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - A test server over a fresh in-memory database
//! - Authentication test helpers

pub mod auth_helpers;
pub mod test_server;

// Re-export commonly used utilities
pub use auth_helpers::*;
pub use test_server::*;
