//! Shared Module
//!
//! This module contains configuration and the fixed strings that make up the
//! service's public contract. Nothing here depends on the HTTP stack.
//!
//! # Overview
//!
//! - **`config`** - `ServerConfig`, its builder, and environment loading
//! - **`messages`** - Sentinel messages returned to clients

/// Server configuration
pub mod config;

/// Fixed response messages
pub mod messages;

/// Re-export commonly used types for convenience
pub use config::{ConfigError, ServerConfig, ServerConfigBuilder};
