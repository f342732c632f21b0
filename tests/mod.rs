//! Test suite for authql
//!
//! This module organizes all tests

pub mod common;
pub mod integration;
