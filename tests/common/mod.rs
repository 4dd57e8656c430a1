//! Common test utilities for legajo CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated client root and home directory plus CLI helpers
//! - Fixtures: Reusable client folder layouts

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
