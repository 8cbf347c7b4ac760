//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - Error types
//! - Logger setup
//! - Platform-specific detection

pub mod error;
pub mod logging;
pub mod platform;
