//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Document, TextFormat, Messages, Settings)
//! - `controllers/` - Decision logic (dirty-guard)
//! - `services/` - Business operations (file I/O, layout, PDF)
//! - `infrastructure/` - External integrations (error, logging, platform)
//! - `ports.rs` - Traits the GUI implements
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod services;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;

// Re-exports for convenient external access
pub use controllers::dirty_guard::{GuardOutcome, SaveOutcome, guard_discard};
pub use domain::{AppSettings, Document, Message, ModifiedFlag, TextFormat, ThemeMode};
pub use infrastructure::error::{AppError, Result};
pub use state::{AppState, Flow};
