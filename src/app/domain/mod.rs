//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Document and its modified-flag
//! - Editor-wide text formatting
//! - Message types and the action table for the event system
//! - Application settings

pub mod actions;
pub mod document;
pub mod format;
pub mod messages;
pub mod settings;

pub use actions::{ACTIONS, Accel, Action};
pub use document::{DocState, Document, ModifiedFlag};
pub use format::{Alignment, FontFamily, FontSpec, Rgb, TextFormat};
pub use messages::Message;
pub use settings::{AppSettings, ThemeMode};
