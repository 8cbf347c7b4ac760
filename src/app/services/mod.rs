//! Services layer - business operations and utilities.
//!
//! - File load/save
//! - Path helpers
//! - Page layout for print and export
//! - PDF serialization

pub mod file_io;
pub mod layout;
pub mod pdf;
pub mod text_ops;
