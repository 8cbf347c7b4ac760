//! Controllers layer - decision logic between the domain and the UI.
//!
//! - Dirty-guard confirmation flow

pub mod dirty_guard;
