//! Application-level utilities for the Rental CLI.
//!
//! This module provides:
//! - Config path resolution
//! - The application context shared by command handlers

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
