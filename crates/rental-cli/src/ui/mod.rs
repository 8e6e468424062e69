//! UI primitives for the Rental CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badge tokens and color palette
//! - **Render**: Tables, headers, receipts, hints
//! - **Prompt**: Line-based and terminal prompts for the menu
//! - **Format**: Money, datetime and string helpers

mod context;
pub mod format;
mod mode;
pub mod prompt;
pub mod render;
pub mod theme;

// Re-export core types at module level
pub use context::{PromptSource, UiContext};
pub use mode::{parse_format, OutputMode};
pub use theme::Badge;

// Re-export commonly used render functions
pub use render::{
    badge, blank_line, divider, header, kv, print, print_error, receipt, table, Column,
};

pub use format::{format_datetime, format_money, single_line};
