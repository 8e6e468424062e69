//! Command handlers, one module per subcommand family.

pub mod cars;
pub mod menu;
pub mod misc;
