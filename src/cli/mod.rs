//! CLI command handlers
//!
//! Argument parsing structures, log level selection and routing to the demos.

pub mod args;
pub mod help;
pub mod router;

// Re-export the main CLI structures for convenience
pub use args::{Cli, Commands};
pub use help::get_log_level;
pub use router::execute_command;
