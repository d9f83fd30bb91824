//! # fnkit
//!
//! Small demonstrations of functions as values in Rust.
//!
//! ## Modules
//!
//! - `aggregate` - Left-to-right reduction with a pluggable combining operation
//! - `functions` - Function types, optional callables, curried closures and the `StringConsumer` trait
//! - `demo` - Renders each demonstration into a `StringConsumer`
//! - `config` - Optional TOML file with demo inputs
//! - `cli` - Argument parsing and command routing for the `fnkit` binary
//! - `error` - Crate-wide error type
pub mod aggregate;
pub mod cli;
pub mod config;
pub mod demo;
pub mod error;
pub mod functions;

pub use error::{FnkitError, Result};
