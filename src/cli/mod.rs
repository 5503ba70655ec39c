//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `migrate` - Run, revert or execute a single SQL file
//! - `setup` - Feature tables plus sample data
//! - `inspect` - Schema report
//! - `admin` - Admin account bootstrap
//! - `serve` - Health surface behind basic auth

pub mod args;

pub use args::{Cli, Commands};
