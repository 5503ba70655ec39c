//! CalmTunes database tooling
//!
//! Schema scripts, sample data, a sequential script runner, a schema
//! inspector and the basic-auth gate for the CalmTunes backend.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core entities and input validation
//! - **infra**: Connection provider, scripts, runner, inspector, repositories
//! - **api**: Health routes and the basic-auth middleware
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Create the users table
//! calmtunes migrate run
//!
//! # Create mood entries and seed sample data
//! calmtunes setup mood
//!
//! # Show the columns of every table
//! calmtunes inspect --json
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Password, User, UserRole};
pub use errors::{AppError, AppResult};
pub use infra::Database;
