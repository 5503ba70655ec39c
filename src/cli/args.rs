//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_ADMIN_NAME;
use crate::infra::db::seeds::Feature;

/// CalmTunes database tooling: migrations, seeds, schema inspection
#[derive(Parser, Debug)]
#[command(name = "calmtunes")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Parse process arguments after loading `.env`, so flags that fall back
    /// to environment variables also see values from the file.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::parse()
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run schema scripts
    Migrate(MigrateArgs),

    /// Create a feature table and seed it with sample data
    Setup(SetupArgs),

    /// Report the columns of one or more tables
    Inspect(InspectArgs),

    /// Create or reset the admin account
    Admin(AdminArgs),

    /// Start the HTTP health surface
    Serve(ServeArgs),
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Create the users table and add the profile image column
    Run {
        /// Wrap each script in its own transaction
        #[arg(long)]
        transactional: bool,
    },
    /// Execute a single SQL file
    RunSpecific {
        /// Path to the SQL file
        path: Option<PathBuf>,
    },
    /// Undo the users bootstrap, last script first
    Revert,
}

/// Arguments for the setup command
#[derive(Parser, Debug)]
pub struct SetupArgs {
    /// Feature to set up
    #[arg(value_enum)]
    pub feature: Feature,

    /// Remove the sample rows and drop the feature table instead
    #[arg(long)]
    pub revert: bool,

    /// Wrap each script in its own transaction
    #[arg(long)]
    pub transactional: bool,
}

/// Arguments for the inspect command
#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Tables to inspect (defaults to every CalmTunes table)
    pub tables: Vec<String>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the admin command
#[derive(Parser, Debug)]
pub struct AdminArgs {
    /// Admin email address
    #[arg(long, env = "ADMIN_EMAIL")]
    pub email: String,

    /// Admin password (hashed before storage)
    #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Display name
    #[arg(long, env = "ADMIN_NAME", default_value = DEFAULT_ADMIN_NAME)]
    pub name: String,
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to (defaults to SERVER_HOST)
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on (defaults to SERVER_PORT)
    #[arg(short, long)]
    pub port: Option<u16>,
}
