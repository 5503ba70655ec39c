//! Infrastructure layer - Database access
//!
//! - Connection provider, schema scripts, seeds and the script runner
//! - Schema inspection
//! - Repositories used by seeds and the admin bootstrap

pub mod db;
pub mod repositories;

pub use db::{Database, Direction, RunState, SchemaInspector, ScriptRunner, StepMode};
pub use repositories::{ContactStore, UserStore};
