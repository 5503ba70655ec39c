//! API layer - Health surface behind the basic-auth gate

pub mod middleware;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
