//! Application state management.
//!
//! Shared state handed to the route builders: configuration, the MongoDB
//! client and database, and the token signer.

use axum_helpers::JwtAuth;
use mongodb::{Client, Database};

/// Shared application state.
///
/// Cloning is cheap; the MongoDB client shares its connection pool.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client (cloneable, shares underlying connection pool)
    pub mongo_client: Client,
    /// MongoDB database instance
    pub db: Database,
    /// Issues and verifies access tokens
    pub jwt: JwtAuth,
}
