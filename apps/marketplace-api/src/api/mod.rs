//! API routes module
//!
//! Wires the product and user domains into HTTP routes.

pub mod health;
pub mod products;
pub mod users;

use axum::Router;
use mongodb::Database;

use crate::state::AppState;

/// Create all API routes
/// Note: These are nested under /api by axum_helpers::create_router
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/product", products::router(state))
        .nest("/user", users::router(state))
        .merge(health::router(state.clone()))
}

/// Create the indexes every collection relies on
pub async fn init_indexes(db: &Database) -> eyre::Result<()> {
    products::init_indexes(db).await?;
    users::init_indexes(db).await?;
    Ok(())
}
