//! Products API routes
//!
//! Every product route sits behind the JWT middleware; the handlers then
//! gate on the caller's role.

use axum::{Router, middleware};
use axum_helpers::jwt_auth_middleware;
use domain_products::{MongoProductRepository, ProductService, handlers};
use mongodb::Database;

use crate::state::AppState;

/// Create products router
pub fn router(state: &AppState) -> Router {
    let repository = MongoProductRepository::new(&state.db);
    let service = ProductService::new(repository);

    handlers::router(service).layer(middleware::from_fn_with_state(
        state.jwt.clone(),
        jwt_auth_middleware,
    ))
}

pub async fn init_indexes(db: &Database) -> eyre::Result<()> {
    MongoProductRepository::new(db).init_indexes().await?;
    Ok(())
}
