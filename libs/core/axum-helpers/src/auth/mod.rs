//! Authentication and authorization module.
//!
//! This module provides:
//! - Stateless JWT token creation and verification
//! - Closed `Role` and `Capability` types
//! - Authentication middleware and capability gate extractors
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::auth::{JwtAuth, JwtConfig, Seller, jwt_auth_middleware};
//! use core_config::FromEnv;
//!
//! let config = JwtConfig::from_env()?;
//! let auth = JwtAuth::new(&config);
//!
//! async fn add(Seller(caller): Seller) { /* ... */ }
//!
//! let protected = Router::new()
//!     .route("/product/add", post(add))
//!     .layer(axum::middleware::from_fn_with_state(auth, jwt_auth_middleware));
//! ```

pub mod config;
pub mod gate;
pub mod jwt;
pub mod middleware;
pub mod role;

// Re-export commonly used types
pub use config::{ACCESS_TOKEN_TTL, JwtConfig};
pub use gate::{AnyUser, Buyer, Caller, Seller, authorize};
pub use jwt::{JwtAuth, JwtClaims};
pub use middleware::jwt_auth_middleware;
pub use role::{Capability, Role};
