//! Capability gate extractors.
//!
//! Each extractor reads the claims `jwt_auth_middleware` attached to the
//! request and checks them against one [`Capability`]. List the gate first in
//! a handler's arguments so it runs before body validation.

use super::{
    jwt::JwtClaims,
    role::{Capability, Role},
};
use crate::errors::AppError;
use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

/// Authenticated caller identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub id: Uuid,
    pub role: Role,
}

impl From<&JwtClaims> for Caller {
    fn from(claims: &JwtClaims) -> Self {
        Self {
            id: claims.sub,
            role: claims.role,
        }
    }
}

/// Resolve the caller from request extensions and check `capability`.
pub fn authorize(parts: &Parts, capability: Capability) -> Result<Caller, AppError> {
    let claims = parts
        .extensions
        .get::<JwtClaims>()
        .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))?;

    let caller = Caller::from(claims);
    if !capability.permits(caller.role) {
        tracing::debug!(
            caller_id = %caller.id,
            role = %caller.role,
            required = %capability,
            "Capability check failed"
        );
        return Err(AppError::Forbidden(format!(
            "This action requires the {capability} capability"
        )));
    }

    Ok(caller)
}

/// Any authenticated caller.
#[derive(Debug, Clone, Copy)]
pub struct AnyUser(pub Caller);

/// Caller registered as a buyer.
#[derive(Debug, Clone, Copy)]
pub struct Buyer(pub Caller);

/// Caller registered as a seller.
#[derive(Debug, Clone, Copy)]
pub struct Seller(pub Caller);

impl<S: Send + Sync> FromRequestParts<S> for AnyUser {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        authorize(parts, Capability::AnyUser)
            .map(AnyUser)
            .map_err(IntoResponse::into_response)
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Buyer {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        authorize(parts, Capability::Buyer)
            .map(Buyer)
            .map_err(IntoResponse::into_response)
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Seller {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        authorize(parts, Capability::Seller)
            .map(Seller)
            .map_err(IntoResponse::into_response)
    }
}
