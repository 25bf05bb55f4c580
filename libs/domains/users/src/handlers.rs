use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{
        BadRequestValidationResponse, ConflictResponse, InternalServerErrorResponse,
        UnauthorizedResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::UserResult;
use crate::models::{LoginRequest, LoginResponse, RegisterResponse, RegisterUser, UserResponse};
use crate::repository::UserRepository;
use crate::service::UserService;

/// OpenAPI documentation for Users API
#[derive(OpenApi)]
#[openapi(
    paths(register, login),
    components(
        schemas(RegisterUser, LoginRequest, RegisterResponse, LoginResponse, UserResponse),
        responses(
            BadRequestValidationResponse,
            ConflictResponse,
            UnauthorizedResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Users", description = "Registration and login")
    )
)]
pub struct ApiDoc;

/// Create the users router. These routes are public.
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .with_state(shared_service)
}

/// Register a new buyer or seller
#[utoipa::path(
    post,
    path = "/register",
    tag = "Users",
    request_body = RegisterUser,
    responses(
        (status = 201, description = "User registered", body = RegisterResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn register<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(input): ValidatedJson<RegisterUser>,
) -> UserResult<(StatusCode, Json<RegisterResponse>)> {
    service.register(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User is registered successfully.".to_string(),
        }),
    ))
}

/// Log in and receive an access token
#[utoipa::path(
    post,
    path = "/login",
    tag = "Users",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = LoginResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn login<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> UserResult<Json<LoginResponse>> {
    let (user_details, access_token) = service.login(input).await?;
    Ok(Json(LoginResponse {
        message: "success".to_string(),
        user_details,
        access_token,
    }))
}
