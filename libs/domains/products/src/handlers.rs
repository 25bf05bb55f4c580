//! HTTP handlers for Products API
//!
//! Every handler takes its capability gate as the first argument, so role
//! checks run before path or body extraction.

use axum::{
    Json, Router,
    extract::State,
    routing::{delete, get, post, put},
};
use axum_helpers::{
    AnyUser, Buyer, Seller, UuidPath, ValidatedJson,
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, ForbiddenResponse,
        InternalServerErrorResponse, NotFoundResponse, NotOwnerResponse, UnauthorizedResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{
    BuyerListQuery, MessageResponse, Product, ProductCategory, ProductDetailResponse,
    ProductInput, ProductListResponse, ProductPage, ProductSummary, SellerListQuery,
};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        add_product,
        product_details,
        delete_product,
        edit_product,
        list_for_buyer,
        list_for_seller,
    ),
    components(
        schemas(
            Product, ProductSummary, ProductCategory, ProductInput,
            BuyerListQuery, SellerListQuery,
            MessageResponse, ProductDetailResponse, ProductListResponse
        ),
        responses(
            NotFoundResponse,
            NotOwnerResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            UnauthorizedResponse,
            ForbiddenResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints.
///
/// The router expects `JwtClaims` in request extensions; mount it behind
/// `jwt_auth_middleware`.
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/add", post(add_product))
        .route("/details/{id}", get(product_details))
        .route("/delete/{id}", delete(delete_product))
        .route("/edit/{id}", put(edit_product))
        .route("/list/buyer", post(list_for_buyer))
        .route("/list/seller", post(list_for_seller))
        .with_state(shared_service)
}

fn list_response(page: ProductPage) -> Json<ProductListResponse> {
    Json(ProductListResponse {
        message: "success".to_string(),
        product_list: page.products,
        total_page: page.total_pages,
    })
}

/// Add a product owned by the calling seller
#[utoipa::path(
    post,
    path = "/add",
    tag = "Products",
    request_body = ProductInput,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Product added", body = MessageResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn add_product<R: ProductRepository>(
    Seller(caller): Seller,
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<ProductInput>,
) -> ProductResult<Json<MessageResponse>> {
    service.create_product(caller, input).await?;
    Ok(Json(MessageResponse::new("Product is added successfully.")))
}

/// Full product record
#[utoipa::path(
    get,
    path = "/details/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Product found", body = ProductDetailResponse),
        (status = 400, response = BadRequestUuidResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn product_details<R: ProductRepository>(
    AnyUser(_caller): AnyUser,
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
) -> ProductResult<Json<ProductDetailResponse>> {
    let product = service.get_product(id).await?;
    Ok(Json(ProductDetailResponse {
        message: "success".to_string(),
        product_detail: product,
    }))
}

/// Remove a product the caller owns
#[utoipa::path(
    delete,
    path = "/delete/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Product removed", body = MessageResponse),
        (status = 400, response = BadRequestUuidResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = NotOwnerResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    Seller(caller): Seller,
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
) -> ProductResult<Json<MessageResponse>> {
    service.delete_product(id, caller).await?;
    Ok(Json(MessageResponse::new("Product is removed successfully.")))
}

/// Overwrite the editable fields of a product the caller owns
#[utoipa::path(
    put,
    path = "/edit/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = ProductInput,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Product updated", body = MessageResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = NotOwnerResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn edit_product<R: ProductRepository>(
    Seller(caller): Seller,
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<ProductInput>,
) -> ProductResult<Json<MessageResponse>> {
    service.edit_product(id, caller, input).await?;
    Ok(Json(MessageResponse::new("Product is updated successfully.")))
}

/// Browse the catalog, optionally searching by name
#[utoipa::path(
    post,
    path = "/list/buyer",
    tag = "Products",
    request_body = BuyerListQuery,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "One page of products", body = ProductListResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_for_buyer<R: ProductRepository>(
    Buyer(_caller): Buyer,
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(query): ValidatedJson<BuyerListQuery>,
) -> ProductResult<Json<ProductListResponse>> {
    let page = service.list_for_buyer(query).await?;
    Ok(list_response(page))
}

/// List the calling seller's own products
#[utoipa::path(
    post,
    path = "/list/seller",
    tag = "Products",
    request_body = SellerListQuery,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "One page of products", body = ProductListResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_for_seller<R: ProductRepository>(
    Seller(caller): Seller,
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(query): ValidatedJson<SellerListQuery>,
) -> ProductResult<Json<ProductListResponse>> {
    let page = service.list_for_seller(caller, query).await?;
    Ok(list_response(page))
}
