//! Handler tests for Products domain
//!
//! These tests drive the products router through `jwt_auth_middleware`
//! against a real MongoDB container:
//! - Capability gates (401 / 403) run before validation
//! - Request validation and error bodies
//! - Ownership failures are distinct from not-found
//! - Response shapes for details and listings

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::{Router, middleware};
use axum_helpers::{JwtAuth, JwtConfig, Role, jwt_auth_middleware};
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use test_utils::{TestDataBuilder, TestMongo};
use tower::ServiceExt; // For oneshot()
use uuid::Uuid;

const SECRET: &str = "handler-test-secret-with-at-least-32-chars";

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

struct TestApp {
    _mongo: TestMongo,
    service: ProductService<MongoProductRepository>,
    auth: JwtAuth,
}

impl TestApp {
    async fn new() -> Self {
        let mongo = TestMongo::new().await;
        let repo = MongoProductRepository::new(&mongo.database());
        repo.init_indexes().await.unwrap();
        let auth = JwtAuth::new(&JwtConfig::new(SECRET).unwrap());

        Self {
            _mongo: mongo,
            service: ProductService::new(repo),
            auth,
        }
    }

    fn router(&self) -> Router {
        handlers::router(self.service.clone()).layer(middleware::from_fn_with_state(
            self.auth.clone(),
            jwt_auth_middleware,
        ))
    }

    fn token(&self, user_id: Uuid, role: Role) -> String {
        self.auth
            .create_access_token(user_id, "someone@t.io", role)
            .unwrap()
    }
}

fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

fn product_body(name: &str, price: Value) -> Value {
    json!({
        "name": name,
        "brand": "Acme",
        "category": "electronics",
        "price": price,
        "availableQuantity": 4,
        "freeShipping": true,
        "description": "d".repeat(250),
        "image": "https://img.example.com/p.png"
    })
}

async fn add(app: &TestApp, token: &str, name: &str, price: Value) -> StatusCode {
    app.router()
        .oneshot(request(
            "POST",
            "/add",
            Some(token),
            Some(product_body(name, price)),
        ))
        .await
        .unwrap()
        .status()
}

async fn seller_listing(app: &TestApp, token: &str) -> Value {
    let response = app
        .router()
        .oneshot(request(
            "POST",
            "/list/seller",
            Some(token),
            Some(json!({"page": 1, "limit": 10})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    json_body(response.into_body()).await
}

#[tokio::test]
async fn test_add_product_returns_message_and_stores_minor_units() {
    let app = TestApp::new().await;
    let builder = TestDataBuilder::from_test_name("handler_add");
    let token = app.token(builder.user_id(), Role::Seller);

    let response = app
        .router()
        .oneshot(request(
            "POST",
            "/add",
            Some(&token),
            Some(product_body("Laptop", json!(25.50))),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Product is added successfully.");

    let listing = seller_listing(&app, &token).await;
    assert_eq!(listing["productList"][0]["price"], 2550);
}

#[tokio::test]
async fn test_requests_without_token_are_unauthorized() {
    let app = TestApp::new().await;

    let response = app
        .router()
        .oneshot(request(
            "POST",
            "/add",
            None,
            Some(product_body("Laptop", json!(10))),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_buyer_cannot_add_even_with_invalid_body() {
    let app = TestApp::new().await;
    let token = app.token(Uuid::now_v7(), Role::Buyer);

    // Gate runs before validation: an empty body still yields 403
    let response = app
        .router()
        .oneshot(request("POST", "/add", Some(&token), Some(json!({}))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "FORBIDDEN");
}

#[tokio::test]
async fn test_seller_cannot_use_buyer_listing() {
    let app = TestApp::new().await;
    let token = app.token(Uuid::now_v7(), Role::Seller);

    let response = app
        .router()
        .oneshot(request(
            "POST",
            "/list/buyer",
            Some(&token),
            Some(json!({"page": 1, "limit": 10})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_add_reports_every_invalid_field() {
    let app = TestApp::new().await;
    let token = app.token(Uuid::now_v7(), Role::Seller);

    let mut body = product_body("   ", json!(0));
    body["availableQuantity"] = json!(-2);

    let response = app
        .router()
        .oneshot(request("POST", "/add", Some(&token), Some(body)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["details"].get("name").is_some());
    assert!(body["details"].get("price").is_some());
    assert!(body["details"].get("available_quantity").is_some());
}

#[tokio::test]
async fn test_unknown_category_is_invalid_json() {
    let app = TestApp::new().await;
    let token = app.token(Uuid::now_v7(), Role::Seller);

    let mut body = product_body("Laptop", json!(10));
    body["category"] = json!("weapons");

    let response = app
        .router()
        .oneshot(request("POST", "/add", Some(&token), Some(body)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "INVALID_JSON");
}

#[tokio::test]
async fn test_details_with_malformed_id() {
    let app = TestApp::new().await;
    let token = app.token(Uuid::now_v7(), Role::Buyer);

    let response = app
        .router()
        .oneshot(request("GET", "/details/not-a-uuid", Some(&token), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "INVALID_UUID");
}

#[tokio::test]
async fn test_details_of_missing_product_is_404() {
    let app = TestApp::new().await;
    let token = app.token(Uuid::now_v7(), Role::Buyer);

    let response = app
        .router()
        .oneshot(request(
            "GET",
            &format!("/details/{}", Uuid::now_v7()),
            Some(&token),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Product does not exist.");
}

#[tokio::test]
async fn test_details_return_full_description() {
    let app = TestApp::new().await;
    let seller = Uuid::now_v7();
    let token = app.token(seller, Role::Seller);
    assert_eq!(add(&app, &token, "Kettle", json!("19.99")).await, StatusCode::OK);

    let listing = seller_listing(&app, &token).await;
    let summary = &listing["productList"][0];
    assert_eq!(summary["description"].as_str().unwrap().chars().count(), 200);
    assert!(summary.get("sellerId").is_none());
    let id = summary["_id"].as_str().unwrap().to_string();

    let buyer = app.token(Uuid::now_v7(), Role::Buyer);
    let response = app
        .router()
        .oneshot(request("GET", &format!("/details/{id}"), Some(&buyer), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: models::ProductDetailResponse = json_body(response.into_body()).await;
    assert_eq!(body.message, "success");
    assert_eq!(body.product_detail.description.chars().count(), 250);
    assert_eq!(body.product_detail.seller_id, seller);
    assert_eq!(body.product_detail.price, 1999);
}

#[tokio::test]
async fn test_edit_by_owner_keeps_seller_and_normalizes_price() {
    let app = TestApp::new().await;
    let owner = Uuid::now_v7();
    let token = app.token(owner, Role::Seller);
    add(&app, &token, "Pan", json!(5)).await;

    let listing = seller_listing(&app, &token).await;
    let id = listing["productList"][0]["_id"].as_str().unwrap().to_string();

    let response = app
        .router()
        .oneshot(request(
            "PUT",
            &format!("/edit/{id}"),
            Some(&token),
            Some(product_body("Pan Pro", json!(10.005))),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Product is updated successfully.");

    let stored = app.service.get_product(id.parse().unwrap()).await.unwrap();
    assert_eq!(stored.name, "Pan Pro");
    assert_eq!(stored.price, 1001);
    assert_eq!(stored.seller_id, owner);
    assert!(stored.updated_at >= stored.created_at);
}

#[tokio::test]
async fn test_edit_and_delete_by_other_seller_are_forbidden() {
    let app = TestApp::new().await;
    let builder = TestDataBuilder::from_test_name("handler_not_owner");
    let owner = app.token(builder.user_id(), Role::Seller);
    let stranger = app.token(builder.other_user_id(), Role::Seller);
    add(&app, &owner, "Chair", json!(40)).await;

    let listing = seller_listing(&app, &owner).await;
    let id = listing["productList"][0]["_id"].as_str().unwrap().to_string();

    let edit = app
        .router()
        .oneshot(request(
            "PUT",
            &format!("/edit/{id}"),
            Some(&stranger),
            Some(product_body("Mine now", json!(1))),
        ))
        .await
        .unwrap();
    assert_eq!(edit.status(), StatusCode::FORBIDDEN);
    let body: Value = json_body(edit.into_body()).await;
    assert_eq!(body["error"], "OWNERSHIP_REQUIRED");
    assert_eq!(body["message"], "You are not owner of this product.");

    let delete = app
        .router()
        .oneshot(request("DELETE", &format!("/delete/{id}"), Some(&stranger), None))
        .await
        .unwrap();
    assert_eq!(delete.status(), StatusCode::FORBIDDEN);

    let stored = app.service.get_product(id.parse().unwrap()).await.unwrap();
    assert_eq!(stored.name, "Chair");
}

#[tokio::test]
async fn test_delete_twice_second_is_not_found() {
    let app = TestApp::new().await;
    let token = app.token(Uuid::now_v7(), Role::Seller);
    add(&app, &token, "Lamp", json!(12)).await;

    let listing = seller_listing(&app, &token).await;
    let id = listing["productList"][0]["_id"].as_str().unwrap().to_string();

    let first = app
        .router()
        .oneshot(request("DELETE", &format!("/delete/{id}"), Some(&token), None))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);
    let body: Value = json_body(first.into_body()).await;
    assert_eq!(body["message"], "Product is removed successfully.");

    let second = app
        .router()
        .oneshot(request("DELETE", &format!("/delete/{id}"), Some(&token), None))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_buyer_listing_pages_and_searches() {
    let app = TestApp::new().await;
    let seller = app.token(Uuid::now_v7(), Role::Seller);
    for name in ["Red Laptop", "Blue laptop", "Desk", "Laptop (refurb)", "Mug"] {
        add(&app, &seller, name, json!(3)).await;
    }
    let buyer = app.token(Uuid::now_v7(), Role::Buyer);

    let response = app
        .router()
        .oneshot(request(
            "POST",
            "/list/buyer",
            Some(&buyer),
            Some(json!({"page": 2, "limit": 2})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "success");
    assert_eq!(body["productList"].as_array().unwrap().len(), 2);
    assert_eq!(body["totalPage"], 3);

    let response = app
        .router()
        .oneshot(request(
            "POST",
            "/list/buyer",
            Some(&buyer),
            Some(json!({"page": 1, "limit": 10, "searchText": " LAPTOP "})),
        ))
        .await
        .unwrap();
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["productList"].as_array().unwrap().len(), 3);
    assert_eq!(body["totalPage"], 1);

    // Metacharacters match literally
    let response = app
        .router()
        .oneshot(request(
            "POST",
            "/list/buyer",
            Some(&buyer),
            Some(json!({"page": 1, "limit": 10, "searchText": "(refurb)"})),
        ))
        .await
        .unwrap();
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["productList"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_listing_rejects_bad_page_window() {
    let app = TestApp::new().await;
    let buyer = app.token(Uuid::now_v7(), Role::Buyer);

    let response = app
        .router()
        .oneshot(request(
            "POST",
            "/list/buyer",
            Some(&buyer),
            Some(json!({"page": 0, "limit": 500})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert!(body["details"].get("page").is_some());
    assert!(body["details"].get("limit").is_some());
}
