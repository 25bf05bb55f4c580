//! Integration tests for the product catalog against a real MongoDB.

use axum_helpers::{Caller, Role};
use domain_products::*;
use rust_decimal::Decimal;
use std::str::FromStr;
use test_utils::{TestDataBuilder, TestMongo};

fn input(name: &str, price: &str) -> ProductInput {
    ProductInput {
        name: name.to_string(),
        brand: "Acme".to_string(),
        category: ProductCategory::Electronics,
        price: Decimal::from_str(price).unwrap(),
        available_quantity: 10,
        free_shipping: false,
        description: "é".repeat(300),
        image: "https://img.example.com/p.png".to_string(),
    }
}

async fn service(mongo: &TestMongo) -> ProductService<MongoProductRepository> {
    let repo = MongoProductRepository::new(&mongo.database());
    repo.init_indexes().await.unwrap();
    ProductService::new(repo)
}

#[tokio::test]
async fn test_seller_lifecycle_end_to_end() {
    let mongo = TestMongo::new().await;
    let service = service(&mongo).await;
    let builder = TestDataBuilder::from_test_name("catalog_lifecycle");

    let seller_a = Caller {
        id: builder.user_id(),
        role: Role::Seller,
    };
    let seller_b = Caller {
        id: builder.other_user_id(),
        role: Role::Seller,
    };

    // Seller A adds a product at 25.50
    let created = service
        .create_product(seller_a, input("Laptop", "25.50"))
        .await
        .unwrap();
    assert_eq!(created.price, 2550);

    // Buyer sees it in the catalog with a truncated description
    let page = service
        .list_for_buyer(BuyerListQuery {
            page: 1,
            limit: 10,
            search_text: None,
        })
        .await
        .unwrap();
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.products.len(), 1);
    assert_eq!(page.products[0].id, created.id);
    assert_eq!(page.products[0].price, 2550);
    assert_eq!(page.products[0].description.chars().count(), 200);

    // Seller B may neither delete nor edit it
    let denied = service.delete_product(created.id, seller_b).await;
    assert!(matches!(denied, Err(ProductError::NotOwner(_))));
    let denied = service
        .edit_product(created.id, seller_b, input("Stolen", "1"))
        .await;
    assert!(matches!(denied, Err(ProductError::NotOwner(_))));

    // Seller A deletes it; details then report not found
    service.delete_product(created.id, seller_a).await.unwrap();
    let gone = service.get_product(created.id).await;
    assert!(matches!(gone, Err(ProductError::NotFound(_))));
}

#[tokio::test]
async fn test_edit_overwrites_fields_but_not_owner() {
    let mongo = TestMongo::new().await;
    let service = service(&mongo).await;
    let owner = Caller {
        id: TestDataBuilder::from_test_name("edit_owner").user_id(),
        role: Role::Seller,
    };

    let created = service
        .create_product(owner, input("Old name", "9.99"))
        .await
        .unwrap();

    let mut edited = input("New name", "0.125");
    edited.category = ProductCategory::Kitchen;
    edited.free_shipping = true;
    service
        .edit_product(created.id, owner, edited)
        .await
        .unwrap();

    let stored = service.get_product(created.id).await.unwrap();
    assert_eq!(stored.name, "New name");
    assert_eq!(stored.category, ProductCategory::Kitchen);
    assert_eq!(stored.price, 13);
    assert!(stored.free_shipping);
    assert_eq!(stored.seller_id, owner.id);
    assert_eq!(stored.created_at.timestamp(), created.created_at.timestamp());
    // Details keep the full description
    assert_eq!(stored.description.chars().count(), 300);
}

#[tokio::test]
async fn test_seller_listing_only_shows_own_products() {
    let mongo = TestMongo::new().await;
    let service = service(&mongo).await;
    let builder = TestDataBuilder::from_test_name("seller_scope");
    let mine = Caller {
        id: builder.user_id(),
        role: Role::Seller,
    };
    let theirs = Caller {
        id: builder.other_user_id(),
        role: Role::Seller,
    };

    for i in 0..3 {
        service
            .create_product(mine, input(&format!("Mine {i}"), "1"))
            .await
            .unwrap();
    }
    service
        .create_product(theirs, input("Theirs", "1"))
        .await
        .unwrap();

    let page = service
        .list_for_seller(mine, SellerListQuery { page: 1, limit: 2 })
        .await
        .unwrap();
    assert_eq!(page.products.len(), 2);
    assert_eq!(page.total_pages, 2);
    assert!(page.products.iter().all(|p| p.name.starts_with("Mine")));

    let last = service
        .list_for_seller(mine, SellerListQuery { page: 2, limit: 2 })
        .await
        .unwrap();
    assert_eq!(last.products.len(), 1);

    let past_end = service
        .list_for_seller(mine, SellerListQuery { page: 9, limit: 2 })
        .await
        .unwrap();
    assert!(past_end.products.is_empty());
    assert_eq!(past_end.total_pages, 2);
}

#[tokio::test]
async fn test_search_counts_with_same_filter_as_page() {
    let mongo = TestMongo::new().await;
    let service = service(&mongo).await;
    let seller = Caller {
        id: TestDataBuilder::from_test_name("search_count").user_id(),
        role: Role::Seller,
    };

    for name in ["Phone case", "Phone charger", "Headphones", "Table"] {
        service
            .create_product(seller, input(name, "2"))
            .await
            .unwrap();
    }

    let page = service
        .list_for_buyer(BuyerListQuery {
            page: 1,
            limit: 1,
            search_text: Some("phone".into()),
        })
        .await
        .unwrap();
    assert_eq!(page.products.len(), 1);
    assert_eq!(page.total_pages, 3);

    let blank = service
        .list_for_buyer(BuyerListQuery {
            page: 1,
            limit: 10,
            search_text: Some("   ".into()),
        })
        .await
        .unwrap();
    assert_eq!(blank.products.len(), 4);
}
