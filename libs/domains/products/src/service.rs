//! Product Service - Business logic layer

use std::sync::Arc;

use axum_helpers::Caller;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{BuyerListQuery, Product, ProductInput, ProductPage, SellerListQuery};
use crate::pagination::{ListScope, PageWindow, total_pages};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// Capability checks happen before a call reaches the service. Ownership
/// checks happen here, since they need the stored product.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a product owned by the caller
    #[instrument(skip(self, input), fields(seller_id = %caller.id, product_name = %input.name))]
    pub async fn create_product(&self, caller: Caller, input: ProductInput) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        let fields = input.into_fields()?;
        self.repository.create(Product::new(caller.id, fields)).await
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: Uuid) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Delete a product the caller owns
    #[instrument(skip(self), fields(caller_id = %caller.id))]
    pub async fn delete_product(&self, id: Uuid, caller: Caller) -> ProductResult<()> {
        self.owned_product(id, caller).await?;
        self.repository.delete(id).await
    }

    /// Replace the editable fields of a product the caller owns
    #[instrument(skip(self, input), fields(caller_id = %caller.id))]
    pub async fn edit_product(
        &self,
        id: Uuid,
        caller: Caller,
        input: ProductInput,
    ) -> ProductResult<()> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.owned_product(id, caller).await?;

        let fields = input.into_fields()?;
        self.repository.update_fields(id, fields).await
    }

    /// Whole catalog, optionally narrowed by a name search
    #[instrument(skip(self))]
    pub async fn list_for_buyer(&self, query: BuyerListQuery) -> ProductResult<ProductPage> {
        query
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        let scope = ListScope::catalog(query.search_text);
        self.page(scope, PageWindow::new(query.page, query.limit))
            .await
    }

    /// Only the caller's own products
    #[instrument(skip(self), fields(seller_id = %caller.id))]
    pub async fn list_for_seller(
        &self,
        caller: Caller,
        query: SellerListQuery,
    ) -> ProductResult<ProductPage> {
        query
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.page(
            ListScope::Seller(caller.id),
            PageWindow::new(query.page, query.limit),
        )
        .await
    }

    /// Load a product and require that `caller` owns it.
    async fn owned_product(&self, id: Uuid, caller: Caller) -> ProductResult<Product> {
        let product = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))?;

        if !product.is_owned_by(caller.id) {
            tracing::warn!(product_id = %id, caller_id = %caller.id, "Ownership check failed");
            return Err(ProductError::NotOwner(id));
        }

        Ok(product)
    }

    // The window and the count are separate reads; totalPage may lag a
    // concurrent insert or delete.
    async fn page(&self, scope: ListScope, window: PageWindow) -> ProductResult<ProductPage> {
        let (products, count) = tokio::try_join!(
            self.repository.list(scope.clone(), window),
            self.repository.count(scope),
        )?;

        Ok(ProductPage {
            products,
            total_pages: total_pages(count, window.limit),
        })
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
