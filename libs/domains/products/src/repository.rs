use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{Product, ProductFields, ProductSummary};
use crate::pagination::{ListScope, PageWindow};

/// Repository trait for Product persistence
///
/// Ownership is not enforced here; callers load the product and check
/// `seller_id` before mutating it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a fully built product
    async fn create(&self, product: Product) -> ProductResult<Product>;

    /// Get a product by ID
    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// Overwrite the editable fields and bump `updatedAt`.
    /// Returns `NotFound` if no document matched.
    async fn update_fields(&self, id: Uuid, fields: ProductFields) -> ProductResult<()>;

    /// Delete a product by ID. Returns `NotFound` if nothing was removed.
    async fn delete(&self, id: Uuid) -> ProductResult<()>;

    /// One window of summaries in the given scope
    async fn list(&self, scope: ListScope, window: PageWindow)
    -> ProductResult<Vec<ProductSummary>>;

    /// Count products in the given scope
    async fn count(&self, scope: ListScope) -> ProductResult<u64>;
}
