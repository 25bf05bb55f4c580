//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use chrono::Utc;
use database::mongodb::uuid_to_bson;
use futures::TryStreamExt;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{Document, doc, to_bson, to_document},
    options::IndexOptions,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductFields, ProductSummary};
use crate::pagination::{DESCRIPTION_PREVIEW_CHARS, ListScope, PageWindow};
use crate::repository::ProductRepository;

/// MongoDB implementation of the ProductRepository
pub struct MongoProductRepository {
    collection: Collection<Product>,
}

impl MongoProductRepository {
    /// Create a new MongoProductRepository
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<Product>("products");
        Self { collection }
    }

    /// Initialize indexes for the seller listing and the name search
    pub async fn init_indexes(&self) -> ProductResult<()> {
        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "sellerId": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_seller".to_string())
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "name": 1 })
                .options(IndexOptions::builder().name("idx_name".to_string()).build())
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        tracing::info!("Product indexes created successfully");
        Ok(())
    }

    /// Build the listing filter. Both the page and the count go through here.
    pub fn build_filter(scope: &ListScope) -> ProductResult<Document> {
        let filter = match scope {
            ListScope::Catalog { search: None } => doc! {},
            ListScope::Catalog {
                search: Some(search),
            } => doc! {
                "name": { "$regex": regex::escape(search), "$options": "i" }
            },
            ListScope::Seller(seller_id) => doc! { "sellerId": uuid_to_bson(seller_id)? },
        };
        Ok(filter)
    }

    /// Aggregation for one page of summaries. No sort stage.
    pub fn list_pipeline(scope: &ListScope, window: PageWindow) -> ProductResult<Vec<Document>> {
        let skip = i64::try_from(window.skip).unwrap_or(i64::MAX);
        let limit = i64::try_from(window.limit).unwrap_or(i64::MAX);

        Ok(vec![
            doc! { "$match": Self::build_filter(scope)? },
            doc! { "$skip": skip },
            doc! { "$limit": limit },
            doc! {
                "$project": {
                    "name": 1,
                    "brand": 1,
                    "price": 1,
                    "category": 1,
                    "freeShipping": 1,
                    "availableQuantity": 1,
                    "image": 1,
                    "description": { "$substrCP": ["$description", 0, DESCRIPTION_PREVIEW_CHARS] },
                }
            },
        ])
    }

    fn id_filter(id: Uuid) -> ProductResult<Document> {
        Ok(doc! { "_id": uuid_to_bson(&id)? })
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self, product), fields(product_id = %product.id, seller_id = %product.seller_id))]
    async fn create(&self, product: Product) -> ProductResult<Product> {
        self.collection.insert_one(&product).await?;

        tracing::info!(product_id = %product.id, "Product created successfully");
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let product = self.collection.find_one(Self::id_filter(id)?).await?;
        Ok(product)
    }

    #[instrument(skip(self, fields))]
    async fn update_fields(&self, id: Uuid, fields: ProductFields) -> ProductResult<()> {
        let mut set = to_document(&fields)?;
        set.insert("updatedAt", to_bson(&Utc::now())?);

        let result = self
            .collection
            .update_one(Self::id_filter(id)?, doc! { "$set": set })
            .await?;

        if result.matched_count == 0 {
            return Err(ProductError::NotFound(id));
        }

        tracing::info!(product_id = %id, "Product updated successfully");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> ProductResult<()> {
        let result = self.collection.delete_one(Self::id_filter(id)?).await?;

        if result.deleted_count == 0 {
            return Err(ProductError::NotFound(id));
        }

        tracing::info!(product_id = %id, "Product deleted successfully");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(
        &self,
        scope: ListScope,
        window: PageWindow,
    ) -> ProductResult<Vec<ProductSummary>> {
        let pipeline = Self::list_pipeline(&scope, window)?;

        let cursor = self
            .collection
            .aggregate(pipeline)
            .with_type::<ProductSummary>()
            .await?;
        let products: Vec<ProductSummary> = cursor.try_collect().await?;

        Ok(products)
    }

    #[instrument(skip(self))]
    async fn count(&self, scope: ListScope) -> ProductResult<u64> {
        let filter = Self::build_filter(&scope)?;
        let count = self.collection.count_documents(filter).await?;
        Ok(count)
    }
}
