//! The persistence gateway: validated CRUD over the `products` table.
//!
//! Every operation returns a [`CoreResult`]. Validation runs first, then the
//! existence check, then the statement. Store failures become
//! [`CoreError::Database`] so callers only ever see tagged outcomes.
//!
//! The existence check and the statement that follows are not atomic. Two
//! callers creating the same id can both pass the check; the loser hits the
//! primary key and is reported as [`CoreError::Conflict`].

use std::sync::Arc;

use stockroom_core::error::{CoreError, CoreResult};
use stockroom_core::product::{NewProduct, Product, ProductChanges};
use stockroom_core::types::ProductId;

use crate::error::StoreError;
use crate::store::ProductStore;

/// Shared handle to the product store. Cheap to clone.
#[derive(Clone)]
pub struct ProductGateway {
    store: Arc<dyn ProductStore>,
}

impl ProductGateway {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    /// Verify the store is reachable.
    pub async fn probe(&self) -> CoreResult<()> {
        self.store.ping().await.map_err(database_error)
    }

    pub async fn exists(&self, id: ProductId) -> CoreResult<bool> {
        self.store.exists(id).await.map_err(database_error)
    }

    /// Insert a new product after validating quantity and price and
    /// checking the id is free.
    pub async fn create(&self, product: NewProduct) -> CoreResult<Product> {
        product.validate()?;

        if self.exists(product.id).await? {
            return Err(CoreError::Conflict { id: product.id });
        }

        match self.store.insert(&product).await {
            Ok(created) => {
                tracing::info!(product_id = created.id, name = %created.name, "Product created");
                Ok(created)
            }
            Err(StoreError::UniqueViolation { constraint }) => {
                tracing::warn!(
                    product_id = product.id,
                    %constraint,
                    "Product id taken between existence check and insert"
                );
                Err(CoreError::Conflict { id: product.id })
            }
            Err(e) => Err(database_error(e)),
        }
    }

    /// All products, ascending by id. An empty table is `Ok(vec![])`.
    pub async fn read_all(&self) -> CoreResult<Vec<Product>> {
        self.store.fetch_all().await.map_err(database_error)
    }

    pub async fn read_one(&self, id: ProductId) -> CoreResult<Product> {
        self.store
            .fetch_one(id)
            .await
            .map_err(database_error)?
            .ok_or(CoreError::NotFound { id })
    }

    /// Apply a partial update to quantity and/or price.
    ///
    /// Returns [`CoreError::NoChanges`] when neither field is provided.
    pub async fn update(&self, id: ProductId, changes: ProductChanges) -> CoreResult<Product> {
        changes.validate()?;

        if changes.is_empty() {
            return Err(CoreError::NoChanges);
        }

        if !self.exists(id).await? {
            return Err(CoreError::NotFound { id });
        }

        // The row can still disappear between the check and the update.
        let updated = self
            .store
            .update(id, &changes)
            .await
            .map_err(database_error)?
            .ok_or(CoreError::NotFound { id })?;

        tracing::info!(
            product_id = id,
            quantity = ?changes.quantity,
            price = ?changes.price,
            "Product updated"
        );
        Ok(updated)
    }

    pub async fn delete(&self, id: ProductId) -> CoreResult<()> {
        if !self.exists(id).await? {
            return Err(CoreError::NotFound { id });
        }

        let removed = self.store.delete(id).await.map_err(database_error)?;
        if !removed {
            return Err(CoreError::NotFound { id });
        }

        tracing::info!(product_id = id, "Product deleted");
        Ok(())
    }

    /// Release the store's connections. Call once, on shutdown.
    pub async fn close(&self) {
        self.store.close().await;
    }
}

fn database_error(err: StoreError) -> CoreError {
    tracing::error!(error = %err, "Product store failure");
    CoreError::database(err.to_string())
}
