//! The seam between the gateway and the underlying table.

use async_trait::async_trait;
use stockroom_core::product::{NewProduct, Product, ProductChanges};
use stockroom_core::types::ProductId;

use crate::error::StoreError;

pub mod memory;
pub mod postgres;

/// Single-statement access to the `products` table.
///
/// Each method is one statement that autocommits. Implementations hold no
/// per-call state; a connection is acquired for the statement and released
/// when it finishes, on success or failure.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Round-trip to the store without touching the table.
    async fn ping(&self) -> Result<(), StoreError>;

    async fn exists(&self, id: ProductId) -> Result<bool, StoreError>;

    /// Insert a row. A duplicate id yields [`StoreError::UniqueViolation`].
    async fn insert(&self, product: &NewProduct) -> Result<Product, StoreError>;

    /// All rows, ascending by id.
    async fn fetch_all(&self) -> Result<Vec<Product>, StoreError>;

    async fn fetch_one(&self, id: ProductId) -> Result<Option<Product>, StoreError>;

    /// Apply the provided fields. Returns `None` if no row has `id`.
    async fn update(
        &self,
        id: ProductId,
        changes: &ProductChanges,
    ) -> Result<Option<Product>, StoreError>;

    /// Returns `true` if a row was removed.
    async fn delete(&self, id: ProductId) -> Result<bool, StoreError>;

    /// Release pooled connections. Called once on shutdown.
    async fn close(&self);
}
