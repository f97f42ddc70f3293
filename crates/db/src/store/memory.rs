use std::collections::BTreeMap;

use async_trait::async_trait;
use stockroom_core::product::{NewProduct, Product, ProductChanges};
use stockroom_core::types::ProductId;
use tokio::sync::RwLock;

use super::ProductStore;
use crate::error::StoreError;

/// Products kept in an ordered map, keyed by id.
///
/// Mirrors the PostgreSQL store's contract, including the primary-key
/// violation on duplicate insert. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryProductStore {
    rows: RwLock<BTreeMap<ProductId, Product>>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the given rows already present.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            rows: RwLock::new(products.into_iter().map(|p| (p.id, p)).collect()),
        }
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn exists(&self, id: ProductId) -> Result<bool, StoreError> {
        Ok(self.rows.read().await.contains_key(&id))
    }

    async fn insert(&self, product: &NewProduct) -> Result<Product, StoreError> {
        let mut rows = self.rows.write().await;
        if rows.contains_key(&product.id) {
            return Err(StoreError::UniqueViolation {
                constraint: "products_pkey".into(),
            });
        }
        let row = product.to_product();
        rows.insert(row.id, row.clone());
        Ok(row)
    }

    async fn fetch_all(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn fetch_one(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn update(
        &self,
        id: ProductId,
        changes: &ProductChanges,
    ) -> Result<Option<Product>, StoreError> {
        let mut rows = self.rows.write().await;
        Ok(rows.get_mut(&id).map(|row| {
            changes.apply_to(row);
            row.clone()
        }))
    }

    async fn delete(&self, id: ProductId) -> Result<bool, StoreError> {
        Ok(self.rows.write().await.remove(&id).is_some())
    }

    async fn close(&self) {}
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[tokio::test]
    async fn rows_come_back_in_id_order() {
        let store = MemoryProductStore::new();
        for id in [30, 10, 20] {
            store
                .insert(&NewProduct::new(id, format!("p{id}"), 1, 1.0))
                .await
                .unwrap();
        }

        let ids: Vec<_> = store.fetch_all().await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![10, 20, 30]);
    }

    #[tokio::test]
    async fn duplicate_insert_is_unique_violation() {
        let store = MemoryProductStore::new();
        let product = NewProduct::new(1, "Laptop Bag", 100, 45.99);
        store.insert(&product).await.unwrap();

        assert_matches!(
            store.insert(&product).await,
            Err(StoreError::UniqueViolation { .. })
        );
    }

    #[tokio::test]
    async fn update_missing_row_returns_none() {
        let store = MemoryProductStore::new();
        let changes = ProductChanges::new(Some(1), None);
        assert_eq!(store.update(42, &changes).await.unwrap(), None);
        assert!(!store.delete(42).await.unwrap());
    }
}
