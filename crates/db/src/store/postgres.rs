//! PostgreSQL-backed store.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use stockroom_core::product::{NewProduct, Product, ProductChanges};
use stockroom_core::types::ProductId;

use super::ProductStore;
use crate::error::StoreError;

/// Column list for `products` queries.
const COLUMNS: &str = "id, name, quantity, price";

/// A row from the `products` table.
#[derive(Debug, FromRow)]
struct ProductRow {
    id: ProductId,
    name: String,
    quantity: i32,
    price: f64,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            name: row.name,
            quantity: row.quantity,
            price: row.price,
        }
    }
}

/// Issues parameterized statements against `products` through a pool.
///
/// Every method executes directly on the pool, so a connection is checked
/// out for exactly one statement and returned when the future completes or
/// is dropped.
#[derive(Debug, Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }

    async fn exists(&self, id: ProductId) -> Result<bool, StoreError> {
        let found = sqlx::query_scalar::<_, i32>("SELECT 1 FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(found.is_some())
    }

    async fn insert(&self, product: &NewProduct) -> Result<Product, StoreError> {
        let query = format!(
            "INSERT INTO products (id, name, quantity, price) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, ProductRow>(&query)
            .bind(product.id)
            .bind(&product.name)
            .bind(product.quantity)
            .bind(product.price)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }

    async fn fetch_all(&self) -> Result<Vec<Product>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM products ORDER BY id");
        let rows = sqlx::query_as::<_, ProductRow>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn fetch_one(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        let row = sqlx::query_as::<_, ProductRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Product::from))
    }

    async fn update(
        &self,
        id: ProductId,
        changes: &ProductChanges,
    ) -> Result<Option<Product>, StoreError> {
        let query = format!(
            "UPDATE products SET \
                 quantity = COALESCE($2, quantity), \
                 price = COALESCE($3, price) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, ProductRow>(&query)
            .bind(id)
            .bind(changes.quantity)
            .bind(changes.price)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Product::from))
    }

    async fn delete(&self, id: ProductId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
