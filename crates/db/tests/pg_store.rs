//! PostgreSQL store tests.
//!
//! These need a reachable server in `DATABASE_URL`; run with
//! `cargo test -p stockroom-db -- --ignored`.

use assert_matches::assert_matches;
use sqlx::PgPool;
use stockroom_core::product::{NewProduct, ProductChanges};
use stockroom_db::{PgProductStore, ProductStore, StoreError};

#[sqlx::test(migrations = false, fixtures("products"))]
#[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
async fn insert_and_fetch(pool: PgPool) {
    let store = PgProductStore::new(pool);
    store.ping().await.unwrap();

    let created = store
        .insert(&NewProduct::new(7, "Widget", 3, 9.99))
        .await
        .unwrap();
    assert_eq!(created.name, "Widget");
    assert!(store.exists(7).await.unwrap());

    let fetched = store.fetch_one(7).await.unwrap().unwrap();
    assert_eq!(fetched, created);
}

#[sqlx::test(migrations = false, fixtures("products"))]
#[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
async fn duplicate_primary_key_is_unique_violation(pool: PgPool) {
    let store = PgProductStore::new(pool);
    let product = NewProduct::new(1, "Laptop Bag", 100, 45.99);
    store.insert(&product).await.unwrap();

    assert_matches!(
        store.insert(&product).await,
        Err(StoreError::UniqueViolation { .. })
    );
}

#[sqlx::test(migrations = false, fixtures("products"))]
#[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
async fn fetch_all_orders_by_id(pool: PgPool) {
    let store = PgProductStore::new(pool);
    for id in [3, 1, 2] {
        store
            .insert(&NewProduct::new(id, format!("item {id}"), 1, 1.0))
            .await
            .unwrap();
    }

    let ids: Vec<_> = store
        .fetch_all()
        .await
        .unwrap()
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[sqlx::test(migrations = false, fixtures("products"))]
#[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
async fn partial_update_and_delete(pool: PgPool) {
    let store = PgProductStore::new(pool);
    store
        .insert(&NewProduct::new(2, "Wireless Mouse", 500, 19.99))
        .await
        .unwrap();

    let updated = store
        .update(2, &ProductChanges::new(None, Some(24.99)))
        .await
        .unwrap()
        .unwrap();
    assert_eq!((updated.quantity, updated.price), (500, 24.99));

    assert_eq!(
        store
            .update(99, &ProductChanges::new(Some(1), None))
            .await
            .unwrap(),
        None
    );

    assert!(store.delete(2).await.unwrap());
    assert!(!store.delete(2).await.unwrap());
    assert!(!store.exists(2).await.unwrap());
}
