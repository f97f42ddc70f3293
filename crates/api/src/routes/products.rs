use axum::routing::get;
use axum::Router;

use crate::handlers::products;
use crate::state::AppState;

/// Mount the product CRUD routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/products/{id}",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
}
