//! Handlers for the product endpoints.
//!
//! Each handler validates the request shape, makes one gateway call, and
//! lets [`AppError`] translate failed outcomes into status codes.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use stockroom_core::types::ProductId;
use validator::Validate;

use crate::dto::{CreateProductRequest, UpdateProductRequest};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /products
///
/// List every product, ascending by id.
pub async fn list_products(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let products = state.gateway.read_all().await?;

    Ok(Json(products))
}

/// GET /products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
) -> AppResult<impl IntoResponse> {
    let product = state.gateway.read_one(product_id).await?;

    Ok(Json(product))
}

/// POST /products
///
/// Create a product. The id is caller-supplied and must be unused.
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<CreateProductRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    input.validate()?;

    let product = state.gateway.create(input.into()).await?;

    tracing::info!(product_id = product.id, "Product created via REST");

    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /products/{id}
///
/// Partially update quantity and/or price. At least one field must be
/// present in the body.
pub async fn update_product(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
    payload: Result<Json<UpdateProductRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;

    if input.is_empty() {
        return Err(AppError::BadRequest(
            "Must provide at least one field (name, quantity, or price) to update.".into(),
        ));
    }
    input.validate()?;

    let product = state.gateway.update(product_id, input.changes()).await?;

    Ok(Json(product))
}

/// DELETE /products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
) -> AppResult<impl IntoResponse> {
    state.gateway.delete(product_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
