//! Request bodies for the product endpoints.
//!
//! Shape rules are enforced here with `validator`; the gateway repeats the
//! non-negativity checks for front ends that have no schema layer.

use serde::Deserialize;
use stockroom_core::product::{NewProduct, ProductChanges};
use stockroom_core::types::ProductId;
use validator::Validate;

/// Body of `POST /products`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(range(min = 1, message = "id must be a positive integer"))]
    pub id: ProductId,
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
    #[validate(range(min = 0, message = "quantity must be non-negative"))]
    pub quantity: i32,
    #[validate(range(min = 0.0, message = "price must be non-negative"))]
    pub price: f64,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(req: CreateProductRequest) -> Self {
        NewProduct::new(req.id, req.name, req.quantity, req.price)
    }
}

/// Body of `PUT /products/{id}`. Every field is optional.
///
/// `name` is accepted for forward compatibility but is not applied; a
/// product's name is fixed at creation.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProductRequest {
    #[validate(length(max = 100, message = "name must be at most 100 characters"))]
    pub name: Option<String>,
    #[validate(range(min = 0, message = "quantity must be non-negative"))]
    pub quantity: Option<i32>,
    #[validate(range(min = 0.0, message = "price must be non-negative"))]
    pub price: Option<f64>,
}

impl UpdateProductRequest {
    /// `true` when the body names no field at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.quantity.is_none() && self.price.is_none()
    }

    pub fn changes(&self) -> ProductChanges {
        ProductChanges::new(self.quantity, self.price)
    }
}
