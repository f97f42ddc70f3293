//! Product values and the field-level rules the gateway enforces.
//!
//! Validation runs before any statement touches the store: name is checked
//! first, then quantity before price, and all before the existence check.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::ProductId;

/// A row of the `products` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub quantity: i32,
    pub price: f64,
}

/// Input for the create operation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub id: ProductId,
    pub name: String,
    pub quantity: i32,
    pub price: f64,
}

impl NewProduct {
    pub fn new(id: ProductId, name: impl Into<String>, quantity: i32, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            price,
        }
    }

    /// Reject a blank name, then negative quantity or price.
    pub fn validate(&self) -> CoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::validation("Name must not be empty."));
        }
        check_quantity(self.quantity, "Quantity")?;
        check_price(self.price, "Price")
    }

    /// The row as it will be stored.
    pub fn to_product(&self) -> Product {
        Product {
            id: self.id,
            name: self.name.clone(),
            quantity: self.quantity,
            price: self.price,
        }
    }
}

/// Partial update: `None` leaves the stored value untouched.
///
/// Name is fixed at creation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProductChanges {
    pub quantity: Option<i32>,
    pub price: Option<f64>,
}

impl ProductChanges {
    pub fn new(quantity: Option<i32>, price: Option<f64>) -> Self {
        Self { quantity, price }
    }

    pub fn is_empty(&self) -> bool {
        self.quantity.is_none() && self.price.is_none()
    }

    /// Reject any provided value that is negative.
    pub fn validate(&self) -> CoreResult<()> {
        if let Some(quantity) = self.quantity {
            check_quantity(quantity, "New quantity")?;
        }
        if let Some(price) = self.price {
            check_price(price, "New price")?;
        }
        Ok(())
    }

    /// Apply the provided fields to `product` in place.
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(quantity) = self.quantity {
            product.quantity = quantity;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
    }
}

fn check_quantity(quantity: i32, label: &str) -> CoreResult<()> {
    if quantity < 0 {
        return Err(CoreError::validation(format!(
            "{label} must be non-negative."
        )));
    }
    Ok(())
}

fn check_price(price: f64, label: &str) -> CoreResult<()> {
    if price.is_nan() || price.is_infinite() {
        return Err(CoreError::validation(format!(
            "{label} must be a finite number."
        )));
    }
    if price < 0.0 {
        return Err(CoreError::validation(format!(
            "{label} must be non-negative."
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn valid_product_passes() {
        assert!(NewProduct::new(1, "Laptop Bag", 100, 45.99).validate().is_ok());
        assert!(NewProduct::new(2, "Free sample", 0, 0.0).validate().is_ok());
    }

    #[test]
    fn blank_name_rejected_before_numbers() {
        for name in ["", "   "] {
            let err = NewProduct::new(3, name, -1, -1.0).validate().unwrap_err();
            assert_eq!(err, CoreError::validation("Name must not be empty."));
        }
    }

    #[test]
    fn negative_quantity_rejected_before_price() {
        let err = NewProduct::new(4, "Invalid", -10, -5.0)
            .validate()
            .unwrap_err();
        assert_eq!(err, CoreError::validation("Quantity must be non-negative."));
    }

    #[test]
    fn negative_price_rejected() {
        let err = NewProduct::new(5, "Invalid", 10, -5.0)
            .validate()
            .unwrap_err();
        assert_eq!(err, CoreError::validation("Price must be non-negative."));
    }

    #[test]
    fn nan_price_rejected() {
        assert_matches!(
            NewProduct::new(6, "Odd", 1, f64::NAN).validate(),
            Err(CoreError::ValidationFailed { .. })
        );
    }

    #[test]
    fn empty_changes_detected() {
        assert!(ProductChanges::default().is_empty());
        assert!(!ProductChanges::new(None, Some(1.0)).is_empty());
    }

    #[test]
    fn changes_validate_only_provided_fields() {
        assert!(ProductChanges::new(None, Some(12.5)).validate().is_ok());
        assert_eq!(
            ProductChanges::new(Some(-1), None).validate().unwrap_err(),
            CoreError::validation("New quantity must be non-negative.")
        );
        assert_eq!(
            ProductChanges::new(Some(3), Some(-0.01))
                .validate()
                .unwrap_err(),
            CoreError::validation("New price must be non-negative.")
        );
    }

    #[test]
    fn apply_leaves_unset_fields() {
        let mut product = NewProduct::new(7, "Widget", 3, 9.99).to_product();
        ProductChanges::new(None, Some(12.5)).apply_to(&mut product);
        assert_eq!(product.quantity, 3);
        assert_eq!(product.price, 12.5);
        assert_eq!(product.name, "Widget");
    }

    #[test]
    fn product_serializes_flat() {
        let product = NewProduct::new(7, "Widget", 3, 9.99).to_product();
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 7, "name": "Widget", "quantity": 3, "price": 9.99})
        );
    }
}
