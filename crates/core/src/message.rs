//! Human-readable status lines.
//!
//! The console prints these and the SOAP service returns them as operation
//! results. Each line starts with the [`OutcomeKind::tag`] of its outcome.

use crate::error::{CoreError, OutcomeKind};
use crate::product::Product;
use crate::types::ProductId;

pub fn created(product: &Product) -> String {
    format!(
        "{} Product {} ('{}') inserted.",
        OutcomeKind::Success.tag(),
        product.id,
        product.name
    )
}

pub fn updated(id: ProductId) -> String {
    format!("{} Product {id} updated.", OutcomeKind::Success.tag())
}

pub fn deleted(id: ProductId) -> String {
    format!("{} Product {id} deleted.", OutcomeKind::Success.tag())
}

pub fn failure(err: &CoreError) -> String {
    format!("{} {err}", err.kind().tag())
}

/// One-line product summary, e.g. `ID: 7, Name: Widget, Quantity: 3, Price: $9.99`.
pub fn product_line(product: &Product) -> String {
    format!(
        "ID: {}, Name: {}, Quantity: {}, Price: ${:.2}",
        product.id, product.name, product.quantity, product.price
    )
}
