//! The four service operations and their dispatch onto the gateway.
//!
//! Every gateway outcome, success or failure, comes back as a status line.
//! Only requests that cannot be decoded into a call are faults.

use std::str::FromStr;

use stockroom_core::message;
use stockroom_core::product::{NewProduct, ProductChanges};
use stockroom_core::types::ProductId;
use stockroom_db::ProductGateway;

use crate::envelope::SoapRequest;
use crate::error::SoapError;

/// Operation names as published in the WSDL.
pub const OPERATIONS: [&str; 4] = ["createProduct", "getProduct", "updateProduct", "deleteProduct"];

/// A decoded operation call.
#[derive(Debug, Clone, PartialEq)]
pub enum SoapCall {
    CreateProduct {
        product_id: ProductId,
        name: String,
        quantity: i32,
        price: f64,
    },
    GetProduct {
        product_id: ProductId,
    },
    UpdateProduct {
        product_id: ProductId,
        new_quantity: Option<i32>,
        new_price: Option<f64>,
    },
    DeleteProduct {
        product_id: ProductId,
    },
}

impl SoapCall {
    pub fn from_request(request: &SoapRequest) -> Result<Self, SoapError> {
        match request.operation.as_str() {
            "createProduct" => Ok(SoapCall::CreateProduct {
                product_id: required(request, "product_id")?,
                name: request
                    .params
                    .get("name")
                    .and_then(|v| v.clone())
                    .ok_or(SoapError::MissingParameter("name"))?,
                quantity: required(request, "quantity")?,
                price: required(request, "price")?,
            }),
            "getProduct" => Ok(SoapCall::GetProduct {
                product_id: required(request, "product_id")?,
            }),
            "updateProduct" => Ok(SoapCall::UpdateProduct {
                product_id: required(request, "product_id")?,
                new_quantity: optional(request, "new_quantity")?,
                new_price: optional(request, "new_price")?,
            }),
            "deleteProduct" => Ok(SoapCall::DeleteProduct {
                product_id: required(request, "product_id")?,
            }),
            other => Err(SoapError::UnknownOperation(other.to_string())),
        }
    }

    pub fn operation(&self) -> &'static str {
        match self {
            SoapCall::CreateProduct { .. } => "createProduct",
            SoapCall::GetProduct { .. } => "getProduct",
            SoapCall::UpdateProduct { .. } => "updateProduct",
            SoapCall::DeleteProduct { .. } => "deleteProduct",
        }
    }

    /// Run the call and render its outcome as status text.
    pub async fn execute(self, gateway: &ProductGateway) -> String {
        match self {
            SoapCall::CreateProduct {
                product_id,
                name,
                quantity,
                price,
            } => match gateway
                .create(NewProduct::new(product_id, name, quantity, price))
                .await
            {
                Ok(product) => message::created(&product),
                Err(e) => message::failure(&e),
            },
            SoapCall::GetProduct { product_id } => match gateway.read_one(product_id).await {
                Ok(product) => message::product_line(&product),
                Err(e) => message::failure(&e),
            },
            SoapCall::UpdateProduct {
                product_id,
                new_quantity,
                new_price,
            } => match gateway
                .update(product_id, ProductChanges::new(new_quantity, new_price))
                .await
            {
                Ok(product) => message::updated(product.id),
                Err(e) => message::failure(&e),
            },
            SoapCall::DeleteProduct { product_id } => match gateway.delete(product_id).await {
                Ok(()) => message::deleted(product_id),
                Err(e) => message::failure(&e),
            },
        }
    }
}

fn required<T: FromStr>(request: &SoapRequest, name: &'static str) -> Result<T, SoapError> {
    optional(request, name)?.ok_or(SoapError::MissingParameter(name))
}

fn optional<T: FromStr>(request: &SoapRequest, name: &'static str) -> Result<Option<T>, SoapError> {
    request
        .param(name)
        .map(|raw| {
            raw.parse().map_err(|_| SoapError::InvalidParameter {
                name,
                value: raw.to_string(),
            })
        })
        .transpose()
}
