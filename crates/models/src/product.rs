use serde::{Deserialize, Serialize};

use crate::errors::{missing, non_blank, ModelError};

pub const TABLE: &str = "products";
pub const KEY: &str = "sku";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateProductInput {
    pub sku: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateProductInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
}

/// Column values written by an update. An absent description keeps the stored one.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProductChanges {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
}

impl CreateProductInput {
    pub fn validate(self) -> Result<Product, ModelError> {
        match (non_blank(self.sku), non_blank(self.name), self.price) {
            (Some(sku), Some(name), Some(price)) => Ok(Product { sku, name, description: self.description, price }),
            (sku, name, price) => Err(missing(&[
                ("sku", sku.is_none()),
                ("name", name.is_none()),
                ("price", price.is_none()),
            ])),
        }
    }
}

impl UpdateProductInput {
    pub fn validate(self) -> Result<ProductChanges, ModelError> {
        match (non_blank(self.name), self.price) {
            (Some(name), Some(price)) => Ok(ProductChanges { name, description: self.description, price }),
            (name, price) => Err(missing(&[("name", name.is_none()), ("price", price.is_none())])),
        }
    }
}
