use crate::models;
use serde::Serialize;
use std::convert::From;
use uuid::Uuid;

// Bare product fields, used for similar/not-similar listings.
#[derive(Debug, Clone, Serialize, Default)]
pub struct Summary {
    pub id: Uuid,
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
}

impl From<models::Product> for Summary {
    fn from(product: models::Product) -> Self {
        Self {
            id: product.id,
            title: product.title,
            description: product.description,
            price: product.price,
        }
    }
}
