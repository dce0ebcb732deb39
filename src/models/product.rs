use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: Uuid,
    // title/description/price are all nullable, a product may be created
    // as an empty draft and filled in later
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn new(title: Option<String>, description: Option<String>, price: Option<f64>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            price,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}

// Catalog-wide aggregate: row count and price sum over all products.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CatalogOverview {
    pub count: i64,
    pub sum: Option<f64>,
}
