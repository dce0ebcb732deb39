use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ProductImage {
    pub id: Uuid,
    pub url: String,
    pub product_id: Uuid,
    // at most one image per product should carry the flag; read paths
    // take the first match if the data violates that
    pub main: bool,
}

impl ProductImage {
    pub fn new(url: String, product_id: Uuid, main: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            url,
            product_id,
            main,
        }
    }
}
