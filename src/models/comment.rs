use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub body: String,
    pub product_id: Uuid,
}

impl Comment {
    pub fn new(name: String, email: String, body: String, product_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            body,
            product_id,
        }
    }
}
