use serde::{Deserialize, Serialize};
use uuid::Uuid;

// One edge of the similarity graph. The relation is unordered: a product
// may sit on either side of the row, lookups go through both columns.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct SimilarProduct {
    pub id: i32,
    pub first_product: Uuid,
    pub second_product: Uuid,
}

impl SimilarProduct {
    // The id of whichever end is not `origin`.
    pub fn partner_of(&self, origin: Uuid) -> Uuid {
        if self.first_product == origin {
            self.second_product
        } else {
            self.first_product
        }
    }
}
