use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;
use uuid::Uuid;

// Email format is deliberately not validated here, the catalog accepts
// whatever the visitor typed.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Create {
    #[validate(min_length = 1)]
    pub name: String,
    pub email: String,
    #[validate(min_length = 1)]
    pub body: String,
    pub product_id: Uuid,
}

impl Into<models::Comment> for Create {
    fn into(self) -> models::Comment {
        models::Comment::new(self.name, self.email, self.body, self.product_id)
    }
}
