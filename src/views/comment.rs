use crate::models;
use serde::Serialize;
use std::convert::From;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct View {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub body: String,
    pub product_id: Uuid,
}

impl From<models::Comment> for View {
    fn from(comment: models::Comment) -> Self {
        Self {
            id: comment.id,
            name: comment.name,
            email: comment.email,
            body: comment.body,
            product_id: comment.product_id,
        }
    }
}
