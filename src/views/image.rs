use crate::models;
use serde::Serialize;
use std::convert::From;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct View {
    pub id: Uuid,
    pub url: String,
    pub product_id: Uuid,
    pub main: bool,
}

impl From<models::ProductImage> for View {
    fn from(image: models::ProductImage) -> Self {
        Self {
            id: image.id,
            url: image.url,
            product_id: image.product_id,
            main: image.main,
        }
    }
}

// The image flagged main, or the first one when no flag is set.
pub fn pick_thumbnail(images: &[View]) -> Option<View> {
    images
        .iter()
        .find(|image| image.main)
        .or_else(|| images.first())
        .cloned()
}
