use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;
use uuid::Uuid;

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Create {
    #[validate(max_length = 255)]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(minimum = 0.0)]
    pub price: Option<f64>,
    #[validate]
    pub images: Option<Vec<NewImage>>,
}

impl Into<models::Product> for Create {
    fn into(self) -> models::Product {
        models::Product::new(self.title, self.description, self.price)
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewImage {
    #[validate(min_length = 1)]
    pub url: String,
    #[serde(default)]
    pub main: bool,
}

impl NewImage {
    pub fn into_model(self, product_id: Uuid) -> models::ProductImage {
        models::ProductImage::new(self.url, product_id, self.main)
    }
}

// PATCH payload; a field left out keeps its current value.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Update {
    #[validate(max_length = 255)]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(minimum = 0.0)]
    pub price: Option<f64>,
}

impl Update {
    pub fn apply_to(self, mut product: models::Product) -> models::Product {
        if let Some(title) = self.title {
            product.title = Some(title);
        }
        if let Some(description) = self.description {
            product.description = Some(description);
        }
        if let Some(price) = self.price {
            product.price = Some(price);
        }
        product
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price_from: Option<f64>,
    pub price_to: Option<f64>,
}

impl Filter {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.price_from.is_none()
            && self.price_to.is_none()
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddImages {
    pub product_id: Uuid,
    #[validate]
    pub images: Vec<NewImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateThumbnail {
    pub new_thumbnail_id: Uuid,
}
