use crate::models;
use crate::views;
use serde::Serialize;
use std::collections::HashMap;
use std::convert::From;
use uuid::Uuid;

// Catalog listing entry: the product row with its comments, images and the
// derived thumbnail. Related lists are present on the wire only when the
// product actually has rows behind them.
#[derive(Debug, Clone, Serialize, Default)]
pub struct Listed {
    pub id: Uuid,
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<views::comment::View>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<views::image::View>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<views::image::View>,
}

impl From<models::Product> for Listed {
    fn from(product: models::Product) -> Self {
        Self {
            id: product.id,
            title: product.title,
            description: product.description,
            price: product.price,
            comments: None,
            images: None,
            thumbnail: None,
        }
    }
}

impl Listed {
    pub fn with_comments(mut self, comments: Vec<models::Comment>) -> Self {
        if !comments.is_empty() {
            self.comments = Some(comments.into_iter().map(Into::into).collect());
        }
        self
    }

    pub fn with_images(mut self, images: Vec<models::ProductImage>) -> Self {
        if !images.is_empty() {
            let images: Vec<views::image::View> = images.into_iter().map(Into::into).collect();
            self.thumbnail = views::image::pick_thumbnail(&images);
            self.images = Some(images);
        }
        self
    }

    // Stitches full-table comment and image reads onto their products.
    pub fn collect(
        products: Vec<models::Product>,
        comments: Vec<models::Comment>,
        images: Vec<models::ProductImage>,
    ) -> Vec<Listed> {
        let mut comments_by_product: HashMap<Uuid, Vec<models::Comment>> = HashMap::new();
        for comment in comments {
            comments_by_product
                .entry(comment.product_id)
                .or_default()
                .push(comment);
        }

        let mut images_by_product: HashMap<Uuid, Vec<models::ProductImage>> = HashMap::new();
        for image in images {
            images_by_product
                .entry(image.product_id)
                .or_default()
                .push(image);
        }

        products
            .into_iter()
            .map(|product| {
                let id = product.id;
                Listed::from(product)
                    .with_comments(comments_by_product.remove(&id).unwrap_or_default())
                    .with_images(images_by_product.remove(&id).unwrap_or_default())
            })
            .collect()
    }
}
