use crate::models;
use crate::views;
use serde::Serialize;
use uuid::Uuid;

// Product page payload: the row plus every related list the page renders.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Detail {
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similar_products: Option<Vec<views::product::Summary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_similar_products: Option<Vec<views::product::Summary>>,
}

impl Detail {
    pub fn assemble(
        product: models::Product,
        comments: Vec<models::Comment>,
        images: Vec<models::ProductImage>,
        similar: Vec<models::Product>,
        not_similar: Vec<models::Product>,
    ) -> Self {
        let mut detail = Self {
            id: product.id,
            title: product.title,
            description: product.description,
            price: product.price,
            ..Self::default()
        };

        if !comments.is_empty() {
            detail.comments = Some(comments.into_iter().map(Into::into).collect());
        }
        if !images.is_empty() {
            let images: Vec<views::image::View> = images.into_iter().map(Into::into).collect();
            detail.thumbnail = views::image::pick_thumbnail(&images);
            detail.images = Some(images);
        }
        if !similar.is_empty() {
            detail.similar_products = Some(similar.into_iter().map(Into::into).collect());
        }
        if !not_similar.is_empty() {
            detail.not_similar_products = Some(not_similar.into_iter().map(Into::into).collect());
        }

        detail
    }
}
