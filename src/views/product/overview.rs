use crate::models;
use serde::Serialize;
use std::convert::From;

#[derive(Debug, Clone, Serialize, Default)]
pub struct Overview {
    pub count: i64,
    pub sum: Option<f64>,
}

impl From<models::CatalogOverview> for Overview {
    fn from(overview: models::CatalogOverview) -> Self {
        Self {
            count: overview.count,
            sum: overview.sum,
        }
    }
}
