use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::views;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Add comment.")]
#[post("")]
pub async fn item(
    form: web::Json<forms::comment::Create>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let form = form.into_inner();

    form.validate().map_err(|errors| {
        JsonResponse::<views::comment::View>::build().form_error(errors.to_string())
    })?;

    // comments are always attached to an existing product
    db::product::fetch(pg_pool.get_ref(), form.product_id)
        .await
        .map_err(|_err| JsonResponse::<views::comment::View>::build().internal_server_error(""))
        .and_then(|product| match product {
            Some(product) => Ok(product),
            None => Err(JsonResponse::<views::comment::View>::build()
                .not_found(format!("Object not found {}", form.product_id))),
        })?;

    let comment: models::Comment = form.into();

    db::comment::insert(pg_pool.get_ref(), comment)
        .await
        .map(|comment| {
            JsonResponse::build()
                .set_id(comment.id)
                .set_item(Into::<views::comment::View>::into(comment))
                .created("Saved")
        })
        .map_err(|_err| JsonResponse::<views::comment::View>::build().internal_server_error(""))
}
