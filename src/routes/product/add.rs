use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::views;
use actix_web::{post, web, web::Bytes, Error, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;
use std::str;

#[tracing::instrument(name = "Add product.")]
#[post("")]
pub async fn item(body: Bytes, pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    let form = body_into_form(body).await?;
    let images = form.images.clone();

    let product: models::Product = form.into();
    let product_id = product.id;

    let product = db::product::insert(pg_pool.get_ref(), product)
        .await
        .map_err(|_err| {
            JsonResponse::<views::product::Summary>::build()
                .internal_server_error("Internal Server Error")
        })?;

    if let Some(images) = images {
        if !images.is_empty() {
            let images = images
                .into_iter()
                .map(|image| image.into_model(product_id))
                .collect();
            db::image::insert_many(pg_pool.get_ref(), images)
                .await
                .map_err(|_err| {
                    JsonResponse::<views::product::Summary>::build()
                        .internal_server_error("Internal Server Error")
                })?;
        }
    }

    Ok(JsonResponse::build()
        .set_id(product_id)
        .set_item(Into::<views::product::Summary>::into(product))
        .created("Saved"))
}

async fn body_into_form(body: Bytes) -> Result<forms::product::Create, Error> {
    let body_str = str::from_utf8(&body).map_err(|err| {
        JsonResponse::<forms::product::Create>::build().internal_server_error(err.to_string())
    })?;
    let deserializer = &mut serde_json::Deserializer::from_str(body_str);
    serde_path_to_error::deserialize(deserializer)
        .map_err(|err| {
            let msg = format!("{}:{:?}", err.path(), err);
            JsonResponse::<forms::product::Create>::build().bad_request(msg)
        })
        .and_then(|form: forms::product::Create| {
            if let Err(errors) = form.validate() {
                let err_msg = format!("Invalid data received {:?}", errors.to_string());
                tracing::debug!(err_msg);

                return Err(
                    JsonResponse::<forms::product::Create>::build().form_error(errors.to_string())
                );
            }

            Ok(form)
        })
}
