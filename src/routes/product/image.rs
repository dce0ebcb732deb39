use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::views;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;
use uuid::Uuid;

#[tracing::instrument(name = "Add product images.")]
#[post("/add-images")]
pub async fn add(
    form: web::Json<forms::product::AddImages>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let form = form.into_inner();

    if form.images.is_empty() {
        return Err(
            JsonResponse::<views::image::View>::build().bad_request("Images array is empty")
        );
    }

    form.validate().map_err(|errors| {
        JsonResponse::<views::image::View>::build().form_error(errors.to_string())
    })?;

    let product_id = form.product_id;
    let images = form
        .images
        .into_iter()
        .map(|image| image.into_model(product_id))
        .collect();

    db::image::insert_many(pg_pool.get_ref(), images)
        .await
        .map(|_count| {
            JsonResponse::<views::image::View>::build()
                .set_id(product_id)
                .created(format!("Images for a product id:{} have been added!", product_id))
        })
        .map_err(|_err| JsonResponse::<views::image::View>::build().internal_server_error(""))
}

#[tracing::instrument(name = "Remove product images.")]
#[post("/remove-images")]
pub async fn remove(
    ids: web::Json<Vec<Uuid>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let ids = ids.into_inner();

    if ids.is_empty() {
        return Err(
            JsonResponse::<views::image::View>::build().bad_request("Images array is empty")
        );
    }

    let removed = db::image::delete_many(pg_pool.get_ref(), &ids)
        .await
        .map_err(|_err| JsonResponse::<views::image::View>::build().internal_server_error(""))?;

    if removed == 0 {
        return Err(
            JsonResponse::<views::image::View>::build().not_found("No one image has been removed")
        );
    }

    Ok(JsonResponse::<views::image::View>::build().ok("Images have been removed!"))
}

#[tracing::instrument(name = "Update product thumbnail.")]
#[post("/update-thumbnail/{id}")]
pub async fn update_thumbnail(
    path: web::Path<(Uuid,)>,
    form: web::Json<forms::product::UpdateThumbnail>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let product_id = path.0;
    let new_thumbnail_id = form.new_thumbnail_id;

    // the swap relies on the soft invariant of a single flagged image
    let current = db::image::fetch_main_by_product(pg_pool.get_ref(), product_id)
        .await
        .map_err(|_err| JsonResponse::<views::image::View>::build().internal_server_error(""))?;

    if current.len() != 1 {
        return Err(JsonResponse::<views::image::View>::build().bad_request("Incorrect product id"));
    }

    db::image::fetch_one_of_product(pg_pool.get_ref(), product_id, new_thumbnail_id)
        .await
        .map_err(|_err| JsonResponse::<views::image::View>::build().internal_server_error(""))
        .and_then(|image| match image {
            Some(image) => Ok(image),
            None => Err(JsonResponse::<views::image::View>::build()
                .bad_request("Incorrect new thumbnail id")),
        })?;

    let updated = db::image::swap_main(pg_pool.get_ref(), current[0].id, new_thumbnail_id)
        .await
        .map_err(|_err| JsonResponse::<views::image::View>::build().internal_server_error(""))?;

    if updated == 0 {
        return Err(
            JsonResponse::<views::image::View>::build().not_found("No one image has been updated")
        );
    }

    Ok(JsonResponse::<views::image::View>::build().ok("New product thumbnail has been set!"))
}
