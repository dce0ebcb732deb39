use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::views;
use actix_web::{patch, post, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;
use uuid::Uuid;

#[tracing::instrument(name = "Update product.")]
#[patch("/{id}")]
pub async fn item(
    path: web::Path<(Uuid,)>,
    form: web::Json<forms::product::Update>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let id = path.0;
    update_product(pg_pool.get_ref(), id, form.into_inner()).await
}

#[tracing::instrument(name = "Admin edit product.")]
#[post("/{id}")]
pub async fn admin_item(
    path: web::Path<(Uuid,)>,
    form: web::Json<forms::product::Update>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let id = path.0;
    update_product(pg_pool.get_ref(), id, form.into_inner()).await
}

async fn update_product(
    pool: &PgPool,
    id: Uuid,
    form: forms::product::Update,
) -> Result<impl Responder> {
    form.validate()
        .map_err(|errors| {
            JsonResponse::<views::product::Summary>::build().form_error(errors.to_string())
        })?;

    let product = db::product::fetch(pool, id)
        .await
        .map_err(|_err| JsonResponse::<views::product::Summary>::build().internal_server_error(""))
        .and_then(|product| match product {
            Some(product) => Ok(product),
            None => Err(JsonResponse::<views::product::Summary>::build()
                .not_found(format!("Product with id {} is not found", id))),
        })?;

    // absent fields keep their stored values
    let product = form.apply_to(product);

    db::product::update(pool, product)
        .await
        .map(|product| {
            JsonResponse::build()
                .set_id(product.id)
                .set_item(Into::<views::product::Summary>::into(product))
                .ok(format!("Product id:{} has been updated", id))
        })
        .map_err(|_err| JsonResponse::<views::product::Summary>::build().internal_server_error(""))
}
