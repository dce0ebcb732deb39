use crate::db;
use crate::helpers::JsonResponse;
use crate::views;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;
use uuid::Uuid;

#[tracing::instrument(name = "Get product list.")]
#[get("")]
pub async fn list(pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    let products = db::product::fetch_all(pg_pool.get_ref())
        .await
        .map_err(|_err| JsonResponse::<views::product::Listed>::build().internal_server_error(""))?;
    let comments = db::comment::fetch_all(pg_pool.get_ref())
        .await
        .map_err(|_err| JsonResponse::<views::product::Listed>::build().internal_server_error(""))?;
    let images = db::image::fetch_all(pg_pool.get_ref())
        .await
        .map_err(|_err| JsonResponse::<views::product::Listed>::build().internal_server_error(""))?;

    let listed = views::product::Listed::collect(products, comments, images);

    Ok(JsonResponse::build().set_list(listed).ok("OK"))
}

#[tracing::instrument(name = "Get product detail.")]
#[get("/{id}")]
pub async fn item(path: web::Path<(Uuid,)>, pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    let id = path.0;
    let product = db::product::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(|_err| JsonResponse::<views::product::Detail>::build().internal_server_error(""))
        .and_then(|product| match product {
            Some(product) => Ok(product),
            None => Err(JsonResponse::<views::product::Detail>::build()
                .not_found(format!("Product with id {} is not found", id))),
        })?;

    let comments = db::comment::fetch_by_product(pg_pool.get_ref(), id)
        .await
        .map_err(|_err| JsonResponse::<views::product::Detail>::build().internal_server_error(""))?;
    let images = db::image::fetch_by_product(pg_pool.get_ref(), id)
        .await
        .map_err(|_err| JsonResponse::<views::product::Detail>::build().internal_server_error(""))?;
    let similar = db::product::fetch_similar(pg_pool.get_ref(), id)
        .await
        .map_err(|_err| JsonResponse::<views::product::Detail>::build().internal_server_error(""))?;
    let not_similar = db::product::fetch_not_similar(pg_pool.get_ref(), id)
        .await
        .map_err(|_err| JsonResponse::<views::product::Detail>::build().internal_server_error(""))?;

    let detail = views::product::Detail::assemble(product, comments, images, similar, not_similar);

    Ok(JsonResponse::build().set_item(detail).ok("OK"))
}

#[tracing::instrument(name = "Admin get product list.")]
#[get("")]
pub async fn admin_list(pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    db::product::fetch_all(pg_pool.get_ref())
        .await
        .map(|products| {
            let products = products
                .into_iter()
                .map(Into::into)
                .collect::<Vec<views::product::Admin>>();

            JsonResponse::build().set_list(products).ok("OK")
        })
        .map_err(|_err| JsonResponse::<views::product::Admin>::build().internal_server_error(""))
}

#[tracing::instrument(name = "Admin get product.")]
#[get("/{id}")]
pub async fn admin_item(
    path: web::Path<(Uuid,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let id = path.0;
    db::product::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(|_err| JsonResponse::<views::product::Admin>::build().internal_server_error(""))
        .and_then(|product| match product {
            Some(product) => Ok(JsonResponse::build()
                .set_item(Into::<views::product::Admin>::into(product))
                .ok("OK")),
            None => Err(JsonResponse::<views::product::Admin>::build().not_found("not found")),
        })
}
