use crate::db;
use crate::helpers::JsonResponse;
use crate::views;
use actix_web::{delete, web, Responder, Result};
use sqlx::PgPool;
use uuid::Uuid;

#[tracing::instrument(name = "Delete product.")]
#[delete("/{id}")]
pub async fn item(path: web::Path<(Uuid,)>, pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    let id = path.0;
    delete_product(pg_pool.get_ref(), id).await
}

#[tracing::instrument(name = "Admin delete product.")]
#[delete("/{id}")]
pub async fn admin_item(
    path: web::Path<(Uuid,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let id = path.0;
    delete_product(pg_pool.get_ref(), id).await
}

async fn delete_product(pool: &PgPool, id: Uuid) -> Result<impl Responder> {
    db::product::fetch(pool, id)
        .await
        .map_err(|_err| JsonResponse::<views::product::Summary>::build().internal_server_error(""))
        .and_then(|product| match product {
            Some(product) => Ok(product),
            None => Err(JsonResponse::<views::product::Summary>::build()
                .not_found(format!("Product with id {} is not found", id))),
        })?;

    db::product::delete(pool, id)
        .await
        .map(|_| JsonResponse::<views::product::Summary>::build().set_id(id).ok("Deleted"))
        .map_err(|_err| JsonResponse::<views::product::Summary>::build().internal_server_error(""))
}
