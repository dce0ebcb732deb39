use crate::db;
use crate::helpers::JsonResponse;
use crate::views;
use actix_web::{delete, web, Responder, Result};
use sqlx::PgPool;
use uuid::Uuid;

#[tracing::instrument(name = "Admin delete comment.")]
#[delete("/{id}")]
pub async fn admin_item(
    path: web::Path<(Uuid,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let id = path.0;

    let removed = db::comment::delete(pg_pool.get_ref(), id)
        .await
        .map_err(|_err| JsonResponse::<views::comment::View>::build().internal_server_error(""))?;

    if removed == 0 {
        return Err(JsonResponse::<views::comment::View>::build().not_found("not found"));
    }

    Ok(JsonResponse::<views::comment::View>::build().set_id(id).ok("Deleted"))
}
