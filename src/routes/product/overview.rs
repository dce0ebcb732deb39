use crate::db;
use crate::helpers::JsonResponse;
use crate::views;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "Get catalog overview.")]
#[get("/overview")]
pub async fn stats(pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    db::product::overview(pg_pool.get_ref())
        .await
        .map(|overview| {
            JsonResponse::build()
                .set_item(Into::<views::product::Overview>::into(overview))
                .ok("OK")
        })
        .map_err(|_err| JsonResponse::<views::product::Overview>::build().internal_server_error(""))
}
