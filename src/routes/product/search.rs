use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::views;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "Search products.")]
#[get("/search")]
pub async fn list(
    filter: web::Query<forms::product::Filter>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    if filter.is_empty() {
        return Err(JsonResponse::<views::product::Listed>::build().bad_request("Filter is empty"));
    }

    let products = db::product::search(pg_pool.get_ref(), &filter)
        .await
        .map_err(|_err| JsonResponse::<views::product::Listed>::build().internal_server_error(""))?;

    if products.is_empty() {
        return Ok(JsonResponse::<views::product::Listed>::build()
            .set_list(Vec::new())
            .ok("OK"));
    }

    let comments = db::comment::fetch_all(pg_pool.get_ref())
        .await
        .map_err(|_err| JsonResponse::<views::product::Listed>::build().internal_server_error(""))?;
    let images = db::image::fetch_all(pg_pool.get_ref())
        .await
        .map_err(|_err| JsonResponse::<views::product::Listed>::build().internal_server_error(""))?;

    let listed = views::product::Listed::collect(products, comments, images);

    Ok(JsonResponse::build().set_list(listed).ok("OK"))
}
