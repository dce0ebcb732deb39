use crate::db;
use crate::helpers::JsonResponse;
use crate::views;
use actix_web::{get, post, web, Responder, Result};
use sqlx::PgPool;
use uuid::Uuid;

#[tracing::instrument(name = "Get similar products.")]
#[get("/similar/{id}")]
pub async fn list(path: web::Path<(Uuid,)>, pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    let origin = path.0;

    let edges = db::similar::fetch_edges(pg_pool.get_ref(), origin)
        .await
        .map_err(|_err| {
            JsonResponse::<views::product::Summary>::build().internal_server_error("")
        })?;

    if edges.is_empty() {
        return Ok(JsonResponse::<views::product::Summary>::build()
            .set_list(Vec::new())
            .ok("OK"));
    }

    let partner_ids: Vec<Uuid> = edges.iter().map(|edge| edge.partner_of(origin)).collect();

    db::product::fetch_by_ids(pg_pool.get_ref(), &partner_ids)
        .await
        .map(|products| {
            let products = products
                .into_iter()
                .map(Into::into)
                .collect::<Vec<views::product::Summary>>();

            JsonResponse::build().set_list(products).ok("OK")
        })
        .map_err(|_err| JsonResponse::<views::product::Summary>::build().internal_server_error(""))
}

#[tracing::instrument(name = "Add similar products.")]
#[post("/add-similar")]
pub async fn add(
    pairs: web::Json<Vec<(Uuid, Uuid)>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let pairs = pairs.into_inner();

    if pairs.is_empty() {
        return Err(
            JsonResponse::<views::product::Summary>::build().bad_request("Pairs array is empty")
        );
    }

    db::similar::insert_pairs(pg_pool.get_ref(), &pairs)
        .await
        .map(|_count| JsonResponse::<views::product::Summary>::build().created("Saved"))
        .map_err(|_err| JsonResponse::<views::product::Summary>::build().internal_server_error(""))
}

#[tracing::instrument(name = "Remove similar products.")]
#[post("/remove-similar")]
pub async fn remove(
    ids: web::Json<Vec<Uuid>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let ids = ids.into_inner();

    if ids.is_empty() {
        return Err(
            JsonResponse::<views::product::Summary>::build().bad_request("Products array is empty")
        );
    }

    db::similar::delete_for_products(pg_pool.get_ref(), &ids)
        .await
        .map(|removed| {
            JsonResponse::<views::product::Summary>::build()
                .ok(format!("{} rows have been removed", removed))
        })
        .map_err(|_err| JsonResponse::<views::product::Summary>::build().internal_server_error(""))
}
