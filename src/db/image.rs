use crate::models;
use sqlx::PgPool;
use tracing::Instrument;
use uuid::Uuid;

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<models::ProductImage>, String> {
    let query_span = tracing::info_span!("Fetch all images.");
    sqlx::query_as::<_, models::ProductImage>("SELECT * FROM images")
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch images, error: {:?}", err);
            "".to_string()
        })
}

pub async fn fetch_by_product(
    pool: &PgPool,
    product_id: Uuid,
) -> Result<Vec<models::ProductImage>, String> {
    let query_span = tracing::info_span!("Fetch images of a product.");
    sqlx::query_as::<_, models::ProductImage>("SELECT * FROM images WHERE product_id = $1")
        .bind(product_id)
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch images of {}, error: {:?}", product_id, err);
            "".to_string()
        })
}

pub async fn fetch_main_by_product(
    pool: &PgPool,
    product_id: Uuid,
) -> Result<Vec<models::ProductImage>, String> {
    let query_span = tracing::info_span!("Fetch current thumbnail of a product.");
    sqlx::query_as::<_, models::ProductImage>(
        "SELECT * FROM images WHERE product_id = $1 AND main = true",
    )
    .bind(product_id)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch thumbnail of {}, error: {:?}", product_id, err);
        "".to_string()
    })
}

pub async fn fetch_one_of_product(
    pool: &PgPool,
    product_id: Uuid,
    image_id: Uuid,
) -> Result<Option<models::ProductImage>, String> {
    let query_span = tracing::info_span!("Fetch one image of a product.");
    sqlx::query_as::<_, models::ProductImage>(
        "SELECT * FROM images WHERE product_id = $1 AND id = $2 LIMIT 1",
    )
    .bind(product_id)
    .bind(image_id)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch image {}, error: {:?}", image_id, err);
        "".to_string()
    })
}

pub async fn insert_many(pool: &PgPool, images: Vec<models::ProductImage>) -> Result<u64, String> {
    let query_span = tracing::info_span!("Saving new images into the database");

    let mut ids = Vec::with_capacity(images.len());
    let mut urls = Vec::with_capacity(images.len());
    let mut product_ids = Vec::with_capacity(images.len());
    let mut mains = Vec::with_capacity(images.len());
    for image in images {
        ids.push(image.id);
        urls.push(image.url);
        product_ids.push(image.product_id);
        mains.push(image.main);
    }

    sqlx::query(
        r#"
        INSERT INTO images (id, url, product_id, main)
        SELECT * FROM UNNEST($1::uuid[], $2::text[], $3::uuid[], $4::bool[])
        "#,
    )
    .bind(ids)
    .bind(urls)
    .bind(product_ids)
    .bind(mains)
    .execute(pool)
    .instrument(query_span)
    .await
    .map(|result| result.rows_affected())
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to insert".to_string()
    })
}

pub async fn delete_many(pool: &PgPool, ids: &[Uuid]) -> Result<u64, String> {
    let query_span = tracing::info_span!("Deleting images");
    sqlx::query("DELETE FROM images WHERE id = ANY($1)")
        .bind(ids)
        .execute(pool)
        .instrument(query_span)
        .await
        .map(|result| result.rows_affected())
        .map_err(|err| {
            tracing::error!("Failed to execute query: {:?}", err);
            "".to_string()
        })
}

// Moves the main flag from one image row to another in a single statement.
pub async fn swap_main(pool: &PgPool, current_id: Uuid, new_id: Uuid) -> Result<u64, String> {
    let query_span = tracing::info_span!("Replacing product thumbnail");
    sqlx::query("UPDATE images SET main = (id = $2) WHERE id = $1 OR id = $2")
        .bind(current_id)
        .bind(new_id)
        .execute(pool)
        .instrument(query_span)
        .await
        .map(|result| result.rows_affected())
        .map_err(|err| {
            tracing::error!("Failed to execute query: {:?}", err);
            "".to_string()
        })
}
