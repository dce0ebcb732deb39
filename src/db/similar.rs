use crate::models;
use sqlx::PgPool;
use tracing::Instrument;
use uuid::Uuid;

// Every edge touching the product, regardless of which side it sits on.
pub async fn fetch_edges(
    pool: &PgPool,
    product_id: Uuid,
) -> Result<Vec<models::SimilarProduct>, String> {
    let query_span = tracing::info_span!("Fetch similarity edges of a product.");
    sqlx::query_as::<_, models::SimilarProduct>(
        "SELECT * FROM similar_products WHERE first_product = $1 OR second_product = $1",
    )
    .bind(product_id)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch similarity edges, error: {:?}", err);
        "".to_string()
    })
}

pub async fn insert_pairs(pool: &PgPool, pairs: &[(Uuid, Uuid)]) -> Result<u64, String> {
    let query_span = tracing::info_span!("Saving similarity edges into the database");

    let firsts: Vec<Uuid> = pairs.iter().map(|pair| pair.0).collect();
    let seconds: Vec<Uuid> = pairs.iter().map(|pair| pair.1).collect();

    sqlx::query(
        r#"
        INSERT INTO similar_products (first_product, second_product)
        SELECT * FROM UNNEST($1::uuid[], $2::uuid[])
        "#,
    )
    .bind(firsts)
    .bind(seconds)
    .execute(pool)
    .instrument(query_span)
    .await
    .map(|result| result.rows_affected())
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to insert".to_string()
    })
}

// Drops every edge touching any of the given products, either side.
pub async fn delete_for_products(pool: &PgPool, ids: &[Uuid]) -> Result<u64, String> {
    let query_span = tracing::info_span!("Deleting similarity edges");
    sqlx::query(
        "DELETE FROM similar_products WHERE first_product = ANY($1) OR second_product = ANY($1)",
    )
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
