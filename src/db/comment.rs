use crate::models;
use sqlx::PgPool;
use tracing::Instrument;
use uuid::Uuid;

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<models::Comment>, String> {
    let query_span = tracing::info_span!("Fetch all comments.");
    sqlx::query_as::<_, models::Comment>("SELECT * FROM comments")
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch comments, error: {:?}", err);
            "".to_string()
        })
}

pub async fn fetch_by_product(
    pool: &PgPool,
    product_id: Uuid,
) -> Result<Vec<models::Comment>, String> {
    let query_span = tracing::info_span!("Fetch comments of a product.");
    sqlx::query_as::<_, models::Comment>("SELECT * FROM comments WHERE product_id = $1")
        .bind(product_id)
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch comments of {}, error: {:?}", product_id, err);
            "".to_string()
        })
}

pub async fn insert(pool: &PgPool, comment: models::Comment) -> Result<models::Comment, String> {
    let query_span = tracing::info_span!("Saving new comment into the database");
    sqlx::query_as::<_, models::Comment>(
        r#"
        INSERT INTO comments (id, name, email, body, product_id)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(comment.id)
    .bind(comment.name)
    .bind(comment.email)
    .bind(comment.body)
    .bind(comment.product_id)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to insert".to_string()
    })
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, String> {
    let query_span = tracing::info_span!("Deleting comment");
    sqlx::query("DELETE FROM comments WHERE id = $1")
        .bind(id)
        .execute(pool)
        .instrument(query_span)
        .await
        .map(|result| result.rows_affected())
        .map_err(|err| {
            tracing::error!("Failed to execute query: {:?}", err);
            "".to_string()
        })
}
