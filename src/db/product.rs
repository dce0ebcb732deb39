use crate::forms;
use crate::models;
use sqlx::PgPool;
use tracing::Instrument;
use uuid::Uuid;

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<models::Product>, String> {
    let query_span = tracing::info_span!("Fetch all products.");
    sqlx::query_as::<_, models::Product>("SELECT * FROM products")
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch products, error: {:?}", err);
            "".to_string()
        })
}

pub async fn fetch(pool: &PgPool, id: Uuid) -> Result<Option<models::Product>, String> {
    let query_span = tracing::info_span!("Fetch product by id.");
    sqlx::query_as::<_, models::Product>("SELECT * FROM products WHERE id = $1 LIMIT 1")
        .bind(id)
        .fetch_optional(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch product {}, error: {:?}", id, err);
            "".to_string()
        })
}

pub async fn fetch_by_ids(pool: &PgPool, ids: &[Uuid]) -> Result<Vec<models::Product>, String> {
    let query_span = tracing::info_span!("Fetch products by id list.");
    sqlx::query_as::<_, models::Product>("SELECT * FROM products WHERE id = ANY($1)")
        .bind(ids)
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch products by ids, error: {:?}", err);
            "".to_string()
        })
}

pub async fn insert(pool: &PgPool, product: models::Product) -> Result<models::Product, String> {
    let query_span = tracing::info_span!("Saving new product into the database");
    sqlx::query_as::<_, models::Product>(
        r#"
        INSERT INTO products (id, title, description, price, created_at, updated_at)
        VALUES ($1, $2, $3, $4, NOW() at time zone 'utc', NOW() at time zone 'utc')
        RETURNING *
        "#,
    )
    .bind(product.id)
    .bind(product.title)
    .bind(product.description)
    .bind(product.price)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to insert".to_string()
    })
}

pub async fn update(pool: &PgPool, product: models::Product) -> Result<models::Product, String> {
    let query_span = tracing::info_span!("Updating product");
    sqlx::query_as::<_, models::Product>(
        r#"
        UPDATE products
        SET
            title=$2,
            description=$3,
            price=$4,
            updated_at=NOW() at time zone 'utc'
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(product.id)
    .bind(product.title)
    .bind(product.description)
    .bind(product.price)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "".to_string()
    })
}

// Three independent deletes, children first. No spanning transaction:
// a failure part-way leaves the earlier deletes committed.
#[tracing::instrument(name = "Delete product.", skip(pool))]
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, String> {
    for statement in [
        "DELETE FROM images WHERE product_id = $1",
        "DELETE FROM comments WHERE product_id = $1",
        "DELETE FROM products WHERE id = $1",
    ] {
        sqlx::query(statement).bind(id).execute(pool).await.map_err(|err| {
            tracing::error!("Failed to execute delete query: {:?}", err);
            "".to_string()
        })?;
    }

    Ok(true)
}

pub async fn overview(pool: &PgPool) -> Result<models::CatalogOverview, String> {
    let query_span = tracing::info_span!("Fetch catalog overview.");
    sqlx::query_as::<_, models::CatalogOverview>(
        "SELECT COUNT(*) AS count, SUM(price) AS sum FROM products",
    )
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch catalog overview, error: {:?}", err);
        "".to_string()
    })
}

pub async fn search(
    pool: &PgPool,
    filter: &forms::product::Filter,
) -> Result<Vec<models::Product>, String> {
    let query_span = tracing::info_span!("Search products by filter.");
    filter_query(filter)
        .build_query_as::<models::Product>()
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to search products, error: {:?}", err);
            "".to_string()
        })
}

fn filter_query(filter: &forms::product::Filter) -> sqlx::QueryBuilder<'_, sqlx::Postgres> {
    let mut query = sqlx::QueryBuilder::new("SELECT * FROM products WHERE 1=1");

    if let Some(title) = &filter.title {
        query.push(" AND title ILIKE ");
        query.push_bind(format!("%{}%", title));
    }
    if let Some(description) = &filter.description {
        query.push(" AND description ILIKE ");
        query.push_bind(format!("%{}%", description));
    }
    if let Some(price_from) = filter.price_from {
        query.push(" AND price >= ");
        query.push_bind(price_from);
    }
    if let Some(price_to) = filter.price_to {
        query.push(" AND price <= ");
        query.push_bind(price_to);
    }

    query
}

// Products sitting on the far end of an edge that starts at `id`.
pub async fn fetch_similar(pool: &PgPool, id: Uuid) -> Result<Vec<models::Product>, String> {
    let query_span = tracing::info_span!("Fetch similar products.");
    sqlx::query_as::<_, models::Product>(
        r#"
        SELECT p.*
        FROM products p
        JOIN similar_products sp ON p.id = sp.second_product
        WHERE sp.first_product = $1
        "#,
    )
    .bind(id)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch similar products, error: {:?}", err);
        "".to_string()
    })
}

pub async fn fetch_not_similar(pool: &PgPool, id: Uuid) -> Result<Vec<models::Product>, String> {
    let query_span = tracing::info_span!("Fetch not-similar products.");
    sqlx::query_as::<_, models::Product>(
        r#"
        SELECT *
        FROM products
        WHERE id NOT IN (
            SELECT second_product
            FROM similar_products
            WHERE first_product = $1
        )
        "#,
    )
    .bind(id)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch not-similar products, error: {:?}", err);
        "".to_string()
    })
}
