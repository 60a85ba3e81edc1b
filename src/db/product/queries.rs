use super::schema::Product;
use crate::{db::product::blocking_queries, Result};
use deadpool_sqlite::Pool;
use time::OffsetDateTime;

pub async fn insert(
    name: impl Into<String>,
    price_cents: i64,
    stock: i64,
    pool: &Pool,
) -> Result<Product> {
    let name = name.into();
    pool.get()
        .await?
        .interact(move |conn| blocking_queries::insert(name, price_cents, stock, conn))
        .await?
}

pub async fn select(
    include_deleted: bool,
    limit: Option<i64>,
    pool: &Pool,
) -> Result<Vec<Product>> {
    pool.get()
        .await?
        .interact(move |conn| blocking_queries::select(include_deleted, limit, conn))
        .await?
}

pub async fn select_by_id(id: i64, pool: &Pool) -> Result<Product> {
    pool.get()
        .await?
        .interact(move |conn| blocking_queries::select_by_id(id, conn))
        .await?
}

pub async fn set_name(id: i64, name: impl Into<String>, pool: &Pool) -> Result<Product> {
    let name = name.into();
    pool.get()
        .await?
        .interact(move |conn| blocking_queries::set_name(id, name, conn))
        .await?
}

pub async fn set_price_cents(id: i64, price_cents: i64, pool: &Pool) -> Result<Product> {
    pool.get()
        .await?
        .interact(move |conn| blocking_queries::set_price_cents(id, price_cents, conn))
        .await?
}

pub async fn set_stock(id: i64, stock: i64, pool: &Pool) -> Result<Product> {
    pool.get()
        .await?
        .interact(move |conn| blocking_queries::set_stock(id, stock, conn))
        .await?
}

pub async fn set_deleted_at(
    id: i64,
    deleted_at: Option<OffsetDateTime>,
    pool: &Pool,
) -> Result<Product> {
    pool.get()
        .await?
        .interact(move |conn| blocking_queries::set_deleted_at(id, deleted_at, conn))
        .await?
}
