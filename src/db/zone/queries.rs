use super::schema::Zone;
use crate::{db::zone::blocking_queries, Result};
use deadpool_sqlite::Pool;
use time::OffsetDateTime;

pub async fn insert(
    name: impl Into<String>,
    geo_json: impl Into<String>,
    pool: &Pool,
) -> Result<Zone> {
    let name = name.into();
    let geo_json = geo_json.into();
    pool.get()
        .await?
        .interact(|conn| blocking_queries::insert(name, geo_json, conn))
        .await?
}

pub async fn select(include_deleted: bool, limit: Option<i64>, pool: &Pool) -> Result<Vec<Zone>> {
    pool.get()
        .await?
        .interact(move |conn| blocking_queries::select(include_deleted, limit, conn))
        .await?
}

pub async fn select_by_id(id: i64, pool: &Pool) -> Result<Zone> {
    pool.get()
        .await?
        .interact(move |conn| blocking_queries::select_by_id(id, conn))
        .await?
}

pub async fn select_by_name(name: impl Into<String>, pool: &Pool) -> Result<Option<Zone>> {
    let name = name.into();
    pool.get()
        .await?
        .interact(|conn| blocking_queries::select_by_name(name, conn))
        .await?
}

pub async fn set_deleted_at(
    id: i64,
    deleted_at: Option<OffsetDateTime>,
    pool: &Pool,
) -> Result<Zone> {
    pool.get()
        .await?
        .interact(move |conn| blocking_queries::set_deleted_at(id, deleted_at, conn))
        .await?
}
