use super::schema::Order;
use super::schema::OrderStatus;
use crate::{db::order::blocking_queries, Result};
use deadpool_sqlite::Pool;

pub async fn select(limit: Option<i64>, pool: &Pool) -> Result<Vec<Order>> {
    pool.get()
        .await?
        .interact(move |conn| blocking_queries::select(limit, conn))
        .await?
}

pub async fn select_by_uuid(uuid: impl Into<String>, pool: &Pool) -> Result<Option<Order>> {
    let uuid = uuid.into();
    pool.get()
        .await?
        .interact(|conn| blocking_queries::select_by_uuid(uuid, conn))
        .await?
}

pub async fn set_status(id: i64, status: OrderStatus, pool: &Pool) -> Result<Order> {
    pool.get()
        .await?
        .interact(move |conn| blocking_queries::set_status(id, status, conn))
        .await?
}
