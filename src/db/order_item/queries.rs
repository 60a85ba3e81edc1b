use super::schema::OrderItem;
use crate::{db::order_item::blocking_queries, Result};
use deadpool_sqlite::Pool;

pub async fn select_by_order_id(order_id: i64, pool: &Pool) -> Result<Vec<OrderItem>> {
    pool.get()
        .await?
        .interact(move |conn| blocking_queries::select_by_order_id(order_id, conn))
        .await?
}
