use super::schema::DeliveryLocation;
use crate::{db::delivery_location::blocking_queries, Result};
use deadpool_sqlite::Pool;

pub async fn insert(
    customer_name: impl Into<String>,
    phone: impl Into<String>,
    lat: f64,
    lon: f64,
    pool: &Pool,
) -> Result<DeliveryLocation> {
    let customer_name = customer_name.into();
    let phone = phone.into();
    pool.get()
        .await?
        .interact(move |conn| blocking_queries::insert(customer_name, phone, lat, lon, conn))
        .await?
}

pub async fn select_by_id(id: i64, pool: &Pool) -> Result<DeliveryLocation> {
    pool.get()
        .await?
        .interact(move |conn| blocking_queries::select_by_id(id, conn))
        .await?
}
