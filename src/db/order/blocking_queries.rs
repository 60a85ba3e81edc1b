use super::schema;
use super::schema::Columns;
use super::schema::Order;
use super::schema::OrderStatus;
use crate::Result;
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

pub fn insert(
    delivery_location_id: i64,
    status: OrderStatus,
    total_cents: i64,
    inside_zone: bool,
    matched_zone_name: Option<String>,
    conn: &Connection,
) -> Result<Order> {
    let sql = format!(
        r#"
            INSERT INTO {table} (
                {uuid},
                {delivery_location_id},
                {status},
                {total_cents},
                {inside_zone},
                {matched_zone_name}
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            RETURNING {projection}
        "#,
        table = schema::TABLE_NAME,
        uuid = Columns::Uuid.as_str(),
        delivery_location_id = Columns::DeliveryLocationId.as_str(),
        status = Columns::Status.as_str(),
        total_cents = Columns::TotalCents.as_str(),
        inside_zone = Columns::InsideZone.as_str(),
        matched_zone_name = Columns::MatchedZoneName.as_str(),
        projection = Order::projection(),
    );
    conn.query_row(
        &sql,
        params![
            Uuid::new_v4().to_string(),
            delivery_location_id,
            status.to_string(),
            total_cents,
            inside_zone,
            matched_zone_name,
        ],
        Order::mapper(),
    )
    .map_err(Into::into)
}

pub fn select(limit: Option<i64>, conn: &Connection) -> Result<Vec<Order>> {
    let sql = format!(
        r#"
            SELECT {projection}
            FROM {table}
            ORDER BY {id} DESC
            LIMIT {limit}
        "#,
        projection = Order::projection(),
        table = schema::TABLE_NAME,
        id = Columns::Id.as_str(),
        limit = limit.unwrap_or(i64::MAX),
    );
    conn.prepare(&sql)?
        .query_map({}, Order::mapper())?
        .collect::<Result<Vec<_>, _>>()
        .map_err(Into::into)
}

pub fn select_by_id(id: i64, conn: &Connection) -> Result<Order> {
    let sql = format!(
        r#"
            SELECT {projection}
            FROM {table}
            WHERE {id} = ?1
        "#,
        projection = Order::projection(),
        table = schema::TABLE_NAME,
        id = Columns::Id.as_str(),
    );
    conn.query_row(&sql, params![id], Order::mapper())
        .map_err(Into::into)
}

pub fn select_by_uuid(uuid: impl Into<String>, conn: &Connection) -> Result<Option<Order>> {
    let sql = format!(
        r#"
            SELECT {projection}
            FROM {table}
            WHERE {uuid} = ?1
        "#,
        projection = Order::projection(),
        table = schema::TABLE_NAME,
        uuid = Columns::Uuid.as_str(),
    );
    conn.query_row(&sql, params![uuid.into()], Order::mapper())
        .optional()
        .map_err(Into::into)
}

pub fn set_status(id: i64, status: OrderStatus, conn: &Connection) -> Result<Order> {
    let sql = format!(
        r#"
            UPDATE {table}
            SET {status} = ?2
            WHERE {id} = ?1
        "#,
        table = schema::TABLE_NAME,
        status = Columns::Status.as_str(),
        id = Columns::Id.as_str(),
    );
    conn.execute(&sql, params![id, status.to_string()])?;
    select_by_id(id, conn)
}
