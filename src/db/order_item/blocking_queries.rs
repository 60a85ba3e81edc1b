use super::schema;
use super::schema::Columns;
use super::schema::OrderItem;
use crate::Result;
use rusqlite::{params, Connection};

pub fn insert(
    order_id: i64,
    product_id: i64,
    product_name: impl Into<String>,
    quantity: i64,
    price_cents: i64,
    conn: &Connection,
) -> Result<OrderItem> {
    let sql = format!(
        r#"
            INSERT INTO {table} (
                {order_id},
                {product_id},
                {product_name},
                {quantity},
                {price_cents}
            )
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING {projection}
        "#,
        table = schema::TABLE_NAME,
        order_id = Columns::OrderId.as_str(),
        product_id = Columns::ProductId.as_str(),
        product_name = Columns::ProductName.as_str(),
        quantity = Columns::Quantity.as_str(),
        price_cents = Columns::PriceCents.as_str(),
        projection = OrderItem::projection(),
    );
    conn.query_row(
        &sql,
        params![
            order_id,
            product_id,
            product_name.into(),
            quantity,
            price_cents
        ],
        OrderItem::mapper(),
    )
    .map_err(Into::into)
}

pub fn select_by_order_id(order_id: i64, conn: &Connection) -> Result<Vec<OrderItem>> {
    let sql = format!(
        r#"
            SELECT {projection}
            FROM {table}
            WHERE {order_id} = ?1
            ORDER BY {id}
        "#,
        projection = OrderItem::projection(),
        table = schema::TABLE_NAME,
        order_id = Columns::OrderId.as_str(),
        id = Columns::Id.as_str(),
    );
    conn.prepare(&sql)?
        .query_map(params![order_id], OrderItem::mapper())?
        .collect::<Result<Vec<_>, _>>()
        .map_err(Into::into)
}
