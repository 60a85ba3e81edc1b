use rusqlite::Row;
use time::OffsetDateTime;

pub const TABLE_NAME: &str = "order_item";

pub enum Columns {
    Id,
    OrderId,
    ProductId,
    ProductName,
    Quantity,
    PriceCents,
    CreatedAt,
}

impl Columns {
    pub fn as_str(&self) -> &'static str {
        match self {
            Columns::Id => "id",
            Columns::OrderId => "order_id",
            Columns::ProductId => "product_id",
            Columns::ProductName => "product_name",
            Columns::Quantity => "quantity",
            Columns::PriceCents => "price_cents",
            Columns::CreatedAt => "created_at",
        }
    }
}

// product_name and price_cents are copied from the product at order time, so
// later catalog edits don't rewrite order history.
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i64,
    pub price_cents: i64,
    pub created_at: OffsetDateTime,
}

impl OrderItem {
    pub fn projection() -> String {
        [
            Columns::Id,
            Columns::OrderId,
            Columns::ProductId,
            Columns::ProductName,
            Columns::Quantity,
            Columns::PriceCents,
            Columns::CreatedAt,
        ]
        .iter()
        .map(Columns::as_str)
        .collect::<Vec<_>>()
        .join(", ")
    }

    pub fn mapper() -> fn(&Row) -> rusqlite::Result<OrderItem> {
        |row: &Row| -> rusqlite::Result<OrderItem> {
            Ok(OrderItem {
                id: row.get(0)?,
                order_id: row.get(1)?,
                product_id: row.get(2)?,
                product_name: row.get(3)?,
                quantity: row.get(4)?,
                price_cents: row.get(5)?,
                created_at: row.get(6)?,
            })
        }
    }
}
