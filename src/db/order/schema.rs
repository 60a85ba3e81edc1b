use rusqlite::Row;
use strum::{Display, EnumString};
use time::OffsetDateTime;

// "order" is reserved in SQL
pub const TABLE_NAME: &str = "customer_order";

// Orders placed from outside every service zone are accepted anyway and
// flagged for staff follow-up instead of being rejected at checkout.
#[derive(Clone, Copy, Debug, Display, EnumString, PartialEq, Eq)]
#[strum(serialize_all = "title_case")]
pub enum OrderStatus {
    PendingCall,
    Confirmed,
    OutForDelivery,
    Delivered,
    Cancelled,
    OutsideZone,
}

pub enum Columns {
    Id,
    Uuid,
    DeliveryLocationId,
    Status,
    TotalCents,
    InsideZone,
    MatchedZoneName,
    CreatedAt,
    UpdatedAt,
}

impl Columns {
    pub fn as_str(&self) -> &'static str {
        match self {
            Columns::Id => "id",
            Columns::Uuid => "uuid",
            Columns::DeliveryLocationId => "delivery_location_id",
            Columns::Status => "status",
            Columns::TotalCents => "total_cents",
            Columns::InsideZone => "inside_zone",
            Columns::MatchedZoneName => "matched_zone_name",
            Columns::CreatedAt => "created_at",
            Columns::UpdatedAt => "updated_at",
        }
    }
}

pub struct Order {
    pub id: i64,
    pub uuid: String,
    pub delivery_location_id: i64,
    pub status: OrderStatus,
    pub total_cents: i64,
    pub inside_zone: bool,
    pub matched_zone_name: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl Order {
    pub fn projection() -> String {
        [
            Columns::Id,
            Columns::Uuid,
            Columns::DeliveryLocationId,
            Columns::Status,
            Columns::TotalCents,
            Columns::InsideZone,
            Columns::MatchedZoneName,
            Columns::CreatedAt,
            Columns::UpdatedAt,
        ]
        .iter()
        .map(Columns::as_str)
        .collect::<Vec<_>>()
        .join(", ")
    }

    pub fn mapper() -> fn(&Row) -> rusqlite::Result<Order> {
        |row: &Row| -> rusqlite::Result<Order> {
            let status: String = row.get(3)?;
            Ok(Order {
                id: row.get(0)?,
                uuid: row.get(1)?,
                delivery_location_id: row.get(2)?,
                status: status.parse().unwrap(),
                total_cents: row.get(4)?,
                inside_zone: row.get(5)?,
                matched_zone_name: row.get(6)?,
                created_at: row.get(7)?,
                updated_at: row.get(8)?,
            })
        }
    }
}
