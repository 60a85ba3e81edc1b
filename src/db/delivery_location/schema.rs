use rusqlite::Row;
use time::OffsetDateTime;

pub const TABLE_NAME: &str = "delivery_location";

pub enum Columns {
    Id,
    CustomerName,
    Phone,
    Lat,
    Lon,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

impl Columns {
    pub fn as_str(&self) -> &'static str {
        match self {
            Columns::Id => "id",
            Columns::CustomerName => "customer_name",
            Columns::Phone => "phone",
            Columns::Lat => "lat",
            Columns::Lon => "lon",
            Columns::CreatedAt => "created_at",
            Columns::UpdatedAt => "updated_at",
            Columns::DeletedAt => "deleted_at",
        }
    }
}

pub struct DeliveryLocation {
    pub id: i64,
    pub customer_name: String,
    pub phone: String,
    pub lat: f64,
    pub lon: f64,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub deleted_at: Option<OffsetDateTime>,
}

impl DeliveryLocation {
    pub fn projection() -> String {
        [
            Columns::Id,
            Columns::CustomerName,
            Columns::Phone,
            Columns::Lat,
            Columns::Lon,
            Columns::CreatedAt,
            Columns::UpdatedAt,
            Columns::DeletedAt,
        ]
        .iter()
        .map(Columns::as_str)
        .collect::<Vec<_>>()
        .join(", ")
    }

    pub fn mapper() -> fn(&Row) -> rusqlite::Result<DeliveryLocation> {
        |row: &Row| -> rusqlite::Result<DeliveryLocation> {
            Ok(DeliveryLocation {
                id: row.get(0)?,
                customer_name: row.get(1)?,
                phone: row.get(2)?,
                lat: row.get(3)?,
                lon: row.get(4)?,
                created_at: row.get(5)?,
                updated_at: row.get(6)?,
                deleted_at: row.get(7)?,
            })
        }
    }
}
