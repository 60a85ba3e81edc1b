use rusqlite::Row;
use time::OffsetDateTime;

pub const TABLE_NAME: &str = "zone";

pub enum Columns {
    Id,
    Name,
    GeoJson,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

impl Columns {
    pub fn as_str(&self) -> &'static str {
        match self {
            Columns::Id => "id",
            Columns::Name => "name",
            Columns::GeoJson => "geo_json",
            Columns::CreatedAt => "created_at",
            Columns::UpdatedAt => "updated_at",
            Columns::DeletedAt => "deleted_at",
        }
    }
}

pub struct Zone {
    pub id: i64,
    pub name: String,
    pub geo_json: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub deleted_at: Option<OffsetDateTime>,
}

impl Zone {
    pub fn projection() -> String {
        [
            Columns::Id,
            Columns::Name,
            Columns::GeoJson,
            Columns::CreatedAt,
            Columns::UpdatedAt,
            Columns::DeletedAt,
        ]
        .iter()
        .map(Columns::as_str)
        .collect::<Vec<_>>()
        .join(", ")
    }

    pub fn mapper() -> fn(&Row) -> rusqlite::Result<Zone> {
        |row: &Row| -> rusqlite::Result<Zone> {
            Ok(Zone {
                id: row.get(0)?,
                name: row.get(1)?,
                geo_json: row.get(2)?,
                created_at: row.get(3)?,
                updated_at: row.get(4)?,
                deleted_at: row.get(5)?,
            })
        }
    }

    #[cfg(test)]
    pub fn mock(id: i64, name: &str, geo_json: &str) -> Zone {
        Zone {
            id,
            name: name.into(),
            geo_json: geo_json.into(),
            created_at: OffsetDateTime::now_utc(),
            updated_at: OffsetDateTime::now_utc(),
            deleted_at: None,
        }
    }

    // A rough square around Addis Ababa
    #[cfg(test)]
    pub fn mock_geo_json() -> String {
        r#"{"type":"Polygon","coordinates":[[[38.6,8.8],[38.9,8.8],[38.9,9.2],[38.6,9.2],[38.6,8.8]]]}"#
            .into()
    }
}
