use rusqlite::Row;
use time::OffsetDateTime;

pub const TABLE_NAME: &str = "admin";

pub enum Columns {
    Id,
    Name,
    Password,
    Roles,
    CreatedAt,
    UpdatedAt,
}

impl Columns {
    pub fn as_str(&self) -> &'static str {
        match self {
            Columns::Id => "id",
            Columns::Name => "name",
            Columns::Password => "password",
            Columns::Roles => "roles",
            Columns::CreatedAt => "created_at",
            Columns::UpdatedAt => "updated_at",
        }
    }
}

pub struct Admin {
    pub id: i64,
    pub name: String,
    // Argon2 PHC string, never a plaintext password
    pub password: String,
    pub roles: Vec<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl Admin {
    pub fn projection() -> String {
        [
            Columns::Id,
            Columns::Name,
            Columns::Password,
            Columns::Roles,
            Columns::CreatedAt,
            Columns::UpdatedAt,
        ]
        .iter()
        .map(Columns::as_str)
        .collect::<Vec<_>>()
        .join(", ")
    }

    pub fn mapper() -> fn(&Row) -> rusqlite::Result<Admin> {
        |row: &Row| -> rusqlite::Result<Admin> {
            let roles: String = row.get(3)?;
            Ok(Admin {
                id: row.get(0)?,
                name: row.get(1)?,
                password: row.get(2)?,
                roles: serde_json::from_str(&roles).unwrap(),
                created_at: row.get(4)?,
                updated_at: row.get(5)?,
            })
        }
    }
}
