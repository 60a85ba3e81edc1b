use super::schema;
use super::schema::Columns;
use super::schema::DeliveryLocation;
use crate::Result;
use rusqlite::{params, Connection};

pub fn insert(
    customer_name: impl Into<String>,
    phone: impl Into<String>,
    lat: f64,
    lon: f64,
    conn: &Connection,
) -> Result<DeliveryLocation> {
    let sql = format!(
        r#"
            INSERT INTO {table} ({customer_name}, {phone}, {lat}, {lon})
            VALUES (?1, ?2, ?3, ?4)
            RETURNING {projection}
        "#,
        table = schema::TABLE_NAME,
        customer_name = Columns::CustomerName.as_str(),
        phone = Columns::Phone.as_str(),
        lat = Columns::Lat.as_str(),
        lon = Columns::Lon.as_str(),
        projection = DeliveryLocation::projection(),
    );
    conn.query_row(
        &sql,
        params![customer_name.into(), phone.into(), lat, lon],
        DeliveryLocation::mapper(),
    )
    .map_err(Into::into)
}

pub fn select_by_id(id: i64, conn: &Connection) -> Result<DeliveryLocation> {
    let sql = format!(
        r#"
            SELECT {projection}
            FROM {table}
            WHERE {id} = ?1
        "#,
        projection = DeliveryLocation::projection(),
        table = schema::TABLE_NAME,
        id = Columns::Id.as_str(),
    );
    conn.query_row(&sql, params![id], DeliveryLocation::mapper())
        .map_err(Into::into)
}

#[cfg(test)]
mod test {
    use crate::db::test::conn;
    use crate::Result;

    #[test]
    fn insert() -> Result<()> {
        let conn = conn();
        let location = super::insert("Abebe Bikila", "+251911000000", 9.03, 38.75, &conn)?;
        assert_eq!("Abebe Bikila", location.customer_name);
        assert_eq!(9.03, location.lat);
        assert_eq!(38.75, location.lon);
        Ok(())
    }

    #[test]
    fn select_by_id() -> Result<()> {
        let conn = conn();
        let location = super::insert("Abebe Bikila", "+251911000000", 9.03, 38.75, &conn)?;
        assert_eq!(location.id, super::select_by_id(location.id, &conn)?.id);
        assert!(super::select_by_id(location.id + 1, &conn).is_err());
        Ok(())
    }
}
