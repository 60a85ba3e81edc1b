use super::schema;
use super::schema::Columns;
use super::schema::Zone;
use crate::Result;
use rusqlite::{params, Connection, OptionalExtension};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

pub fn insert(
    name: impl Into<String>,
    geo_json: impl Into<String>,
    conn: &Connection,
) -> Result<Zone> {
    let sql = format!(
        r#"
            INSERT INTO {table} ({name}, {geo_json})
            VALUES (?1, ?2)
            RETURNING {projection}
        "#,
        table = schema::TABLE_NAME,
        name = Columns::Name.as_str(),
        geo_json = Columns::GeoJson.as_str(),
        projection = Zone::projection(),
    );
    conn.query_row(&sql, params![name.into(), geo_json.into()], Zone::mapper())
        .map_err(Into::into)
}

// Scan order is significant: overlapping zones resolve to the first match,
// so zones are always returned in insertion (id) order.
pub fn select(include_deleted: bool, limit: Option<i64>, conn: &Connection) -> Result<Vec<Zone>> {
    let include_deleted_sql = if include_deleted {
        "".into()
    } else {
        format!(
            "AND {deleted_at} IS NULL",
            deleted_at = Columns::DeletedAt.as_str()
        )
    };
    let sql = format!(
        r#"
            SELECT {projection}
            FROM {table}
            WHERE 1
            {include_deleted_sql}
            ORDER BY {id}
            LIMIT {limit}
        "#,
        projection = Zone::projection(),
        table = schema::TABLE_NAME,
        id = Columns::Id.as_str(),
        limit = limit.unwrap_or(i64::MAX),
    );
    conn.prepare(&sql)?
        .query_map({}, Zone::mapper())?
        .collect::<Result<Vec<_>, _>>()
        .map_err(Into::into)
}

pub fn select_by_id(id: i64, conn: &Connection) -> Result<Zone> {
    let sql = format!(
        r#"
            SELECT {projection}
            FROM {table}
            WHERE {id} = ?1
        "#,
        projection = Zone::projection(),
        table = schema::TABLE_NAME,
        id = Columns::Id.as_str(),
    );
    conn.query_row(&sql, params![id], Zone::mapper())
        .map_err(Into::into)
}

pub fn select_by_name(name: impl Into<String>, conn: &Connection) -> Result<Option<Zone>> {
    let sql = format!(
        r#"
            SELECT {projection}
            FROM {table}
            WHERE {name} = ?1
        "#,
        projection = Zone::projection(),
        table = schema::TABLE_NAME,
        name = Columns::Name.as_str(),
    );
    conn.query_row(&sql, params![name.into()], Zone::mapper())
        .optional()
        .map_err(Into::into)
}

pub fn set_deleted_at(
    id: i64,
    deleted_at: Option<OffsetDateTime>,
    conn: &Connection,
) -> Result<Zone> {
    match deleted_at {
        Some(deleted_at) => {
            let sql = format!(
                r#"
                    UPDATE {table}
                    SET {deleted_at} = ?2
                    WHERE {id} = ?1
                "#,
                table = schema::TABLE_NAME,
                deleted_at = Columns::DeletedAt.as_str(),
                id = Columns::Id.as_str(),
            );
            conn.execute(&sql, params![id, deleted_at.format(&Rfc3339)?])?;
        }
        None => {
            let sql = format!(
                r#"
                    UPDATE {table}
                    SET {deleted_at} = NULL
                    WHERE {id} = ?1
                "#,
                table = schema::TABLE_NAME,
                deleted_at = Columns::DeletedAt.as_str(),
                id = Columns::Id.as_str(),
            );
            conn.execute(&sql, params![id])?;
        }
    };
    select_by_id(id, conn)
}

#[cfg(test)]
mod test {
    use crate::db::test::conn;
    use crate::db::zone::schema::Zone;
    use crate::Result;
    use time::OffsetDateTime;

    #[test]
    fn insert() -> Result<()> {
        let conn = conn();
        let zone = super::insert("Addis Ababa", Zone::mock_geo_json(), &conn)?;
        assert_eq!("Addis Ababa", zone.name);
        assert_eq!(zone.id, super::select_by_id(zone.id, &conn)?.id);
        Ok(())
    }

    #[test]
    fn insert_duplicate_name() -> Result<()> {
        let conn = conn();
        super::insert("Addis Ababa", Zone::mock_geo_json(), &conn)?;
        assert!(super::insert("Addis Ababa", Zone::mock_geo_json(), &conn).is_err());
        Ok(())
    }

    #[test]
    fn select() -> Result<()> {
        let conn = conn();
        super::insert("zone_1", Zone::mock_geo_json(), &conn)?;
        super::insert("zone_2", Zone::mock_geo_json(), &conn)?;
        super::insert("zone_3", Zone::mock_geo_json(), &conn)?;
        assert_eq!(3, super::select(true, None, &conn)?.len());
        assert_eq!(2, super::select(true, Some(2), &conn)?.len());
        Ok(())
    }

    #[test]
    fn select_should_sort_by_id_asc() -> Result<()> {
        let conn = conn();
        let zone_1 = super::insert("zone_1", Zone::mock_geo_json(), &conn)?;
        let zone_2 = super::insert("zone_2", Zone::mock_geo_json(), &conn)?;
        let zones = super::select(false, None, &conn)?;
        assert_eq!(zone_1.id, zones[0].id);
        assert_eq!(zone_2.id, zones[1].id);
        Ok(())
    }

    #[test]
    fn select_except_deleted() -> Result<()> {
        let conn = conn();
        super::insert("zone_1", Zone::mock_geo_json(), &conn)?;
        let zone_2 = super::insert("zone_2", Zone::mock_geo_json(), &conn)?;
        super::set_deleted_at(zone_2.id, Some(OffsetDateTime::now_utc()), &conn)?;
        assert_eq!(1, super::select(false, None, &conn)?.len());
        assert_eq!(2, super::select(true, None, &conn)?.len());
        Ok(())
    }

    #[test]
    fn select_by_name() -> Result<()> {
        let conn = conn();
        let zone = super::insert("Hawassa", Zone::mock_geo_json(), &conn)?;
        assert_eq!(
            Some(zone.id),
            super::select_by_name("Hawassa", &conn)?.map(|it| it.id)
        );
        assert!(super::select_by_name("Gondar", &conn)?.is_none());
        Ok(())
    }

    #[test]
    fn set_deleted_at() -> Result<()> {
        let conn = conn();
        let zone = super::insert("zone_1", Zone::mock_geo_json(), &conn)?;
        let zone = super::set_deleted_at(zone.id, Some(OffsetDateTime::now_utc()), &conn)?;
        assert!(zone.deleted_at.is_some());
        let zone = super::set_deleted_at(zone.id, None, &conn)?;
        assert!(zone.deleted_at.is_none());
        Ok(())
    }
}
