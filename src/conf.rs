use crate::{service::geofence::GeoPoint, Result};
use deadpool_sqlite::Pool;
use rusqlite::{Connection, Row};

#[derive(Clone)]
pub struct Conf {
    pub fallback_lat: Option<f64>,
    pub fallback_lon: Option<f64>,
    pub zone_seed_radius_km: f64,
    pub zone_seed_points: i64,
}

const TABLE_NAME: &str = "conf";

const MAPPER_PROJECTION: &str = "fallback_lat, fallback_lon, zone_seed_radius_km, zone_seed_points";

impl Conf {
    pub async fn select_async(pool: &Pool) -> Result<Conf> {
        pool.get()
            .await?
            .interact(|conn| Conf::select(conn))
            .await?
    }

    pub fn select(conn: &Connection) -> Result<Conf> {
        let sql = format!(
            r#"
                SELECT {MAPPER_PROJECTION}
                FROM {TABLE_NAME};
            "#
        );
        conn.prepare(&sql)?
            .query_row({}, mapper())
            .map_err(Into::into)
    }

    // Default location served by GET /v1/location/ip when no geolocation
    // provider is wired in. None unless an operator configured one.
    pub fn fallback_location(&self) -> Option<GeoPoint> {
        match (self.fallback_lat, self.fallback_lon) {
            (Some(lat), Some(lon)) => GeoPoint::new(lat, lon).ok(),
            _ => None,
        }
    }
}

const fn mapper() -> fn(&Row) -> rusqlite::Result<Conf> {
    |row: &Row| -> rusqlite::Result<Conf> {
        Ok(Conf {
            fallback_lat: row.get(0)?,
            fallback_lon: row.get(1)?,
            zone_seed_radius_km: row.get(2)?,
            zone_seed_points: row.get(3)?,
        })
    }
}

#[cfg(test)]
mod test {
    use crate::{test::mock_conn, Result};

    #[test]
    fn select() -> Result<()> {
        let conn = mock_conn();
        let conf = super::Conf::select(&conn)?;
        assert!(conf.fallback_location().is_none());
        assert_eq!(32, conf.zone_seed_points);
        Ok(())
    }
}
