use crate::{
    cities,
    conf::Conf,
    db::{self, zone::schema::Zone},
    service::geofence::{self, GeoPoint, MembershipResult},
    Error, Result,
};
use deadpool_sqlite::Pool;
use geojson::GeoJson;
use rusqlite::Connection;
use time::OffsetDateTime;
use tracing::info;

pub async fn insert(
    name: impl Into<String>,
    geo_json: impl Into<String>,
    pool: &Pool,
) -> Result<Zone> {
    let name = name.into();
    let geo_json = geo_json.into();
    geofence::validate_boundary(&geo_json)?;
    if db::zone::queries::select_by_name(name.clone(), pool)
        .await?
        .is_some()
    {
        return Err(Error::HttpConflict(format!(
            "Zone name is already in use: {name}"
        )));
    }
    db::zone::queries::insert(name, geo_json, pool).await
}

pub async fn soft_delete(id: i64, pool: &Pool) -> Result<Zone> {
    let zone = db::zone::queries::select_by_id(id, pool).await?;
    db::zone::queries::set_deleted_at(zone.id, Some(OffsetDateTime::now_utc()), pool).await
}

pub async fn check(point: GeoPoint, pool: &Pool) -> Result<MembershipResult> {
    let zones = db::zone::queries::select(false, None, pool).await?;
    Ok(geofence::point_in_any_zone(&point, &zones))
}

// Bootstraps one coarse circular zone per built-in city. Zones that already
// exist by name are left untouched, so reruns are safe.
pub fn seed_city_zones(conn: &Connection) -> Result<i64> {
    let conf = Conf::select(conn)?;
    let mut created = 0;
    for city in cities::CITIES {
        if db::zone::blocking_queries::select_by_name(city.name, conn)?.is_some() {
            info!(city.name, "Zone already exists, skipping");
            continue;
        }
        let center = GeoPoint::new(city.lat, city.lon)?;
        let boundary = GeoJson::Geometry(geofence::circular_polygon(
            &center,
            conf.zone_seed_radius_km,
            conf.zone_seed_points,
        ))
        .to_string();
        let zone = db::zone::blocking_queries::insert(city.name, boundary, conn)?;
        info!(zone.id, zone.name, city.region, "Created city zone");
        created += 1;
    }
    Ok(created)
}
