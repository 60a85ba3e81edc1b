use crate::{db::zone::schema::Zone, Error, Result};
use geo::{coord, Contains, Coord, MultiPolygon, Polygon};
use geojson::{GeoJson, Geometry};
use serde::Serialize;
use tracing::warn;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// A WGS84 coordinate pair. Validated on construction, so every `GeoPoint`
/// in circulation holds finite, in-range coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Result<GeoPoint> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(Error::InvalidPoint(format!(
                "Latitude {lat} is outside [-90, 90]"
            )));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(Error::InvalidPoint(format!(
                "Longitude {lon} is outside [-180, 180]"
            )));
        }
        Ok(GeoPoint { lat, lon })
    }

    fn coord(&self) -> Coord {
        coord! { x: self.lon, y: self.lat }
    }
}

/// Outcome of scanning a point against a list of service zones.
///
/// `failed_zones` carries every zone that was skipped because its stored
/// boundary failed to parse, so callers can surface bad admin data instead
/// of digging through logs.
#[derive(Debug, Serialize)]
pub struct MembershipResult {
    pub inside_any_zone: bool,
    pub matched_zone_name: Option<String>,
    pub zones_evaluated: i64,
    pub failed_zones: Vec<ZoneFailure>,
}

#[derive(Debug, Serialize)]
pub struct ZoneFailure {
    pub zone_id: i64,
    pub error: String,
}

/// Checks whether `point` falls inside the boundary stored as GeoJSON text.
///
/// Accepts `Polygon` and `MultiPolygon` geometries, bare or wrapped in a
/// `Feature`/`FeatureCollection`. Anything else is malformed. Points inside
/// a polygon hole are outside, and points exactly on an edge are classified
/// as outside, which keeps repeated checks deterministic.
pub fn point_in_geo_json(point: &GeoPoint, geo_json: &str) -> Result<bool> {
    let geo_json: GeoJson = geo_json.parse()?;
    let geometries = geometries(&geo_json);
    if geometries.is_empty() {
        return Err(Error::MalformedGeometry(
            "GeoJSON contains no geometries".into(),
        ));
    }
    for geometry in geometries {
        if point_in_geometry(point, geometry)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Scans `zones` in their given order and short-circuits on the first zone
/// containing `point`, so the scan order decides which name is reported when
/// zones overlap. A zone with a malformed boundary is recorded and skipped,
/// never aborting the scan: one corrupt zone must not block checkout.
pub fn point_in_any_zone(point: &GeoPoint, zones: &[Zone]) -> MembershipResult {
    let mut failed_zones: Vec<ZoneFailure> = vec![];
    let mut zones_evaluated = 0;
    for zone in zones {
        zones_evaluated += 1;
        match point_in_geo_json(point, &zone.geo_json) {
            Ok(true) => {
                return MembershipResult {
                    inside_any_zone: true,
                    matched_zone_name: Some(zone.name.clone()),
                    zones_evaluated,
                    failed_zones,
                }
            }
            Ok(false) => {}
            Err(e) => {
                warn!(
                    zone.id,
                    error = e.to_string(),
                    "Skipping zone with malformed boundary"
                );
                failed_zones.push(ZoneFailure {
                    zone_id: zone.id,
                    error: e.to_string(),
                });
            }
        }
    }
    MembershipResult {
        inside_any_zone: false,
        matched_zone_name: None,
        zones_evaluated,
        failed_zones,
    }
}

/// Approximates a circle of `radius_km` around `center` with `point_count`
/// vertices, closing the ring by repeating the first coordinate.
///
/// Offsets use a small-angle spherical approximation, not great-circle math.
/// Distortion grows with latitude and radius, which is fine for coarse
/// admin-drawn delivery areas and nothing more precise.
pub fn circular_polygon(center: &GeoPoint, radius_km: f64, point_count: i64) -> Geometry {
    let point_count = point_count.max(3);
    let radius_rad = radius_km / EARTH_RADIUS_KM;
    let mut ring: Vec<Vec<f64>> = Vec::with_capacity(point_count as usize + 1);
    for i in 0..point_count {
        let bearing = (i as f64 * 360.0 / point_count as f64).to_radians();
        let lat_offset = radius_rad * bearing.cos();
        let lon_offset = radius_rad * bearing.sin() / center.lat.to_radians().cos();
        ring.push(vec![
            center.lon + lon_offset.to_degrees(),
            center.lat + lat_offset.to_degrees(),
        ]);
    }
    ring.push(ring[0].clone());
    Geometry::new(geojson::Value::Polygon(vec![ring]))
}

/// Rejects boundary text that `point_in_geo_json` would refuse to evaluate,
/// so zones are checked at creation time rather than at first use.
pub fn validate_boundary(geo_json: &str) -> Result<()> {
    let geo_json: GeoJson = geo_json.parse()?;
    let geometries = geometries(&geo_json);
    if geometries.is_empty() {
        return Err(Error::MalformedGeometry(
            "GeoJSON contains no geometries".into(),
        ));
    }
    for geometry in geometries {
        match &geometry.value {
            geojson::Value::Polygon(_) => {}
            geojson::Value::MultiPolygon(_) => {}
            other => {
                return Err(Error::MalformedGeometry(format!(
                    "Unsupported geometry type: {}",
                    other.type_name()
                )))
            }
        }
    }
    Ok(())
}

fn geometries(geo_json: &GeoJson) -> Vec<&Geometry> {
    let mut res: Vec<&Geometry> = vec![];
    match geo_json {
        GeoJson::FeatureCollection(v) => {
            for feature in &v.features {
                if let Some(v) = &feature.geometry {
                    res.push(v);
                }
            }
        }
        GeoJson::Feature(v) => {
            if let Some(v) = &v.geometry {
                res.push(v);
            }
        }
        GeoJson::Geometry(v) => res.push(v),
    };
    res
}

fn point_in_geometry(point: &GeoPoint, geometry: &Geometry) -> Result<bool> {
    match &geometry.value {
        geojson::Value::Polygon(_) => {
            let poly: Polygon = (&geometry.value).try_into()?;
            Ok(poly.contains(&point.coord()))
        }
        geojson::Value::MultiPolygon(_) => {
            let multi_poly: MultiPolygon = (&geometry.value).try_into()?;
            Ok(multi_poly.contains(&point.coord()))
        }
        other => Err(Error::MalformedGeometry(format!(
            "Unsupported geometry type: {}",
            other.type_name()
        ))),
    }
}

#[cfg(test)]
mod test {
    use super::{circular_polygon, point_in_any_zone, point_in_geo_json, GeoPoint};
    use crate::db::zone::schema::Zone;
    use crate::{Error, Result};
    use geojson::GeoJson;

    fn square() -> String {
        r#"{"type":"Polygon","coordinates":[[[0.0,0.0],[0.0,2.0],[2.0,2.0],[2.0,0.0],[0.0,0.0]]]}"#
            .into()
    }

    fn square_with_hole() -> String {
        r#"{
            "type": "Polygon",
            "coordinates": [
                [[0.0,0.0],[10.0,0.0],[10.0,10.0],[0.0,10.0],[0.0,0.0]],
                [[4.0,4.0],[6.0,4.0],[6.0,6.0],[4.0,6.0],[4.0,4.0]]
            ]
        }"#
        .into()
    }

    #[test]
    fn invalid_point() {
        assert!(GeoPoint::new(91.0, 0.0).is_err());
        assert!(GeoPoint::new(-91.0, 0.0).is_err());
        assert!(GeoPoint::new(0.0, 181.0).is_err());
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::new(90.0, -180.0).is_ok());
    }

    #[test]
    fn point_inside_square() -> Result<()> {
        assert!(point_in_geo_json(&GeoPoint::new(1.0, 1.0)?, &square())?);
        Ok(())
    }

    #[test]
    fn point_outside_square() -> Result<()> {
        assert!(!point_in_geo_json(&GeoPoint::new(5.0, 5.0)?, &square())?);
        assert!(!point_in_geo_json(&GeoPoint::new(1.0, 3.0)?, &square())?);
        assert!(!point_in_geo_json(&GeoPoint::new(3.0, 1.0)?, &square())?);
        Ok(())
    }

    #[test]
    fn point_inside_hole_is_outside() -> Result<()> {
        assert!(!point_in_geo_json(
            &GeoPoint::new(5.0, 5.0)?,
            &square_with_hole()
        )?);
        assert!(point_in_geo_json(
            &GeoPoint::new(2.0, 2.0)?,
            &square_with_hole()
        )?);
        Ok(())
    }

    #[test]
    fn multi_polygon() -> Result<()> {
        let geo_json = r#"{
            "type": "MultiPolygon",
            "coordinates": [
                [[[0.0,0.0],[2.0,0.0],[2.0,2.0],[0.0,2.0],[0.0,0.0]]],
                [[[10.0,10.0],[12.0,10.0],[12.0,12.0],[10.0,12.0],[10.0,10.0]]]
            ]
        }"#;
        assert!(point_in_geo_json(&GeoPoint::new(11.0, 11.0)?, geo_json)?);
        assert!(!point_in_geo_json(&GeoPoint::new(5.0, 5.0)?, geo_json)?);
        Ok(())
    }

    #[test]
    fn feature_wrapped_polygon() -> Result<()> {
        let geo_json = format!(
            r#"{{"type":"Feature","properties":{{}},"geometry":{}}}"#,
            square()
        );
        assert!(point_in_geo_json(&GeoPoint::new(1.0, 1.0)?, &geo_json)?);
        Ok(())
    }

    #[test]
    fn rejects_unsupported_geometry() -> Result<()> {
        let geo_json = r#"{"type":"LineString","coordinates":[[0.0,0.0],[1.0,1.0]]}"#;
        let res = point_in_geo_json(&GeoPoint::new(0.5, 0.5)?, geo_json);
        assert!(matches!(res, Err(Error::MalformedGeometry(_))));
        Ok(())
    }

    #[test]
    fn rejects_garbage() -> Result<()> {
        let res = point_in_geo_json(&GeoPoint::new(0.5, 0.5)?, "not geo json at all");
        assert!(matches!(res, Err(Error::MalformedGeometry(_))));
        Ok(())
    }

    #[test]
    fn any_zone_empty_list() -> Result<()> {
        let res = point_in_any_zone(&GeoPoint::new(1.0, 1.0)?, &[]);
        assert!(!res.inside_any_zone);
        assert_eq!(None, res.matched_zone_name);
        assert_eq!(0, res.zones_evaluated);
        assert!(res.failed_zones.is_empty());
        Ok(())
    }

    #[test]
    fn any_zone_skips_malformed_zone() -> Result<()> {
        let zones = vec![
            Zone::mock(1, "broken", "{\"type\":\"Banana\"}"),
            Zone::mock(2, "good", &square()),
        ];
        let res = point_in_any_zone(&GeoPoint::new(1.0, 1.0)?, &zones);
        assert!(res.inside_any_zone);
        assert_eq!(Some("good".into()), res.matched_zone_name);
        assert_eq!(1, res.failed_zones.len());
        assert_eq!(1, res.failed_zones[0].zone_id);
        Ok(())
    }

    #[test]
    fn any_zone_order_decides_overlap_winner() -> Result<()> {
        let zone_a = || Zone::mock(1, "zone_a", &square());
        let zone_b = || Zone::mock(2, "zone_b", &square());
        let point = GeoPoint::new(1.0, 1.0)?;
        let res = point_in_any_zone(&point, &[zone_a(), zone_b()]);
        assert_eq!(Some("zone_a".into()), res.matched_zone_name);
        let res = point_in_any_zone(&point, &[zone_b(), zone_a()]);
        assert_eq!(Some("zone_b".into()), res.matched_zone_name);
        Ok(())
    }

    #[test]
    fn any_zone_short_circuits() -> Result<()> {
        let zones = vec![
            Zone::mock(1, "matching", &square()),
            Zone::mock(2, "never_reached", &square()),
        ];
        let res = point_in_any_zone(&GeoPoint::new(1.0, 1.0)?, &zones);
        assert_eq!(1, res.zones_evaluated);
        Ok(())
    }

    #[test]
    fn any_zone_no_match_evaluates_all() -> Result<()> {
        let zones = vec![
            Zone::mock(1, "zone_1", &square()),
            Zone::mock(2, "zone_2", &square()),
        ];
        let res = point_in_any_zone(&GeoPoint::new(50.0, 50.0)?, &zones);
        assert!(!res.inside_any_zone);
        assert_eq!(2, res.zones_evaluated);
        Ok(())
    }

    #[test]
    fn validate_boundary() -> Result<()> {
        assert!(super::validate_boundary(&square()).is_ok());
        assert!(super::validate_boundary("{}").is_err());
        assert!(super::validate_boundary(
            r#"{"type":"Point","coordinates":[1.0,1.0]}"#
        )
        .is_err());
        Ok(())
    }

    #[test]
    fn circular_polygon_closes_ring() -> Result<()> {
        let center = GeoPoint::new(9.03, 38.75)?;
        let geometry = circular_polygon(&center, 5.0, 32);
        let geojson::Value::Polygon(rings) = &geometry.value else {
            panic!("Expected a polygon");
        };
        assert_eq!(1, rings.len());
        assert_eq!(33, rings[0].len());
        assert_eq!(rings[0].first(), rings[0].last());
        Ok(())
    }

    #[test]
    fn circular_polygon_contains_center() -> Result<()> {
        let center = GeoPoint::new(9.03, 38.75)?;
        let geo_json = GeoJson::Geometry(circular_polygon(&center, 5.0, 32)).to_string();
        assert!(point_in_geo_json(&center, &geo_json)?);
        // ~5 km is well under a degree at this latitude
        assert!(!point_in_geo_json(&GeoPoint::new(10.03, 38.75)?, &geo_json)?);
        Ok(())
    }

    #[test]
    fn geo_json_round_trip() -> Result<()> {
        let center = GeoPoint::new(9.03, 38.75)?;
        let geometry = circular_polygon(&center, 5.0, 32);
        let serialized = GeoJson::Geometry(geometry.clone()).to_string();
        let parsed: GeoJson = serialized.parse()?;
        let GeoJson::Geometry(parsed) = parsed else {
            panic!("Expected a geometry");
        };
        let geojson::Value::Polygon(rings) = &geometry.value else {
            panic!("Expected a polygon");
        };
        let geojson::Value::Polygon(parsed_rings) = &parsed.value else {
            panic!("Expected a polygon");
        };
        for (coord, parsed_coord) in rings[0].iter().zip(parsed_rings[0].iter()) {
            assert!((coord[0] - parsed_coord[0]).abs() < 1e-9);
            assert!((coord[1] - parsed_coord[1]).abs() < 1e-9);
        }
        Ok(())
    }
}
