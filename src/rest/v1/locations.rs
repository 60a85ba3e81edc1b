use crate::conf::Conf;
use crate::rest::error::RestApiError;
use crate::rest::error::RestApiErrorCode;
use crate::rest::error::RestResult as Res;
use crate::service;
use crate::service::geofence::{GeoPoint, MembershipResult};
use actix_web::get;
use actix_web::post;
use actix_web::web::Data;
use actix_web::web::Json;
use deadpool_sqlite::Pool;
use serde::Deserialize;
use serde::Serialize;

#[derive(Serialize, Deserialize)]
pub struct GetIpRes {
    pub lat: f64,
    pub lon: f64,
}

// A stand-in for real IP geolocation: serves the operator-configured
// fallback location, or 404 when none is configured.
#[get("ip")]
pub async fn get_ip(conf: Data<Conf>) -> Res<GetIpRes> {
    match conf.fallback_location() {
        Some(point) => Ok(Json(GetIpRes {
            lat: point.lat,
            lon: point.lon,
        })),
        None => Err(RestApiError::new(
            RestApiErrorCode::NotFound,
            "Fallback location is not configured.",
        )),
    }
}

#[derive(Deserialize)]
pub struct CheckZoneArgs {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Serialize)]
pub struct CheckZoneRes {
    #[serde(flatten)]
    pub result: MembershipResult,
    pub message: String,
}

#[post("check-zone")]
pub async fn post_check_zone(args: Json<CheckZoneArgs>, pool: Data<Pool>) -> Res<CheckZoneRes> {
    let point = GeoPoint::new(args.lat, args.lon)?;
    let result = service::zone::check(point, &pool).await?;
    let message = if result.inside_any_zone {
        "Location is within our service area".into()
    } else {
        "Sorry, we don't currently service this area".into()
    };
    Ok(Json(CheckZoneRes { result, message }))
}
