use crate::db;
use crate::db::delivery_location::schema::DeliveryLocation;
use crate::rest::error::RestResult as Res;
use crate::service::geofence::GeoPoint;
use actix_web::get;
use actix_web::post;
use actix_web::web::Data;
use actix_web::web::Json;
use actix_web::web::Path;
use deadpool_sqlite::Pool;
use serde::Deserialize;
use serde::Serialize;

#[derive(Serialize, Deserialize)]
pub struct GetItem {
    pub id: i64,
    pub customer_name: String,
    pub phone: String,
    pub lat: f64,
    pub lon: f64,
}

impl From<DeliveryLocation> for GetItem {
    fn from(val: DeliveryLocation) -> Self {
        GetItem {
            id: val.id,
            customer_name: val.customer_name,
            phone: val.phone,
            lat: val.lat,
            lon: val.lon,
        }
    }
}

#[derive(Deserialize)]
pub struct PostArgs {
    pub customer_name: String,
    pub phone: String,
    pub lat: f64,
    pub lon: f64,
}

#[post("")]
pub async fn post(args: Json<PostArgs>, pool: Data<Pool>) -> Res<GetItem> {
    let point = GeoPoint::new(args.lat, args.lon)?;
    let location = db::delivery_location::queries::insert(
        args.customer_name.clone(),
        args.phone.clone(),
        point.lat,
        point.lon,
        &pool,
    )
    .await?;
    Ok(Json(location.into()))
}

#[get("{id}")]
pub async fn get_by_id(id: Path<i64>, pool: Data<Pool>) -> Res<GetItem> {
    let location = db::delivery_location::queries::select_by_id(id.into_inner(), &pool).await?;
    Ok(Json(location.into()))
}
