use crate::db;
use crate::db::zone::schema::Zone;
use crate::rest;
use crate::rest::error::RestApiError;
use crate::rest::error::RestResult as Res;
use crate::service;
use actix_web::delete;
use actix_web::get;
use actix_web::post;
use actix_web::web::Data;
use actix_web::web::Json;
use actix_web::web::Path;
use actix_web::HttpRequest;
use deadpool_sqlite::Pool;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize, Deserialize)]
pub struct GetItem {
    pub id: i64,
    pub name: String,
    pub geo_json: Value,
}

impl From<Zone> for GetItem {
    fn from(val: Zone) -> Self {
        let geo_json = serde_json::from_str(&val.geo_json)
            .unwrap_or(Value::String(val.geo_json.clone()));
        GetItem {
            id: val.id,
            name: val.name,
            geo_json,
        }
    }
}

#[get("")]
pub async fn get(pool: Data<Pool>) -> Res<Vec<GetItem>> {
    let zones = db::zone::queries::select(false, None, &pool).await?;
    Ok(Json(zones.into_iter().map(Into::into).collect()))
}

#[derive(Deserialize)]
pub struct PostArgs {
    pub name: String,
    pub geo_json: Value,
}

#[post("")]
pub async fn post(req: HttpRequest, args: Json<PostArgs>, pool: Data<Pool>) -> Res<GetItem> {
    service::admin::check(rest::bearer(&req), "zones_add", &pool).await?;
    let args = args.into_inner();
    let geo_json = match &args.geo_json {
        Value::String(it) => it.clone(),
        other => serde_json::to_string(other)
            .map_err(|_| RestApiError::invalid_input("Invalid geo_json"))?,
    };
    let zone = service::zone::insert(args.name, geo_json, &pool).await?;
    Ok(Json(zone.into()))
}

#[delete("{id}")]
pub async fn delete_by_id(req: HttpRequest, id: Path<i64>, pool: Data<Pool>) -> Res<GetItem> {
    service::admin::check(rest::bearer(&req), "zones_remove", &pool).await?;
    let zone = service::zone::soft_delete(id.into_inner(), &pool).await?;
    Ok(Json(zone.into()))
}
