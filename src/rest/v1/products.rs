use crate::db;
use crate::db::product::schema::Product;
use crate::rest;
use crate::rest::error::RestApiError;
use crate::rest::error::RestResult as Res;
use crate::service;
use actix_web::delete;
use actix_web::get;
use actix_web::patch;
use actix_web::post;
use actix_web::web::Data;
use actix_web::web::Json;
use actix_web::web::Path;
use actix_web::HttpRequest;
use deadpool_sqlite::Pool;
use serde::Deserialize;
use serde::Serialize;

#[derive(Serialize, Deserialize)]
pub struct GetItem {
    pub id: i64,
    pub name: String,
    pub price_cents: i64,
    pub stock: i64,
}

impl From<Product> for GetItem {
    fn from(val: Product) -> Self {
        GetItem {
            id: val.id,
            name: val.name,
            price_cents: val.price_cents,
            stock: val.stock,
        }
    }
}

#[get("")]
pub async fn get(pool: Data<Pool>) -> Res<Vec<GetItem>> {
    let products = db::product::queries::select(false, None, &pool).await?;
    Ok(Json(products.into_iter().map(Into::into).collect()))
}

#[get("{id}")]
pub async fn get_by_id(id: Path<i64>, pool: Data<Pool>) -> Res<GetItem> {
    let product = db::product::queries::select_by_id(id.into_inner(), &pool).await?;
    if product.deleted_at.is_some() {
        return Err(RestApiError::not_found());
    }
    Ok(Json(product.into()))
}

#[derive(Deserialize)]
pub struct PostArgs {
    pub name: String,
    pub price_cents: i64,
    #[serde(default)]
    pub stock: i64,
}

#[post("")]
pub async fn post(req: HttpRequest, args: Json<PostArgs>, pool: Data<Pool>) -> Res<GetItem> {
    service::admin::check(rest::bearer(&req), "products_add", &pool).await?;
    if args.price_cents <= 0 {
        return Err(RestApiError::invalid_input("Price must be positive"));
    }
    if args.stock < 0 {
        return Err(RestApiError::invalid_input("Stock can't be negative"));
    }
    let product =
        db::product::queries::insert(args.name.clone(), args.price_cents, args.stock, &pool)
            .await?;
    Ok(Json(product.into()))
}

#[derive(Deserialize)]
pub struct PatchArgs {
    pub name: Option<String>,
    pub price_cents: Option<i64>,
    pub stock: Option<i64>,
}

#[patch("{id}")]
pub async fn patch_by_id(
    req: HttpRequest,
    id: Path<i64>,
    args: Json<PatchArgs>,
    pool: Data<Pool>,
) -> Res<GetItem> {
    service::admin::check(rest::bearer(&req), "products_edit", &pool).await?;
    let id = id.into_inner();
    let mut product = db::product::queries::select_by_id(id, &pool).await?;
    if let Some(name) = &args.name {
        product = db::product::queries::set_name(id, name.clone(), &pool).await?;
    }
    if let Some(price_cents) = args.price_cents {
        if price_cents <= 0 {
            return Err(RestApiError::invalid_input("Price must be positive"));
        }
        product = db::product::queries::set_price_cents(id, price_cents, &pool).await?;
    }
    if let Some(stock) = args.stock {
        if stock < 0 {
            return Err(RestApiError::invalid_input("Stock can't be negative"));
        }
        product = db::product::queries::set_stock(id, stock, &pool).await?;
    }
    Ok(Json(product.into()))
}

#[delete("{id}")]
pub async fn delete_by_id(req: HttpRequest, id: Path<i64>, pool: Data<Pool>) -> Res<GetItem> {
    service::admin::check(rest::bearer(&req), "products_remove", &pool).await?;
    let product = db::product::queries::set_deleted_at(
        id.into_inner(),
        Some(time::OffsetDateTime::now_utc()),
        &pool,
    )
    .await?;
    Ok(Json(product.into()))
}
