use crate::db;
use crate::db::order::schema::Order;
use crate::db::order::schema::OrderStatus;
use crate::db::order_item::schema::OrderItem;
use crate::rest;
use crate::rest::error::RestApiError;
use crate::rest::error::RestResult as Res;
use crate::service;
use crate::service::order::{NewOrder, NewOrderItem};
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
use time::OffsetDateTime;

#[derive(Serialize, Deserialize)]
pub struct GetItem {
    pub id: i64,
    pub uuid: String,
    pub status: String,
    pub total_cents: i64,
    pub inside_zone: bool,
    pub matched_zone_name: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<Order> for GetItem {
    fn from(val: Order) -> Self {
        GetItem {
            id: val.id,
            uuid: val.uuid,
            status: val.status.to_string(),
            total_cents: val.total_cents,
            inside_zone: val.inside_zone,
            matched_zone_name: val.matched_zone_name,
            created_at: val.created_at,
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct GetItemLine {
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i64,
    pub price_cents: i64,
}

impl From<OrderItem> for GetItemLine {
    fn from(val: OrderItem) -> Self {
        GetItemLine {
            product_id: val.product_id,
            product_name: val.product_name,
            quantity: val.quantity,
            price_cents: val.price_cents,
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct GetDetails {
    #[serde(flatten)]
    pub order: GetItem,
    pub items: Vec<GetItemLine>,
}

#[derive(Deserialize)]
pub struct PostArgsItem {
    pub product_id: i64,
    pub quantity: i64,
}

#[derive(Deserialize)]
pub struct PostArgs {
    pub delivery_location_id: i64,
    pub items: Vec<PostArgsItem>,
}

#[post("")]
pub async fn post(args: Json<PostArgs>, pool: Data<Pool>) -> Res<GetItem> {
    let args = args.into_inner();
    let order = service::order::create(
        NewOrder {
            delivery_location_id: args.delivery_location_id,
            items: args
                .items
                .into_iter()
                .map(|it| NewOrderItem {
                    product_id: it.product_id,
                    quantity: it.quantity,
                })
                .collect(),
        },
        &pool,
    )
    .await?;
    Ok(Json(order.into()))
}

#[get("")]
pub async fn get(req: HttpRequest, pool: Data<Pool>) -> Res<Vec<GetItem>> {
    service::admin::check(rest::bearer(&req), "orders_list", &pool).await?;
    let orders = db::order::queries::select(None, &pool).await?;
    Ok(Json(orders.into_iter().map(Into::into).collect()))
}

// Customers look their order up by its reference code, not by row id
#[get("{uuid}")]
pub async fn get_by_uuid(uuid: Path<String>, pool: Data<Pool>) -> Res<GetDetails> {
    let order = db::order::queries::select_by_uuid(uuid.into_inner(), &pool)
        .await?
        .ok_or(RestApiError::not_found())?;
    let items = db::order_item::queries::select_by_order_id(order.id, &pool).await?;
    Ok(Json(GetDetails {
        order: order.into(),
        items: items.into_iter().map(Into::into).collect(),
    }))
}

#[derive(Deserialize)]
pub struct PatchArgs {
    pub status: String,
}

#[patch("{id}")]
pub async fn patch_by_id(
    req: HttpRequest,
    id: Path<i64>,
    args: Json<PatchArgs>,
    pool: Data<Pool>,
) -> Res<GetItem> {
    service::admin::check(rest::bearer(&req), "orders_edit", &pool).await?;
    let status: OrderStatus = args
        .status
        .parse()
        .map_err(|_| RestApiError::invalid_input(format!("Unknown status: {}", args.status)))?;
    let order = db::order::queries::set_status(id.into_inner(), status, &pool).await?;
    Ok(Json(order.into()))
}

#[cfg(test)]
mod test {
    use super::{GetDetails, GetItem};
    use crate::db::zone::schema::Zone;
    use crate::test::mock_pool;
    use crate::{db, service, Result};
    use actix_web::test::TestRequest;
    use actix_web::web::{scope, Data};
    use actix_web::{test, App};
    use serde_json::json;

    #[actix_web::test]
    async fn post() -> Result<()> {
        let pool = mock_pool();
        service::zone::insert("Addis Ababa", Zone::mock_geo_json(), &pool).await?;
        let product = db::product::queries::insert("Coffee 500g", 150, 10, &pool).await?;
        let location = db::delivery_location::queries::insert(
            "Abebe Bikila",
            "+251911000000",
            9.03,
            38.75,
            &pool,
        )
        .await?;
        let app = test::init_service(
            App::new()
                .app_data(Data::new(pool))
                .service(scope("/").service(super::post)),
        )
        .await;
        let req = TestRequest::post()
            .uri("/")
            .set_json(json!({
                "delivery_location_id": location.id,
                "items": [{ "product_id": product.id, "quantity": 2 }],
            }))
            .to_request();
        let res: GetItem = test::call_and_read_body_json(&app, req).await;
        assert_eq!("Pending Call", res.status);
        assert!(res.inside_zone);
        assert_eq!(300, res.total_cents);
        Ok(())
    }

    #[actix_web::test]
    async fn post_outside_zone() -> Result<()> {
        let pool = mock_pool();
        service::zone::insert("Addis Ababa", Zone::mock_geo_json(), &pool).await?;
        let product = db::product::queries::insert("Coffee 500g", 150, 10, &pool).await?;
        let location = db::delivery_location::queries::insert(
            "Abebe Bikila",
            "+251911000000",
            7.06,
            38.48,
            &pool,
        )
        .await?;
        let app = test::init_service(
            App::new()
                .app_data(Data::new(pool))
                .service(scope("/").service(super::post)),
        )
        .await;
        let req = TestRequest::post()
            .uri("/")
            .set_json(json!({
                "delivery_location_id": location.id,
                "items": [{ "product_id": product.id, "quantity": 1 }],
            }))
            .to_request();
        let res: GetItem = test::call_and_read_body_json(&app, req).await;
        assert_eq!("Outside Zone", res.status);
        assert!(!res.inside_zone);
        Ok(())
    }

    #[actix_web::test]
    async fn post_insufficient_stock() -> Result<()> {
        let pool = mock_pool();
        let product = db::product::queries::insert("Coffee 500g", 150, 1, &pool).await?;
        let location = db::delivery_location::queries::insert(
            "Abebe Bikila",
            "+251911000000",
            9.03,
            38.75,
            &pool,
        )
        .await?;
        let app = test::init_service(
            App::new()
                .app_data(Data::new(pool))
                .service(scope("/").service(super::post)),
        )
        .await;
        let req = TestRequest::post()
            .uri("/")
            .set_json(json!({
                "delivery_location_id": location.id,
                "items": [{ "product_id": product.id, "quantity": 5 }],
            }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(409, res.status().as_u16());
        Ok(())
    }

    #[actix_web::test]
    async fn get_by_uuid() -> Result<()> {
        let pool = mock_pool();
        let product = db::product::queries::insert("Coffee 500g", 150, 10, &pool).await?;
        let location = db::delivery_location::queries::insert(
            "Abebe Bikila",
            "+251911000000",
            9.03,
            38.75,
            &pool,
        )
        .await?;
        let order = service::order::create(
            crate::service::order::NewOrder {
                delivery_location_id: location.id,
                items: vec![crate::service::order::NewOrderItem {
                    product_id: product.id,
                    quantity: 2,
                }],
            },
            &pool,
        )
        .await?;
        let app = test::init_service(
            App::new()
                .app_data(Data::new(pool))
                .service(super::get_by_uuid),
        )
        .await;
        let req = TestRequest::get().uri(&format!("/{}", order.uuid)).to_request();
        let res: GetDetails = test::call_and_read_body_json(&app, req).await;
        assert_eq!(order.uuid, res.order.uuid);
        assert_eq!(1, res.items.len());
        assert_eq!("Coffee 500g", res.items[0].product_name);
        Ok(())
    }

    #[actix_web::test]
    async fn get_requires_password() -> Result<()> {
        let pool = mock_pool();
        let app = test::init_service(
            App::new()
                .app_data(Data::new(pool))
                .service(scope("/").service(super::get)),
        )
        .await;
        let req = TestRequest::get().uri("/").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(401, res.status().as_u16());
        Ok(())
    }

    #[actix_web::test]
    async fn patch_by_id() -> Result<()> {
        let pool = mock_pool();
        service::admin::add_async("meron", "pwd", &pool).await?;
        let product = db::product::queries::insert("Coffee 500g", 150, 10, &pool).await?;
        let location = db::delivery_location::queries::insert(
            "Abebe Bikila",
            "+251911000000",
            9.03,
            38.75,
            &pool,
        )
        .await?;
        let order = service::order::create(
            crate::service::order::NewOrder {
                delivery_location_id: location.id,
                items: vec![crate::service::order::NewOrderItem {
                    product_id: product.id,
                    quantity: 1,
                }],
            },
            &pool,
        )
        .await?;
        let app = test::init_service(
            App::new()
                .app_data(Data::new(pool))
                .service(super::patch_by_id),
        )
        .await;
        let req = TestRequest::patch()
            .uri(&format!("/{}", order.id))
            .insert_header(("Authorization", "Bearer pwd"))
            .set_json(json!({ "status": "Confirmed" }))
            .to_request();
        let res: GetItem = test::call_and_read_body_json(&app, req).await;
        assert_eq!("Confirmed", res.status);
        let req = TestRequest::patch()
            .uri(&format!("/{}", order.id))
            .insert_header(("Authorization", "Bearer pwd"))
            .set_json(json!({ "status": "Shipped" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(400, res.status().as_u16());
        Ok(())
    }
}
