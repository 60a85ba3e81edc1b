use crate::{
    db::{
        self,
        order::schema::{Order, OrderStatus},
        product::schema::Product,
    },
    service::geofence::{self, GeoPoint},
    Error, Result,
};
use deadpool_sqlite::Pool;
use rusqlite::Connection;
use tracing::info;

pub struct NewOrderItem {
    pub product_id: i64,
    pub quantity: i64,
}

pub struct NewOrder {
    pub delivery_location_id: i64,
    pub items: Vec<NewOrderItem>,
}

pub async fn create(new_order: NewOrder, pool: &Pool) -> Result<Order> {
    pool.get()
        .await?
        .interact(move |conn| create_blocking(new_order, conn))
        .await?
}

// The whole checkout is one transaction: location check, stock check, zone
// membership, the order row and its items, and the stock decrements either
// all land or none do.
//
// An order placed outside every service zone is still created, flagged with
// the Outside Zone status so staff can follow up, and the membership verdict
// is kept on the order row as an audit trail.
pub fn create_blocking(new_order: NewOrder, conn: &mut Connection) -> Result<Order> {
    if new_order.items.is_empty() {
        return Err(Error::InvalidInput("Order contains no items".into()));
    }
    let tx = conn.transaction()?;
    let location =
        db::delivery_location::blocking_queries::select_by_id(new_order.delivery_location_id, &tx)
            .map_err(|_| {
                Error::InvalidInput(format!(
                    "Invalid delivery location: {}",
                    new_order.delivery_location_id
                ))
            })?;
    if location.deleted_at.is_some() {
        return Err(Error::InvalidInput(format!(
            "Delivery location was removed: {}",
            location.id
        )));
    }
    let point = GeoPoint::new(location.lat, location.lon)?;
    let zones = db::zone::blocking_queries::select(false, None, &tx)?;
    let membership = geofence::point_in_any_zone(&point, &zones);
    let mut total_cents = 0;
    let mut priced_items: Vec<(Product, i64)> = vec![];
    for item in &new_order.items {
        if item.quantity <= 0 {
            return Err(Error::InvalidInput(format!(
                "Invalid quantity for product {}",
                item.product_id
            )));
        }
        let product = db::product::blocking_queries::select_by_id(item.product_id, &tx)
            .map_err(|_| Error::InvalidInput(format!("Product does not exist: {}", item.product_id)))?;
        if product.deleted_at.is_some() {
            return Err(Error::InvalidInput(format!(
                "Product is no longer available: {}",
                product.name
            )));
        }
        if product.stock < item.quantity {
            return Err(Error::HttpConflict(format!(
                "Insufficient stock for {}: available {}, requested {}",
                product.name, product.stock, item.quantity
            )));
        }
        total_cents += product.price_cents * item.quantity;
        priced_items.push((product, item.quantity));
    }
    let status = if membership.inside_any_zone {
        OrderStatus::PendingCall
    } else {
        OrderStatus::OutsideZone
    };
    let order = db::order::blocking_queries::insert(
        location.id,
        status,
        total_cents,
        membership.inside_any_zone,
        membership.matched_zone_name.clone(),
        &tx,
    )?;
    for (product, quantity) in priced_items {
        db::order_item::blocking_queries::insert(
            order.id,
            product.id,
            &product.name,
            quantity,
            product.price_cents,
            &tx,
        )?;
        db::product::blocking_queries::decrement_stock(product.id, quantity, &tx)?;
    }
    tx.commit()?;
    info!(
        order.id,
        order.uuid,
        inside_zone = membership.inside_any_zone,
        zones_evaluated = membership.zones_evaluated,
        "Created order"
    );
    Ok(order)
}
