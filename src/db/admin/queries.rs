use super::schema::Admin;
use crate::{db::admin::blocking_queries, Result};
use deadpool_sqlite::Pool;

pub async fn select_all(pool: &Pool) -> Result<Vec<Admin>> {
    pool.get()
        .await?
        .interact(|conn| blocking_queries::select_all(conn))
        .await?
}

pub async fn set_roles(id: i64, roles: Vec<String>, pool: &Pool) -> Result<Admin> {
    pool.get()
        .await?
        .interact(move |conn| blocking_queries::set_roles(id, &roles, conn))
        .await?
}
