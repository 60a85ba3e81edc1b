use super::schema;
use super::schema::Admin;
use super::schema::Columns;
use crate::Result;
use rusqlite::{params, Connection};

pub fn insert(name: impl Into<String>, password: impl Into<String>, conn: &Connection) -> Result<Admin> {
    let sql = format!(
        r#"
            INSERT INTO {table} ({name}, {password})
            VALUES (?1, ?2)
            RETURNING {projection}
        "#,
        table = schema::TABLE_NAME,
        name = Columns::Name.as_str(),
        password = Columns::Password.as_str(),
        projection = Admin::projection(),
    );
    conn.query_row(&sql, params![name.into(), password.into()], Admin::mapper())
        .map_err(Into::into)
}

pub fn select_all(conn: &Connection) -> Result<Vec<Admin>> {
    let sql = format!(
        r#"
            SELECT {projection}
            FROM {table}
        "#,
        projection = Admin::projection(),
        table = schema::TABLE_NAME,
    );
    conn.prepare(&sql)?
        .query_map({}, Admin::mapper())?
        .collect::<Result<Vec<_>, _>>()
        .map_err(Into::into)
}

pub fn set_roles(id: i64, roles: &[String], conn: &Connection) -> Result<Admin> {
    let sql = format!(
        r#"
            UPDATE {table}
            SET {roles} = json(?2)
            WHERE {id} = ?1
        "#,
        table = schema::TABLE_NAME,
        roles = Columns::Roles.as_str(),
        id = Columns::Id.as_str(),
    );
    conn.execute(&sql, params![id, serde_json::to_string(roles)?])?;
    select_by_id(id, conn)
}

pub fn select_by_id(id: i64, conn: &Connection) -> Result<Admin> {
    let sql = format!(
        r#"
            SELECT {projection}
            FROM {table}
            WHERE {id} = ?1
        "#,
        projection = Admin::projection(),
        table = schema::TABLE_NAME,
        id = Columns::Id.as_str(),
    );
    conn.query_row(&sql, params![id], Admin::mapper())
        .map_err(Into::into)
}
