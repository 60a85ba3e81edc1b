use super::schema;
use super::schema::Columns;
use super::schema::Product;
use crate::Result;
use rusqlite::{params, Connection};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

pub fn insert(
    name: impl Into<String>,
    price_cents: i64,
    stock: i64,
    conn: &Connection,
) -> Result<Product> {
    let sql = format!(
        r#"
            INSERT INTO {table} ({name}, {price_cents}, {stock})
            VALUES (?1, ?2, ?3)
            RETURNING {projection}
        "#,
        table = schema::TABLE_NAME,
        name = Columns::Name.as_str(),
        price_cents = Columns::PriceCents.as_str(),
        stock = Columns::Stock.as_str(),
        projection = Product::projection(),
    );
    conn.query_row(
        &sql,
        params![name.into(), price_cents, stock],
        Product::mapper(),
    )
    .map_err(Into::into)
}

pub fn select(include_deleted: bool, limit: Option<i64>, conn: &Connection) -> Result<Vec<Product>> {
    let include_deleted_sql = if include_deleted {
        "".into()
    } else {
        format!(
            "AND {deleted_at} IS NULL",
            deleted_at = Columns::DeletedAt.as_str()
        )
    };
    let sql = format!(
        r#"
            SELECT {projection}
            FROM {table}
            WHERE 1
            {include_deleted_sql}
            ORDER BY {id}
            LIMIT {limit}
        "#,
        projection = Product::projection(),
        table = schema::TABLE_NAME,
        id = Columns::Id.as_str(),
        limit = limit.unwrap_or(i64::MAX),
    );
    conn.prepare(&sql)?
        .query_map({}, Product::mapper())?
        .collect::<Result<Vec<_>, _>>()
        .map_err(Into::into)
}

pub fn select_by_id(id: i64, conn: &Connection) -> Result<Product> {
    let sql = format!(
        r#"
            SELECT {projection}
            FROM {table}
            WHERE {id} = ?1
        "#,
        projection = Product::projection(),
        table = schema::TABLE_NAME,
        id = Columns::Id.as_str(),
    );
    conn.query_row(&sql, params![id], Product::mapper())
        .map_err(Into::into)
}

pub fn set_name(id: i64, name: impl Into<String>, conn: &Connection) -> Result<Product> {
    let sql = format!(
        r#"
            UPDATE {table}
            SET {name} = ?2
            WHERE {id} = ?1
        "#,
        table = schema::TABLE_NAME,
        name = Columns::Name.as_str(),
        id = Columns::Id.as_str(),
    );
    conn.execute(&sql, params![id, name.into()])?;
    select_by_id(id, conn)
}

pub fn set_price_cents(id: i64, price_cents: i64, conn: &Connection) -> Result<Product> {
    let sql = format!(
        r#"
            UPDATE {table}
            SET {price_cents} = ?2
            WHERE {id} = ?1
        "#,
        table = schema::TABLE_NAME,
        price_cents = Columns::PriceCents.as_str(),
        id = Columns::Id.as_str(),
    );
    conn.execute(&sql, params![id, price_cents])?;
    select_by_id(id, conn)
}

pub fn set_stock(id: i64, stock: i64, conn: &Connection) -> Result<Product> {
    let sql = format!(
        r#"
            UPDATE {table}
            SET {stock} = ?2
            WHERE {id} = ?1
        "#,
        table = schema::TABLE_NAME,
        stock = Columns::Stock.as_str(),
        id = Columns::Id.as_str(),
    );
    conn.execute(&sql, params![id, stock])?;
    select_by_id(id, conn)
}

pub fn decrement_stock(id: i64, quantity: i64, conn: &Connection) -> Result<Product> {
    let sql = format!(
        r#"
            UPDATE {table}
            SET {stock} = {stock} - ?2
            WHERE {id} = ?1
        "#,
        table = schema::TABLE_NAME,
        stock = Columns::Stock.as_str(),
        id = Columns::Id.as_str(),
    );
    conn.execute(&sql, params![id, quantity])?;
    select_by_id(id, conn)
}

pub fn set_deleted_at(
    id: i64,
    deleted_at: Option<OffsetDateTime>,
    conn: &Connection,
) -> Result<Product> {
    match deleted_at {
        Some(deleted_at) => {
            let sql = format!(
                r#"
                    UPDATE {table}
                    SET {deleted_at} = ?2
                    WHERE {id} = ?1
                "#,
                table = schema::TABLE_NAME,
                deleted_at = Columns::DeletedAt.as_str(),
                id = Columns::Id.as_str(),
            );
            conn.execute(&sql, params![id, deleted_at.format(&Rfc3339)?])?;
        }
        None => {
            let sql = format!(
                r#"
                    UPDATE {table}
                    SET {deleted_at} = NULL
                    WHERE {id} = ?1
                "#,
                table = schema::TABLE_NAME,
                deleted_at = Columns::DeletedAt.as_str(),
                id = Columns::Id.as_str(),
            );
            conn.execute(&sql, params![id])?;
        }
    };
    select_by_id(id, conn)
}

#[cfg(test)]
mod test {
    use crate::db::test::conn;
    use crate::Result;
    use time::OffsetDateTime;

    #[test]
    fn insert() -> Result<()> {
        let conn = conn();
        let product = super::insert("Teff flour 1kg", 12_500, 40, &conn)?;
        assert_eq!("Teff flour 1kg", product.name);
        assert_eq!(12_500, product.price_cents);
        assert_eq!(40, product.stock);
        Ok(())
    }

    #[test]
    fn select() -> Result<()> {
        let conn = conn();
        super::insert("product_1", 100, 1, &conn)?;
        let product_2 = super::insert("product_2", 200, 2, &conn)?;
        super::set_deleted_at(product_2.id, Some(OffsetDateTime::now_utc()), &conn)?;
        assert_eq!(1, super::select(false, None, &conn)?.len());
        assert_eq!(2, super::select(true, None, &conn)?.len());
        Ok(())
    }

    #[test]
    fn set_price_cents() -> Result<()> {
        let conn = conn();
        let product = super::insert("product_1", 100, 1, &conn)?;
        let product = super::set_price_cents(product.id, 150, &conn)?;
        assert_eq!(150, product.price_cents);
        Ok(())
    }

    #[test]
    fn set_stock() -> Result<()> {
        let conn = conn();
        let product = super::insert("product_1", 100, 1, &conn)?;
        let product = super::set_stock(product.id, 10, &conn)?;
        assert_eq!(10, product.stock);
        Ok(())
    }

    #[test]
    fn decrement_stock() -> Result<()> {
        let conn = conn();
        let product = super::insert("product_1", 100, 10, &conn)?;
        let product = super::decrement_stock(product.id, 3, &conn)?;
        assert_eq!(7, product.stock);
        Ok(())
    }
}
