pub mod admin;
pub mod delivery_location;
pub mod migration;
pub mod order;
pub mod order_item;
pub mod product;
pub mod zone;

use crate::{service::filesystem::data_dir_file_path, Result};
use deadpool_sqlite::{Config, Pool, Runtime};
use rusqlite::Connection;
use std::fs::remove_file;
use tracing::info;

const DB_FILE_NAME: &str = "merkato.db";

pub fn open_connection() -> Result<Connection> {
    Ok(Connection::open(data_dir_file_path(DB_FILE_NAME)?)?)
}

pub fn pool() -> Result<Pool> {
    Ok(Config::new(data_dir_file_path(DB_FILE_NAME)?)
        .builder(Runtime::Tokio1)?
        .build()?)
}

pub fn run_command(args: &[String], conn: Connection) -> Result<()> {
    match args.first() {
        Some(first_arg) => match first_arg.as_str() {
            "migrate" => info!("Database schema is already migrated on startup"),
            "drop" => drop_db(conn)?,
            _ => Err(crate::Error::CLI(format!("Unknown db action: {first_arg}")))?,
        },
        None => Err(crate::Error::CLI("No db actions passed".into()))?,
    }
    Ok(())
}

fn drop_db(conn: Connection) -> Result<()> {
    let Some(path) = conn.path().map(|it| it.to_owned()) else {
        Err("Database has no file path")?
    };
    drop(conn);
    if path.is_empty() {
        Err("Database has no file path")?
    }
    remove_file(&path)?;
    info!(path, "Removed database file");
    Ok(())
}
