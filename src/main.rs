pub use error::ApiError;
pub use error::Error;
mod cities;
mod conf;
mod db;
mod error;
mod rest;
mod server;
mod service;
#[cfg(test)]
mod test;

use std::env;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[actix_web::main]
async fn main() -> Result<()> {
    init_logging();

    let mut conn = db::open_connection()?;

    db::migration::run(&mut conn)?;

    let args: Vec<String> = env::args().collect();

    let command = match args.get(1) {
        Some(some) => some,
        None => Err(Error::CLI("No actions passed".into()))?,
    };

    match command.as_str() {
        "server" => server::run().await?,
        "db" => db::run_command(&args[2..], conn)?,
        "seed-zones" => {
            let count = service::zone::seed_city_zones(&conn)?;
            info!(count, "Created city zones");
        }
        "add-admin" => {
            let name = args
                .get(2)
                .ok_or(Error::CLI("Admin name is missing".into()))?;
            let password = args
                .get(3)
                .ok_or(Error::CLI("Admin password is missing".into()))?;
            let admin = service::admin::add(name, password, &conn)?;
            info!(admin.id, admin.name, "Created admin");
        }
        first_arg => Err(Error::CLI(format!("Unknown command: {first_arg}")))?,
    }

    Ok(())
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
