use crate::{
    db::{self, admin::schema::Admin},
    Error, Result,
};
use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use deadpool_sqlite::Pool;
use rusqlite::Connection;
use tracing::warn;

pub async fn check(
    password: impl Into<String>,
    action: impl Into<String>,
    pool: &Pool,
) -> Result<Admin> {
    let password = password.into();
    let action = action.into();
    let admins = db::admin::queries::select_all(pool).await?;
    for admin in admins {
        let Ok(hash) = PasswordHash::new(&admin.password) else {
            continue;
        };
        if Argon2::default()
            .verify_password(password.as_bytes(), &hash)
            .is_ok()
        {
            return if is_allowed(&action, &admin.roles) {
                Ok(admin)
            } else {
                warn!(admin.name, action, "Admin tried an action they can't perform");
                Err(Error::HttpUnauthorized(format!(
                    "{} can't perform action: {action}",
                    admin.name
                )))
            };
        }
    }
    Err(Error::HttpUnauthorized("Invalid password".into()))
}

pub fn add(name: &str, password: &str, conn: &Connection) -> Result<Admin> {
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| Error::Generic(e.to_string()))?
        .to_string();
    let admin = db::admin::blocking_queries::insert(name, password_hash, conn)?;
    // new admins start with full access, tighten via roles as needed
    db::admin::blocking_queries::set_roles(admin.id, &["all".into()], conn)
}

pub async fn add_async(
    name: impl Into<String>,
    password: impl Into<String>,
    pool: &Pool,
) -> Result<Admin> {
    let name = name.into();
    let password = password.into();
    pool.get()
        .await?
        .interact(move |conn| add(&name, &password, conn))
        .await?
}

fn is_allowed(action: &str, allowed_actions: &[String]) -> bool {
    (allowed_actions.len() == 1 && allowed_actions.first() == Some(&"all".into()))
        || allowed_actions.contains(&action.into())
}
