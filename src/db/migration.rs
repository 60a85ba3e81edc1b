use crate::Result;
use include_dir::include_dir;
use include_dir::Dir;
use rusqlite::Connection;
use tracing::info;
use tracing::warn;

static MIGRATIONS_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/migrations");

struct Migration {
    version: i16,
    sql: String,
}

pub fn run(db: &mut Connection) -> Result<()> {
    execute(&load_migrations()?, db)
}

// Migrations are embedded as 1.sql, 2.sql, ... and applied in order. The
// current schema version lives in PRAGMA user_version.
fn load_migrations() -> Result<Vec<Migration>> {
    let mut res = vec![];
    for version in 1i16.. {
        let Some(file) = MIGRATIONS_DIR.get_file(format!("{version}.sql")) else {
            break;
        };
        let sql = file
            .contents_utf8()
            .ok_or(format!("Migration {version} is not valid UTF-8"))?;
        res.push(Migration {
            version,
            sql: sql.into(),
        });
    }
    Ok(res)
}

fn execute(migrations: &[Migration], db: &mut Connection) -> Result<()> {
    let mut schema_ver: i16 =
        db.query_row("SELECT user_version FROM pragma_user_version", [], |row| {
            row.get(0)
        })?;

    for migration in migrations.iter() {
        if migration.version <= schema_ver {
            continue;
        }
        warn!(migration.version, "Applying migration");
        let tx = db.transaction()?;
        tx.execute_batch(&migration.sql)?;
        tx.execute_batch(&format!("PRAGMA user_version={}", migration.version))?;
        tx.commit()?;
        schema_ver = migration.version;
    }

    info!(schema_ver, "Database schema is up to date");

    Ok(())
}

#[cfg(test)]
pub mod test {
    use super::Migration;
    use crate::Result;
    use rusqlite::Connection;

    #[test]
    fn execute() -> Result<()> {
        let mut conn = Connection::open_in_memory()?;
        let mut migrations = vec![Migration {
            version: 1,
            sql: "CREATE TABLE foo(bar);".into(),
        }];
        super::execute(&migrations, &mut conn)?;
        assert_eq!(1, schema_version(&conn)?);
        migrations.push(Migration {
            version: 2,
            sql: "INSERT INTO foo (bar) VALUES ('qwerty');".into(),
        });
        super::execute(&migrations, &mut conn)?;
        assert_eq!(2, schema_version(&conn)?);
        // a rerun must be a no-op
        super::execute(&migrations, &mut conn)?;
        assert_eq!(2, schema_version(&conn)?);
        Ok(())
    }

    fn schema_version(conn: &Connection) -> Result<i16> {
        Ok(
            conn.query_row("SELECT user_version FROM pragma_user_version", [], |row| {
                row.get(0)
            })?,
        )
    }
}
