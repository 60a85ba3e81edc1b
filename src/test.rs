use deadpool_sqlite::{Config, Hook, Pool, Runtime};
use rusqlite::Connection;
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn mock_conn() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    crate::db::migration::run(&mut conn).unwrap();
    conn
}

static MEM_DB_COUNTER: AtomicUsize = AtomicUsize::new(1);

// Every pool gets its own named in-memory database. cache=shared keeps the
// database alive as long as the pool holds its connection.
pub fn mock_pool() -> Pool {
    let uri = format!(
        "file:testdb_{}?mode=memory&cache=shared",
        MEM_DB_COUNTER.fetch_add(1, Ordering::Relaxed)
    );
    Config::new(uri)
        .builder(Runtime::Tokio1)
        .unwrap()
        .max_size(1)
        .post_create(Hook::Fn(Box::new(|conn, _| {
            let mut conn = conn.lock().unwrap();
            crate::db::migration::run(&mut conn).unwrap();
            Ok(())
        })))
        .build()
        .unwrap()
}
