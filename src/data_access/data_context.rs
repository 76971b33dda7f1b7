//! Connection pool and schema bootstrap for the SQLite database.

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError};
use diesel::sqlite::SqliteConnection;
use thiserror::Error;
use tracing::debug;

use crate::settings::DatabaseSettings;

/// Pool type shared by the repositories.
pub type SqlitePool = Pool<ConnectionManager<SqliteConnection>>;

const MEMORY_URL: &str = ":memory:";

/// Creates the `estatus` and `tareas` tables and seeds the status rows.
pub const CREATE_SCHEMA_SQL: &str =
    include_str!("../../migrations/2026-10-19-000000_create_tareas/up.sql");

#[derive(Debug, Error)]
pub enum DataContextError {
    #[error("connection pool error: {0}")]
    Pool(#[from] PoolError),
    #[error("database error: {0}")]
    Query(#[from] diesel::result::Error),
    #[error("blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Per-connection pragmas. SQLite keeps foreign keys off unless asked.
#[derive(Debug)]
struct ConnectionOptions {
    busy_timeout_ms: u32,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(&format!(
            "PRAGMA foreign_keys = ON; PRAGMA busy_timeout = {};",
            self.busy_timeout_ms
        ))
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

#[derive(Clone)]
pub struct DataContext {
    pool: SqlitePool,
}

impl DataContext {
    /// Opens the pool and applies the schema. Blocking; call before serving.
    pub fn new(settings: &DatabaseSettings) -> Result<Self, DataContextError> {
        let manager = ConnectionManager::<SqliteConnection>::new(settings.url.as_str());
        let mut builder = Pool::builder()
            .max_size(settings.pool_size)
            .connection_customizer(Box::new(ConnectionOptions {
                busy_timeout_ms: settings.busy_timeout_ms,
            }));
        // A recycled `:memory:` connection would come back as an empty database.
        if settings.url == MEMORY_URL {
            builder = builder.max_lifetime(None).idle_timeout(None);
        }
        let pool = builder.build(manager)?;

        let mut conn = pool.get()?;
        conn.batch_execute(CREATE_SCHEMA_SQL)?;
        debug!(url = %settings.url, pool_size = settings.pool_size, "schema applied");

        Ok(DataContext { pool })
    }

    pub fn pool(&self) -> SqlitePool {
        self.pool.clone()
    }

    /// Round-trips a trivial statement through a pooled connection.
    pub async fn ping(&self) -> Result<(), DataContextError> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> Result<(), DataContextError> {
            let mut conn = pool.get()?;
            conn.batch_execute("SELECT 1")?;
            Ok(())
        })
        .await?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::prelude::*;
    use diesel::sql_types::Integer;

    #[derive(QueryableByName)]
    struct Pragma {
        #[diesel(sql_type = Integer)]
        foreign_keys: i32,
    }

    fn memory() -> DatabaseSettings {
        DatabaseSettings {
            url: ":memory:".to_string(),
            pool_size: 1,
            busy_timeout_ms: 1000,
        }
    }

    #[test]
    fn schema_is_idempotent_and_seeds_statuses() {
        let context = DataContext::new(&memory()).unwrap();
        let mut conn = context.pool().get().unwrap();
        conn.batch_execute(CREATE_SCHEMA_SQL).unwrap();

        let count: i64 = crate::data_access::schema::estatus::table
            .count()
            .get_result(&mut conn)
            .unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn connections_enforce_foreign_keys() {
        let context = DataContext::new(&memory()).unwrap();
        let mut conn = context.pool().get().unwrap();

        let pragma: Pragma = diesel::sql_query("PRAGMA foreign_keys")
            .get_result(&mut conn)
            .unwrap();
        assert_eq!(pragma.foreign_keys, 1);
    }

    #[test]
    fn memory_connections_are_never_recycled() {
        let pool = DataContext::new(&memory()).unwrap().pool();

        assert_eq!(pool.max_lifetime(), None);
        assert_eq!(pool.idle_timeout(), None);
    }

    #[test]
    fn file_connections_keep_default_recycling() {
        let path = std::env::temp_dir().join(format!("tareas-{}.db", std::process::id()));
        let settings = DatabaseSettings {
            url: path.to_string_lossy().into_owned(),
            pool_size: 1,
            busy_timeout_ms: 1000,
        };

        let pool = DataContext::new(&settings).unwrap().pool();
        assert!(pool.max_lifetime().is_some());

        drop(pool);
        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn ping_succeeds_on_open_database() {
        let context = DataContext::new(&memory()).unwrap();

        assert!(context.ping().await.is_ok());
    }
}
