use log::info;
use sqlx::any::{AnyArguments, AnyPoolOptions, install_default_drivers};
use sqlx::pool::PoolConnection;
use sqlx::query::Query;
use sqlx::{Any, AnyPool};
use thiserror::Error;

use crate::utils::config::DatabaseConfig;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Unsupported database URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("Failed to connect to the database: {0}")]
    ConnectionError(#[from] sqlx::Error),
}

/// The SQL dialects the service knows how to bootstrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    MySql,
    Sqlite,
}

impl Backend {
    pub fn from_url(url: &str) -> Result<Self, GatewayError> {
        let scheme = url.split(':').next().unwrap_or_default();
        match scheme {
            "mysql" | "mariadb" => Ok(Backend::MySql),
            "sqlite" => Ok(Backend::Sqlite),
            other => Err(GatewayError::UnsupportedScheme(other.to_string())),
        }
    }

    // Read on the inserting connection; both functions are per-connection.
    fn last_insert_id_sql(self) -> &'static str {
        match self {
            Backend::MySql => "SELECT CAST(LAST_INSERT_ID() AS SIGNED)",
            Backend::Sqlite => "SELECT last_insert_rowid()",
        }
    }

    fn schema(self) -> &'static [&'static str] {
        match self {
            Backend::MySql => &[
                "CREATE TABLE IF NOT EXISTS posts (
                    id BIGINT AUTO_INCREMENT PRIMARY KEY,
                    title VARCHAR(255) NOT NULL,
                    content TEXT NOT NULL,
                    author VARCHAR(255) NOT NULL,
                    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
                )",
                "CREATE TABLE IF NOT EXISTS todos (
                    id BIGINT AUTO_INCREMENT PRIMARY KEY,
                    title VARCHAR(255) NOT NULL,
                    completed BOOLEAN NOT NULL DEFAULT FALSE
                )",
            ],
            Backend::Sqlite => &[
                "CREATE TABLE IF NOT EXISTS posts (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    title TEXT NOT NULL,
                    content TEXT NOT NULL,
                    author TEXT NOT NULL,
                    created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
                )",
                "CREATE TABLE IF NOT EXISTS todos (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    title TEXT NOT NULL,
                    completed INTEGER NOT NULL DEFAULT 0
                )",
            ],
        }
    }
}

/// Owns the shared connection pool to the relational store.
///
/// Opened once at startup and cloned into every service; clones share the
/// same pool. Connections are established lazily on first use and reused
/// for the life of the process. Call [`Gateway::close`] on shutdown.
#[derive(Debug, Clone)]
pub struct Gateway {
    pool: AnyPool,
    backend: Backend,
}

impl Gateway {
    pub fn open(config: &DatabaseConfig) -> Result<Self, GatewayError> {
        install_default_drivers();

        let backend = Backend::from_url(&config.url)?;
        let mut options = AnyPoolOptions::new().max_connections(config.max_connections);

        // An in-memory SQLite database lives and dies with its connection.
        if backend == Backend::Sqlite && config.url.contains(":memory:") {
            options = options
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = options.connect_lazy(&config.url)?;
        info!("Database pool ready for {} ({backend:?})", config.redacted_url());

        Ok(Self { pool, backend })
    }

    pub(crate) fn pool(&self) -> &AnyPool {
        &self.pool
    }

    /// Hands out a live connection, opening one if the pool has none idle.
    pub async fn connect(&self) -> Result<PoolConnection<Any>, GatewayError> {
        Ok(self.pool.acquire().await?)
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Runs an `INSERT` and returns the id the store assigned to the new row.
    pub(crate) async fn insert<'q>(
        &self,
        query: Query<'q, Any, AnyArguments<'q>>,
    ) -> Result<i64, sqlx::Error> {
        let mut conn = self.pool.acquire().await?;
        query.execute(&mut *conn).await?;
        sqlx::query_scalar(self.backend.last_insert_id_sql())
            .fetch_one(&mut *conn)
            .await
    }

    /// Creates the `posts` and `todos` tables when they are missing.
    pub async fn ensure_schema(&self) -> Result<(), GatewayError> {
        for statement in self.backend.schema() {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        info!("Database schema is up to date");
        Ok(())
    }

    /// Round trip used by the diagnostics endpoint.
    pub async fn server_time(&self) -> Result<String, GatewayError> {
        let mut conn = self.connect().await?;
        let time: String = sqlx::query_scalar("SELECT CAST(CURRENT_TIMESTAMP AS CHAR) AS time")
            .fetch_one(&mut *conn)
            .await?;
        Ok(time)
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database pool closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_follows_url_scheme() {
        assert_eq!(
            Backend::from_url("mysql://root@localhost/blog").unwrap(),
            Backend::MySql
        );
        assert_eq!(
            Backend::from_url("mariadb://root@localhost/blog").unwrap(),
            Backend::MySql
        );
        assert_eq!(Backend::from_url("sqlite::memory:").unwrap(), Backend::Sqlite);
        assert!(matches!(
            Backend::from_url("postgres://localhost/blog"),
            Err(GatewayError::UnsupportedScheme(scheme)) if scheme == "postgres"
        ));
    }

    #[actix_web::test]
    async fn in_memory_gateway_answers_server_time() {
        let gateway = crate::database::test_gateway().await;
        let time = gateway.server_time().await.unwrap();
        assert!(!time.is_empty());
        gateway.close().await;
    }

    #[actix_web::test]
    async fn insert_reports_store_assigned_ids() {
        let gateway = crate::database::test_gateway().await;
        assert_eq!(gateway.backend(), Backend::Sqlite);

        let first = gateway
            .insert(sqlx::query::<Any>("INSERT INTO todos (title) VALUES (?)").bind("first"))
            .await
            .unwrap();
        let second = gateway
            .insert(sqlx::query::<Any>("INSERT INTO todos (title) VALUES (?)").bind("second"))
            .await
            .unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[actix_web::test]
    async fn ensure_schema_is_idempotent() {
        let gateway = crate::database::test_gateway().await;
        gateway.ensure_schema().await.unwrap();
    }
}
