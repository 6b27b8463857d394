mod db;

pub use db::{Backend, Gateway, GatewayError};

/// Fresh in-memory store with the schema applied.
#[cfg(test)]
pub(crate) async fn test_gateway() -> Gateway {
    let config = crate::utils::config::DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
    };
    let gateway = Gateway::open(&config).expect("in-memory gateway");
    gateway.ensure_schema().await.expect("schema");
    gateway
}
