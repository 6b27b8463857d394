use std::env;
use thiserror::Error;
use url::Url;

const DEFAULT_SQLITE_URL: &str = "sqlite://blog.db?mode=rwc";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a valid number, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },

    #[error("{name} cannot be used in a database URL: {value:?}")]
    InvalidUrlPart { name: &'static str, value: String },
}

/// Where the relational store lives and how many pooled connections to keep.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// The connection URL with any password masked, safe for logs.
    pub fn redacted_url(&self) -> String {
        match Url::parse(&self.url) {
            Ok(mut url) => {
                if url.password().is_some() && url.set_password(Some("****")).is_err() {
                    return "<unprintable database url>".to_string();
                }
                url.to_string()
            }
            Err(_) => "<unprintable database url>".to_string(),
        }
    }
}

/// Server settings, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_number(&lookup, "PORT", 8000)?,
            database: DatabaseConfig {
                url: database_url(&lookup)?,
                max_connections: parse_number(&lookup, "DB_MAX_CONNECTIONS", 10)?,
            },
        })
    }
}

fn parse_number<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
        None => Ok(default),
    }
}

// DATABASE_URL wins; otherwise DB_HOST and friends describe a MySQL server.
fn database_url<F>(lookup: &F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("DATABASE_URL") {
        return Ok(url);
    }

    let Some(host) = lookup("DB_HOST") else {
        return Ok(DEFAULT_SQLITE_URL.to_string());
    };
    let port: u16 = parse_number(lookup, "DB_PORT", 3306)?;
    let user = lookup("DB_USER").unwrap_or_else(|| "root".to_string());
    let name = lookup("DB_NAME").unwrap_or_else(|| "blog".to_string());
    let password = lookup("DB_PASSWORD").filter(|p| !p.is_empty());

    let invalid = |part: &'static str, value: &str| ConfigError::InvalidUrlPart {
        name: part,
        value: value.to_string(),
    };

    let mut url = Url::parse("mysql://localhost/").map_err(|_| invalid("DB_HOST", &host))?;
    url.set_host(Some(&host)).map_err(|_| invalid("DB_HOST", &host))?;
    url.set_port(Some(port)).map_err(|_| invalid("DB_PORT", &port.to_string()))?;
    url.set_username(&user).map_err(|_| invalid("DB_USER", &user))?;
    url.set_password(password.as_deref())
        .map_err(|_| invalid("DB_PASSWORD", "****"))?;
    url.path_segments_mut()
        .map_err(|_| invalid("DB_NAME", &name))?
        .clear()
        .push(&name);

    Ok(url.to_string())
}
