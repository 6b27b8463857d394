use actix_web::http::StatusCode;
use actix_web::middleware::{ErrorHandlers, Logger};
use actix_web::{App, HttpServer};
use dotenvy::dotenv;
use env_logger::Env;
use log::{error, info};

use blog_todo::database::Gateway;
use blog_todo::middleware::not_found::not_found;
use blog_todo::router::index::app_services;
use blog_todo::utils::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logger with environment variable support
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Invalid configuration: {e}");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    let gateway = Gateway::open(&config.database).map_err(|e| {
        error!("Failed to open database: {e}");
        std::io::Error::other(e)
    })?;
    gateway.ensure_schema().await.map_err(|e| {
        error!("Failed to prepare database schema: {e}");
        std::io::Error::other(e)
    })?;

    info!("Starting server on http://{}:{}", config.host, config.port);

    let server_gateway = gateway.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(app_services(&server_gateway))
            .wrap(ErrorHandlers::new().handler(StatusCode::NOT_FOUND, not_found))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    gateway.close().await;
    info!("Server has stopped");

    Ok(())
}
