use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, get, web};
use log::error;
use serde_json::json;

use crate::database::Gateway;
use crate::utils::helpers::service_name;

#[get("/")]
pub async fn default() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Welcome to the blog and todo API",
        "httpStatusCode": StatusCode::OK.as_u16(),
        "service": service_name(),
    }))
}

/// GET /hello
pub async fn hello() -> impl Responder {
    HttpResponse::Ok().json(json!({ "message": "Hello from the blog API!" }))
}

/// GET /dbtest
///
/// Asks the store for its clock to prove the connection works end to end.
pub async fn db_test(gateway: web::Data<Gateway>) -> impl Responder {
    match gateway.server_time().await {
        Ok(server_time) => HttpResponse::Ok().json(json!({
            "success": true,
            "serverTime": server_time,
        })),
        Err(e) => {
            error!("Database check failed: {e}");
            HttpResponse::InternalServerError().json(json!({
                "success": false,
                "error": "Database connection failed",
            }))
        }
    }
}
