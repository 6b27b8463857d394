use super::controller::{create_todo, list_todos};
use super::model::TITLE_REQUIRED;
use crate::middleware::error_handler::json_config;
use actix_web::web;

pub fn todo_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/todo")
            .app_data(json_config(TITLE_REQUIRED))
            .route("", web::get().to(list_todos))
            .route("", web::post().to(create_todo)),
    );
}
