use super::post_controller::{create_post, delete_post, get_post, list_posts, update_post};
use super::post_model::FIELDS_REQUIRED;
use crate::middleware::error_handler::{json_config, path_config};
use actix_web::web;

pub fn post_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/posts")
            .app_data(json_config(FIELDS_REQUIRED))
            .app_data(path_config("Post not found"))
            .route("", web::get().to(list_posts))
            .route("", web::post().to(create_post))
            .route("/{id}", web::get().to(get_post))
            .route("/{id}", web::put().to(update_post))
            .route("/{id}", web::delete().to(delete_post)),
    );
}
