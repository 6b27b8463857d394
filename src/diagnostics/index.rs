use super::controller::{db_test, hello};
use actix_web::web;

pub fn diagnostics_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/hello", web::get().to(hello))
        .route("/dbtest", web::get().to(db_test));
}
