use crate::database::Gateway;
use crate::diagnostics::controller::default;
use crate::diagnostics::index::diagnostics_routes;
use crate::post::post_index::post_routes;
use crate::post::post_service::PostService;
use crate::todo::index::todo_routes;
use crate::todo::service::TodoService;
use actix_web::web;

/// Everything served under the `/api` base path.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(post_routes)
            .configure(todo_routes)
            .configure(diagnostics_routes),
    );
}

/// Shared state plus routes for one worker; every service borrows the same pool.
pub fn app_services(gateway: &Gateway) -> impl FnOnce(&mut web::ServiceConfig) + '_ {
    move |cfg| {
        cfg.app_data(web::Data::new(gateway.clone()))
            .app_data(web::Data::new(PostService::new(gateway)))
            .app_data(web::Data::new(TodoService::new(gateway)))
            .service(default)
            .configure(routes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_gateway;
    use crate::middleware::not_found::not_found;
    use actix_web::http::{StatusCode, header};
    use actix_web::middleware::ErrorHandlers;
    use actix_web::{App, test};
    use serde_json::{Value, json};

    macro_rules! app {
        () => {{
            let gateway = test_gateway().await;
            test::init_service(
                App::new()
                    .wrap(ErrorHandlers::new().handler(StatusCode::NOT_FOUND, not_found))
                    .configure(app_services(&gateway)),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn post_lifecycle_round_trip() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({"title": "Hi", "content": "World", "author": "Ann"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let created: Value = test::read_body_json(resp).await;
        assert_eq!(
            created,
            json!({"id": 1, "title": "Hi", "content": "World", "author": "Ann"})
        );

        let req = test::TestRequest::get().uri("/api/posts/1").to_request();
        let fetched: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched["id"], 1);
        assert_eq!(fetched["title"], "Hi");
        assert_eq!(fetched["content"], "World");
        assert_eq!(fetched["author"], "Ann");
        assert!(fetched["created_at"].is_string());

        let req = test::TestRequest::put()
            .uri("/api/posts/1")
            .set_json(json!({"title": "Hi2", "content": "World", "author": "Ann"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"success": true}));

        let req = test::TestRequest::get().uri("/api/posts/1").to_request();
        let fetched: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched["title"], "Hi2");

        let req = test::TestRequest::delete().uri("/api/posts/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"success": true}));

        let req = test::TestRequest::get().uri("/api/posts/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Post not found");
    }

    #[actix_web::test]
    async fn list_returns_newest_first() {
        let app = app!();
        for title in ["one", "two"] {
            let req = test::TestRequest::post()
                .uri("/api/posts")
                .set_json(json!({"title": title, "content": "c", "author": "a"}))
                .to_request();
            assert_eq!(
                test::call_service(&app, req).await.status(),
                StatusCode::CREATED
            );
        }

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let posts: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0]["title"], "two");
        assert_eq!(posts[1]["title"], "one");
    }

    #[actix_web::test]
    async fn create_with_missing_field_is_rejected() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({"title": "Hi", "content": "World"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "All fields are required");

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let posts: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert!(posts.is_empty());
    }

    #[actix_web::test]
    async fn malformed_body_is_a_validation_error() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(header::ContentType::json())
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "All fields are required");
    }

    #[actix_web::test]
    async fn update_with_empty_field_is_rejected() {
        let app = app!();
        let req = test::TestRequest::put()
            .uri("/api/posts/1")
            .set_json(json!({"title": "", "content": "World", "author": "Ann"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn update_and_delete_of_unknown_post_succeed() {
        let app = app!();
        let req = test::TestRequest::put()
            .uri("/api/posts/99")
            .set_json(json!({"title": "a", "content": "b", "author": "c"}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::delete().uri("/api/posts/99").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn non_numeric_id_is_not_found() {
        let app = app!();
        let req = test::TestRequest::get().uri("/api/posts/abc").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Post not found");
    }

    #[actix_web::test]
    async fn unknown_route_gets_json_404() {
        let app = app!();
        let req = test::TestRequest::get().uri("/api/nothing-here").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Route does not exist");
    }

    #[actix_web::test]
    async fn todos_can_be_added_and_listed() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/todo")
            .set_json(json!({"title": "water plants"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let todo: Value = test::read_body_json(resp).await;
        assert_eq!(
            todo,
            json!({"id": 1, "title": "water plants", "completed": false})
        );

        let req = test::TestRequest::get().uri("/api/todo").to_request();
        let todos: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(todos, vec![todo]);

        let req = test::TestRequest::post()
            .uri("/api/todo")
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Title is required");
    }

    #[actix_web::test]
    async fn diagnostics_respond() {
        let app = app!();

        let req = test::TestRequest::get().uri("/api/hello").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["message"], "Hello from the blog API!");

        let req = test::TestRequest::get().uri("/api/dbtest").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["success"], true);
        assert!(body["serverTime"].is_string());

        let req = test::TestRequest::get().uri("/").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["httpStatusCode"], 200);
    }

    #[actix_web::test]
    async fn dbtest_reports_closed_pool() {
        let gateway = test_gateway().await;
        let app = test::init_service(App::new().configure(app_services(&gateway))).await;
        gateway.close().await;

        let req = test::TestRequest::get().uri("/api/dbtest").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Database connection failed");
    }
}
