use crate::post::post_model::{PostRequest, SuccessResponse};
use crate::post::post_service::PostService;
use crate::utils::error::CustomError;
use actix_web::{HttpResponse, web};

/// GET /posts
pub async fn list_posts(post_service: web::Data<PostService>) -> Result<HttpResponse, CustomError> {
    let posts = post_service.list_posts().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /posts/{id}
pub async fn get_post(
    post_id: web::Path<i64>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, CustomError> {
    let post = post_service.get_post(post_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// POST /posts
pub async fn create_post(
    post_service: web::Data<PostService>,
    body: web::Json<PostRequest>,
) -> Result<HttpResponse, CustomError> {
    let created = post_service.create_post(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

/// PUT /posts/{id}
pub async fn update_post(
    post_id: web::Path<i64>,
    post_service: web::Data<PostService>,
    body: web::Json<PostRequest>,
) -> Result<HttpResponse, CustomError> {
    post_service
        .update_post(post_id.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(SuccessResponse::OK))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    post_id: web::Path<i64>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, CustomError> {
    post_service.delete_post(post_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(SuccessResponse::OK))
}
