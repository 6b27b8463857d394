use crate::todo::model::CreateTodoRequest;
use crate::todo::service::TodoService;
use crate::utils::error::CustomError;
use actix_web::{HttpResponse, web};

/// GET /todo
pub async fn list_todos(todo_service: web::Data<TodoService>) -> Result<HttpResponse, CustomError> {
    let todos = todo_service.list_todos().await?;
    Ok(HttpResponse::Ok().json(todos))
}

/// POST /todo
pub async fn create_todo(
    todo_service: web::Data<TodoService>,
    body: web::Json<CreateTodoRequest>,
) -> Result<HttpResponse, CustomError> {
    let todo = todo_service.add_todo(body.into_inner().title).await?;
    Ok(HttpResponse::Created().json(todo))
}
