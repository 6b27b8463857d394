use log::info;
use sqlx::{Any, FromRow};

use crate::database::Gateway;
use crate::todo::model::{TITLE_REQUIRED, Todo};
use crate::utils::error::{CustomError, store_error};
use crate::utils::helpers::filled;

#[derive(FromRow)]
struct TodoRow {
    id: i64,
    title: String,
    completed: i64,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Todo {
            id: row.id,
            title: row.title,
            completed: row.completed != 0,
        }
    }
}

#[derive(Clone)]
pub struct TodoService {
    gateway: Gateway,
}

impl TodoService {
    pub fn new(gateway: &Gateway) -> Self {
        TodoService {
            gateway: gateway.clone(),
        }
    }

    /// All todos, most recently added first
    pub async fn list_todos(&self) -> Result<Vec<Todo>, CustomError> {
        let rows: Vec<TodoRow> = sqlx::query_as(
            "SELECT id, title, CASE WHEN completed THEN 1 ELSE 0 END AS completed \
             FROM todos ORDER BY id DESC",
        )
        .fetch_all(self.gateway.pool())
        .await
        .map_err(store_error("Failed to fetch todos"))?;

        Ok(rows.into_iter().map(Todo::from).collect())
    }

    /// Add a todo; new todos always start out not completed
    pub async fn add_todo(&self, title: Option<String>) -> Result<Todo, CustomError> {
        let title =
            filled(title).ok_or_else(|| CustomError::ValidationError(TITLE_REQUIRED.into()))?;

        let insert =
            sqlx::query::<Any>("INSERT INTO todos (title) VALUES (?)").bind(title.as_str());
        let id = self
            .gateway
            .insert(insert)
            .await
            .map_err(store_error("Failed to add todo"))?;
        info!("Created todo {id}");

        Ok(Todo {
            id,
            title,
            completed: false,
        })
    }
}
