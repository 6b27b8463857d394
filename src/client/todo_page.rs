use log::warn;

use crate::client::api::TodoApi;
use crate::todo::model::{CreateTodoRequest, Todo};

/// The todo list view: the fetched todos plus the text being typed.
pub struct TodoPage<A> {
    api: A,
    todos: Vec<Todo>,
    pub input: String,
}

impl<A: TodoApi> TodoPage<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            todos: Vec::new(),
            input: String::new(),
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Refreshes the list; a failure is logged and the old list kept.
    pub async fn load(&mut self) {
        match self.api.list_todos().await {
            Ok(todos) => self.todos = todos,
            Err(e) => warn!("Failed to fetch todos: {e}"),
        }
    }

    /// Adds the typed todo and reloads. An empty input is ignored.
    pub async fn add(&mut self) -> bool {
        if self.input.is_empty() {
            return false;
        }

        let request = CreateTodoRequest {
            title: Some(self.input.clone()),
        };
        match self.api.create_todo(&request).await {
            Ok(_) => {
                self.input.clear();
                self.load().await;
                true
            }
            Err(e) => {
                warn!("Failed to add todo: {e}");
                false
            }
        }
    }
}
