use serde::{Deserialize, Serialize};

pub const TITLE_REQUIRED: &str = "Title is required";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

#[derive(Debug, Deserialize, Serialize, Default, Clone)]
pub struct CreateTodoRequest {
    #[serde(default)]
    pub title: Option<String>,
}
