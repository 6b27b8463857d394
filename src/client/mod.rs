//! Client-side views that drive the HTTP API: the post manager and the todo list.

pub mod api;
pub mod composer;
pub mod manager;
pub mod notifier;
pub mod state;
pub mod todo_page;
