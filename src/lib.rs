pub mod client;
pub mod database;
pub mod diagnostics;
pub mod middleware;
pub mod post;
pub mod router;
pub mod todo;
pub mod utils;
