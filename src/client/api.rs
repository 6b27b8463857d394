use async_trait::async_trait;
use reqwest::Response;
use serde::Deserialize;
use std::env;
use thiserror::Error;

use crate::post::post_model::{CreatedPost, Post, PostRequest};
use crate::todo::model::{CreateTodoRequest, Todo};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server answered {status}: {message}")]
    Status { status: u16, message: String },
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// The post endpoints as seen from the client.
#[async_trait]
pub trait PostsApi: Send + Sync {
    async fn list_posts(&self) -> Result<Vec<Post>, ClientError>;

    async fn get_post(&self, id: i64) -> Result<Post, ClientError>;

    async fn create_post(&self, request: &PostRequest) -> Result<CreatedPost, ClientError>;

    async fn update_post(&self, id: i64, request: &PostRequest) -> Result<(), ClientError>;

    async fn delete_post(&self, id: i64) -> Result<(), ClientError>;
}

/// The todo endpoints as seen from the client.
#[async_trait]
pub trait TodoApi: Send + Sync {
    async fn list_todos(&self) -> Result<Vec<Todo>, ClientError>;

    async fn create_todo(&self, request: &CreateTodoRequest) -> Result<Todo, ClientError>;
}

/// JSON-over-HTTP implementation of both APIs.
#[derive(Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    /// `base_url` points at the `/api` scope, e.g. `http://127.0.0.1:8000/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Reads `API_BASE_URL`, falling back to a local server.
    pub fn from_env() -> Self {
        Self::new(
            env::var("API_BASE_URL").unwrap_or_else(|_| "http://127.0.0.1:8000/api".to_string()),
        )
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn check(response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(ErrorBody { error: Some(error) }) => error,
            _ => status.canonical_reason().unwrap_or("Unknown error").to_string(),
        };
        Err(ClientError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl PostsApi for HttpApi {
    async fn list_posts(&self) -> Result<Vec<Post>, ClientError> {
        let response = self.client.get(self.url("/posts")).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn get_post(&self, id: i64) -> Result<Post, ClientError> {
        let response = self
            .client
            .get(self.url(&format!("/posts/{id}")))
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn create_post(&self, request: &PostRequest) -> Result<CreatedPost, ClientError> {
        let response = self
            .client
            .post(self.url("/posts"))
            .json(request)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn update_post(&self, id: i64, request: &PostRequest) -> Result<(), ClientError> {
        let response = self
            .client
            .put(self.url(&format!("/posts/{id}")))
            .json(request)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn delete_post(&self, id: i64) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(self.url(&format!("/posts/{id}")))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}

#[async_trait]
impl TodoApi for HttpApi {
    async fn list_todos(&self) -> Result<Vec<Todo>, ClientError> {
        let response = self.client.get(self.url("/todo")).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn create_todo(&self, request: &CreateTodoRequest) -> Result<Todo, ClientError> {
        let response = self
            .client
            .post(self.url("/todo"))
            .json(request)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }
}
