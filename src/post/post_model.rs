use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::utils::error::CustomError;
use crate::utils::helpers::filled;

pub const FIELDS_REQUIRED: &str = "All fields are required";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: NaiveDateTime,
}

/// Body of `POST /posts` and `PUT /posts/{id}`.
///
/// Every field is optional on the wire so that a missing field is reported
/// the same way as an empty one.
#[derive(Debug, Deserialize, Serialize, Default, Clone)]
pub struct PostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFields {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl PostRequest {
    pub fn validate(self) -> Result<PostFields, CustomError> {
        match (filled(self.title), filled(self.content), filled(self.author)) {
            (Some(title), Some(content), Some(author)) => Ok(PostFields {
                title,
                content,
                author,
            }),
            _ => Err(CustomError::ValidationError(FIELDS_REQUIRED.into())),
        }
    }
}

/// What `POST /posts` answers with: the new id plus the submitted fields.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CreatedPost {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub const OK: Self = Self { success: true };
}
