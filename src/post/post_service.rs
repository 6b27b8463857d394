use chrono::NaiveDateTime;
use log::{debug, error, info};
use sqlx::{Any, FromRow};

use crate::database::Gateway;
use crate::post::post_model::{CreatedPost, Post, PostRequest};
use crate::utils::error::{CustomError, store_error};

const SELECT_POST: &str =
    "SELECT id, title, content, author, CAST(created_at AS CHAR) AS created_at FROM posts";

// created_at travels as text so MySQL and SQLite decode the same way.
#[derive(FromRow)]
struct PostRow {
    id: i64,
    title: String,
    content: String,
    author: String,
    created_at: String,
}

impl TryFrom<PostRow> for Post {
    type Error = CustomError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        let created_at = NaiveDateTime::parse_from_str(&row.created_at, "%Y-%m-%d %H:%M:%S%.f")
            .map_err(|e| {
                error!("Unreadable created_at {:?} on post {}: {e}", row.created_at, row.id);
                CustomError::InternalServerError("Failed to read post".into())
            })?;

        Ok(Post {
            id: row.id,
            title: row.title,
            content: row.content,
            author: row.author,
            created_at,
        })
    }
}

/// Translates post operations into single parameterized statements.
#[derive(Clone)]
pub struct PostService {
    gateway: Gateway,
}

impl PostService {
    pub fn new(gateway: &Gateway) -> Self {
        PostService {
            gateway: gateway.clone(),
        }
    }

    /// Newest first; ties on `created_at` fall back to the newer id.
    pub async fn list_posts(&self) -> Result<Vec<Post>, CustomError> {
        let rows: Vec<PostRow> =
            sqlx::query_as(&format!("{SELECT_POST} ORDER BY created_at DESC, id DESC"))
                .fetch_all(self.gateway.pool())
                .await
                .map_err(store_error("Failed to fetch posts"))?;

        rows.into_iter().map(Post::try_from).collect()
    }

    pub async fn get_post(&self, id: i64) -> Result<Post, CustomError> {
        let row: Option<PostRow> = sqlx::query_as(&format!("{SELECT_POST} WHERE id = ?"))
            .bind(id)
            .fetch_optional(self.gateway.pool())
            .await
            .map_err(store_error("Failed to fetch post"))?;

        match row {
            Some(row) => Post::try_from(row),
            None => Err(CustomError::NotFoundError("Post not found".into())),
        }
    }

    pub async fn create_post(&self, request: PostRequest) -> Result<CreatedPost, CustomError> {
        let fields = request.validate()?;

        let insert =
            sqlx::query::<Any>("INSERT INTO posts (title, content, author) VALUES (?, ?, ?)")
                .bind(fields.title.as_str())
                .bind(fields.content.as_str())
                .bind(fields.author.as_str());
        let id = self
            .gateway
            .insert(insert)
            .await
            .map_err(store_error("Failed to create post"))?;
        info!("Created post {id}");

        Ok(CreatedPost {
            id,
            title: fields.title,
            content: fields.content,
            author: fields.author,
        })
    }

    /// Overwrites title, content and author. An unknown id touches no rows.
    pub async fn update_post(&self, id: i64, request: PostRequest) -> Result<(), CustomError> {
        let fields = request.validate()?;

        let result =
            sqlx::query("UPDATE posts SET title = ?, content = ?, author = ? WHERE id = ?")
                .bind(fields.title)
                .bind(fields.content)
                .bind(fields.author)
                .bind(id)
                .execute(self.gateway.pool())
                .await
                .map_err(store_error("Failed to update post"))?;

        debug!("Update of post {id} affected {} row(s)", result.rows_affected());
        Ok(())
    }

    /// Hard delete. An unknown id is a no-op.
    pub async fn delete_post(&self, id: i64) -> Result<(), CustomError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id)
            .execute(self.gateway.pool())
            .await
            .map_err(store_error("Failed to delete post"))?;

        debug!("Delete of post {id} affected {} row(s)", result.rows_affected());
        Ok(())
    }
}
