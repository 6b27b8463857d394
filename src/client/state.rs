use chrono::NaiveDateTime;

use crate::post::post_model::{CreatedPost, Post, PostFields};

/// A client-side copy of a post.
///
/// Posts created in this session carry no `created_at`: the server assigns it
/// but does not echo it back, and the cache is not refreshed to learn it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostSnapshot {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: Option<NaiveDateTime>,
}

impl From<Post> for PostSnapshot {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            author: post.author,
            created_at: Some(post.created_at),
        }
    }
}

impl From<CreatedPost> for PostSnapshot {
    fn from(post: CreatedPost) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            author: post.author,
            created_at: None,
        }
    }
}

/// Confirmed server outcomes that change the cached collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostAction {
    Loaded(Vec<PostSnapshot>),
    Created(PostSnapshot),
    Updated { id: i64, fields: PostFields },
    Deleted(i64),
}

/// Applies one action to the ordered collection.
pub fn reduce(mut posts: Vec<PostSnapshot>, action: PostAction) -> Vec<PostSnapshot> {
    match action {
        PostAction::Loaded(loaded) => loaded,
        PostAction::Created(post) => {
            posts.insert(0, post);
            posts
        }
        PostAction::Updated { id, fields } => {
            if let Some(post) = posts.iter_mut().find(|p| p.id == id) {
                post.title = fields.title;
                post.content = fields.content;
                post.author = fields.author;
            }
            posts
        }
        PostAction::Deleted(id) => {
            posts.retain(|p| p.id != id);
            posts
        }
    }
}
