use crate::client::state::PostSnapshot;
use crate::post::post_model::{PostFields, PostRequest};

/// In-progress form values for creating or editing a post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composer {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl Composer {
    pub fn fill_from(&mut self, post: &PostSnapshot) {
        self.title = post.title.clone();
        self.content = post.content.clone();
        self.author = post.author.clone();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The values to submit, or `None` while any field is blank.
    pub fn fields(&self) -> Option<PostFields> {
        self.to_request().validate().ok()
    }

    pub fn to_request(&self) -> PostRequest {
        PostRequest {
            title: Some(self.title.clone()),
            content: Some(self.content.clone()),
            author: Some(self.author.clone()),
        }
    }
}
