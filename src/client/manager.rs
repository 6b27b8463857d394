use log::warn;
use thiserror::Error;

use crate::client::api::{ClientError, PostsApi};
use crate::client::composer::Composer;
use crate::client::notifier::Notifier;
use crate::client::state::{PostAction, PostSnapshot, reduce};

/// How many posts the `Recent` filter shows.
pub const RECENT_LIMIT: usize = 5;

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("All fields are required")]
    Incomplete,

    #[error("Another action is still in progress")]
    Busy,

    #[error("Cancelled by the user")]
    Declined,

    #[error(transparent)]
    Api(#[from] ClientError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    List,
    ComposingCreate,
    ComposingEdit(PostSnapshot),
    Viewing(PostSnapshot),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Recent,
}

/// Client-side view over the post collection.
///
/// Holds a best-effort cache of the server's posts and only changes it after
/// the server confirmed a mutation, so a failed call never shows up locally.
/// Every user-facing outcome is reported through the [`Notifier`].
pub struct PostManager<A, N> {
    api: A,
    notifier: N,
    posts: Vec<PostSnapshot>,
    mode: Mode,
    composer: Composer,
    filter: Filter,
    submitting: bool,
    deleting_id: Option<i64>,
}

impl<A: PostsApi, N: Notifier> PostManager<A, N> {
    pub fn new(api: A, notifier: N) -> Self {
        Self {
            api,
            notifier,
            posts: Vec::new(),
            mode: Mode::List,
            composer: Composer::default(),
            filter: Filter::All,
            submitting: false,
            deleting_id: None,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn posts(&self) -> &[PostSnapshot] {
        &self.posts
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    pub fn composer_mut(&mut self) -> &mut Composer {
        &mut self.composer
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn deleting_id(&self) -> Option<i64> {
        self.deleting_id
    }

    /// The cached posts narrowed by the active filter.
    pub fn visible_posts(&self) -> &[PostSnapshot] {
        match self.filter {
            Filter::All => &self.posts,
            Filter::Recent => &self.posts[..self.posts.len().min(RECENT_LIMIT)],
        }
    }

    fn apply(&mut self, action: PostAction) {
        self.posts = reduce(std::mem::take(&mut self.posts), action);
    }

    fn cached(&self, id: i64) -> Option<PostSnapshot> {
        self.posts.iter().find(|p| p.id == id).cloned()
    }

    /// Replaces the cache with the server's list. On failure the stale list stays.
    pub async fn load(&mut self) -> Result<(), ActionError> {
        match self.api.list_posts().await {
            Ok(posts) => {
                self.apply(PostAction::Loaded(posts.into_iter().map(Into::into).collect()));
                self.mode = Mode::List;
                Ok(())
            }
            Err(e) => {
                warn!("Error fetching posts: {e}");
                self.notifier.alert("Failed to fetch posts");
                Err(e.into())
            }
        }
    }

    pub fn start_create(&mut self) {
        if matches!(self.mode, Mode::ComposingEdit(_)) {
            self.composer.clear();
        }
        self.mode = Mode::ComposingCreate;
    }

    /// Opens the composer on a cached post. Returns `false` for an unknown id.
    pub fn start_edit(&mut self, id: i64) -> bool {
        let post = match &self.mode {
            Mode::Viewing(post) if post.id == id => Some(post.clone()),
            _ => self.cached(id),
        };
        let Some(post) = post else {
            return false;
        };

        self.composer.fill_from(&post);
        self.mode = Mode::ComposingEdit(post);
        true
    }

    pub fn cancel(&mut self) {
        if matches!(self.mode, Mode::ComposingCreate | Mode::ComposingEdit(_)) {
            self.composer.clear();
            self.mode = Mode::List;
        }
    }

    /// Creates or updates, depending on what the composer is editing.
    pub async fn submit(&mut self) -> Result<(), ActionError> {
        if self.submitting {
            return Err(ActionError::Busy);
        }
        let Some(fields) = self.composer.fields() else {
            self.notifier.alert("All fields are required!");
            return Err(ActionError::Incomplete);
        };

        let request = self.composer.to_request();
        let editing = match &self.mode {
            Mode::ComposingEdit(post) => Some(post.id),
            _ => None,
        };

        self.submitting = true;
        let result = match editing {
            Some(id) => self
                .api
                .update_post(id, &request)
                .await
                .map(|()| PostAction::Updated { id, fields }),
            None => self
                .api
                .create_post(&request)
                .await
                .map(|created| PostAction::Created(created.into())),
        };
        self.submitting = false;

        let verb = if editing.is_some() { "update" } else { "create" };
        match result {
            Ok(action) => {
                self.apply(action);
                self.composer.clear();
                self.mode = Mode::List;
                self.notifier.alert(&format!("Post {verb}d successfully!"));
                Ok(())
            }
            Err(e) => {
                warn!("Error trying to {verb} post: {e}");
                self.notifier.alert(&format!("Failed to {verb} post"));
                Err(e.into())
            }
        }
    }

    /// Shows a post, from the cache when possible.
    pub async fn view(&mut self, id: i64) -> Result<(), ActionError> {
        let post = match self.cached(id) {
            Some(post) => post,
            None => match self.api.get_post(id).await {
                Ok(post) => post.into(),
                Err(e) => {
                    warn!("Error fetching post {id}: {e}");
                    self.notifier.alert("Failed to fetch post details");
                    return Err(e.into());
                }
            },
        };

        if matches!(self.mode, Mode::ComposingEdit(_)) {
            self.composer.clear();
        }
        self.mode = Mode::Viewing(post);
        Ok(())
    }

    pub fn close_view(&mut self) {
        if matches!(self.mode, Mode::Viewing(_)) {
            self.mode = Mode::List;
        }
    }

    /// Deletes after the user confirms; closes the view if it showed this post.
    pub async fn delete(&mut self, id: i64) -> Result<(), ActionError> {
        if self.deleting_id.is_some() {
            return Err(ActionError::Busy);
        }
        if !self
            .notifier
            .confirm("Are you sure you want to delete this post?")
        {
            return Err(ActionError::Declined);
        }

        self.deleting_id = Some(id);
        let result = self.api.delete_post(id).await;
        self.deleting_id = None;

        match result {
            Ok(()) => {
                self.apply(PostAction::Deleted(id));
                if matches!(&self.mode, Mode::Viewing(post) if post.id == id) {
                    self.mode = Mode::List;
                }
                self.notifier.alert("Post deleted successfully!");
                Ok(())
            }
            Err(e) => {
                warn!("Error deleting post {id}: {e}");
                self.notifier.alert("Failed to delete post");
                Err(e.into())
            }
        }
    }
}
