//! Community forum, open to every signed-in user.

use std::collections::HashMap;

use api::models::{ForumFilter, ForumPost, NewForumPost};
use api::ForumApi;
use store::{KeyValueStore, User};

use super::{admit, impl_page, non_blank, Services};
use crate::batch::{BatchPolicy, BatchReport};
use crate::guard::Access;
use crate::notify::Notifier;
use crate::page::LoadState;

/// New top-level post being written.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PostDraft {
    pub content: String,
    pub title: String,
    pub category: String,
    pub is_question: bool,
}

#[derive(Clone)]
pub struct Forum<A, S: KeyValueStore> {
    services: Services<A, S>,
    pub user: Option<User>,
    pub posts: Vec<ForumPost>,
    pub categories: Vec<String>,
    pub filter: ForumFilter,
    pub draft: PostDraft,
    /// Replies fetched so far, by parent post id.
    pub replies: HashMap<i64, Vec<ForumPost>>,
    pub reply_drafts: HashMap<i64, String>,
    pub policy: BatchPolicy,
    pub state: LoadState,
    pub notifier: Notifier,
    route: Option<&'static str>,
}

impl_page!(
    Forum,
    fields: [user, posts, categories, filter, draft, policy],
    maps: [replies, reply_drafts],
);

impl<A, S> Forum<A, S>
where
    A: ForumApi,
    S: KeyValueStore,
{
    pub fn new(services: Services<A, S>) -> Self {
        Self {
            services,
            user: None,
            posts: Vec::new(),
            categories: Vec::new(),
            filter: ForumFilter::default(),
            draft: PostDraft::default(),
            replies: HashMap::new(),
            reply_drafts: HashMap::new(),
            policy: BatchPolicy::default(),
            state: LoadState::Initializing,
            notifier: Notifier::new(),
            route: None,
        }
    }

    pub async fn activate(&mut self) {
        let Some(user) = admit(&self.services, Access::SignedIn, &mut self.state) else {
            return;
        };
        self.user = Some(user);
        self.load().await;
    }

    pub async fn load(&mut self) {
        if self.user.is_none() {
            return;
        }
        self.state = LoadState::Loading;

        let api = &self.services.api;
        let (posts, categories) = futures::join!(api.list_posts(&self.filter), api.list_categories());

        let mut report = BatchReport::new();
        let posts = report.take("posts", posts);
        let categories = report.take("categories", categories);

        if report.commit(self.policy) {
            if let Some(posts) = posts {
                self.posts = posts;
            }
            if let Some(categories) = categories {
                self.categories = categories;
            }
        }
        if let Some(message) = report.summary() {
            self.notifier.error(message);
        }
        self.state = LoadState::Ready;
    }

    /// Change the list filter and reload.
    pub async fn apply_filter(&mut self, category: Option<String>, is_question: Option<bool>) {
        self.filter.category = category.as_deref().and_then(non_blank);
        self.filter.is_question = is_question;
        self.load().await;
    }

    /// Publish the draft. A blank draft sends nothing.
    pub async fn submit_post(&mut self) {
        let Some(author_id) = self.user.as_ref().map(|u| u.id) else {
            return;
        };
        if self.draft.content.trim().is_empty() {
            return;
        }
        let post = NewForumPost {
            content: self.draft.content.clone(),
            title: non_blank(&self.draft.title),
            category: non_blank(&self.draft.category),
            is_question: self.draft.is_question,
            parent_id: None,
            author_id,
        };

        match self.services.api.create_post(&post).await {
            Ok(_) => {
                self.notifier.success("Post created successfully!");
                self.draft = PostDraft::default();
                self.load().await;
            }
            Err(e) => {
                tracing::error!("create post failed: {}", e);
                self.notifier.error("Failed to create post");
            }
        }
    }

    pub async fn load_replies(&mut self, post_id: i64) {
        match self.services.api.list_replies(post_id).await {
            Ok(replies) => {
                self.replies.insert(post_id, replies);
            }
            Err(e) => {
                tracing::warn!("loading replies to {} failed: {}", post_id, e);
                self.notifier.error("Failed to load replies");
            }
        }
    }

    /// Post the reply drafted under `post_id`. A blank reply sends nothing.
    pub async fn reply(&mut self, post_id: i64) {
        let Some(author_id) = self.user.as_ref().map(|u| u.id) else {
            return;
        };
        let Some(content) = self.reply_drafts.get(&post_id).and_then(|d| non_blank(d)) else {
            return;
        };
        let reply = NewForumPost {
            content,
            parent_id: Some(post_id),
            author_id,
            ..Default::default()
        };

        match self.services.api.create_post(&reply).await {
            Ok(_) => {
                self.notifier.success("Reply posted!");
                self.reply_drafts.remove(&post_id);
                self.load_replies(post_id).await;
            }
            Err(e) => {
                tracing::error!("reply to {} failed: {}", post_id, e);
                self.notifier.error("Failed to post reply");
            }
        }
    }

    pub fn is_own(&self, post: &ForumPost) -> bool {
        self.user.as_ref().is_some_and(|u| u.id == post.author_id)
    }

    /// Delete one of the user's own posts.
    pub async fn delete_post(&mut self, post_id: i64) {
        let own = self
            .posts
            .iter()
            .find(|p| p.id == post_id)
            .is_some_and(|p| self.is_own(p));
        if !own {
            return;
        }

        match self.services.api.delete_post(post_id).await {
            Ok(_) => {
                self.notifier.success("Post deleted");
                self.load().await;
            }
            Err(e) => {
                tracing::error!("delete post {} failed: {}", post_id, e);
                self.notifier.error("Failed to delete post");
            }
        }
    }
}
