// Feed module - the in-memory state container behind the widget
//
// `Feed` owns the post collection and the active category filter. Every
// state change goes through `&mut self`, so updates are serialized by the
// borrow checker. Nothing here knows about the terminal; the TUI holds a
// `Feed` and renders whatever `visible_posts()` yields.
//
// Posts are addressed by `PostId`, never by position.

pub mod clock;
pub mod model;

#[cfg(test)]
pub use clock::ManualClock;
pub use clock::{Clock, SystemClock};
pub use model::{Category, CategoryFilter, Comment, CommentId, Post, PostId, ReactionKind};

use chrono::{DateTime, Utc};

/// Author identity used when none is configured
pub const DEFAULT_AUTHOR: &str = "user@example.com";

/// Callback surface a comment panel talks to
///
/// The panel never mutates posts itself; it asks its owner to do it.
pub trait CommentOwner {
    /// Append a comment to a post. Returns `None` when rejected.
    fn add_comment(&mut self, post: PostId, text: &str) -> Option<CommentId>;

    /// Flip the comment composer flag for a post
    fn toggle_comment_composer(&mut self, post: PostId) -> bool;

    /// Whether the comment composer is open for a post
    fn is_composing(&self, post: PostId) -> bool;
}

/// Session-scoped feed state
#[derive(Debug)]
pub struct Feed<C: Clock = SystemClock> {
    /// Newest first
    posts: Vec<Post>,
    filter: CategoryFilter,
    author: String,
    next_post_id: u64,
    next_comment_id: u64,
    clock: C,
}

impl Feed<SystemClock> {
    pub fn new(author: impl Into<String>) -> Self {
        Self::with_clock(author, SystemClock)
    }
}

impl Default for Feed<SystemClock> {
    fn default() -> Self {
        Self::new(DEFAULT_AUTHOR)
    }
}

impl<C: Clock> Feed<C> {
    pub fn with_clock(author: impl Into<String>, clock: C) -> Self {
        Self {
            posts: Vec::new(),
            filter: CategoryFilter::All,
            author: author.into(),
            next_post_id: 1,
            next_comment_id: 1,
            clock,
        }
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// Full collection, newest first, ignoring the filter
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn post(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    fn post_mut(&mut self, id: PostId) -> Option<&mut Post> {
        self.posts.iter_mut().find(|p| p.id == id)
    }

    /// Create a post from a draft and put it at the top of the feed
    ///
    /// Whitespace-only drafts are ignored. Content is stored verbatim.
    pub fn submit_post(&mut self, draft: &str, category: Category) -> Option<PostId> {
        let now = self.clock.now();
        self.submit_post_at(draft, category, now)
    }

    pub(crate) fn submit_post_at(
        &mut self,
        draft: &str,
        category: Category,
        created_at: DateTime<Utc>,
    ) -> Option<PostId> {
        if draft.trim().is_empty() {
            tracing::trace!("Ignoring empty post draft");
            return None;
        }

        let id = PostId(self.next_post_id);
        self.next_post_id += 1;

        let post = Post::new(
            id,
            draft.to_string(),
            self.author.clone(),
            created_at,
            category,
        );
        self.posts.insert(0, post);

        tracing::debug!(post = %id, category = %category, "Post submitted");
        Some(id)
    }

    /// Replace the active filter. The collection itself is untouched.
    pub fn set_category_filter(&mut self, filter: CategoryFilter) {
        if self.filter != filter {
            tracing::debug!(filter = filter.label(), "Category filter changed");
        }
        self.filter = filter;
    }

    /// Toggle the viewer's reaction on a post
    ///
    /// Reacting with the current kind withdraws it. Reacting with a different
    /// kind moves the viewer's single reaction over. Returns `false` when the
    /// post doesn't exist.
    pub fn toggle_reaction(&mut self, id: PostId, kind: ReactionKind) -> bool {
        let Some(post) = self.post_mut(id) else {
            return false;
        };

        let previous = post.viewer_reaction.take();
        if let Some(old) = previous {
            post.reactions.decrement(old);
        }

        if previous != Some(kind) {
            post.reactions.increment(kind);
            post.viewer_reaction = Some(kind);
        }

        tracing::debug!(
            post = %id,
            kind = %kind,
            active = post.viewer_reaction.is_some(),
            "Reaction toggled"
        );
        true
    }

    /// Append a comment and close the post's comment composer
    pub fn add_comment(&mut self, id: PostId, text: &str) -> Option<CommentId> {
        let now = self.clock.now();
        self.add_comment_at(id, text, now)
    }

    pub(crate) fn add_comment_at(
        &mut self,
        id: PostId,
        text: &str,
        created_at: DateTime<Utc>,
    ) -> Option<CommentId> {
        if text.trim().is_empty() {
            tracing::trace!(post = %id, "Ignoring empty comment");
            return None;
        }

        let comment_id = CommentId(self.next_comment_id);
        let author = self.author.clone();
        let post = self.post_mut(id)?;

        post.comments.push(Comment {
            id: comment_id,
            text: text.to_string(),
            author,
            created_at,
        });
        post.composing_comment = false;
        let count = post.comments.len();

        self.next_comment_id += 1;
        tracing::debug!(post = %id, comments = count, "Comment added");
        Some(comment_id)
    }

    /// Flip the comment composer for one post. Other posts keep their state.
    pub fn toggle_comment_composer(&mut self, id: PostId) -> bool {
        let Some(post) = self.post_mut(id) else {
            return false;
        };
        post.composing_comment = !post.composing_comment;
        tracing::trace!(post = %id, open = post.composing_comment, "Comment composer toggled");
        true
    }

    /// Posts matching the active filter, in collection order
    pub fn visible_posts(&self) -> impl Iterator<Item = &Post> + '_ {
        let filter = self.filter;
        self.posts.iter().filter(move |p| filter.matches(p.category))
    }

    /// Ids of the visible posts, in display order
    pub fn visible_ids(&self) -> Vec<PostId> {
        self.visible_posts().map(|p| p.id).collect()
    }
}

impl<C: Clock> CommentOwner for Feed<C> {
    fn add_comment(&mut self, post: PostId, text: &str) -> Option<CommentId> {
        Feed::add_comment(self, post, text)
    }

    fn toggle_comment_composer(&mut self, post: PostId) -> bool {
        Feed::toggle_comment_composer(self, post)
    }

    fn is_composing(&self, post: PostId) -> bool {
        self.post(post).is_some_and(|p| p.composing_comment)
    }
}
