// Feed data model
//
// Posts, comments, categories and reactions. Everything here is plain data
// with serde derives so a post can be copied out as JSON from the TUI.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Stable identifier for a post, assigned at creation and never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub u64);

/// Stable identifier for a comment, unique across the whole feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(pub u64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Categories
// ─────────────────────────────────────────────────────────────────────────────

/// Topic a post is authored under
///
/// No `All` variant: that value only exists as a filter (see
/// [`CategoryFilter`]), so a post can never be created with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    #[serde(rename = "Career advice")]
    CareerAdvice,
    #[serde(rename = "Mentorship")]
    Mentorship,
    #[serde(rename = "Job Search - Interviewing")]
    JobSearch,
    #[serde(rename = "Salaries & Compensation")]
    Salaries,
}

impl Category {
    /// All authoring categories, in display order
    pub const ALL: [Category; 4] = [
        Category::CareerAdvice,
        Category::Mentorship,
        Category::JobSearch,
        Category::Salaries,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::CareerAdvice => "Career advice",
            Category::Mentorship => "Mentorship",
            Category::JobSearch => "Job Search - Interviewing",
            Category::Salaries => "Salaries & Compensation",
        }
    }

    /// Parse a category from its display label (case-insensitive)
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(label.trim()))
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which posts the feed shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Filter options in the order they appear in the filter bar
    pub const OPTIONS: [CategoryFilter; 5] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::CareerAdvice),
        CategoryFilter::Only(Category::Mentorship),
        CategoryFilter::Only(Category::JobSearch),
        CategoryFilter::Only(Category::Salaries),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }

    /// The category this filter names, if any
    pub fn category(&self) -> Option<Category> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Only(category) => Some(*category),
        }
    }

    fn position(&self) -> usize {
        Self::OPTIONS.iter().position(|o| o == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::OPTIONS[(self.position() + 1) % Self::OPTIONS.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::OPTIONS.len();
        Self::OPTIONS[(self.position() + len - 1) % len]
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Reactions
// ─────────────────────────────────────────────────────────────────────────────

/// Emoji-style reaction a viewer can attach to a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Love,
    Haha,
    Angry,
}

impl ReactionKind {
    pub const ALL: [ReactionKind; 4] = [
        ReactionKind::Like,
        ReactionKind::Love,
        ReactionKind::Haha,
        ReactionKind::Angry,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ReactionKind::Like => "like",
            ReactionKind::Love => "love",
            ReactionKind::Haha => "haha",
            ReactionKind::Angry => "angry",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            ReactionKind::Like => "👍",
            ReactionKind::Love => "🧠",
            ReactionKind::Haha => "🤔",
            ReactionKind::Angry => "😡",
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-kind reaction counts
///
/// Only non-zero counts are stored. Decrementing a count to zero removes the
/// entry, so an untouched post and a post whose reaction was withdrawn
/// compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReactionCounts(BTreeMap<ReactionKind, u32>);

impl ReactionCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count for a kind (0 when absent)
    pub fn get(&self, kind: ReactionKind) -> u32 {
        self.0.get(&kind).copied().unwrap_or(0)
    }

    pub fn increment(&mut self, kind: ReactionKind) {
        *self.0.entry(kind).or_insert(0) += 1;
    }

    /// Decrement a count, dropping the entry once it reaches zero
    pub fn decrement(&mut self, kind: ReactionKind) {
        if let Some(count) = self.0.get_mut(&kind) {
            *count = count.saturating_sub(1);
            if *count == 0 {
                self.0.remove(&kind);
            }
        }
    }

    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Posts and comments
// ─────────────────────────────────────────────────────────────────────────────

/// A reply attached to a post. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub text: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

/// A single feed entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub category: Category,
    pub reactions: ReactionCounts,
    pub viewer_reaction: Option<ReactionKind>,
    pub comments: Vec<Comment>,

    /// Whether the comment entry box is open. UI state, not part of the
    /// post's identity, so it is skipped when a post is copied out as JSON.
    #[serde(skip)]
    pub composing_comment: bool,
}

impl Post {
    pub(crate) fn new(
        id: PostId,
        content: String,
        author: String,
        created_at: DateTime<Utc>,
        category: Category,
    ) -> Self {
        Self {
            id,
            content,
            author,
            created_at,
            category,
            reactions: ReactionCounts::new(),
            viewer_reaction: None,
            comments: Vec::new(),
            composing_comment: false,
        }
    }
}
