// Components module - reusable UI building blocks
//
// Shell components are rendered on every frame:
// - Title bar: app name, author identity
// - Filter bar: category tabs
// - Status bar: focus hints, post counts, uptime
// - Logs panel: captured tracing events (toggleable)
//
// Feed components own their own state:
// - Composer: post draft + authoring category
// - Feed panel: post cards + selection
// - Comment panel: one per post, comment draft
//
// Each component is a focused, single-responsibility module.

pub mod comment_panel;
pub mod composer;
pub mod feed_panel;
pub mod filter_bar;
pub mod formatters;
pub mod logs_panel;
pub mod status_bar;
pub mod text_input;
pub mod title_bar;
pub mod toast;

pub use comment_panel::CommentPanel;
pub use composer::Composer;
pub use feed_panel::FeedPanel;
pub use toast::{Toast, ToastKind};
