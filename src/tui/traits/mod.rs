//! Component trait system for the TUI
//!
//! Components declare their own capabilities through traits instead of the
//! App knowing how to render or route input for every panel.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         App                                 │
//! │   (owns the Feed, routes input to the focused component)    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!              ┌───────────────┼───────────────┐
//!              ▼               ▼               ▼
//!        ┌──────────┐   ┌──────────┐   ┌──────────┐
//!        │ Composer │   │   Feed   │   │ Comment  │
//!        │          │   │  Panel   │   │  Panel   │
//!        └──────────┘   └──────────┘   └──────────┘
//! ```
//!
//! - [`Component`] - identity + rendering
//! - [`Interactive`] - keyboard input

mod component;
mod interactive;

pub use component::{Component, ComponentId, RenderContext};
pub use interactive::{Handled, Interactive};
