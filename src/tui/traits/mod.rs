//! Component trait system for the TUI
//!
//! Instead of App knowing how to render and navigate every panel,
//! components declare their own capabilities through traits.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         App                                 │
//! │   (orchestrator: routes keys, owns focus and the page)      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!        ┌──────────┬──────────┼──────────┬──────────┐
//!        ▼          ▼          ▼          ▼          ▼
//!    ┌────────┐ ┌────────┐ ┌────────┐ ┌────────┐ ┌────────┐
//!    │ Search │ │ Years  │ │  Bool  │ │ Cards  │ │  Logs  │
//!    └────────┘ └────────┘ └────────┘ └────────┘ └────────┘
//! ```
//!
//! - [`Component`] - identity
//! - [`Interactive`] - keyboard input for the focused component
//! - [`Scrollable`] / [`Selectable`] - panels with more items than fit

mod component;
mod interactive;
mod scrollable;

pub use component::{Component, ComponentId, RenderContext};
pub use interactive::{Handled, Interactive};
pub use scrollable::{Scrollable, Selectable};
