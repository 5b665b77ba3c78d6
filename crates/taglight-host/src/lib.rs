#![warn(missing_docs)]
//! `taglight-host` - Host adapter for `taglight`.
//!
//! The annotation engine is pure; a UI binding still needs somewhere to keep the current text,
//! re-run annotation on each edit, turn taps into selection events, and make sure two taps do not
//! race each other. This crate provides those pieces without depending on any UI toolkit:
//!
//! - [`TagTextModel`] - text + configuration + latest result, with tap resolution
//! - [`TokenEvent`] - `HashtagSelected` / `MentionSelected`
//! - [`TapGuard`] - at most one tap resolution in flight

pub mod event;
pub mod guard;
pub mod model;

pub use event::{TokenEvent, TokenEventCallback};
pub use guard::{TapGuard, TapState};
pub use model::{TagTextModel, TapOutcome};
