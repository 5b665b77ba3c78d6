//! Host-side text model.
//!
//! [`TagTextModel`] is what a view binding owns: the current text, the current configuration,
//! and the latest [`AnnotationResult`]. Every text or configuration change re-annotates from
//! scratch and bumps the version; taps are resolved against the latest result and reported to
//! subscribers as [`TokenEvent`]s.
//!
//! # Example
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use taglight::{AnnotatorConfig, Color};
//! use taglight_host::{TagTextModel, TapOutcome, TokenEvent};
//!
//! let config = AnnotatorConfig::new().with_hashtag_color(Color::rgb(0x1d, 0xa1, 0xf2));
//! let mut model = TagTextModel::new("ship #release", config);
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let seen_clone = Arc::clone(&seen);
//! model.subscribe(move |event| seen_clone.lock().unwrap().push(event.clone()));
//!
//! assert_eq!(
//!     model.tap(8),
//!     TapOutcome::Selected(TokenEvent::HashtagSelected("release".to_string()))
//! );
//! assert_eq!(seen.lock().unwrap().len(), 1);
//! ```

use crate::event::{TokenEvent, TokenEventCallback};
use crate::guard::TapGuard;
use std::sync::Arc;
use taglight::{AnnotationResult, Annotator, AnnotatorConfig};

/// What happened to a tap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TapOutcome {
    /// Another tap was still in flight; this one was dropped.
    Rejected,
    /// The tap landed on plain text (or outside the text).
    Missed,
    /// The tap landed on a token and the event was delivered to subscribers.
    Selected(TokenEvent),
}

/// Text + configuration + latest annotation, with tap resolution.
pub struct TagTextModel {
    text: String,
    annotator: Annotator,
    annotation: Arc<AnnotationResult>,
    version: u64,
    guard: TapGuard,
    callbacks: Vec<TokenEventCallback>,
}

impl TagTextModel {
    /// Create a model and annotate the initial text.
    pub fn new(text: impl Into<String>, config: AnnotatorConfig) -> Self {
        let text = text.into();
        let annotator = Annotator::new(config);
        let annotation = Arc::new(annotator.annotate(&text));
        Self {
            text,
            annotator,
            annotation,
            version: 0,
            guard: TapGuard::new(),
            callbacks: Vec::new(),
        }
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current configuration.
    pub fn config(&self) -> &AnnotatorConfig {
        self.annotator.config()
    }

    /// Latest annotation. Cheap to clone and safe to keep across edits.
    pub fn annotation(&self) -> &Arc<AnnotationResult> {
        &self.annotation
    }

    /// Incremented on every text or configuration change.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Check if the model has changed since a version
    pub fn has_changed_since(&self, version: u64) -> bool {
        self.version > version
    }

    /// Replace the text and re-annotate.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.reannotate();
    }

    /// Replace the configuration and re-annotate.
    pub fn set_config(&mut self, config: AnnotatorConfig) {
        self.annotator = Annotator::new(config);
        self.reannotate();
    }

    /// Subscribe to selection events.
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&TokenEvent) + Send + 'static,
    {
        self.callbacks.push(Box::new(callback));
    }

    /// Returns `true` while a tap is being resolved.
    pub fn is_tap_in_flight(&self) -> bool {
        self.guard.is_in_flight()
    }

    /// Resolve a tap at `offset` and notify subscribers, leaving the guard held.
    ///
    /// A token is selected only when its range contains `offset`; a tap on plain text beside a
    /// token misses. Call [`finish_tap`](Self::finish_tap) once the host has finished handling
    /// the event; until then further taps are rejected.
    pub fn begin_tap(&mut self, offset: usize) -> TapOutcome {
        if !self.guard.try_begin(offset) {
            tracing::trace!(offset, "tap rejected: another tap is in flight");
            return TapOutcome::Rejected;
        }

        let Some(token) = self.annotation.resolve(offset) else {
            tracing::trace!(offset, "tap missed all tokens");
            return TapOutcome::Missed;
        };

        let event = TokenEvent::from_token(token);
        tracing::debug!(offset, ?event, "token selected");
        for callback in &mut self.callbacks {
            callback(&event);
        }
        TapOutcome::Selected(event)
    }

    /// Release the tap guard.
    pub fn finish_tap(&mut self) {
        self.guard.finish();
    }

    /// Resolve a tap and release the guard immediately.
    pub fn tap(&mut self, offset: usize) -> TapOutcome {
        let outcome = self.begin_tap(offset);
        if outcome != TapOutcome::Rejected {
            self.finish_tap();
        }
        outcome
    }

    fn reannotate(&mut self) {
        self.annotation = Arc::new(self.annotator.annotate(&self.text));
        self.version += 1;
        tracing::trace!(
            version = self.version,
            tokens = self.annotation.token_count(),
            "re-annotated"
        );
    }
}

impl std::fmt::Debug for TagTextModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TagTextModel")
            .field("text", &self.text)
            .field("annotator", &self.annotator)
            .field("version", &self.version)
            .field("guard", &self.guard)
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taglight::Color;

    #[test]
    fn test_set_text_reannotates_and_bumps_version() {
        let mut model = TagTextModel::new("#a", AnnotatorConfig::new());
        assert_eq!(model.version(), 0);
        assert_eq!(model.annotation().hashtags().len(), 1);

        let before = Arc::clone(model.annotation());
        model.set_text("#a #b");
        assert_eq!(model.version(), 1);
        assert!(model.has_changed_since(0));
        assert_eq!(model.annotation().hashtags().len(), 2);
        // The retained result is untouched.
        assert_eq!(before.hashtags().len(), 1);
    }

    #[test]
    fn test_set_config_switches_mode() {
        let mut model = TagTextModel::new("@team #x", AnnotatorConfig::new());
        assert_eq!(model.annotation().hashtags().len(), 1);

        model.set_config(
            AnnotatorConfig::new()
                .with_mention_color(Color::BLACK)
                .with_restricted_prefix("@team"),
        );
        assert!(model.annotation().hashtags().is_empty());
        assert!(model.annotation().restricted_prefix().is_some());
        assert_eq!(model.config().restricted_prefix.as_deref(), Some("@team"));
    }

    #[test]
    fn test_tap_miss_releases_guard() {
        let mut model = TagTextModel::new("plain #tag", AnnotatorConfig::new());
        assert_eq!(model.tap(1), TapOutcome::Missed);
        assert!(!model.is_tap_in_flight());
        assert_eq!(model.tap(1_000), TapOutcome::Missed);
    }
}
