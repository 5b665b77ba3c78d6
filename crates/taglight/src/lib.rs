#![warn(missing_docs)]
//! taglight - Headless `#hashtag` / `@mention` annotation engine
//!
//! # Overview
//!
//! `taglight` finds hashtag and mention tokens in user-edited text, produces styling for them,
//! and maps an offset back to the token under it. It does not render, lay out, or handle
//! gestures; a host UI does that and calls into this crate on every text or configuration change.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Annotator (annotate / resolve)             │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Styled output (base + token runs)          │  ← Rendering Data
//! ├─────────────────────────────────────────────┤
//! │  Marker scanning (fixed regex patterns)     │  ← Detection
//! ├─────────────────────────────────────────────┤
//! │  Offset index (chars / UTF-16)              │  ← Coordinates
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use taglight::{AnnotatorConfig, Color, annotate};
//!
//! let config = AnnotatorConfig::new().with_hashtag_color(Color::rgb(0x1d, 0xa1, 0xf2));
//! let result = annotate("hello #world and #world again", &config);
//!
//! assert_eq!(result.hashtags().len(), 2);
//! assert_eq!(result.hashtags()[1].display_index, 1);
//! assert_eq!(result.resolve(8).map(|t| t.value.as_str()), Some("world"));
//! ```
//!
//! # Module Description
//!
//! - [`annotator`] - annotation pass, result type and reverse lookup
//! - [`config`] - per-pass configuration and scan mode
//! - [`pattern`] - fixed marker patterns and scanning
//! - [`styled`] - styled output and segment flattening
//! - [`style`] - colors, fonts and paragraph spacing
//! - [`token`] - tokens and ranges
//! - [`offsets`] - offset encodings and byte conversion
//!
//! # Unicode Support
//!
//! - Word characters follow Unicode (`\w` covers letters, marks, digits and connectors)
//! - Ranges are reported in chars by default, or UTF-16 code units for `NSString`-style hosts

pub mod annotator;
pub mod config;
mod error;
pub mod offsets;
pub mod pattern;
pub mod style;
pub mod styled;
pub mod token;

pub use annotator::{AnnotationResult, Annotator, annotate, try_annotate};
pub use config::{AnnotatorConfig, ScanMode};
pub use error::AnnotateError;
pub use offsets::{OffsetEncoding, TextIndex};
pub use style::{BaseAttributes, Color, FontSpec, ParagraphStyle, TextAttributes, TokenTag};
pub use styled::{StyleRun, StyledSegment, StyledText};
pub use token::{Token, TokenKind, TokenRange};
