//! Headword lookup engine.
//!
//! Re-exports the core crate and adds the [`api::Lexicon`] service object
//! that outer layers (HTTP handlers, `hwtool`) talk to.

pub mod api;
mod trace_init;

pub use api::{Lexicon, LexiconError};
pub use headword_core::{cache, corpus, definition, matcher, settings};
