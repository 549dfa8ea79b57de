//! Core text types shared by the completion engine and its hosts: document ids,
//! character ranges, word spans, and replacement application.

/// Region replacements and their application to a rope.
pub mod edit;
/// Identifier types for host documents.
pub mod ids;
/// Word boundary helpers.
pub mod movement;
/// Text range types in character indices.
pub mod range;

pub use edit::{EditError, Replacement, apply_replacements};
pub use ids::DocumentId;
pub use movement::{find_word_end, find_word_start, is_word_char, word_runs, word_span};
pub use range::{CharIdx, Range};
pub use ropey::{Rope, RopeSlice};
