//! Hippie-expand style word completion.
//!
//! Completes the word under the cursor from words already present in open
//! documents. Repeated triggers cycle through ranked candidates and wrap back
//! to the original text. The host drives the engine with document lifecycle
//! events and applies the [`Edit`]s returned by [`CompletionEngine::trigger`].
//!
//! Candidate priority, highest first:
//!
//! 1. the completion last chosen for the same primer
//! 2. fuzzy matches from the current document
//! 3. fuzzy matches from every other indexed document
//! 4. the primer itself

/// The engine owning index, history and cycling state.
pub mod engine;
/// Option loading errors.
pub mod error;
/// Last chosen completion per primer.
pub mod history;
/// Host document seam.
pub mod host;
/// Per-document word cache and the global pool.
pub mod index;
/// Subsequence scoring and ranking.
pub mod matcher;
/// Engine tunables.
pub mod options;
/// Candidate lists and the cycling state machine.
pub mod session;
/// Word extraction.
pub mod words;

pub use engine::CompletionEngine;
pub use error::ConfigError;
pub use history::History;
pub use host::{Buffer, Edit};
pub use index::{DocumentIndex, GlobalPool, IndexEntry};
pub use matcher::{ScoreKey, rank, score};
pub use options::HippieOptions;
pub use session::{CandidateList, Cycle, CyclingSession, Transition};
pub use words::{WordSet, extract};
