//! Candidate lists and the cycling state machine.
//!
//! A trigger either starts a fresh cycle or advances the active one:
//!
//! - fresh when idle, when the document changed, or when the word under the
//!   cursor is no longer the candidate last applied (the user typed, moved, or
//!   edited elsewhere);
//! - otherwise the cursor moves to the next candidate, wrapping around. The
//!   primer is always the last candidate, so a full lap restores the original.

use hippie_primitives::DocumentId;
use indexmap::IndexSet;

use crate::index::GlobalPool;
use crate::matcher::rank;
use crate::words::WordSet;

/// Ordered, distinct completions for one primer. Never empty; the primer is
/// always the last entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateList {
	items: Vec<String>,
}

impl CandidateList {
	/// Builds the list in priority order: remembered choice, ranked words of the
	/// document, ranked pool words absent from the document, then the primer.
	pub fn build(primer: &str, remembered: Option<&str>, doc_words: Option<&WordSet>, pool: &GlobalPool) -> Self {
		let mut items: IndexSet<&str> = IndexSet::new();

		if let Some(choice) = remembered.filter(|choice| *choice != primer) {
			items.insert(choice);
		}
		if let Some(words) = doc_words {
			items.extend(rank(primer, words.iter().map(String::as_str)));
		}
		let pool_only = pool
			.iter()
			.filter(|word| doc_words.is_none_or(|words| !words.contains(*word)));
		items.extend(rank(primer, pool_only));

		items.shift_remove(primer);
		items.insert(primer);

		Self {
			items: items.into_iter().map(str::to_owned).collect(),
		}
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	pub fn get(&self, idx: usize) -> Option<&str> {
		self.items.get(idx).map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.items.iter().map(String::as_str)
	}

	pub fn as_slice(&self) -> &[String] {
		&self.items
	}
}

/// An active cycle through a candidate list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle {
	doc: DocumentId,
	primer: String,
	candidates: CandidateList,
	cursor: usize,
}

impl Cycle {
	pub fn doc(&self) -> DocumentId {
		self.doc
	}

	/// The word the cycle started from.
	pub fn primer(&self) -> &str {
		&self.primer
	}

	pub fn candidates(&self) -> &CandidateList {
		&self.candidates
	}

	pub fn cursor(&self) -> usize {
		self.cursor
	}

	/// The candidate currently applied to the document.
	pub fn current(&self) -> &str {
		&self.candidates.items[self.cursor]
	}

	/// True once cycling has wrapped back to the original text.
	pub fn is_at_primer(&self) -> bool {
		self.current() == self.primer
	}

	fn advance(&mut self) {
		self.cursor = (self.cursor + 1) % self.candidates.len();
	}
}

/// What a trigger did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
	/// A fresh candidate list was built.
	Started,
	/// The active cycle moved to its next candidate.
	Advanced,
}

/// Cycling state, remembered across trigger presses. Idle until the first
/// trigger, then holds the active cycle.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CyclingSession {
	active: Option<Cycle>,
}

impl CyclingSession {
	/// Whether a trigger on `doc` with `current` under the cursor continues the
	/// active cycle.
	pub fn continues(&self, doc: DocumentId, current: &str) -> bool {
		self.active
			.as_ref()
			.is_some_and(|cycle| cycle.doc == doc && cycle.current() == current)
	}

	/// Handles one trigger.
	///
	/// `build` runs only when a fresh cycle starts; it receives the primer.
	pub fn step<F>(&mut self, doc: DocumentId, current: &str, build: F) -> (Transition, &Cycle)
	where
		F: FnOnce(&str) -> CandidateList,
	{
		let (transition, cycle) = match self.active.take() {
			Some(mut cycle) if cycle.doc == doc && cycle.current() == current => {
				cycle.advance();
				tracing::trace!(?doc, cursor = cycle.cursor, current = cycle.current(), "Advanced completion cycle");
				(Transition::Advanced, cycle)
			}
			_ => {
				let candidates = build(current);
				tracing::trace!(?doc, primer = current, candidates = candidates.len(), "Started completion cycle");
				let cycle = Cycle {
					doc,
					primer: current.to_owned(),
					candidates,
					cursor: 0,
				};
				(Transition::Started, cycle)
			}
		};
		(transition, self.active.insert(cycle))
	}

	pub fn active(&self) -> Option<&Cycle> {
		self.active.as_ref()
	}

	pub fn is_idle(&self) -> bool {
		self.active.is_none()
	}

	/// Returns to idle if the active cycle belongs to `doc`.
	pub fn forget_doc(&mut self, doc: DocumentId) {
		if self.active.as_ref().is_some_and(|cycle| cycle.doc == doc) {
			self.reset();
		}
	}

	pub fn reset(&mut self) {
		self.active = None;
	}
}
