//! The completion engine: lifecycle feed, trigger command, and owned state.

use std::collections::BTreeSet;

use hippie_primitives::{CharIdx, DocumentId, Range};

use crate::history::History;
use crate::host::{Buffer, Edit};
use crate::index::DocumentIndex;
use crate::options::HippieOptions;
use crate::session::{CandidateList, CyclingSession, Transition};

/// Word index, history and cycling state of one host session.
///
/// Every method runs synchronously on the caller's thread. Hosts create one
/// engine per editor session and feed it document lifecycle events.
#[derive(Debug)]
pub struct CompletionEngine {
	options: HippieOptions,
	index: DocumentIndex,
	history: History,
	session: CyclingSession,
}

impl Default for CompletionEngine {
	fn default() -> Self {
		Self::new(HippieOptions::default())
	}
}

impl CompletionEngine {
	pub fn new(options: HippieOptions) -> Self {
		Self {
			index: DocumentIndex::new(options.max_indexable_size),
			history: History::new(options.history_capacity),
			session: CyclingSession::default(),
			options,
		}
	}

	pub fn options(&self) -> &HippieOptions {
		&self.options
	}

	pub fn index(&self) -> &DocumentIndex {
		&self.index
	}

	pub fn history(&self) -> &History {
		&self.history
	}

	pub fn session(&self) -> &CyclingSession {
		&self.session
	}

	/// Indexes a newly opened document so its words are offered elsewhere.
	pub fn on_document_opened<B: Buffer + ?Sized>(&mut self, buffer: &B) {
		let doc = buffer.id();
		self.index.invalidate(doc);
		self.index.ensure(doc, buffer.text(), &[]);
	}

	/// Marks the document's words stale; they are rebuilt on the next trigger.
	pub fn on_document_changed(&mut self, doc: DocumentId) {
		self.index.invalidate(doc);
	}

	/// Drops every reference to a closed document. Its words stay in the pool.
	pub fn on_document_closed(&mut self, doc: DocumentId) {
		self.index.forget(doc);
		self.session.forget_doc(doc);
	}

	/// Replaces the word under each cursor with the next completion.
	///
	/// The primer is the word at the first cursor. A fresh trigger builds the
	/// candidate list and applies its first entry; triggering again on the
	/// applied text moves to the next entry. Returns no edits when there is no
	/// cursor or no word under the first one.
	pub fn trigger<B: Buffer + ?Sized>(&mut self, buffer: &B, cursors: &[CharIdx]) -> Vec<Edit> {
		let Some(&primary) = cursors.first() else {
			return Vec::new();
		};
		let doc = buffer.id();
		let text = buffer.text();
		let current = buffer.word_at(primary).slice(text).to_string();
		if current.is_empty() {
			tracing::trace!(?doc, pos = primary, "No word under cursor, ending cycle");
			self.session.reset();
			return Vec::new();
		}

		let Self {
			options,
			index,
			history,
			session,
		} = self;

		let (transition, cycle) = session.step(doc, &current, |primer| {
			let exclude = [primer];
			let exclude: &[&str] = if options.exclude_primer_from_index { &exclude } else { &[] };
			index.ensure(doc, text, exclude);
			CandidateList::build(primer, history.recall(primer), index.words(doc), index.global())
		});
		let chosen = cycle.current().to_owned();
		history.remember(cycle.primer(), &chosen);

		if transition == Transition::Started && cycle.candidates().len() == 1 {
			tracing::trace!(?doc, primer = %current, "No completions besides the primer");
		}
		if chosen != current {
			index.invalidate(doc);
		}

		let spans: BTreeSet<_> = cursors
			.iter()
			.map(|&pos| {
				let span = buffer.word_at(pos);
				(span.from(), span.to())
			})
			.collect();
		spans
			.into_iter()
			.map(|(from, to)| Edit::new(Range::new(from, to), chosen.clone()))
			.collect()
	}

	/// Returns the engine to its freshly constructed state.
	pub fn reset(&mut self) {
		self.index.reset();
		self.history.clear();
		self.session.reset();
		tracing::debug!("Reset completion state");
	}
}

#[cfg(test)]
mod tests;
