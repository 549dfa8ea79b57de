use hippie_primitives::{Rope, RopeSlice, apply_replacements};
use pretty_assertions::assert_eq;

use super::*;
use crate::index::IndexEntry;

struct Doc {
	id: DocumentId,
	rope: Rope,
}

impl Doc {
	fn new(id: u64, text: &str) -> Self {
		Self {
			id: DocumentId(id),
			rope: Rope::from_str(text),
		}
	}

	fn apply(&mut self, edits: &[Edit]) {
		apply_replacements(&mut self.rope, edits).unwrap();
	}

	fn end(&self) -> CharIdx {
		self.rope.len_chars()
	}
}

impl Buffer for Doc {
	fn id(&self) -> DocumentId {
		self.id
	}

	fn text(&self) -> RopeSlice<'_> {
		self.rope.slice(..)
	}
}

#[test]
fn first_trigger_replaces_primer_span() {
	let mut engine = CompletionEngine::default();
	let doc = Doc::new(1, "let hippieWord = getHippieWord(); ship hip");

	let edits = engine.trigger(&doc, &[doc.end()]);
	assert_eq!(edits, [Edit::new(Range::new(39, 42), "hippieWord")]);
	assert_eq!(engine.history().recall("hip"), Some("hippieWord"));
}

#[test]
fn primer_is_kept_out_of_its_own_index() {
	let mut engine = CompletionEngine::default();
	let doc = Doc::new(1, "hippie hip");

	engine.trigger(&doc, &[doc.end()]);
	assert!(!engine.index().global().contains("hip"));
	assert!(engine.index().global().contains("hippie"));
}

#[test]
fn primer_can_be_indexed_when_configured() {
	let mut engine = CompletionEngine::new(HippieOptions {
		exclude_primer_from_index: false,
		..HippieOptions::default()
	});
	let doc = Doc::new(1, "hippie hip");

	engine.trigger(&doc, &[doc.end()]);
	assert!(engine.index().global().contains("hip"));
}

#[test]
fn applying_a_candidate_invalidates_the_document() {
	let mut engine = CompletionEngine::default();
	let doc = Doc::new(1, "hippie hip");

	engine.trigger(&doc, &[doc.end()]);
	assert_eq!(engine.index().entry(doc.id), Some(&IndexEntry::Stale));
}

#[test]
fn no_cursor_or_empty_word_is_a_no_op() {
	let mut engine = CompletionEngine::default();
	let doc = Doc::new(1, "hippie  ");

	assert!(engine.trigger(&doc, &[]).is_empty());
	assert!(engine.trigger(&doc, &[doc.end()]).is_empty());
	assert!(engine.session().is_idle());
	assert!(engine.index().is_empty());
}

#[test]
fn opening_a_document_feeds_the_pool() {
	let mut engine = CompletionEngine::default();
	engine.on_document_opened(&Doc::new(1, "elephant"));
	let other = Doc::new(2, "ele");

	assert_eq!(engine.trigger(&other, &[other.end()]), [Edit::new(Range::new(0, 3), "elephant")]);
}

#[test]
fn closing_forgets_document_but_keeps_pool() {
	let mut engine = CompletionEngine::default();
	let mut doc = Doc::new(1, "elephant ele");
	let edits = engine.trigger(&doc, &[doc.end()]);
	doc.apply(&edits);

	engine.on_document_closed(doc.id);
	assert!(engine.session().is_idle());
	assert!(!engine.index().is_tracked(doc.id));
	assert!(engine.index().global().contains("elephant"));
}

#[test]
fn reset_clears_everything() {
	let mut engine = CompletionEngine::default();
	let doc = Doc::new(1, "elephant ele");
	engine.trigger(&doc, &[doc.end()]);

	engine.reset();
	assert!(engine.index().is_empty());
	assert!(engine.index().global().is_empty());
	assert!(engine.history().is_empty());
	assert!(engine.session().is_idle());
}
