//! In-memory host used by the engine integration tests.

use hippie_completion::{Buffer, CompletionEngine, Edit};
use hippie_primitives::{CharIdx, DocumentId, Rope, RopeSlice, apply_replacements};

pub struct TestBuffer {
	id: DocumentId,
	rope: Rope,
}

impl TestBuffer {
	pub fn new(text: &str) -> Self {
		Self {
			id: DocumentId::next(),
			rope: Rope::from_str(text),
		}
	}

	pub fn contents(&self) -> String {
		self.rope.to_string()
	}

	pub fn end(&self) -> CharIdx {
		self.rope.len_chars()
	}

	/// Inserts `text` at `pos` and notifies the engine, as an editor would on a keystroke.
	pub fn type_at(&mut self, engine: &mut CompletionEngine, pos: CharIdx, text: &str) {
		self.rope.insert(pos, text);
		engine.on_document_changed(self.id);
	}

	/// Applies trigger edits and notifies the engine.
	pub fn apply(&mut self, engine: &mut CompletionEngine, edits: &[Edit]) {
		apply_replacements(&mut self.rope, edits).unwrap();
		if !edits.is_empty() {
			engine.on_document_changed(self.id);
		}
	}
}

impl Buffer for TestBuffer {
	fn id(&self) -> DocumentId {
		self.id
	}

	fn text(&self) -> RopeSlice<'_> {
		self.rope.slice(..)
	}
}

/// Triggers at the end of the buffer, applies the result and returns the new contents.
pub fn press(engine: &mut CompletionEngine, buffer: &mut TestBuffer) -> String {
	let end = buffer.end();
	press_at(engine, buffer, &[end])
}

/// Triggers with the given cursors, applies the result and returns the new contents.
pub fn press_at(engine: &mut CompletionEngine, buffer: &mut TestBuffer, cursors: &[CharIdx]) -> String {
	let edits = engine.trigger(&*buffer, cursors);
	buffer.apply(engine, &edits);
	buffer.contents()
}
