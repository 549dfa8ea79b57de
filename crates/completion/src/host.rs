//! The seam between the engine and the editor hosting it.

use hippie_primitives::{CharIdx, DocumentId, Range, Replacement, RopeSlice, word_span};

/// A text edit the host applies after a trigger.
pub type Edit = Replacement;

/// Read-only view of a host document.
///
/// The host keeps ownership of the text; the engine only reads it while
/// handling a lifecycle event or a trigger.
pub trait Buffer {
	fn id(&self) -> DocumentId;

	fn text(&self) -> RopeSlice<'_>;

	/// The word region touching `pos`.
	///
	/// Hosts with their own notion of word boundaries override this; the
	/// default is the run of alphanumeric/underscore characters around `pos`.
	fn word_at(&self, pos: CharIdx) -> Range {
		word_span(self.text(), pos)
	}
}
