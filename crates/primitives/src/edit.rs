//! Region replacements handed to the host for application.

use ropey::Rope;
use thiserror::Error;

use crate::range::{CharIdx, Range};

/// Replaces the text of `range` with `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
	/// Region of the original document to replace.
	pub range: Range,
	/// New content for the region.
	pub text: String,
}

impl Replacement {
	pub fn new(range: Range, text: impl Into<String>) -> Self {
		Self {
			range,
			text: text.into(),
		}
	}
}

/// Reasons a batch of replacements cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
	/// A replacement reaches past the end of the document.
	#[error("replacement {from}..{to} exceeds document length {len}")]
	OutOfBounds {
		from: CharIdx,
		to: CharIdx,
		len: usize,
	},
	/// Two replacements touch the same characters.
	#[error("replacements at {first:?} and {second:?} overlap")]
	Overlap { first: Range, second: Range },
}

/// Applies a batch of replacements expressed against the same original text.
///
/// Replacements are validated up front and applied back to front so every
/// range stays valid. On error the document is left untouched.
pub fn apply_replacements(doc: &mut Rope, replacements: &[Replacement]) -> Result<(), EditError> {
	let len = doc.len_chars();
	let mut ordered: Vec<&Replacement> = replacements.iter().collect();
	ordered.sort_by_key(|r| (r.range.from(), r.range.to()));

	for r in &ordered {
		if r.range.to() > len {
			return Err(EditError::OutOfBounds {
				from: r.range.from(),
				to: r.range.to(),
				len,
			});
		}
	}
	for pair in ordered.windows(2) {
		if pair[0].range.to() > pair[1].range.from() || pair[0].range == pair[1].range {
			return Err(EditError::Overlap {
				first: pair[0].range,
				second: pair[1].range,
			});
		}
	}

	for r in ordered.iter().rev() {
		doc.remove(r.range.from()..r.range.to());
		doc.insert(r.range.from(), &r.text);
	}
	Ok(())
}
