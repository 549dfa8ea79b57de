//! Word boundary helpers over rope text.

use std::sync::LazyLock;

use regex::Regex;
use ropey::RopeSlice;

use crate::range::{CharIdx, Range};

/// Unicode `\w`: alphabetic, marks, decimal digits, connector punctuation and
/// join controls.
static WORD_CHAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\w$").expect("word class compiles"));

/// Whether `c` belongs to a word. Shared by word spans and word extraction.
#[inline]
pub fn is_word_char(c: char) -> bool {
	if c.is_ascii() {
		return c.is_ascii_alphanumeric() || c == '_';
	}
	let mut buf = [0; 4];
	WORD_CHAR.is_match(c.encode_utf8(&mut buf))
}

/// Maximal runs of word characters in `text`, in order.
pub fn word_runs(text: &str) -> impl Iterator<Item = &str> {
	text.split(|c: char| !is_word_char(c)).filter(|run| !run.is_empty())
}

/// Walks back from `pos` over word characters.
pub fn find_word_start(text: RopeSlice, pos: CharIdx) -> CharIdx {
	let mut start = pos.min(text.len_chars());
	let mut chars = text.chars_at(start);
	while chars.prev().is_some_and(is_word_char) {
		start -= 1;
	}
	start
}

/// Walks forward from `pos` over word characters; the result is exclusive.
pub fn find_word_end(text: RopeSlice, pos: CharIdx) -> CharIdx {
	let start = pos.min(text.len_chars());
	start + text.chars_at(start).take_while(|&c| is_word_char(c)).count()
}

/// Returns the word touching `pos`.
///
/// A cursor directly after a word (`hip|`) or inside it (`hi|p`) both yield the
/// whole word. When neither neighbour of `pos` is a word character the result is
/// an empty range at `pos` (clamped to the end of the text).
pub fn word_span(text: RopeSlice, pos: CharIdx) -> Range {
	Range::new(find_word_start(text, pos), find_word_end(text, pos))
}
