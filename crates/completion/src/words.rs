//! Word extraction.

use hippie_primitives::word_runs;
use rustc_hash::FxHashSet;

/// Distinct words of a document, case preserved.
pub type WordSet = FxHashSet<String>;

/// Word runs of at least two characters.
fn words(text: &str) -> impl Iterator<Item = &str> {
	word_runs(text).filter(|run| run.chars().nth(1).is_some())
}

/// Returns every distinct word of at least two characters in `text`.
pub fn extract(text: &str) -> WordSet {
	words(text).map(str::to_owned).collect()
}

/// Like [`extract`], minus the words listed in `exclude`.
pub fn extract_excluding(text: &str, exclude: &[&str]) -> WordSet {
	words(text).filter(|w| !exclude.contains(w)).map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn sorted(set: WordSet) -> Vec<String> {
		let mut words: Vec<_> = set.into_iter().collect();
		words.sort();
		words
	}

	#[test]
	fn extracts_distinct_words() {
		let words = extract("let hippieWord = getHippieWord(); hippieWord");
		assert_eq!(sorted(words), ["getHippieWord", "hippieWord", "let"]);
	}

	#[test]
	fn skips_single_characters() {
		let words = extract("a b c = x + yy");
		assert_eq!(sorted(words), ["yy"]);
	}

	#[test]
	fn keeps_underscores_digits_and_case() {
		let words = extract("MAX_SIZE max_size v2 _x");
		assert_eq!(sorted(words), ["MAX_SIZE", "_x", "max_size", "v2"]);
	}

	#[test]
	fn splits_on_punctuation_and_dashes() {
		let words = extract("foo-bar.baz::qux");
		assert_eq!(sorted(words), ["bar", "baz", "foo", "qux"]);
	}

	#[test]
	fn unicode_letters_are_word_characters() {
		let words = extract("naïve café");
		assert_eq!(sorted(words), ["café", "naïve"]);
	}

	#[test]
	fn combining_marks_and_connectors_stay_inside_words() {
		let words = extract("cafe\u{301}s x\u{301} under\u{203F}tie sup\u{b2}");
		assert_eq!(sorted(words), ["cafe\u{301}s", "sup", "under\u{203F}tie", "x\u{301}"]);
	}

	#[test]
	fn empty_text_has_no_words() {
		assert!(extract("").is_empty());
		assert!(extract("  ;; \n").is_empty());
	}

	#[test]
	fn excluding_drops_listed_words() {
		let words = extract_excluding("hip hippie hip ship", &["hip"]);
		assert_eq!(sorted(words), ["hippie", "ship"]);
	}
}
