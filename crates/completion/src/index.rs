//! Per-document word cache and the cross-document word pool.
//!
//! Goals:
//! - invalidation is O(1) so it can run on every keystroke
//! - rebuilds happen lazily, at most once per completion request
//! - documents above the size threshold are never scanned
//! - the global pool only grows; closing a document does not shrink it

use std::borrow::Cow;

use hippie_primitives::{DocumentId, RopeSlice};
use rustc_hash::FxHashMap;

use crate::words::{WordSet, extract_excluding};

/// Default threshold, in characters, above which a document is not indexed.
pub const DEFAULT_MAX_INDEXABLE_SIZE: usize = 1_000_000;

/// Cache state of one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexEntry {
	/// Word set matching the document content since the last invalidation.
	Fresh(WordSet),
	/// Content changed; rebuild on next use.
	Stale,
	/// Too large to index. Re-checked only after the next invalidation.
	Oversized { chars: usize },
}

impl IndexEntry {
	pub fn words(&self) -> Option<&WordSet> {
		match self {
			IndexEntry::Fresh(words) => Some(words),
			IndexEntry::Stale | IndexEntry::Oversized { .. } => None,
		}
	}
}

/// Union of every word set ever indexed.
#[derive(Debug, Default, Clone)]
pub struct GlobalPool {
	words: WordSet,
}

impl GlobalPool {
	fn absorb(&mut self, words: &WordSet) {
		self.words.extend(words.iter().cloned());
	}

	pub fn contains(&self, word: &str) -> bool {
		self.words.contains(word)
	}

	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.words.iter().map(String::as_str)
	}

	fn clear(&mut self) {
		self.words.clear();
	}
}

impl<S: Into<String>> FromIterator<S> for GlobalPool {
	fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
		Self {
			words: iter.into_iter().map(Into::into).collect(),
		}
	}
}

/// Lazily rebuilt word sets, keyed by document.
#[derive(Debug)]
pub struct DocumentIndex {
	entries: FxHashMap<DocumentId, IndexEntry>,
	pool: GlobalPool,
	max_indexable_size: usize,
}

impl Default for DocumentIndex {
	fn default() -> Self {
		Self::new(DEFAULT_MAX_INDEXABLE_SIZE)
	}
}

impl DocumentIndex {
	pub fn new(max_indexable_size: usize) -> Self {
		Self {
			entries: FxHashMap::default(),
			pool: GlobalPool::default(),
			max_indexable_size,
		}
	}

	pub fn max_indexable_size(&self) -> usize {
		self.max_indexable_size
	}

	/// Marks the cached word set of `doc` as stale.
	pub fn invalidate(&mut self, doc: DocumentId) {
		self.entries.insert(doc, IndexEntry::Stale);
	}

	/// Returns the word set of `doc`, rebuilding it from `text` if stale.
	///
	/// Words listed in `exclude` are left out of a rebuilt set (and therefore
	/// out of the global pool). They have no effect on an already fresh entry.
	/// Returns `None` for oversized documents.
	pub fn ensure(&mut self, doc: DocumentId, text: RopeSlice<'_>, exclude: &[&str]) -> Option<&WordSet> {
		let cached = matches!(
			self.entries.get(&doc),
			Some(IndexEntry::Fresh(_) | IndexEntry::Oversized { .. })
		);
		if !cached {
			let entry = self.build(doc, text, exclude);
			self.entries.insert(doc, entry);
		}
		self.words(doc)
	}

	fn build(&mut self, doc: DocumentId, text: RopeSlice<'_>, exclude: &[&str]) -> IndexEntry {
		let chars = text.len_chars();
		if chars > self.max_indexable_size {
			tracing::debug!(
				?doc,
				chars,
				limit = self.max_indexable_size,
				"Skipping document above the indexable size"
			);
			return IndexEntry::Oversized { chars };
		}

		let content: Cow<'_, str> = text.into();
		let words = extract_excluding(&content, exclude);
		self.pool.absorb(&words);
		tracing::debug!(?doc, words = words.len(), pool = self.pool.len(), "Rebuilt document word set");
		IndexEntry::Fresh(words)
	}

	/// Returns the fresh word set of `doc`, if any, without rebuilding.
	pub fn words(&self, doc: DocumentId) -> Option<&WordSet> {
		self.entries.get(&doc).and_then(IndexEntry::words)
	}

	pub fn entry(&self, doc: DocumentId) -> Option<&IndexEntry> {
		self.entries.get(&doc)
	}

	pub fn is_tracked(&self, doc: DocumentId) -> bool {
		self.entries.contains_key(&doc)
	}

	/// Drops all state for a closed document. Its words stay in the pool.
	pub fn forget(&mut self, doc: DocumentId) -> bool {
		let removed = self.entries.remove(&doc).is_some();
		if removed {
			tracing::debug!(?doc, "Forgot closed document");
		}
		removed
	}

	pub fn global(&self) -> &GlobalPool {
		&self.pool
	}

	/// Number of tracked documents.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Forgets every document and empties the pool.
	pub fn reset(&mut self) {
		self.entries.clear();
		self.pool.clear();
	}
}
