//! Last chosen completion per primer.

use std::num::NonZeroUsize;

use lru::LruCache;

/// Default number of primers remembered.
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// Bounded primer → completion memory, evicting the least recently updated
/// primer on overflow. A capacity of zero disables it.
#[derive(Debug)]
pub struct History {
	entries: Option<LruCache<String, String>>,
}

impl Default for History {
	fn default() -> Self {
		Self::new(DEFAULT_HISTORY_CAPACITY)
	}
}

impl History {
	pub fn new(capacity: usize) -> Self {
		Self {
			entries: NonZeroUsize::new(capacity).map(LruCache::new),
		}
	}

	/// Records `chosen` as the completion applied for `primer`.
	///
	/// Choosing the primer itself means the user cycled back to the original
	/// text, so any earlier choice is forgotten instead.
	pub fn remember(&mut self, primer: &str, chosen: &str) {
		let Some(entries) = self.entries.as_mut() else {
			return;
		};
		if primer == chosen {
			entries.pop(primer);
		} else {
			entries.put(primer.to_owned(), chosen.to_owned());
		}
	}

	pub fn recall(&self, primer: &str) -> Option<&str> {
		self.entries.as_ref()?.peek(primer).map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.entries.as_ref().map_or(0, LruCache::len)
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn capacity(&self) -> usize {
		self.entries.as_ref().map_or(0, |e| e.cap().get())
	}

	pub fn clear(&mut self) {
		if let Some(entries) = self.entries.as_mut() {
			entries.clear();
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn recalls_last_choice() {
		let mut history = History::default();
		history.remember("hip", "hippie");
		history.remember("hip", "hippieWord");
		assert_eq!(history.recall("hip"), Some("hippieWord"));
		assert_eq!(history.recall("hi"), None);
		assert_eq!(history.len(), 1);
	}

	#[test]
	fn choosing_primer_forgets_entry() {
		let mut history = History::default();
		history.remember("hip", "hippie");
		history.remember("hip", "hip");
		assert_eq!(history.recall("hip"), None);
		assert!(history.is_empty());
	}

	#[test]
	fn evicts_oldest_primer() {
		let mut history = History::new(2);
		history.remember("aa", "aaa");
		history.remember("bb", "bbb");
		history.remember("aa", "aaaa");
		history.remember("cc", "ccc");

		assert_eq!(history.recall("bb"), None);
		assert_eq!(history.recall("aa"), Some("aaaa"));
		assert_eq!(history.recall("cc"), Some("ccc"));
		assert_eq!(history.capacity(), 2);
	}

	#[test]
	fn zero_capacity_disables() {
		let mut history = History::new(0);
		history.remember("hip", "hippie");
		assert_eq!(history.recall("hip"), None);
		assert_eq!(history.capacity(), 0);
	}

	#[test]
	fn clear_empties() {
		let mut history = History::default();
		history.remember("hip", "hippie");
		history.clear();
		assert!(history.is_empty());
	}
}
