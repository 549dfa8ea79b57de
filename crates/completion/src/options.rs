//! Engine tunables.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::history::DEFAULT_HISTORY_CAPACITY;
use crate::index::DEFAULT_MAX_INDEXABLE_SIZE;

/// Tunables for [`CompletionEngine`](crate::CompletionEngine).
///
/// Loaded from a TOML table with kebab-case keys; absent keys keep their
/// defaults:
///
/// ```toml
/// max-indexable-size = 1000000
/// history-capacity = 100
/// exclude-primer-from-index = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct HippieOptions {
	/// Documents with more characters than this are never indexed.
	pub max_indexable_size: usize,
	/// Number of primers whose last choice is remembered. Zero disables history.
	pub history_capacity: usize,
	/// Leave the word being completed out of its own document's index.
	pub exclude_primer_from_index: bool,
}

impl Default for HippieOptions {
	fn default() -> Self {
		Self {
			max_indexable_size: DEFAULT_MAX_INDEXABLE_SIZE,
			history_capacity: DEFAULT_HISTORY_CAPACITY,
			exclude_primer_from_index: true,
		}
	}
}

impl HippieOptions {
	pub fn from_toml(src: &str) -> Result<Self> {
		Ok(toml::from_str(src)?)
	}

	pub fn to_toml(&self) -> Result<String> {
		Ok(toml::to_string(self)?)
	}
}
