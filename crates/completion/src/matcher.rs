//! Fuzzy subsequence matching and ranking.
//!
//! A primer matches a candidate when every primer character occurs in the
//! candidate, in order, ignoring case. Each alignment is charged a penalty:
//!
//! - it starts at `1`, or `-1` when the first matched character is the first
//!   character of the candidate;
//! - every matched character adds `2 * gap`, where `gap` counts the skipped
//!   characters since the previous match (or since the start);
//! - a matched character sitting on a sub-word boundary (after `_` or `-`, or a
//!   capital following a non-capital) adds nothing, whatever the gap.
//!
//! The score of a candidate is its cheapest alignment. Candidates whose every
//! alignment costs more than [`MAX_PENALTY`] are rejected.

/// Highest penalty a candidate may carry and still be offered.
pub const MAX_PENALTY: i32 = 5;

/// Sort key of a matching candidate; smaller is better.
///
/// Ties on both fields are broken by comparing the candidate text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScoreKey {
	/// Cost of the cheapest alignment.
	pub penalty: i32,
	/// Candidate length in characters.
	pub len: usize,
}

#[inline]
fn fold(c: char) -> char {
	c.to_lowercase().next().unwrap_or(c)
}

#[inline]
fn is_delimiter(c: char) -> bool {
	c == '_' || c == '-'
}

/// Whether a match at `pos` starts a sub-word of `chars`.
#[inline]
fn is_boundary(chars: &[char], pos: usize) -> bool {
	if pos == 0 {
		return false;
	}
	let prev = chars[pos - 1];
	is_delimiter(prev) || (!prev.is_uppercase() && chars[pos].is_uppercase())
}

/// Scores `candidate` against `primer`, or `None` when it does not match.
///
/// An empty primer matches nothing.
pub fn score(primer: &str, candidate: &str) -> Option<ScoreKey> {
	let needle: Vec<char> = primer.chars().map(fold).collect();
	if needle.is_empty() {
		return None;
	}
	let chars: Vec<char> = candidate.chars().collect();
	if needle.len() > chars.len() {
		return None;
	}
	let folded: Vec<char> = chars.iter().copied().map(fold).collect();

	// row[j]: cheapest penalty of an alignment of the needle prefix so far whose
	// last match sits at j. Alignments over MAX_PENALTY are dropped eagerly;
	// penalties never decrease along an alignment.
	let mut row: Vec<Option<i32>> = folded
		.iter()
		.enumerate()
		.map(|(j, &c)| {
			if c != needle[0] {
				return None;
			}
			let cost = if j == 0 {
				-1
			} else if is_boundary(&chars, j) {
				1
			} else {
				1 + 2 * j as i32
			};
			(cost <= MAX_PENALTY).then_some(cost)
		})
		.collect();

	for &want in &needle[1..] {
		let mut next = vec![None; chars.len()];
		// Minima over all earlier positions q < j of row[q] and row[q] - 2q.
		let mut best_plain: Option<i32> = None;
		let mut best_gap: Option<i32> = None;
		let mut any = false;

		for j in 0..chars.len() {
			if folded[j] == want {
				let cost = if is_boundary(&chars, j) {
					best_plain
				} else {
					best_gap.map(|g| g + 2 * j as i32 - 2)
				};
				if let Some(cost) = cost.filter(|&c| c <= MAX_PENALTY) {
					next[j] = Some(cost);
					any = true;
				}
			}
			if let Some(prev) = row[j] {
				best_plain = Some(best_plain.map_or(prev, |b| b.min(prev)));
				let gap = prev - 2 * j as i32;
				best_gap = Some(best_gap.map_or(gap, |b| b.min(gap)));
			}
		}

		if !any {
			return None;
		}
		row = next;
	}

	row.into_iter().flatten().min().map(|penalty| ScoreKey {
		penalty,
		len: chars.len(),
	})
}

/// Candidates of a pool that match a primer, best first.
///
/// Produced by [`rank`]; consuming it does not re-run the matcher.
#[derive(Debug)]
pub struct Ranked<'a> {
	inner: std::vec::IntoIter<(ScoreKey, &'a str)>,
}

impl<'a> Iterator for Ranked<'a> {
	type Item = &'a str;

	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next().map(|(_, candidate)| candidate)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}

impl ExactSizeIterator for Ranked<'_> {}

impl<'a> Ranked<'a> {
	/// Yields each remaining candidate together with its score.
	pub fn with_scores(self) -> impl Iterator<Item = (ScoreKey, &'a str)> {
		self.inner
	}
}

/// Ranks every candidate of `pool` matching `primer`.
///
/// The primer itself is never part of the result. The order is total:
/// `(penalty, length, text)`, so identical inputs always rank identically.
pub fn rank<'a, I>(primer: &str, pool: I) -> Ranked<'a>
where
	I: IntoIterator<Item = &'a str>,
{
	let mut scored: Vec<(ScoreKey, &'a str)> = pool
		.into_iter()
		.filter(|candidate| *candidate != primer)
		.filter_map(|candidate| score(primer, candidate).map(|key| (key, candidate)))
		.collect();
	scored.sort_unstable();
	Ranked {
		inner: scored.into_iter(),
	}
}
