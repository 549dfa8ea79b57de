use ropey::RopeSlice;

/// Character offset into a document. Hosts convert from bytes or UTF-16
/// before calling in.
pub type CharIdx = usize;

/// Half-open character region `[from, to)`.
///
/// `anchor` and `head` may come in either order; edits returned by the engine
/// always have `anchor <= head`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
	pub anchor: CharIdx,
	pub head: CharIdx,
}

impl Range {
	pub fn new(anchor: CharIdx, head: CharIdx) -> Self {
		Self { anchor, head }
	}

	/// Empty region at `pos`; replacing it inserts text.
	pub fn point(pos: CharIdx) -> Self {
		Self::new(pos, pos)
	}

	#[inline]
	pub fn from(&self) -> CharIdx {
		self.anchor.min(self.head)
	}

	#[inline]
	pub fn to(&self) -> CharIdx {
		self.anchor.max(self.head)
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.to() - self.from()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.anchor == self.head
	}

	pub fn contains(&self, pos: CharIdx) -> bool {
		(self.from()..self.to()).contains(&pos)
	}

	/// Text under the region. Ends past the slice are cut to its length.
	pub fn slice<'a>(&self, text: RopeSlice<'a>) -> RopeSlice<'a> {
		let len = text.len_chars();
		text.slice(self.from().min(len)..self.to().min(len))
	}
}
