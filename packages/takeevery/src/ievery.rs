use {crate::cursor::Cursor, std::iter::FusedIterator};

/// An iterator of [`Chunk`]s that draw from one shared cursor.
///
/// Producing a chunk pulls exactly one item from the source, its head. Every other item is pulled only when the chunk is driven. If a chunk is dropped or abandoned before it is exhausted, the next chunk starts right after the last item it pulled.
///
/// Chunks are meant to be driven in the order they are produced. Driving an older chunk after a newer one has been requested pulls from wherever the cursor currently stands.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IEvery<I>
where
	I: Iterator,
{
	cursor: Cursor<I>,
	size: usize,
	count: usize,
	done: bool,
}

/// A lazy view of at most `size` consecutive items of the source.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Chunk<I>
where
	I: Iterator,
{
	cursor: Cursor<I>,
	head: Option<I::Item>,
	remaining: usize,
}

impl<I> IEvery<I>
where
	I: Iterator,
{
	pub fn new(iter: I, size: usize) -> Self {
		Self {
			cursor: Cursor::new(iter),
			size,
			count: 0,
			done: false,
		}
	}

	/// Get the maximum number of items in a chunk.
	#[must_use]
	pub fn size(&self) -> usize {
		self.size
	}
}

impl<I> Iterator for IEvery<I>
where
	I: Iterator,
{
	type Item = Chunk<I>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}

		// The look ahead is never performed when the size is zero.
		if self.size == 0 {
			self.done = true;
			return None;
		}

		// Pull the head.
		let Some(head) = self.cursor.pull() else {
			self.done = true;
			tracing::trace!(size = self.size, count = self.count, "exhausted the source");
			return None;
		};
		self.count += 1;

		Some(Chunk {
			cursor: self.cursor.clone(),
			head: Some(head),
			remaining: self.size - 1,
		})
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		if self.done || self.size == 0 {
			return (0, Some(0));
		}

		// Each chunk consumes between one and size items.
		let (lower, upper) = self.cursor.size_hint();
		(lower.div_ceil(self.size), upper)
	}
}

impl<I> FusedIterator for IEvery<I> where I: Iterator {}

impl<I> Iterator for Chunk<I>
where
	I: Iterator,
{
	type Item = I::Item;

	fn next(&mut self) -> Option<Self::Item> {
		if let Some(head) = self.head.take() {
			return Some(head);
		}
		if self.remaining == 0 {
			return None;
		}
		self.remaining -= 1;
		let item = self.cursor.pull();
		if item.is_none() {
			self.remaining = 0;
			tracing::trace!("chunk exhausted the source");
		}
		item
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let head = usize::from(self.head.is_some());
		if self.remaining == 0 {
			return (head, Some(head));
		}
		let (lower, upper) = self.cursor.size_hint();
		let lower = head + lower.min(self.remaining);
		let upper = head + upper.map_or(self.remaining, |upper| upper.min(self.remaining));
		(lower, Some(upper))
	}
}

impl<I> FusedIterator for Chunk<I> where I: Iterator {}
