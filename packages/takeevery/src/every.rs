use std::iter::FusedIterator;

#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Every<I>
where
	I: Iterator,
{
	iter: I,
	size: usize,
	count: usize,
	done: bool,
}

impl<I> Every<I>
where
	I: Iterator,
{
	pub fn new(iter: I, size: usize) -> Self {
		Self {
			iter,
			size,
			count: 0,
			done: false,
		}
	}

	/// Get the maximum number of items in a batch.
	#[must_use]
	pub fn size(&self) -> usize {
		self.size
	}
}

impl<I> Iterator for Every<I>
where
	I: Iterator,
{
	type Item = Vec<I::Item>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}

		// Taking zero items at a time never touches the source.
		if self.size == 0 {
			self.done = true;
			return None;
		}

		// The capacity comes from the source's size hint, so a large size over a short source does not over-allocate.
		let batch = self.iter.by_ref().take(self.size).collect::<Vec<_>>();
		if batch.is_empty() {
			self.done = true;
			tracing::trace!(size = self.size, count = self.count, "exhausted the source");
			return None;
		}
		self.count += 1;

		Some(batch)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		if self.done || self.size == 0 {
			return (0, Some(0));
		}
		let (lower, upper) = self.iter.size_hint();
		let lower = lower.div_ceil(self.size);
		let upper = upper.map(|upper| upper.div_ceil(self.size));
		(lower, upper)
	}
}

impl<I> FusedIterator for Every<I> where I: Iterator {}
