use std::iter::FusedIterator;

/// Batches the `Ok` items of a fallible source.
///
/// The first `Err` pulled from the source is returned as is and ends the iteration. Items already gathered into the batch in progress are dropped.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct TryEvery<I> {
	iter: I,
	size: usize,
	done: bool,
}

impl<I> TryEvery<I> {
	pub fn new(iter: I, size: usize) -> Self {
		Self {
			iter,
			size,
			done: false,
		}
	}
}

impl<I, T, E> Iterator for TryEvery<I>
where
	I: Iterator<Item = Result<T, E>>,
{
	type Item = Result<Vec<T>, E>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done || self.size == 0 {
			self.done = true;
			return None;
		}
		let mut batch = Vec::new();
		while batch.len() < self.size {
			match self.iter.next() {
				Some(Ok(item)) => batch.push(item),
				Some(Err(error)) => {
					self.done = true;
					tracing::trace!(dropped = batch.len(), "the source failed");
					return Some(Err(error));
				},
				None => break,
			}
		}
		if batch.is_empty() {
			self.done = true;
			return None;
		}
		Some(Ok(batch))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		if self.done || self.size == 0 {
			return (0, Some(0));
		}

		// An error may end the iteration early.
		let (_, upper) = self.iter.size_hint();
		(0, upper.map(|upper| upper.div_ceil(self.size)))
	}
}

impl<I, T, E> FusedIterator for TryEvery<I> where I: Iterator<Item = Result<T, E>> {}
