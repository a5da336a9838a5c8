use std::{cell::RefCell, rc::Rc};

/// A single-pass cursor over an iterator, shared between an [`IEvery`](crate::IEvery) and the chunks it yields.
///
/// Each pull borrows the iterator only for the duration of one call to `next`, so driving two chunks out of order never panics. The order of the items they observe is unspecified in that case.
pub(crate) struct Cursor<I> {
	iter: Rc<RefCell<I>>,
}

impl<I> Cursor<I>
where
	I: Iterator,
{
	pub fn new(iter: I) -> Self {
		let iter = Rc::new(RefCell::new(iter));
		Self { iter }
	}

	pub fn pull(&self) -> Option<I::Item> {
		self.iter.borrow_mut().next()
	}

	pub fn size_hint(&self) -> (usize, Option<usize>) {
		self.iter.borrow().size_hint()
	}
}

impl<I> Clone for Cursor<I> {
	fn clone(&self) -> Self {
		let iter = self.iter.clone();
		Self { iter }
	}
}
