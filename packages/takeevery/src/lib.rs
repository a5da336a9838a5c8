pub use self::{
	every::Every,
	ievery::{Chunk, IEvery},
	size::Size,
	try_every::TryEvery,
};

mod cursor;
mod every;
mod ievery;
mod size;
mod try_every;


/// A result alias that defaults to `Error` as the error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(
	Clone, Debug, Eq, PartialEq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum Error {
	#[display("failed to parse the batch size")]
	#[from]
	Parse { source: std::num::ParseIntError },

	#[display("invalid batch size {value}, expected a nonnegative integer")]
	Size { value: i128 },
}

/// Batch the items of `iterable` into vectors of at most `size` items.
pub fn every<I>(iterable: I, size: usize) -> Every<I::IntoIter>
where
	I: IntoIterator,
{
	Every::new(iterable.into_iter(), size)
}

/// Batch the items of `iterable` into lazy chunks of at most `size` items that share one cursor.
pub fn ievery<I>(iterable: I, size: usize) -> IEvery<I::IntoIter>
where
	I: IntoIterator,
{
	IEvery::new(iterable.into_iter(), size)
}

/// Batch the `Ok` items of `iterable`, returning the first `Err` unchanged.
pub fn try_every<I, T, E>(iterable: I, size: usize) -> TryEvery<I::IntoIter>
where
	I: IntoIterator<Item = std::result::Result<T, E>>,
{
	TryEvery::new(iterable.into_iter(), size)
}

pub trait Ext: Iterator {
	fn every(self, size: usize) -> Every<Self>
	where
		Self: Sized,
	{
		Every::new(self, size)
	}

	fn ievery(self, size: usize) -> IEvery<Self>
	where
		Self: Sized,
	{
		IEvery::new(self, size)
	}

	fn try_every<T, E>(self, size: usize) -> TryEvery<Self>
	where
		Self: Iterator<Item = std::result::Result<T, E>> + Sized,
	{
		TryEvery::new(self, size)
	}
}

impl<T> Ext for T where T: Iterator + ?Sized {}
