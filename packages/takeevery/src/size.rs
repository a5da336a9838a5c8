use crate::Error;

/// A validated batch size.
#[derive(
	Clone,
	Copy,
	Debug,
	Default,
	Eq,
	Hash,
	Ord,
	PartialEq,
	PartialOrd,
	derive_more::Display,
	serde::Deserialize,
	serde::Serialize,
)]
#[serde(into = "u64", try_from = "i128")]
pub struct Size(usize);

impl Size {
	#[must_use]
	pub fn new(size: usize) -> Self {
		Self(size)
	}

	#[must_use]
	pub fn get(self) -> usize {
		self.0
	}
}

impl From<usize> for Size {
	fn from(value: usize) -> Self {
		Self(value)
	}
}

impl From<Size> for usize {
	fn from(value: Size) -> Self {
		value.0
	}
}

impl From<Size> for u64 {
	fn from(value: Size) -> Self {
		value.0 as u64
	}
}

impl TryFrom<i128> for Size {
	type Error = Error;

	fn try_from(value: i128) -> Result<Self, Self::Error> {
		let size = usize::try_from(value).map_err(|_| Error::Size { value })?;
		Ok(Self(size))
	}
}

impl TryFrom<i64> for Size {
	type Error = Error;

	fn try_from(value: i64) -> Result<Self, Self::Error> {
		i128::from(value).try_into()
	}
}

impl TryFrom<isize> for Size {
	type Error = Error;

	fn try_from(value: isize) -> Result<Self, Self::Error> {
		(value as i128).try_into()
	}
}

impl std::str::FromStr for Size {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let value = s.trim().parse::<i128>()?;
		value.try_into()
	}
}
