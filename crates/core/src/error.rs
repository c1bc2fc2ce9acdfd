use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
	/// A character outside `'a'..='y'`.
	#[error("Invalid character {character}")]
	InvalidCharacter { character: char, position: usize },

	/// The decoded value does not fit a `u64`.
	#[error("Numeric ID overflows at position {position}")]
	Overflow { position: usize },
}
