//! Textual IDs: numeric IDs written as base-25 numerals with the letters `a`
//! through `y` as digits.
//!
//! The first character is the least-significant digit, so `"ab"` is 25 and
//! `"ba"` is 1. Previously handed out IDs depend on this order.

use log::trace;

use crate::{Error, Result};

pub const BASE: u64 = 25;

const ZERO_DIGIT: char = 'a';

fn digit_value(character: char) -> Option<u64> {
	let offset = u32::from(character).checked_sub(u32::from(ZERO_DIGIT))?;

	(u64::from(offset) < BASE).then_some(u64::from(offset))
}

#[allow(clippy::cast_possible_truncation)]
fn digit_char(value: u64) -> char {
	debug_assert!(value < BASE);

	char::from(ZERO_DIGIT as u8 + value as u8)
}

/// Decode a textual ID into its numeric ID.
///
/// Every character is validated before any arithmetic happens, so an invalid
/// character is reported even when the string would also overflow. The empty
/// string decodes to 0; callers treating it as "no ID" must check first.
///
/// # Errors
///
/// [`Error::InvalidCharacter`] for a character outside `'a'..='y'`, and
/// [`Error::Overflow`] when the value does not fit a `u64`.
pub fn decode(text: &str) -> Result<u64> {
	let digits = text
		.chars()
		.enumerate()
		.map(|(position, character)| {
			digit_value(character).ok_or(Error::InvalidCharacter {
				character,
				position,
			})
		})
		.collect::<Result<Vec<_>>>()?;

	let mut id = 0u64;

	for (position, digit) in digits.into_iter().enumerate() {
		// zero digits contribute nothing, however far out they sit
		if digit == 0 {
			continue;
		}

		id = u32::try_from(position)
			.ok()
			.and_then(|exponent| BASE.checked_pow(exponent))
			.and_then(|weight| weight.checked_mul(digit))
			.and_then(|value| id.checked_add(value))
			.ok_or(Error::Overflow { position })?;
	}

	trace!("decoded textual ID {text:?} to {id}");

	Ok(id)
}

/// Encode a numeric ID into its canonical textual ID.
#[must_use]
pub fn encode(mut id: u64) -> String {
	let mut text = String::new();

	loop {
		text.push(digit_char(id % BASE));
		id /= BASE;

		if id == 0 {
			break text;
		}
	}
}

/// Whether `text` is exactly what [`encode`] produces for its value, i.e. it
/// has no trailing zero digits.
#[must_use]
pub fn is_canonical(text: &str) -> bool {
	if text == "a" {
		return true;
	}

	!text.is_empty()
		&& !text.ends_with(ZERO_DIGIT)
		&& text.chars().all(|c| digit_value(c).is_some())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decodes_single_digits() {
		assert_eq!(decode("a"), Ok(0));
		assert_eq!(decode("b"), Ok(1));
		assert_eq!(decode("y"), Ok(24));
	}

	#[test]
	fn first_character_is_least_significant() {
		assert_eq!(decode("ba"), Ok(1));
		assert_eq!(decode("ab"), Ok(25));
		assert_eq!(decode("bb"), Ok(26));
		assert_eq!(decode("aab"), Ok(625));
	}

	#[test]
	fn empty_decodes_to_zero() {
		assert_eq!(decode(""), Ok(0));
	}

	#[test]
	fn rejects_characters_outside_alphabet() {
		assert_eq!(
			decode("a1"),
			Err(Error::InvalidCharacter {
				character: '1',
				position: 1,
			})
		);
		assert_eq!(
			decode("AB"),
			Err(Error::InvalidCharacter {
				character: 'A',
				position: 0,
			})
		);

		for text in ["z", "{", "`", "ž", "a b"] {
			assert!(
				matches!(decode(text), Err(Error::InvalidCharacter { .. })),
				"{text:?} should be rejected"
			);
		}
	}

	#[test]
	fn invalid_character_message_names_the_character() {
		let err = decode("a1").unwrap_err();

		assert_eq!(err.to_string(), "Invalid character 1");
	}

	#[test]
	fn invalid_character_wins_over_overflow() {
		let text = format!("{}1", "y".repeat(40));

		assert!(matches!(
			decode(&text),
			Err(Error::InvalidCharacter {
				character: '1',
				position: 40,
			})
		));
	}

	#[test]
	fn overflow_is_reported() {
		assert!(matches!(
			decode(&"y".repeat(20)),
			Err(Error::Overflow { .. })
		));
	}

	#[test]
	fn trailing_zero_digits_never_overflow() {
		let text = format!("b{}", "a".repeat(100));

		assert_eq!(decode(&text), Ok(1));
	}

	#[test]
	fn u64_max_round_trips() {
		let text = encode(u64::MAX);

		assert_eq!(decode(&text), Ok(u64::MAX));
	}

	#[test]
	fn encodes_known_values() {
		assert_eq!(encode(0), "a");
		assert_eq!(encode(1), "b");
		assert_eq!(encode(24), "y");
		assert_eq!(encode(25), "ab");
		assert_eq!(encode(26), "bb");
	}

	#[test]
	fn encode_then_decode_is_identity() {
		let mut id = 1u64;

		while let Some(next) = id.checked_mul(7) {
			for candidate in [id - 1, id, id + 1] {
				assert_eq!(decode(&encode(candidate)), Ok(candidate));
			}
			id = next;
		}
	}

	#[test]
	fn canonical_text_round_trips() {
		for text in ["a", "b", "ab", "yy", "mjd", "abcdefg"] {
			assert!(is_canonical(text), "{text:?}");
			assert_eq!(encode(decode(text).unwrap()), text);
		}
	}

	#[test]
	fn non_canonical_text() {
		for text in ["", "aa", "ba", "1", "bz"] {
			assert!(!is_canonical(text), "{text:?}");
		}
	}
}
