//! The subscription form: turn what the user typed into what the page shows.

use log::{debug, warn};

use crate::{feed, textual_id, FeedParams, FeedUrls};

/// Current values of the form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
	pub raw_id: String,
	pub language: String,
	pub after: String,
}

/// Sink for the two output values. Called once per input change with either
/// both URLs, the same error message twice, or two empty strings.
pub trait Presenter {
	fn present(&mut self, http: &str, webcal: &str);
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
	fn present(&mut self, http: &str, webcal: &str) {
		(**self).present(http, webcal);
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
	/// No textual ID entered.
	Cleared,
	Urls(FeedUrls),
	Invalid { message: String },
}

impl Outcome {
	/// The `(http, webcal)` pair to show for this outcome.
	#[must_use]
	pub fn values(&self) -> (&str, &str) {
		match self {
			Self::Cleared => ("", ""),
			Self::Urls(urls) => (&urls.http, &urls.webcal),
			Self::Invalid { message } => (message, message),
		}
	}
}

#[must_use]
pub fn resolve(base_url: &str, input: &FormInput) -> Outcome {
	if input.raw_id.is_empty() {
		return Outcome::Cleared;
	}

	let id = match textual_id::decode(&input.raw_id) {
		Ok(id) => id,
		Err(err) => {
			warn!("rejected textual ID {:?}: {err}", input.raw_id);

			return Outcome::Invalid {
				message: format!("Invalid textual ID '{}': {err}", input.raw_id),
			};
		}
	};

	debug!("textual ID {:?} is user {id}", input.raw_id);

	let params = FeedParams::new(input.language.as_str(), input.after.as_str());

	Outcome::Urls(feed::build(base_url, id, &params))
}

/// Resolve `input` and hand the result to `presenter`.
pub fn handle_input<P: Presenter>(base_url: &str, input: &FormInput, mut presenter: P) -> Outcome {
	let outcome = resolve(base_url, input);
	let (http, webcal) = outcome.values();

	presenter.present(http, webcal);

	outcome
}
