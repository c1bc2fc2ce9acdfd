#![warn(clippy::pedantic)]

use goout_feed_core::{form, textual_id, FormInput, Presenter};
use wasm_bindgen::prelude::{wasm_bindgen, JsValue};

#[cfg(feature = "console_error_panic_hook")]
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
	console_error_panic_hook::set_once();
}

#[wasm_bindgen]
extern "C" {
	/// Any JS object with a `present(http, webcal)` method, typically one that
	/// writes into the `input-*` fields and `a-*` links of the page.
	pub type JsPresenter;

	#[wasm_bindgen(method)]
	fn present(this: &JsPresenter, http: &str, webcal: &str);
}

impl Presenter for &JsPresenter {
	fn present(&mut self, http: &str, webcal: &str) {
		JsPresenter::present(*self, http, webcal);
	}
}

/// Handler for the textual ID field's `input` event.
#[wasm_bindgen(js_name = inputChanged)]
pub fn input_changed(
	presenter: &JsPresenter,
	base_url: &str,
	raw_id: String,
	language: String,
	after: String,
) {
	let input = FormInput {
		raw_id,
		language,
		after,
	};

	form::handle_input(base_url, &input, presenter);
}

/// # Errors
///
/// The decoder's message when `text` is not a valid textual ID.
#[wasm_bindgen(js_name = decodeTextualId)]
pub fn decode_textual_id(text: &str) -> Result<u64, JsValue> {
	textual_id::decode(text).map_err(|err| JsValue::from_str(&err.to_string()))
}

#[wasm_bindgen(js_name = encodeNumericId)]
#[must_use]
pub fn encode_numeric_id(id: u64) -> String {
	textual_id::encode(id)
}
