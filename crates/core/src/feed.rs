//! Feed subscription URLs.

use std::fmt;

use log::debug;

/// Path of the calendar feed endpoint, relative to the page's base location.
pub const FEED_PATH: &str = "services/feeder/usercalendar.ics";

pub const WEBCAL_SCHEME: &str = "webcal";

/// Query values other than the ID. Both are embedded verbatim, without
/// percent-encoding, so existing links keep working.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedParams {
	pub language: String,
	/// Omitted from the URL when empty.
	pub after: String,
}

impl FeedParams {
	#[must_use]
	pub fn new(language: impl Into<String>, after: impl Into<String>) -> Self {
		Self {
			language: language.into(),
			after: after.into(),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
	Http,
	Webcal,
}

impl Target {
	/// Suffix of the page elements showing this target (`input-http`, `a-webcal`, ...).
	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::Http => "http",
			Self::Webcal => "webcal",
		}
	}

	/// Pair the two output values with their targets, in display order.
	#[must_use]
	pub fn pair<'a>(http: &'a str, webcal: &'a str) -> [(Self, &'a str); 2] {
		[(Self::Http, http), (Self::Webcal, webcal)]
	}
}

impl fmt::Display for Target {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(self.label())
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedUrls {
	pub http: String,
	pub webcal: String,
}

/// Build the HTTP feed URL for `id` and its `webcal` twin.
///
/// `base_url` is the page's own location and is used as-is, so it should end
/// with a `/`.
#[must_use]
pub fn build(base_url: &str, id: u64, params: &FeedParams) -> FeedUrls {
	let mut http = format!(
		"{base_url}{FEED_PATH}?id={id}&language={}",
		params.language
	);

	if !params.after.is_empty() {
		http.push_str("&after=");
		http.push_str(&params.after);
	}

	let webcal = to_webcal(&http);

	debug!("built feed URLs {http} and {webcal}");

	FeedUrls { http, webcal }
}

/// Replace a leading `https` or `http` with `webcal`. Nothing past the prefix
/// is touched; input without such a prefix is returned unchanged.
#[must_use]
pub fn to_webcal(http_url: &str) -> String {
	match http_url
		.strip_prefix("https")
		.or_else(|| http_url.strip_prefix("http"))
	{
		Some(rest) => format!("{WEBCAL_SCHEME}{rest}"),
		None => http_url.to_string(),
	}
}
