#![warn(clippy::pedantic)]
//! Subscription-form logic for the GoOut calendar feed: textual ID decoding and
//! feed URL construction.

pub mod error;
pub mod feed;
pub mod form;
pub mod textual_id;

pub use error::{Error, Result};
pub use feed::{FeedParams, FeedUrls, Target};
pub use form::{FormInput, Outcome, Presenter};
