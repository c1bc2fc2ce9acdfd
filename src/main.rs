#![warn(clippy::pedantic)]

use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use goout_feed_core::{form, textual_id, FormInput, Outcome, Presenter, Target};
use log::warn;

const DEFAULT_BASE_URL: &str = "https://goout.strohel.eu/";

#[derive(Parser, Debug)]
#[command(version, about = "Subscription URLs for GoOut user calendars")]
struct Args {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Print the HTTP and webcal feed URLs for a textual ID
	Urls {
		#[arg(value_name = "TEXT_ID", default_value = "")]
		raw_id: String,
		#[arg(short, long, env = "GOOUT_FEED_BASE_URL", default_value = DEFAULT_BASE_URL)]
		base_url: String,
		#[arg(short, long, env = "GOOUT_FEED_LANGUAGE", default_value = "en")]
		language: String,
		/// Only include events after this value, passed through verbatim
		#[arg(short, long, default_value = "")]
		after: String,
	},
	/// Print the numeric ID of a textual ID
	Decode {
		#[arg(value_name = "TEXT_ID")]
		text: String,
	},
	/// Print the textual ID of a numeric ID
	Encode { id: u64 },
}

/// Prints each target on its own line. The first write error is kept and
/// returned from [`Terminal::finish`].
struct Terminal<W> {
	out: W,
	error: Option<io::Error>,
}

impl<W: Write> Terminal<W> {
	fn new(out: W) -> Self {
		Self { out, error: None }
	}

	fn finish(self) -> io::Result<()> {
		self.error.map_or(Ok(()), Err)
	}
}

impl<W: Write> Presenter for Terminal<W> {
	fn present(&mut self, http: &str, webcal: &str) {
		if self.error.is_some() {
			return;
		}

		for (target, value) in Target::pair(http, webcal) {
			if let Err(err) = writeln!(self.out, "{target}: {value}") {
				self.error = Some(err);
				return;
			}
		}
	}
}

/// Non-canonical IDs decode fine but differ from what `encode` hands out.
fn canonical_hint(text: &str, id: u64) -> Option<String> {
	(!textual_id::is_canonical(text)).then(|| textual_id::encode(id))
}

fn main() -> Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

	let args = Args::parse();
	let mut stdout = io::stdout().lock();

	match args.command {
		Command::Urls {
			raw_id,
			base_url,
			language,
			after,
		} => {
			let input = FormInput {
				raw_id,
				language,
				after,
			};

			let mut terminal = Terminal::new(&mut stdout);
			let outcome = form::handle_input(&base_url, &input, &mut terminal);

			terminal.finish().context("failed to write feed URLs")?;

			if let Outcome::Invalid { message } = outcome {
				bail!(message);
			}
		}
		Command::Decode { text } => {
			let id = textual_id::decode(&text)
				.with_context(|| format!("Invalid textual ID '{text}'"))?;

			if let Some(canonical) = canonical_hint(&text, id) {
				warn!("textual ID '{text}' is not canonical, '{canonical}' decodes to the same ID");
			}

			writeln!(stdout, "{id}")?;
		}
		Command::Encode { id } => {
			writeln!(stdout, "{}", textual_id::encode(id))?;
		}
	}

	Ok(())
}
