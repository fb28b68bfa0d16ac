use std::process::ExitCode;

use morph::cli::*;
use palc::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log to stderr when `MORPH_LOG` is set. Nothing is logged otherwise.
fn init_tracing() {
	let Ok(filter) = EnvFilter::try_from_env("MORPH_LOG") else {
		return;
	};
	let _ = tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)).with(filter).try_init();
}

fn main() -> ExitCode {
	init_tracing();
	let morph = morph::Morph;

	match Cli::parse().mode {
		Mode::File { path } => match morph.run_file(&path) {
			Ok(()) => ExitCode::SUCCESS,
			Err(e) => {
				tracing::debug!(error = %e, "run failed");
				if let morph::MorphError::InternalError(_) = e {
					eprintln!("Failed run file: {e}");
				}
				ExitCode::from(e.exit_code() as u8)
			}
		},
		Mode::Repl => {
			morph.run_prompt();
			ExitCode::SUCCESS
		}
	}
}
