use std::path::PathBuf;

use palc::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "morph", after_long_help = "Set MORPH_LOG (e.g. MORPH_LOG=debug) to trace the pipeline on stderr.")]
pub struct Cli {
	#[command(subcommand)]
	pub mode: Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
	/// Run a script file
	File { path: PathBuf },
	/// Start the interactive prompt
	Repl,
}
