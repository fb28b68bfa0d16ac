use std::{fs::read_to_string, io::Write, path::Path};

use anyhow::Context;

use crate::{MorphError, RuntimeError, interpreter::Interpreter, parser::Parser, scanner::Scanner};

/// How a run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
	Success,
	/// Lexical or parse errors were found and nothing was interpreted
	BadInput { lexical: usize, parse: usize },
	/// Interpretation stopped at this error
	RuntimeFailure(RuntimeError),
}

/// Everything one run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
	/// Printed lines, in order
	pub output:      Vec<String>,
	/// One line per lexical, parse or runtime error, in order
	pub diagnostics: Vec<String>,
	pub status:      Status,
}

impl Outcome {
	pub fn is_success(&self) -> bool { self.status == Status::Success }

	/// Turn a failed status into the matching error.
	pub fn into_result(self) -> Result<(), MorphError> {
		match self.status {
			Status::Success => Ok(()),
			Status::BadInput { lexical, parse } => Err(MorphError::BadInput { lexical, parse }),
			Status::RuntimeFailure(error) => Err(error.into()),
		}
	}
}

/// A Morph session: one root environment shared by every run.
///
/// A fresh session is a fresh program. The REPL keeps one session alive so
/// that a line can use names an earlier line declared.
#[derive(Debug, Default)]
pub struct Session {
	interpreter: Interpreter,
}

impl Session {
	pub fn new() -> Self { Self::default() }

	/// Scan, parse and, if both were clean, interpret `source`.
	///
	/// An `Err` is returned only for internal failures. Problems with the
	/// program itself are reported through [`Outcome::status`].
	#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
	pub fn run(&mut self, source: &str) -> Result<Outcome, MorphError> {
		let scanned = Scanner::new(source).scan_tokens()?;
		tracing::trace!(tokens = scanned.tokens.len(), "scanned");
		let (statements, parse_errors) = Parser::new(scanned.tokens).parse();

		let mut diagnostics: Vec<String> = scanned.errors.iter().map(ToString::to_string).collect();
		diagnostics.extend(parse_errors.iter().map(ToString::to_string));

		if !scanned.errors.is_empty() || !parse_errors.is_empty() {
			let status = Status::BadInput { lexical: scanned.errors.len(), parse: parse_errors.len() };
			tracing::debug!(?status, "rejected before interpretation");
			return Ok(Outcome { output: Vec::new(), diagnostics, status });
		}

		tracing::debug!(statements = statements.len(), "interpreting");
		let status = match self.interpreter.interpret(&statements) {
			Ok(()) => Status::Success,
			Err(error) => {
				tracing::debug!(line = error.line, column = error.column, "{}", error.r#type);
				diagnostics.push(error.to_string());
				Status::RuntimeFailure(error)
			}
		};
		Ok(Outcome { output: self.interpreter.take_output(), diagnostics, status })
	}
}

/// Morph is the driver: it reads a script or a prompt and prints what a
/// session produces.
pub struct Morph;

impl Morph {
	/// Run a script file in a fresh session.
	pub fn run_file<P: AsRef<Path>>(&self, path: P) -> Result<(), MorphError> {
		let path = path.as_ref();
		let source = read_to_string(path).with_context(|| format!("Failed open source file {}", path.display()))?;
		let outcome = Session::new().run(&source)?;
		report(&outcome);
		outcome.into_result()
	}

	/// Run the REPL prompt until `keluar()` or end of input.
	pub fn run_prompt(&self) {
		let mut session = Session::new();
		let mut input = String::new();
		let stdin = std::io::stdin();
		println!("Morph REPL. Ketik '{EXIT_COMMAND}' untuk berhenti.");
		loop {
			input.clear();
			print!("> ");
			if let Err(e) = std::io::stdout().flush() {
				eprintln!("Failed flush: {e}");
			}
			match stdin.read_line(&mut input) {
				Ok(0) => {
					println!();
					break;
				}
				Ok(_) if is_exit_command(&input) => break,
				Ok(_) => {}
				Err(e) => {
					eprintln!("Failed read line: {e}");
					continue;
				}
			}
			match session.run(&input) {
				Ok(outcome) => report(&outcome),
				Err(e) => eprintln!("Failed run prompt: {e}"),
			}
		}
		println!("Sampai jumpa!");
	}
}

const EXIT_COMMAND: &str = "keluar()";

/// A prompt line that ends the REPL instead of being run.
fn is_exit_command(line: &str) -> bool { line.trim().eq_ignore_ascii_case(EXIT_COMMAND) }

fn report(outcome: &Outcome) {
	for line in &outcome.output {
		println!("{line}");
	}
	for line in &outcome.diagnostics {
		eprintln!("{line}");
	}
}
