pub mod interpreter;
pub mod parser;
pub mod scanner;

/// MorphError is the top-level error type for the Morph interpreter.
#[derive(thiserror::Error, Debug)]
pub enum MorphError {
	/// Internal interpreter error or a failure around the pipeline, e.g. an
	/// unreadable script
	#[error("InternalError: {0}")]
	InternalError(#[from] anyhow::Error),
	/// The run was rejected before interpretation
	#[error("Generated {lexical} lexical errors and {parse} parse errors")]
	BadInput { lexical: usize, parse: usize },
	/// The first runtime error, which ended the run
	#[error(transparent)]
	RuntimeError(#[from] interpreter::RuntimeError),
}

impl MorphError {
	/// Process exit code a driver should use for this failure.
	pub fn exit_code(&self) -> i32 {
		match self {
			MorphError::BadInput { .. } => 65,
			MorphError::RuntimeError(_) => 70,
			MorphError::InternalError(_) => 74,
		}
	}
}
