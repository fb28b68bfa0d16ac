/// A specific lexical error with its position and type.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("[Line {line}] Lexical Error: {type}")]
pub struct ScanError {
	/// The line number where the error occurred.
	pub line:   usize,
	/// The column of the first offending character.
	pub column: usize,
	/// The type of scanning error.
	pub r#type: ScanErrorType,
}

impl ScanError {
	pub fn new(line: usize, column: usize, r#type: ScanErrorType) -> Self { Self { line, column, r#type } }
}

/// Types of scanning errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanErrorType {
	/// A character that starts no token.
	UnrecognizedCharacter(char),
	/// A string literal still open at end of input.
	UnterminatedString,
}

impl std::fmt::Display for ScanErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ScanErrorType::*;
		match self {
			UnrecognizedCharacter(c) => {
				write!(f, "unrecognized character: {c}")
			}
			UnterminatedString => {
				write!(f, "unterminated string")
			}
		}
	}
}

/// Scanner related errors
#[derive(thiserror::Error, Debug)]
pub enum ScannerError {
	/// Internal interpreter error, should never happen
	#[error("{0}")]
	InternalError(#[from] anyhow::Error),
	/// Errors encountered during scanning
	#[error(transparent)]
	ScanError(#[from] ScanError),
}
