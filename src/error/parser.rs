/// A syntax error, reported against the token the parser stopped at.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("[Line {line}] Error {location}: {type}")]
pub struct ParseError {
	pub line:     usize,
	pub location: ErrorLocation,
	pub r#type:   ParseErrorType,
}

impl ParseError {
	pub fn new(line: usize, location: ErrorLocation, r#type: ParseErrorType) -> Self {
		Self { line, location, r#type }
	}
}

/// Where a parse error was detected.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorLocation {
	/// The end-of-input token.
	End,
	/// Any other token, by lexeme.
	Near(String),
}

impl std::fmt::Display for ErrorLocation {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ErrorLocation::End => write!(f, "at end"),
			ErrorLocation::Near(lexeme) if lexeme == "\n" => write!(f, "near '\\n'"),
			ErrorLocation::Near(lexeme) => write!(f, "near '{lexeme}'"),
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorType {
	ExpectedExpression,
	ExpectedVariableName,
	ExpectedToken { expected: &'static str, after: &'static str },
	ExpectedTerminator(&'static str),
	InvalidAssignmentTarget,
	UnterminatedBlock,
	UnterminatedIf,
	FeatureNotEnabled(&'static str),
}

impl std::fmt::Display for ParseErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ParseErrorType::*;
		match self {
			ExpectedExpression => write!(f, "expected expression"),
			ExpectedVariableName => write!(f, "expected variable name"),
			ExpectedToken { expected, after } => write!(f, "expected '{expected}' after {after}"),
			ExpectedTerminator(after) => write!(f, "expected newline or ';' after {after}"),
			InvalidAssignmentTarget => write!(f, "invalid assignment target"),
			UnterminatedBlock => write!(f, "expected '}}' to close block"),
			UnterminatedIf => write!(f, "'jika' must be closed with 'akhir'"),
			FeatureNotEnabled(name) => write!(f, "feature '{name}' is not enabled"),
		}
	}
}
