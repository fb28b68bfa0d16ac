/// Errors that can occur during interpretation
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("[Line {line}] Runtime Error: {type}")]
pub struct RuntimeError {
	/// Line of the offending token
	pub line:   usize,
	/// Column of the offending token
	pub column: usize,
	pub r#type: RuntimeErrorType,
}

impl RuntimeError {
	pub fn new(line: usize, column: usize, r#type: RuntimeErrorType) -> Self { Self { line, column, r#type } }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeErrorType {
	/// Name resolved nowhere in the environment chain, with the closest
	/// visible name if one is near enough
	UndefinedVariable { name: String, suggestion: Option<String> },
	/// Declaration of a name the current scope already holds
	AlreadyDeclared { name: String, line: usize },
	/// Assignment to a `tetap` binding
	AssignToConstant(String),
	/// Unary `-` on a non-number
	OperandMustBeNumber,
	/// Arithmetic or comparison on non-numbers
	OperandsMustBeNumbers,
	/// `+` on anything but two numbers or two strings
	OperandsMustBeNumbersOrStrings,
	/// A binary node whose operator has no binary meaning
	NotABinaryOperator,
	DivisionByZero,
	ModuloByZero,
	/// A node kind this interpreter does not execute
	FeatureNotEnabled(&'static str),
}

impl std::fmt::Display for RuntimeErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use RuntimeErrorType::*;
		match self {
			UndefinedVariable { name, suggestion: None } => write!(f, "undefined variable '{name}'"),
			UndefinedVariable { name, suggestion: Some(suggestion) } => {
				write!(f, "undefined variable '{name}' (did you mean '{suggestion}'?)")
			}
			AlreadyDeclared { name, line } => write!(f, "'{name}' is already declared in this scope (line {line})"),
			AssignToConstant(name) => write!(f, "cannot assign to constant '{name}'"),
			OperandMustBeNumber => write!(f, "operand must be a number"),
			OperandsMustBeNumbers => write!(f, "operands must be numbers"),
			OperandsMustBeNumbersOrStrings => write!(f, "operands must be two numbers or two strings"),
			NotABinaryOperator => write!(f, "not a binary operator"),
			DivisionByZero => write!(f, "cannot divide by zero"),
			ModuloByZero => write!(f, "cannot take remainder of division by zero"),
			FeatureNotEnabled(name) => write!(f, "feature '{name}' is not enabled"),
		}
	}
}
