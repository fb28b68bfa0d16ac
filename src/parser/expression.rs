//! Expression AST nodes
//!
//! An `Expression` is a tree structure representing code like `-123 * (45.67)`
//! as nested nodes. Nodes are built once by the parser and only read after.

use Expression::*;

use crate::scanner::Token;

/// Expression AST nodes. `List`, `Map`, `Call` and `Property` have no parser
/// production yet.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub enum Expression<'a> {
	Literal(LiteralValue<'a>),
	Variable(Token<'a>),
	List { bracket: Token<'a>, elements: Vec<Expression<'a>> },
	Map { brace: Token<'a>, entries: Vec<(Expression<'a>, Expression<'a>)> },
	Unary { operator: Token<'a>, right: Box<Expression<'a>> },
	Binary { left: Box<Expression<'a>>, operator: Token<'a>, right: Box<Expression<'a>> },
	Logical { left: Box<Expression<'a>>, operator: Token<'a>, right: Box<Expression<'a>> },
	Call { callee: Box<Expression<'a>>, paren: Token<'a>, arguments: Vec<Expression<'a>> },
	Property { object: Box<Expression<'a>>, key: Token<'a> },
	Assign { target: Token<'a>, value: Box<Expression<'a>> },
}

impl<'a> Expression<'a> {
	pub fn unary(operator: Token<'a>, right: Box<Self>) -> Box<Self> { Box::new(Unary { operator, right }) }

	pub fn binary(left: Box<Self>, operator: Token<'a>, right: Box<Self>) -> Box<Self> {
		Box::new(Binary { left, operator, right })
	}

	pub fn logical(left: Box<Self>, operator: Token<'a>, right: Box<Self>) -> Box<Self> {
		Box::new(Logical { left, operator, right })
	}

	pub fn assign(target: Token<'a>, value: Box<Self>) -> Box<Self> { Box::new(Assign { target, value }) }
}

/// Literal values in the AST, already decoded by the scanner
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue<'a> {
	Number(f64),
	String(&'a str),
	Boolean(bool),
	Nil,
}

impl std::fmt::Display for Expression<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Literal(lit) => write!(f, "{lit}"),
			Variable(token) => write!(f, "{}", token.lexeme),
			List { elements, .. } => write!(f, "(list {})", join(elements)),
			Map { entries, .. } => write!(
				f,
				"(map {})",
				entries.iter().map(|(key, value)| format!("({key} {value})")).collect::<Vec<_>>().join(" ")
			),
			Unary { operator, right } => write!(f, "({} {right})", operator.lexeme),
			Binary { left, operator, right } => write!(f, "({} {left} {right})", operator.lexeme),
			Logical { left, operator, right } => write!(f, "({} {left} {right})", operator.lexeme),
			Call { callee, arguments, .. } => write!(f, "(call {callee} ({}))", join(arguments)),
			Property { object, key } => write!(f, "(get {object}.{})", key.lexeme),
			Assign { target, value } => write!(f, "(= {} {value})", target.lexeme),
		}
	}
}

fn join(expressions: &[Expression<'_>]) -> String {
	expressions.iter().map(|e| e.to_string()).collect::<Vec<_>>().join(" ")
}

impl std::fmt::Display for LiteralValue<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			LiteralValue::Number(n) => write!(f, "{n}"),
			LiteralValue::String(s) => write!(f, "\"{s}\""),
			LiteralValue::Boolean(true) => write!(f, "benar"),
			LiteralValue::Boolean(false) => write!(f, "salah"),
			LiteralValue::Nil => write!(f, "nil"),
		}
	}
}
