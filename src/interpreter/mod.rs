//! Morph tree-walking interpreter.
//!
//! The interpreter walks the statements produced by the parser, evaluating
//! each expression to a runtime [`Value`] and performing the side effects of
//! each statement directly. There is no intermediate representation.
//!
//! # Scoping
//!
//! The root environment lives as long as the interpreter. Every block, every
//! `jika` branch and every loop or case body runs in a child environment that
//! is dropped when the body finishes, whether it finished normally or with an
//! error.
//!
//! # Errors
//!
//! The first runtime error ends the run. Output printed before it is kept.

pub(crate) mod value;

use Expression::*;
use value::Value;

use crate::{
	environment::Environment,
	error::interpreter::{RuntimeError, RuntimeErrorType},
	parser::expression::{Expression, LiteralValue},
	scanner::{Token, TokenType},
	statement::Statement,
};

/// Interpreter that executes Morph statements.
#[derive(Debug, Default)]
pub(crate) struct Interpreter {
	environment: Box<Environment>,
	/// Lines printed since the last [`Interpreter::take_output`]
	output:      Vec<String>,
}

impl Interpreter {
	/// Execute statements in order against the root environment, stopping at
	/// the first runtime error.
	pub fn interpret(&mut self, statements: &[Statement]) -> Result<(), RuntimeError> {
		statements.iter().try_for_each(|statement| self.execute(statement))
	}

	/// Drain the printed lines.
	pub fn take_output(&mut self) -> Vec<String> { std::mem::take(&mut self.output) }

	fn execute(&mut self, statement: &Statement) -> Result<(), RuntimeError> {
		match statement {
			Statement::Expression(expression) => {
				self.evaluate(expression)?;
			}
			Statement::Print(arguments) => {
				let mut line = Vec::with_capacity(arguments.len());
				for argument in arguments {
					line.push(self.evaluate(argument)?.to_string());
				}
				let line = line.join(" ");
				tracing::trace!(%line, "print");
				self.output.push(line);
			}
			Statement::VarDeclaration { kind, name_token, initializer } => {
				self.environment.ensure_undeclared(name_token)?;
				let value = match initializer {
					Some(initializer) => self.evaluate(initializer)?,
					None => Value::Nil,
				};
				self.environment.define(name_token, *kind, value)?;
			}
			Statement::Block(statements) => self.execute_block(statements)?,
			Statement::If { condition, then_branch, else_ifs, else_branch } => {
				if self.evaluate(condition)?.is_truthy() {
					return self.execute_block(then_branch);
				}
				for (condition, branch) in else_ifs {
					if self.evaluate(condition)?.is_truthy() {
						return self.execute_block(branch);
					}
				}
				if let Some(else_branch) = else_branch {
					self.execute_block(else_branch)?;
				}
			}
			Statement::While { condition, body, .. } => {
				while self.evaluate(condition)?.is_truthy() {
					self.execute_block(body)?;
				}
			}
			Statement::Select { subject, cases, otherwise, .. } => {
				let subject = self.evaluate(subject)?;
				for (case, body) in cases {
					if self.evaluate(case)? == subject {
						return self.execute_block(body);
					}
				}
				if let Some(otherwise) = otherwise {
					self.execute_block(otherwise)?;
				}
			}
			Statement::FunDecl(function) => return Err(not_enabled(&function.name_token, "fungsi")),
			Statement::Return { keyword, .. } => return Err(not_enabled(keyword, "kembalikan")),
			Statement::FetchLine { keyword, .. } => return Err(not_enabled(keyword, "ambil")),
			Statement::Import { keyword, .. } => return Err(not_enabled(keyword, "ambil_semua")),
		}
		Ok(())
	}

	/// Run statements in a child of the current environment. The parent is put
	/// back before the result is returned.
	fn execute_block(&mut self, statements: &[Statement]) -> Result<(), RuntimeError> {
		let outer = std::mem::take(&mut self.environment);
		self.environment = Box::new(Environment::new(Some(outer)));

		let result = statements.iter().try_for_each(|statement| self.execute(statement));

		if let Some(outer) = self.environment.outer.take() {
			self.environment = outer;
		}
		result
	}

	/// Evaluate the given expression and return its value.
	fn evaluate(&mut self, expr: &Expression) -> Result<Value, RuntimeError> {
		Ok(match expr {
			Literal(literal) => match literal {
				LiteralValue::Nil => Value::Nil,
				LiteralValue::Boolean(b) => Value::Bool(*b),
				LiteralValue::Number(n) => Value::Num(*n),
				LiteralValue::String(s) => Value::Str(s.to_string()),
			},
			Variable(token) => self.environment.get(token)?.clone(),
			Assign { target, value } => {
				let value = self.evaluate(value)?;
				self.environment.assign(target, value.clone())?;
				value
			}
			Unary { operator, right } => {
				let right = self.evaluate(right)?;
				match (&operator.r#type, right) {
					(TokenType::Minus, Value::Num(n)) => Value::Num(-n),
					(TokenType::Minus, _) => {
						return Err(RuntimeError::new(
							operator.line,
							operator.column,
							RuntimeErrorType::OperandMustBeNumber,
						));
					}
					(_, right) => Value::Bool(!right.is_truthy()),
				}
			}
			Binary { left, operator, right } => {
				let left = self.evaluate(left)?;
				let right = self.evaluate(right)?;
				left.binary_op(&operator.r#type, &right)
					.map_err(|r#type| RuntimeError::new(operator.line, operator.column, r#type))?
			}
			Logical { left, operator, right } => {
				let left = self.evaluate(left)?.is_truthy();
				let decided = match operator.r#type {
					TokenType::Or => left,
					_ => !left,
				};
				if decided { Value::Bool(left) } else { Value::Bool(self.evaluate(right)?.is_truthy()) }
			}
			List { bracket, .. } => return Err(not_enabled(bracket, "list")),
			Map { brace, .. } => return Err(not_enabled(brace, "map")),
			Call { paren, .. } => return Err(not_enabled(paren, "call")),
			Property { key, .. } => return Err(not_enabled(key, "property")),
		})
	}
}

fn not_enabled(token: &Token, feature: &'static str) -> RuntimeError {
	RuntimeError::new(token.line, token.column, RuntimeErrorType::FeatureNotEnabled(feature))
}
