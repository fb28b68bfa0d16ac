use std::fmt::Display;

use Value::*;

use crate::{error::interpreter::RuntimeErrorType, scanner::TokenType};

/// Value represents a runtime value in Morph.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Value {
	Nil,
	Bool(bool),
	Num(f64),
	Str(String),
}

/// The text `tulis` prints for a value.
impl Display for Value {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Nil => write!(f, "nil"),
			Value::Bool(true) => write!(f, "benar"),
			Value::Bool(false) => write!(f, "salah"),
			Value::Num(n) => {
				if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
					write!(f, "{}", *n as i64)
				} else {
					write!(f, "{n}")
				}
			}
			Value::Str(s) => write!(f, "{s}"),
		}
	}
}

impl Value {
	/// Performs a binary operation between two values.
	pub fn binary_op(&self, op: &TokenType, right: &Self) -> Result<Value, RuntimeErrorType> {
		use TokenType::*;

		Ok(match op {
			Plus => self.plus(right)?,
			Minus => Num(self.numbers(right).map(|(l, r)| l - r)?),
			Star => Num(self.numbers(right).map(|(l, r)| l * r)?),
			Slash => self.slash(right)?,
			Percent => self.percent(right)?,
			Greater => Bool(self.numbers(right).map(|(l, r)| l > r)?),
			GreaterEqual => Bool(self.numbers(right).map(|(l, r)| l >= r)?),
			Less => Bool(self.numbers(right).map(|(l, r)| l < r)?),
			LessEqual => Bool(self.numbers(right).map(|(l, r)| l <= r)?),
			EqualEqual => Bool(self == right),
			BangEqual => Bool(self != right),
			_ => return Err(RuntimeErrorType::NotABinaryOperator),
		})
	}

	/// Only `nil` and `salah` are falsy. Zero and the empty string are truthy.
	pub fn is_truthy(&self) -> bool { !matches!(self, Nil | Bool(false)) }

	/// Both operands as numbers, for arithmetic and ordering.
	fn numbers(&self, other: &Self) -> Result<(f64, f64), RuntimeErrorType> {
		match (self, other) {
			(Num(l), Num(r)) => Ok((*l, *r)),
			_ => Err(RuntimeErrorType::OperandsMustBeNumbers),
		}
	}

	/// Tries to add two numbers or concatenate two strings.
	fn plus(&self, other: &Self) -> Result<Value, RuntimeErrorType> {
		match (self, other) {
			(Num(l), Num(r)) => Ok(Num(l + r)),
			(Str(l), Str(r)) => Ok(Str(format!("{l}{r}"))),
			_ => Err(RuntimeErrorType::OperandsMustBeNumbersOrStrings),
		}
	}

	/// Tries to divide two values.
	fn slash(&self, other: &Self) -> Result<Value, RuntimeErrorType> {
		let (l, r) = self.numbers(other)?;
		if r == 0.0 {
			return Err(RuntimeErrorType::DivisionByZero);
		}
		Ok(Num(l / r))
	}

	/// Remainder, with the sign of the dividend.
	fn percent(&self, other: &Self) -> Result<Value, RuntimeErrorType> {
		let (l, r) = self.numbers(other)?;
		if r == 0.0 {
			return Err(RuntimeErrorType::ModuloByZero);
		}
		Ok(Num(l % r))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn apply(left: Value, op: TokenType, right: Value) -> Result<Value, RuntimeErrorType> { left.binary_op(&op, &right) }

	#[test]
	fn display() {
		assert_eq!(Nil.to_string(), "nil");
		assert_eq!(Bool(true).to_string(), "benar");
		assert_eq!(Bool(false).to_string(), "salah");
		assert_eq!(Num(7.0).to_string(), "7");
		assert_eq!(Num(-3.0).to_string(), "-3");
		assert_eq!(Num(2.5).to_string(), "2.5");
		assert_eq!(Num(0.1 + 0.2).to_string(), "0.30000000000000004");
		assert_eq!(Str("halo dunia".to_string()).to_string(), "halo dunia");
	}

	#[test]
	fn truthiness() {
		assert!(!Nil.is_truthy());
		assert!(!Bool(false).is_truthy());
		assert!(Bool(true).is_truthy());
		assert!(Num(0.0).is_truthy());
		assert!(Str(String::new()).is_truthy());
	}

	#[test]
	fn arithmetic() {
		use TokenType::*;

		assert_eq!(apply(Num(1.0), Plus, Num(2.0)), Ok(Num(3.0)));
		assert_eq!(apply(Str("a".into()), Plus, Str("b".into())), Ok(Str("ab".into())));
		assert_eq!(apply(Num(5.0), Minus, Num(7.0)), Ok(Num(-2.0)));
		assert_eq!(apply(Num(3.0), Star, Num(4.0)), Ok(Num(12.0)));
		assert_eq!(apply(Num(1.0), Slash, Num(4.0)), Ok(Num(0.25)));
		assert_eq!(apply(Num(7.0), Percent, Num(3.0)), Ok(Num(1.0)));
		assert_eq!(apply(Num(-7.0), Percent, Num(3.0)), Ok(Num(-1.0)));
	}

	#[test]
	fn arithmetic_type_errors() {
		use TokenType::*;

		assert_eq!(apply(Num(1.0), Plus, Str("a".into())), Err(RuntimeErrorType::OperandsMustBeNumbersOrStrings));
		assert_eq!(apply(Bool(true), Plus, Bool(true)), Err(RuntimeErrorType::OperandsMustBeNumbersOrStrings));
		assert_eq!(apply(Str("a".into()), Minus, Str("b".into())), Err(RuntimeErrorType::OperandsMustBeNumbers));
		assert_eq!(apply(Value::Nil, Star, Num(1.0)), Err(RuntimeErrorType::OperandsMustBeNumbers));
		assert_eq!(apply(Str("a".into()), Less, Str("b".into())), Err(RuntimeErrorType::OperandsMustBeNumbers));
	}

	#[test]
	fn division_by_zero() {
		use TokenType::*;

		assert_eq!(apply(Num(1.0), Slash, Num(0.0)), Err(RuntimeErrorType::DivisionByZero));
		assert_eq!(apply(Num(0.0), Slash, Num(0.0)), Err(RuntimeErrorType::DivisionByZero));
		assert_eq!(apply(Num(1.0), Percent, Num(0.0)), Err(RuntimeErrorType::ModuloByZero));
	}

	#[test]
	fn non_binary_operator() {
		use TokenType::*;

		assert_eq!(apply(Bool(true), And, Bool(true)), Err(RuntimeErrorType::NotABinaryOperator));
		assert_eq!(apply(Num(1.0), Bang, Num(1.0)), Err(RuntimeErrorType::NotABinaryOperator));
	}

	#[test]
	fn comparison_and_equality() {
		use TokenType::*;

		assert_eq!(apply(Num(1.0), Less, Num(2.0)), Ok(Bool(true)));
		assert_eq!(apply(Num(2.0), LessEqual, Num(2.0)), Ok(Bool(true)));
		assert_eq!(apply(Num(1.0), Greater, Num(2.0)), Ok(Bool(false)));
		assert_eq!(apply(Num(2.0), GreaterEqual, Num(3.0)), Ok(Bool(false)));
		assert_eq!(apply(Num(1.0), EqualEqual, Num(1.0)), Ok(Bool(true)));
		assert_eq!(apply(Str("a".into()), EqualEqual, Str("a".into())), Ok(Bool(true)));
		assert_eq!(apply(Num(1.0), EqualEqual, Str("1".into())), Ok(Bool(false)));
		assert_eq!(apply(Value::Nil, EqualEqual, Value::Nil), Ok(Bool(true)));
		assert_eq!(apply(Value::Nil, BangEqual, Bool(false)), Ok(Bool(true)));
		assert_eq!(apply(Bool(true), BangEqual, Bool(true)), Ok(Bool(false)));
	}
}
