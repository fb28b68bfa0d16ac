mod suggest;

use std::collections::HashMap;

use crate::{
	error::interpreter::{RuntimeError, RuntimeErrorType},
	interpreter::value::Value,
	scanner::Token,
	statement::BindingKind,
};

/// A declared name: its current value and whether it may change.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Binding {
	pub value: Value,
	pub kind:  BindingKind,
	/// Line of the declaring token
	pub line:  usize,
}

/// One scope. The interpreter hands the enclosing scope to a block's
/// environment on entry and takes it back on exit, so a child's bindings are
/// gone once the block ends.
#[derive(Default, Debug)]
pub(crate) struct Environment {
	variables: HashMap<String, Binding>,
	pub outer: Option<Box<Environment>>,
}

impl Environment {
	pub fn new(outer: Option<Box<Environment>>) -> Self { Self { variables: HashMap::new(), outer } }

	/// Bind a name in this scope. An outer binding of the same name is
	/// shadowed; a second declaration in the same scope is an error.
	pub fn define(&mut self, token: &Token, kind: BindingKind, value: Value) -> Result<(), RuntimeError> {
		self.ensure_undeclared(token)?;
		self.variables.insert(token.lexeme.to_string(), Binding { value, kind, line: token.line });
		Ok(())
	}

	/// Fail if this scope already declares the name. Checked before a
	/// declaration's initializer runs.
	pub fn ensure_undeclared(&self, token: &Token) -> Result<(), RuntimeError> {
		match self.variables.get(token.lexeme) {
			Some(existing) => Err(RuntimeError::new(token.line, token.column, RuntimeErrorType::AlreadyDeclared {
				name: token.lexeme.to_string(),
				line: existing.line,
			})),
			None => Ok(()),
		}
	}

	/// Look a name up from this scope outward.
	pub fn get(&self, token: &Token) -> Result<&Value, RuntimeError> {
		let mut environment = self;
		loop {
			if let Some(binding) = environment.variables.get(token.lexeme) {
				return Ok(&binding.value);
			}
			match &environment.outer {
				Some(outer) => environment = &**outer,
				None => return Err(self.undefined(token)),
			}
		}
	}

	/// Rebind a name in the nearest scope that declares it.
	pub fn assign(&mut self, token: &Token, value: Value) -> Result<(), RuntimeError> {
		match self.binding_mut(token.lexeme) {
			Some(binding) if binding.kind == BindingKind::Immutable => Err(RuntimeError::new(
				token.line,
				token.column,
				RuntimeErrorType::AssignToConstant(token.lexeme.to_string()),
			)),
			Some(binding) => {
				binding.value = value;
				Ok(())
			}
			None => Err(self.undefined(token)),
		}
	}

	fn binding_mut(&mut self, name: &str) -> Option<&mut Binding> {
		if self.variables.contains_key(name) {
			return self.variables.get_mut(name);
		}
		self.outer.as_mut()?.binding_mut(name)
	}

	/// Every name visible from this scope.
	fn visible_names(&self) -> Vec<&str> {
		let mut names = Vec::new();
		let mut environment = Some(self);
		while let Some(current) = environment {
			names.extend(current.variables.keys().map(String::as_str));
			environment = current.outer.as_deref();
		}
		names
	}

	fn undefined(&self, token: &Token) -> RuntimeError {
		let suggestion = suggest::closest(token.lexeme, self.visible_names()).map(str::to_string);
		RuntimeError::new(token.line, token.column, RuntimeErrorType::UndefinedVariable {
			name: token.lexeme.to_string(),
			suggestion,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::scanner::TokenType;

	fn name(lexeme: &str) -> Token<'_> { Token::new(TokenType::Identifier(lexeme), lexeme, 1, 1) }

	#[test]
	fn define_and_get() {
		let mut environment = Environment::default();
		environment.define(&name("a"), BindingKind::Mutable, Value::Num(1.0)).unwrap();
		assert_eq!(environment.get(&name("a")), Ok(&Value::Num(1.0)));
		assert_eq!(
			environment.get(&name("b")).unwrap_err().r#type,
			RuntimeErrorType::UndefinedVariable { name: "b".to_string(), suggestion: None }
		);
	}

	#[test]
	fn redeclaring_in_the_same_scope_fails() {
		let mut environment = Environment::default();
		environment.define(&name("a"), BindingKind::Mutable, Value::Nil).unwrap();
		let error = environment.define(&name("a"), BindingKind::Mutable, Value::Nil).unwrap_err();
		assert_eq!(error.r#type, RuntimeErrorType::AlreadyDeclared { name: "a".to_string(), line: 1 });
	}

	#[test]
	fn lookup_and_assignment_walk_outward() {
		let mut root = Environment::default();
		root.define(&name("a"), BindingKind::Mutable, Value::Num(1.0)).unwrap();
		let mut inner = Environment::new(Some(Box::new(root)));
		inner.define(&name("b"), BindingKind::Mutable, Value::Num(2.0)).unwrap();

		assert_eq!(inner.get(&name("a")), Ok(&Value::Num(1.0)));
		inner.assign(&name("a"), Value::Str("baru".to_string())).unwrap();

		let root = inner.outer.take().unwrap();
		assert_eq!(root.get(&name("a")), Ok(&Value::Str("baru".to_string())));
		assert!(root.get(&name("b")).is_err());
	}

	#[test]
	fn shadowing_leaves_the_outer_binding_alone() {
		let mut root = Environment::default();
		root.define(&name("a"), BindingKind::Mutable, Value::Num(1.0)).unwrap();
		let mut inner = Environment::new(Some(Box::new(root)));
		inner.define(&name("a"), BindingKind::Mutable, Value::Num(2.0)).unwrap();
		inner.assign(&name("a"), Value::Num(3.0)).unwrap();

		assert_eq!(inner.get(&name("a")), Ok(&Value::Num(3.0)));
		assert_eq!(inner.outer.unwrap().get(&name("a")), Ok(&Value::Num(1.0)));
	}

	#[test]
	fn constants_cannot_be_assigned() {
		let mut root = Environment::default();
		root.define(&name("pi"), BindingKind::Immutable, Value::Num(2.5)).unwrap();
		let mut inner = Environment::new(Some(Box::new(root)));
		let error = inner.assign(&name("pi"), Value::Num(3.0)).unwrap_err();
		assert_eq!(error.r#type, RuntimeErrorType::AssignToConstant("pi".to_string()));
		assert!(inner.assign(&name("tidak_ada"), Value::Nil).is_err());
	}

	#[test]
	fn redeclaration_is_detected_before_defining() {
		let mut environment = Environment::default();
		assert!(environment.ensure_undeclared(&name("a")).is_ok());
		environment.define(&name("a"), BindingKind::Mutable, Value::Nil).unwrap();
		assert!(environment.ensure_undeclared(&name("a")).is_err());
		assert!(Environment::new(Some(Box::new(environment))).ensure_undeclared(&name("a")).is_ok());
	}

	#[test]
	fn undefined_names_suggest_the_closest_visible_name() {
		let mut root = Environment::default();
		root.define(&name("nilai"), BindingKind::Mutable, Value::Num(1.0)).unwrap();
		let mut inner = Environment::new(Some(Box::new(root)));
		inner.define(&name("jumlah"), BindingKind::Mutable, Value::Num(2.0)).unwrap();

		let suggestion = |error: RuntimeError| match error.r#type {
			RuntimeErrorType::UndefinedVariable { suggestion, .. } => suggestion,
			other => panic!("expected undefined variable, got {other:?}"),
		};
		assert_eq!(suggestion(inner.get(&name("nila")).unwrap_err()), Some("nilai".to_string()));
		assert_eq!(suggestion(inner.assign(&name("jumlh"), Value::Nil).unwrap_err()), Some("jumlah".to_string()));
		assert_eq!(suggestion(inner.get(&name("sesuatu")).unwrap_err()), None);

		let error = inner.assign(&name("nilia"), Value::Nil).unwrap_err();
		assert_eq!(error.to_string(), "[Line 1] Runtime Error: undefined variable 'nilia' (did you mean 'nilai'?)");
	}
}
