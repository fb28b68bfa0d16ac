//! There is no place in the grammar where both an expression and a statement
//! are allowed. The operands of, say, `+` are always expressions, never
//! statements. The body of a `jika` branch is always a list of statements.

use crate::{parser::expression::Expression, scanner::Token};

/// A statement in the programming language. Function, loop, select, input
/// and import nodes are only built by hand.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub enum Statement<'a> {
	/// A block of statements with its own scope.
	Block(Vec<Statement<'a>>),
	/// A variable declaration statement.
	VarDeclaration {
		kind:        BindingKind,
		/// The token of the variable being declared.
		name_token:  Token<'a>,
		/// An optional initializer expression.
		initializer: Option<Expression<'a>>,
	},
	/// An expression used as a statement.
	Expression(Expression<'a>),
	/// `jika ... maka ... lain jika ... lain ... akhir`
	If {
		condition:   Expression<'a>,
		then_branch: Vec<Statement<'a>>,
		/// `lain jika` arms in source order
		else_ifs:    Vec<(Expression<'a>, Vec<Statement<'a>>)>,
		else_branch: Option<Vec<Statement<'a>>>,
	},
	FunDecl(Function<'a>),
	/// A return statement.
	Return {
		keyword: Token<'a>,
		value:   Option<Expression<'a>>,
	},
	While {
		keyword:   Token<'a>,
		condition: Expression<'a>,
		body:      Vec<Statement<'a>>,
	},
	/// A print statement.
	Print(Vec<Expression<'a>>),
	/// Read a line of external input into a fresh binding.
	FetchLine {
		keyword: Token<'a>,
		prompt:  Option<Expression<'a>>,
	},
	Import {
		keyword: Token<'a>,
		path:    Token<'a>,
		alias:   Option<Token<'a>>,
	},
	/// Value-equality switch, no patterns.
	Select {
		keyword:   Token<'a>,
		subject:   Expression<'a>,
		cases:     Vec<(Expression<'a>, Vec<Statement<'a>>)>,
		otherwise: Option<Vec<Statement<'a>>>,
	},
}

/// Whether a declared name may be reassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
	/// `biar`
	Mutable,
	/// `tetap`
	Immutable,
}

#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub struct Function<'a> {
	pub name_token: Token<'a>,
	pub parameters: Vec<Token<'a>>,
	pub body:       Vec<Statement<'a>>,
}
