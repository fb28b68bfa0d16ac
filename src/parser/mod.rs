//! The `Scanner` use `Lexical grammar`, implement `alphabet` as `Characters`,
//! `string` as `Lexme` or `Token`
//! The `Parser` use `Syntactic grammar`, implement `alphabet` as `Tokens`,
//! `string` as `Statement` and `Expression`
//!
//! |Name|Operators|Associates
//! --|--|--
//! Assignment|=|Right
//! Or|atau|Left
//! And|dan|Left
//! Comparison|== != < <= > >=|Left
//! Term|+ -|Left
//! Factor|* / %|Left
//! Unary|! -|Right
//!
//! Grammar:
//!
//! ``` BNF
//! program        → ( NEWLINE | declaration )* EOF ;
//! declaration    → ( "biar" | "tetap" ) IDENTIFIER ( "=" expression )? terminator
//!                | statement ;
//! statement      → "tulis" "(" ( expression ( "," expression )* )? ")" terminator
//!                | "{" ( NEWLINE | declaration )* "}"
//!                | "jika" expression "maka" terminator declaration*
//!                  ( "lain" "jika" expression "maka" terminator declaration* )*
//!                  ( "lain" terminator declaration* )? "akhir"
//!                | expression terminator ;
//! terminator     → NEWLINE | ";" | &( "}" | "akhir" | EOF ) ;
//! expression     → assignment ;
//! assignment     → IDENTIFIER "=" assignment | or ;
//! or             → and ( "atau" and )* ;
//! and            → comparison ( "dan" comparison )* ;
//! comparison     → term ( ( "==" | "!=" | "<" | "<=" | ">" | ">=" ) term )* ;
//! term           → factor ( ( "-" | "+" ) factor )* ;
//! factor         → exponent ( ( "/" | "*" | "%" ) exponent )* ;
//! exponent       → unary ;                  (a following "^" is rejected)
//! unary          → ( "!" | "-" ) unary | primary ;
//! primary        → NUMBER | STRING | IDENTIFIER | "benar" | "salah" | "nil"
//!                | "(" expression ")" ;
//! ```
//!
//! A syntax error does not stop the parser. The statement that failed is
//! dropped, tokens are discarded up to the next statement boundary, and
//! parsing resumes so one run can report every independent mistake.

pub(crate) mod expression;

use TokenType::*;

use crate::{
	error::parser::{ErrorLocation, ParseError, ParseErrorType},
	parser::expression::{Expression, LiteralValue},
	scanner::{Token, TokenType},
	statement::{BindingKind, Statement},
};

type ParseResult<'a> = Result<Box<Expression<'a>>, ParseError>;

/// Recursive-descent parser over a scanned token stream
pub struct Parser<'a> {
	/// The tokens to parse, always ending with `Eof`.
	tokens:  Vec<Token<'a>>,
	current: usize,
	errors:  Vec<ParseError>,
}

impl<'a> Parser<'a> {
	/// Unrecognized-character tokens were already reported by the scanner and
	/// are skipped here.
	pub fn new(tokens: Vec<Token<'a>>) -> Self {
		let mut tokens: Vec<_> = tokens.into_iter().filter(|t| !matches!(t.r#type, Unrecognized(_))).collect();
		if tokens.last().is_none_or(|t| t.r#type != Eof) {
			let (line, column) = tokens.last().map_or((1, 1), |t| (t.line, t.column));
			tokens.push(Token::new(Eof, "", line, column));
		}
		Self { tokens, current: 0, errors: Vec::new() }
	}

	/// Parse the whole program. The statements must not be interpreted when
	/// any error was returned.
	pub fn parse(mut self) -> (Vec<Statement<'a>>, Vec<ParseError>) {
		let mut statements = Vec::new();
		while !self.is_at_end() {
			if self.match_tokens(&[NewLine]) {
				continue;
			}
			if let Some(statement) = self.declaration() {
				statements.push(statement);
			}
		}
		(statements, self.errors)
	}

	/// Parse one declaration, recovering from any syntax error inside it.
	fn declaration(&mut self) -> Option<Statement<'a>> {
		let result = if self.match_tokens(&[Let, Const]) { self.var_declaration() } else { self.statement() };
		match result {
			Ok(statement) => Some(statement),
			Err(error) => {
				self.report(error);
				self.synchronize();
				None
			}
		}
	}

	fn var_declaration(&mut self) -> Result<Statement<'a>, ParseError> {
		let kind = if self.previous().r#type == Const { BindingKind::Immutable } else { BindingKind::Mutable };
		let name_token = self.consume(&Identifier(""), ParseErrorType::ExpectedVariableName)?;
		let initializer = if self.match_tokens(&[Equal]) { Some(*self.expression()?) } else { None };
		self.consume_terminator("variable declaration")?;
		Ok(Statement::VarDeclaration { kind, name_token, initializer })
	}

	fn statement(&mut self) -> Result<Statement<'a>, ParseError> {
		let not_enabled = match self.peek().r#type {
			While => Some("selama"),
			Function => Some("fungsi"),
			Return => Some("kembalikan"),
			Select => Some("pilih"),
			Import => Some("ambil_semua"),
			_ => None,
		};
		if let Some(feature) = not_enabled {
			let keyword = self.advance();
			return Err(self.error_at(&keyword, ParseErrorType::FeatureNotEnabled(feature)));
		}

		if self.match_tokens(&[If]) {
			return self.if_statement();
		}
		if self.match_tokens(&[Print]) {
			return self.print_statement();
		}
		if self.match_tokens(&[LeftBrace]) {
			return Ok(Statement::Block(self.block()?));
		}
		self.expression_statement()
	}

	fn print_statement(&mut self) -> Result<Statement<'a>, ParseError> {
		self.consume(&LeftParen, ParseErrorType::ExpectedToken { expected: "(", after: "'tulis'" })?;
		let mut arguments = Vec::new();
		if !self.check(&RightParen) {
			loop {
				arguments.push(*self.expression()?);
				if !self.match_tokens(&[Comma]) {
					break;
				}
			}
		}
		self.consume(&RightParen, ParseErrorType::ExpectedToken { expected: ")", after: "arguments" })?;
		self.consume_terminator("'tulis' statement")?;
		Ok(Statement::Print(arguments))
	}

	fn if_statement(&mut self) -> Result<Statement<'a>, ParseError> {
		let condition = *self.expression()?;
		self.consume(&Then, ParseErrorType::ExpectedToken { expected: "maka", after: "condition" })?;
		self.consume_terminator("'maka'")?;
		let then_branch = self.declarations_until(&[End, Else]);

		let mut else_ifs = Vec::new();
		let mut else_branch = None;
		while self.match_tokens(&[Else]) {
			if self.match_tokens(&[If]) {
				let condition = *self.expression()?;
				self.consume(&Then, ParseErrorType::ExpectedToken { expected: "maka", after: "condition" })?;
				self.consume_terminator("'maka'")?;
				else_ifs.push((condition, self.declarations_until(&[End, Else])));
			} else {
				self.consume_terminator("'lain'")?;
				else_branch = Some(self.declarations_until(&[End]));
				break;
			}
		}

		self.consume(&End, ParseErrorType::UnterminatedIf)?;
		Ok(Statement::If { condition, then_branch, else_ifs, else_branch })
	}

	/// Statements of a `{ ... }` block, after the opening brace.
	fn block(&mut self) -> Result<Vec<Statement<'a>>, ParseError> {
		let statements = self.declarations_until(&[RightBrace]);
		self.consume(&RightBrace, ParseErrorType::UnterminatedBlock)?;
		Ok(statements)
	}

	/// Parse declarations until one of `stop` or the end of input, skipping
	/// blank lines.
	fn declarations_until(&mut self, stop: &[TokenType<'a>]) -> Vec<Statement<'a>> {
		let mut statements = Vec::new();
		while !self.is_at_end() && !stop.iter().any(|r#type| self.check(r#type)) {
			if self.match_tokens(&[NewLine]) {
				continue;
			}
			if let Some(statement) = self.declaration() {
				statements.push(statement);
			}
		}
		statements
	}

	fn expression_statement(&mut self) -> Result<Statement<'a>, ParseError> {
		let expression = self.expression()?;
		self.consume_terminator("expression")?;
		Ok(Statement::Expression(*expression))
	}

	fn expression(&mut self) -> ParseResult<'a> { self.assignment() }

	/// Assignment is right associative, and only a bare identifier may be
	/// assigned to.
	fn assignment(&mut self) -> ParseResult<'a> {
		let expression = self.or()?;
		if !self.match_tokens(&[Equal]) {
			return Ok(expression);
		}

		let equals = self.previous().clone();
		let value = self.assignment()?;
		match *expression {
			Expression::Variable(target) => Ok(Expression::assign(target, value)),
			other => {
				// Reported without unwinding: the parser is not confused.
				let error = self.error_at(&equals, ParseErrorType::InvalidAssignmentTarget);
				self.report(error);
				Ok(Box::new(other))
			}
		}
	}

	fn or(&mut self) -> ParseResult<'a> { self.left_associative(&[Or], Self::and, Expression::logical) }

	fn and(&mut self) -> ParseResult<'a> { self.left_associative(&[And], Self::comparison, Expression::logical) }

	fn comparison(&mut self) -> ParseResult<'a> {
		self.left_associative(
			&[EqualEqual, BangEqual, Less, LessEqual, Greater, GreaterEqual],
			Self::term,
			Expression::binary,
		)
	}

	fn term(&mut self) -> ParseResult<'a> { self.left_associative(&[Plus, Minus], Self::factor, Expression::binary) }

	fn factor(&mut self) -> ParseResult<'a> {
		self.left_associative(&[Star, Slash, Percent], Self::exponent, Expression::binary)
	}

	/// Shared loop of every binary tier: parse the next tier, then fold while
	/// the current token is one of `operators`.
	fn left_associative(
		&mut self,
		operators: &[TokenType<'a>],
		operand: fn(&mut Self) -> ParseResult<'a>,
		node: fn(Box<Expression<'a>>, Token<'a>, Box<Expression<'a>>) -> Box<Expression<'a>>,
	) -> ParseResult<'a> {
		let mut expression = operand(self)?;
		while self.match_tokens(operators) {
			let operator = self.previous().clone();
			expression = node(expression, operator, operand(self)?);
		}
		Ok(expression)
	}

	/// `^` is reserved for exponentiation, which is not enabled yet.
	fn exponent(&mut self) -> ParseResult<'a> {
		let base = self.unary()?;
		if self.match_tokens(&[Caret]) {
			let caret = self.previous().clone();
			return Err(self.error_at(&caret, ParseErrorType::FeatureNotEnabled("^")));
		}
		Ok(base)
	}

	fn unary(&mut self) -> ParseResult<'a> {
		if self.match_tokens(&[Bang, Minus]) {
			let operator = self.previous().clone();
			return Ok(Expression::unary(operator, self.unary()?));
		}
		self.primary()
	}

	fn primary(&mut self) -> ParseResult<'a> {
		let literal = match self.peek().r#type {
			NumberLiteral(n) => Some(LiteralValue::Number(n)),
			StringLiteral(s) => Some(LiteralValue::String(s)),
			True => Some(LiteralValue::Boolean(true)),
			False => Some(LiteralValue::Boolean(false)),
			Nil => Some(LiteralValue::Nil),
			_ => None,
		};
		if let Some(literal) = literal {
			self.advance();
			return Ok(Box::new(Expression::Literal(literal)));
		}

		let token = self.peek().clone();
		match token.r#type {
			Identifier(_) => {
				self.advance();
				Ok(Box::new(Expression::Variable(token)))
			}
			LeftParen => {
				self.advance(); // consume '('
				let expression = self.expression()?;
				self.consume(&RightParen, ParseErrorType::ExpectedToken { expected: ")", after: "expression" })?;
				Ok(expression)
			}
			Fetch | LeftBracket | LeftBrace => {
				let feature = match token.r#type {
					Fetch => "ambil",
					LeftBracket => "list literal",
					_ => "map literal",
				};
				self.advance();
				Err(self.error_at(&token, ParseErrorType::FeatureNotEnabled(feature)))
			}
			_ => Err(self.error_at(&token, ParseErrorType::ExpectedExpression)),
		}
	}

	/// Accept a statement terminator. A closing `}` or `akhir`, or the end of
	/// input, ends a statement without being consumed.
	fn consume_terminator(&mut self, after: &'static str) -> Result<(), ParseError> {
		if self.match_tokens(&[NewLine, Semicolon]) || self.check(&RightBrace) || self.check(&End) || self.is_at_end() {
			return Ok(());
		}
		let token = self.peek().clone();
		Err(self.error_at(&token, ParseErrorType::ExpectedTerminator(after)))
	}

	fn consume(&mut self, r#type: &TokenType<'a>, error: ParseErrorType) -> Result<Token<'a>, ParseError> {
		if self.check(r#type) {
			return Ok(self.advance());
		}
		let token = self.peek().clone();
		Err(self.error_at(&token, error))
	}

	/// Advance past the current token if it has any of the given types.
	fn match_tokens(&mut self, types: &[TokenType<'a>]) -> bool {
		if types.iter().any(|r#type| self.check(r#type)) {
			self.advance();
			return true;
		}
		false
	}

	/// Compare token types only, ignoring literal payloads.
	fn check(&self, r#type: &TokenType<'a>) -> bool {
		std::mem::discriminant(&self.peek().r#type) == std::mem::discriminant(r#type)
	}

	/// Advance to the next token, returning the consumed one. Never moves past
	/// `Eof`.
	fn advance(&mut self) -> Token<'a> {
		if !self.is_at_end() {
			self.current += 1;
		}
		self.previous().clone()
	}

	fn is_at_end(&self) -> bool { self.peek().r#type == Eof }

	fn peek(&self) -> &Token<'a> { &self.tokens[self.current] }

	fn previous(&self) -> &Token<'a> { &self.tokens[self.current.saturating_sub(1)] }

	fn error_at(&self, token: &Token<'a>, r#type: ParseErrorType) -> ParseError {
		let location =
			if token.r#type == Eof { ErrorLocation::End } else { ErrorLocation::Near(token.lexeme.to_string()) };
		ParseError::new(token.line, location, r#type)
	}

	fn report(&mut self, error: ParseError) {
		tracing::debug!(line = error.line, "{}", error.r#type);
		self.errors.push(error);
	}

	/// Panic-mode recovery: discard tokens until just after a terminator or
	/// just before a token that starts a statement.
	fn synchronize(&mut self) {
		self.advance();
		while !self.is_at_end() {
			if matches!(self.previous().r#type, NewLine | Semicolon) {
				return;
			}
			if self.peek().r#type.starts_statement() {
				return;
			}
			self.advance();
		}
	}
}
