//! Represents a lexical token in the Morph language.
//!
//! Keywords are part of the shape of the language’s grammar, so the parser
//! often has code like, “If the next token is `jika` then do . . . ” That
//! means the parser wants to know not just that it has a lexeme for some
//! identifier, but that it has a reserved word, and which keyword it is.
//!
//! There are lexemes for literal values, numbers and strings and `benar`,
//! `salah`, `nil`. Since the scanner has to walk each character in the literal
//! to correctly identify it, it also converts that textual representation to
//! the value the interpreter will use later.
//!
//! Unlike most C-family languages, a line break is not whitespace here: `\n`
//! becomes a [`TokenType::NewLine`] token that terminates statements.
//!
//! The scanner never stops at the first mistake. Every lexical error in the
//! source is collected, and an unrecognized character still leaves a token
//! behind so positions downstream stay in sync.
mod token;

use std::{iter::Peekable, str::CharIndices};

use TokenType::*;
use anyhow::Context;
pub use token::*;

use crate::{MorphError, ScanError, ScanErrorType, error::scanner::ScannerError};

/// Everything one pass over the source produced.
#[derive(Debug)]
pub struct Scanned<'a> {
	/// Tokens in source order, always ending with [`TokenType::Eof`]
	pub tokens: Vec<Token<'a>>,
	/// Lexical errors in source order
	pub errors: Vec<ScanError>,
}

/// A scanner for Morph source code
pub struct Scanner<'a> {
	/// User input source code
	source:       &'a str,
	/// User input source code iterator
	source_iter:  Peekable<CharIndices<'a>>,
	/// Points at the beginning of the current lexeme
	start:        usize,
	/// Points at the character currently being considered
	cursor:       usize,
	/// Tracks what source line `cursor` is on so we can produce tokens that
	/// know their location.
	line:         usize,
	column:       usize,
	/// Position of the first character of the current lexeme
	start_line:   usize,
	start_column: usize,
}

impl<'a> Scanner<'a> {
	pub fn new(source: &'a str) -> Self {
		let source_iter = source.char_indices().peekable();

		Self { source, source_iter, start: 0, cursor: 0, line: 1, column: 1, start_line: 1, start_column: 1 }
	}

	/// Scan all tokens from the source code
	pub fn scan_tokens(mut self) -> Result<Scanned<'a>, MorphError> {
		let mut tokens = Vec::new();
		let mut errors = Vec::new();
		while let Some(&(index, _)) = self.source_iter.peek() {
			// We are at the beginning of the next lexeme.
			self.start = index;
			self.cursor = self.start;
			self.start_line = self.line;
			self.start_column = self.column;
			match self.scan_token(&mut tokens) {
				Err(ScannerError::ScanError(e)) => {
					tracing::debug!(line = e.line, column = e.column, "{}", e.r#type);
					errors.push(e);
				}
				Err(ScannerError::InternalError(e)) => {
					return Err(e.into());
				}
				Ok(_) => {}
			}
		}
		tokens.push(Token::new(Eof, "", self.line, self.column));
		Ok(Scanned { tokens, errors })
	}

	/// Scan a single token from the source code
	fn scan_token(&mut self, tokens: &mut Vec<Token<'a>>) -> Result<(), ScannerError> {
		let next_char = self.advance().context("Unexpected EOF")?;
		#[rustfmt::skip]
		let r#type = match next_char {
			'(' => LeftParen,
			')' => RightParen,
			'{' => LeftBrace,
			'}' => RightBrace,
			'[' => LeftBracket,
			']' => RightBracket,
			',' => Comma,
			'.' => Dot,
			';' => Semicolon,
			':' => Colon,
			'-' => Minus,
			'+' => Plus,
			'/' => Slash,
			'*' => Star,
			'%' => Percent,
			'^' => Caret,
			'!' => if self.match_next('=') { BangEqual } else { Bang },
			'=' => if self.match_next('=') { EqualEqual } else { Equal },
			'<' => if self.match_next('=') { LessEqual } else { Less },
			'>' => if self.match_next('=') { GreaterEqual } else { Greater },
			'#' => {
				while self.peek().is_some_and(|c| c != '\n') { self.advance(); }
				return Ok(());
			}
			' ' | '\r' | '\t' => return Ok(()),
			'\n' => NewLine,
			'"' => self.string()?,
			c if c.is_ascii_digit() => self.number()?,
			c if c.is_alphabetic() || c == '_' => self.identifier(),
			c => {
				tokens.push(self.token(Unrecognized(c)));
				return Err(self.error(ScanErrorType::UnrecognizedCharacter(c)).into());
			}
		};

		tokens.push(self.token(r#type));
		Ok(())
	}

	/// Build a token spanning the current lexeme
	fn token(&self, r#type: TokenType<'a>) -> Token<'a> {
		Token::new(r#type, &self.source[self.start..self.cursor], self.start_line, self.start_column)
	}

	/// Build an error positioned at the start of the current lexeme
	fn error(&self, r#type: ScanErrorType) -> ScanError { ScanError::new(self.start_line, self.start_column, r#type) }

	/// Match the next character if it is the expected one
	fn match_next(&mut self, expected: char) -> bool {
		matches!(self.peek(), Some(c) if c == expected && { self.advance(); true })
	}

	/// Advance to the next character
	fn advance(&mut self) -> Option<char> {
		let (i, c) = self.source_iter.next()?;
		self.cursor = i + c.len_utf8();
		if c == '\n' {
			self.line += 1;
			self.column = 1;
		} else {
			self.column += 1;
		}
		Some(c)
	}

	/// Peek the current character
	fn peek(&mut self) -> Option<char> { self.source_iter.peek().map(|&(_, c)| c) }

	/// Peek the second character ahead
	fn peek_second(&mut self) -> Option<char> {
		let mut it = self.source_iter.clone();
		it.next()?;
		it.peek().map(|&(_, c)| c)
	}

	/// Scan a string literal. No escape sequences are processed.
	fn string(&mut self) -> Result<TokenType<'a>, ScannerError> {
		while self.peek().is_some_and(|c| c != '"') {
			self.advance();
		}

		self.peek().ok_or_else(|| self.error(ScanErrorType::UnterminatedString))?;
		self.advance(); // The closing "
		let value = &self.source[self.start + 1..self.cursor - 1];
		Ok(StringLiteral(value))
	}

	/// Scan a number literal
	fn number(&mut self) -> Result<TokenType<'a>, ScannerError> {
		while self.peek().is_some_and(|c| c.is_ascii_digit()) {
			self.advance();
		}

		// A trailing `.` without a digit after it is not part of the number.
		if self.peek() == Some('.') && self.peek_second().is_some_and(|c| c.is_ascii_digit()) {
			self.advance(); // consume '.'
			while self.peek().is_some_and(|c| c.is_ascii_digit()) {
				self.advance();
			}
		}

		let s = &self.source[self.start..self.cursor];
		Ok(NumberLiteral(s.parse().context("Failed to parse number literal")?))
	}

	/// Scan an identifier or keyword
	fn identifier(&mut self) -> TokenType<'a> {
		while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
			self.advance();
		}
		let text = &self.source[self.start..self.cursor];
		TokenType::keyword_or_identifier(text)
	}
}
