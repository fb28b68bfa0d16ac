//! # Morph
//!
//! A tree-walking interpreter for Morph, a small imperative scripting language
//! with Indonesian keywords.
//!
//! User's source code: `biar rata = (min + max) / 2`

//! ## Scanning
//!
//! Also known as `lexing`, takes in the characters and converts them into
//! tokens. Unlike many languages a newline is a token here: it ends a
//! statement, just like `;`. Spaces, tabs and `#` comments are dropped. So the
//! tokens are
//! `["biar", "rata", "=", "(", "min", "+", "max", ")", "/", "2", EOF]`.
//!
//! A character the scanner does not know is reported and scanning goes on, so
//! one run reports every lexical error.

//! ## Parsing
//!
//! A recursive-descent `parser` builds the `abstract syntax tree`:
//!
//! ``` markdown
//! rata (Statement::VarDeclaration)
//! └── / (Expression::Binary)
//!     ├── + (Expression::Binary)
//!     │   ├── min (Expression::Variable)
//!     │   └── max (Expression::Variable)
//!     └── 2 (Expression::Literal)
//! ```
//!
//! On a syntax error the parser records it, skips to the next statement and
//! keeps going. A tree with any error in it is never run.

//! ## Interpreting
//!
//! The tree is executed directly, with no bytecode in between. Every block
//! opens a child scope that disappears when the block ends. The first runtime
//! error stops the run; output printed before it stands.

pub mod cli;
mod environment;
mod error;
mod interpreter;
mod parser;
mod scanner;
mod session;
mod statement;

pub use error::{
	MorphError,
	interpreter::{RuntimeError, RuntimeErrorType},
	parser::{ErrorLocation, ParseError, ParseErrorType},
	scanner::{ScanError, ScanErrorType, ScannerError},
};
pub use session::{Morph, Outcome, Session, Status};
