/// A token produced by the scanner
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
	pub r#type: TokenType<'a>,
	/// Raw source text of the token, empty for end of input
	pub lexeme: &'a str,
	pub line:   usize,
	pub column: usize,
}

impl<'a> Token<'a> {
	pub fn new(r#type: TokenType<'a>, lexeme: &'a str, line: usize, column: usize) -> Self {
		Self { r#type, lexeme, line, column }
	}
}

/// The different types of tokens in Morph, The copying is lightweight
#[derive(Debug, Clone, PartialEq)]
pub enum TokenType<'a> {
	/// New Line Character `\n`, a statement terminator.
	NewLine,
	/// Left parenthesis `(`.
	LeftParen,
	/// Right parenthesis `)`.
	RightParen,
	/// Left brace `{`.
	LeftBrace,
	/// Right brace `}`.
	RightBrace,
	/// Left bracket `[`.
	LeftBracket,
	/// Right bracket `]`.
	RightBracket,
	/// Comma `,`.
	Comma,
	/// Dot `.`.
	Dot,
	/// Semicolon `;`.
	Semicolon,
	/// Colon `:`.
	Colon,
	/// Minus `-`.
	Minus,
	/// Plus `+`.
	Plus,
	/// Slash `/`.
	Slash,
	/// Asterisk `*`.
	Star,
	/// Percent `%`.
	Percent,
	/// Caret `^`, exponent. Scanned but not parsed.
	Caret,
	/// Bang `!`.
	Bang,
	/// Bang equal `!=`.
	BangEqual,
	/// Equal `=`.
	Equal,
	/// Equal equal `==`.
	EqualEqual,
	/// Greater than `>`.
	Greater,
	/// Greater than or equal `>=`.
	GreaterEqual,
	/// Less than `<`.
	Less,
	/// Less than or equal `<=`.
	LessEqual,
	/// Identifier, e.g. variable or function name.
	Identifier(&'a str),
	/// String literal without its quotes, e.g. `"halo"`.
	StringLiteral(&'a str),
	/// Number literal, decoded, e.g. `123.45`.
	NumberLiteral(f64),
	/// `biar`, mutable binding.
	Let,
	/// `tetap`, immutable binding.
	Const,
	/// `tulis`, print statement.
	Print,
	/// `benar`, boolean true.
	True,
	/// `salah`, boolean false.
	False,
	/// `nil`.
	Nil,
	/// `dan`, logical and.
	And,
	/// `atau`, logical or.
	Or,
	/// `jika`.
	If,
	/// `maka`.
	Then,
	/// `lain`, also the first half of `lain jika`.
	Else,
	/// `akhir`, closes an `jika` chain.
	End,
	/// `fungsi`.
	Function,
	/// `kembalikan`.
	Return,
	/// `selama`.
	While,
	/// `pilih`.
	Select,
	/// `ketika`.
	When,
	/// `lainnya`.
	Otherwise,
	/// `ambil`, fetch a line of input.
	Fetch,
	/// `ambil_semua`, import.
	Import,
	/// A character no token starts with. Carries the scanner's error position.
	Unrecognized(char),
	/// End of file/input.
	Eof,
}

impl<'a> TokenType<'a> {
	pub fn keyword_or_identifier(value: &'a str) -> Self {
		match value {
			"biar" => TokenType::Let,
			"tetap" => TokenType::Const,
			"tulis" => TokenType::Print,
			"benar" => TokenType::True,
			"salah" => TokenType::False,
			"nil" => TokenType::Nil,
			"dan" => TokenType::And,
			"atau" => TokenType::Or,
			"jika" => TokenType::If,
			"maka" => TokenType::Then,
			"lain" => TokenType::Else,
			"akhir" => TokenType::End,
			"fungsi" => TokenType::Function,
			"kembalikan" => TokenType::Return,
			"selama" => TokenType::While,
			"pilih" => TokenType::Select,
			"ketika" => TokenType::When,
			"lainnya" => TokenType::Otherwise,
			"ambil" => TokenType::Fetch,
			"ambil_semua" => TokenType::Import,
			_ => TokenType::Identifier(value),
		}
	}

	/// Tokens that begin a statement, where panic-mode recovery may resume.
	pub fn starts_statement(&self) -> bool {
		matches!(
			self,
			TokenType::Let
				| TokenType::Const
				| TokenType::Function
				| TokenType::If
				| TokenType::While
				| TokenType::Return
				| TokenType::Print
		)
	}
}
