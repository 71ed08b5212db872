//! Line tokenizer for Cruck.
//!
//! Cruck is line oriented: every statement, block header and closing brace
//! sits on its own line, so the tokenizer works one line at a time and
//! reports each token's 0-indexed character column. Those columns are what
//! positioned errors point at.

mod raw_token;

use std::fmt;

use logos::Logos;
use smallvec::SmallVec;

use raw_token::RawToken;

/// Kind of a lexed token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Keywords
    Print,
    Var,
    While,
    If,
    Else,
    Func,

    // Operators and punctuation
    EqEq,
    NotEq,
    GtEq,
    LtEq,
    Gt,
    Lt,
    Eq,
    Plus,
    Semicolon,
    LBrace,
    RBrace,
    LParen,
    RParen,

    // Literals and names
    Int,
    Str,
    Ident,

    /// `// ...` to the end of the line.
    LineComment,
    /// Characters no rule accepts (e.g. `*`, an unterminated string).
    Error,
}

impl TokenKind {
    /// Human-readable name used in token dumps.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Print => "print",
            TokenKind::Var => "var",
            TokenKind::While => "while",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Func => "func",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::GtEq => ">=",
            TokenKind::LtEq => "<=",
            TokenKind::Gt => ">",
            TokenKind::Lt => "<",
            TokenKind::Eq => "=",
            TokenKind::Plus => "+",
            TokenKind::Semicolon => ";",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Int => "integer",
            TokenKind::Str => "string",
            TokenKind::Ident => "identifier",
            TokenKind::LineComment => "comment",
            TokenKind::Error => "error",
        }
    }

    /// Whether this token can stand where an operand is expected.
    pub fn is_operand(self) -> bool {
        matches!(self, TokenKind::Int | TokenKind::Ident)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl From<RawToken> for TokenKind {
    fn from(raw: RawToken) -> Self {
        match raw {
            RawToken::LineComment => TokenKind::LineComment,
            RawToken::Print => TokenKind::Print,
            RawToken::Var => TokenKind::Var,
            RawToken::While => TokenKind::While,
            RawToken::If => TokenKind::If,
            RawToken::Else => TokenKind::Else,
            RawToken::Func => TokenKind::Func,
            RawToken::EqEq => TokenKind::EqEq,
            RawToken::NotEq => TokenKind::NotEq,
            RawToken::GtEq => TokenKind::GtEq,
            RawToken::LtEq => TokenKind::LtEq,
            RawToken::Gt => TokenKind::Gt,
            RawToken::Lt => TokenKind::Lt,
            RawToken::Eq => TokenKind::Eq,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::LBrace => TokenKind::LBrace,
            RawToken::RBrace => TokenKind::RBrace,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::Int => TokenKind::Int,
            RawToken::Str => TokenKind::Str,
            RawToken::Ident => TokenKind::Ident,
        }
    }
}

/// A token borrowed from its line.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token<'src> {
    pub kind: TokenKind,
    /// The exact source slice, quotes included for strings.
    pub text: &'src str,
    /// 0-indexed character column of the first character.
    pub col: u32,
}

impl<'src> Token<'src> {
    /// Text between the quotes of a string token; the raw text otherwise.
    pub fn string_contents(&self) -> &'src str {
        if self.kind == TokenKind::Str {
            self.text
                .strip_prefix('"')
                .and_then(|s| s.strip_suffix('"'))
                .unwrap_or(self.text)
        } else {
            self.text
        }
    }

    /// Column one past the last character.
    pub fn end_col(&self) -> u32 {
        let len = u32::try_from(self.text.chars().count()).unwrap_or(u32::MAX);
        self.col.saturating_add(len)
    }
}

/// Tokens of one line. Most Cruck lines have well under eight tokens.
pub type LineTokens<'src> = SmallVec<[Token<'src>; 8]>;

/// Lex a single line (without its terminating newline).
pub fn lex_line(line: &str) -> LineTokens<'_> {
    let mut tokens = LineTokens::new();
    let mut lexer = RawToken::lexer(line);

    // Byte offsets advance monotonically, so the character column is
    // tracked incrementally instead of recounted from the line start.
    let mut byte_cursor = 0usize;
    let mut char_cursor = 0usize;

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        char_cursor += line
            .get(byte_cursor..span.start)
            .map_or(0, |gap| gap.chars().count());
        byte_cursor = span.start;

        let kind = match result {
            Ok(raw) => TokenKind::from(raw),
            Err(()) => TokenKind::Error,
        };
        tokens.push(Token {
            kind,
            text: lexer.slice(),
            col: u32::try_from(char_cursor).unwrap_or(u32::MAX),
        });
    }

    tokens
}

/// Tokens of a line with any trailing comment removed.
pub fn lex_code(line: &str) -> LineTokens<'_> {
    let mut tokens = lex_line(line);
    if let Some(idx) = tokens.iter().position(|t| t.kind == TokenKind::LineComment) {
        tokens.truncate(idx);
    }
    tokens
}
