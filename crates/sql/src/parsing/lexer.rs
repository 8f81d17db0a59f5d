//! SQL lexer
//!
//! Turns raw SQL text into classified tokens, each carrying its literal text
//! and the byte offset it started at. Only a small set of words are reserved
//! keywords; dialect words such as `ENGINE`, `USING` or `PARTITION` and all
//! data type names stay plain identifiers so they remain legal table and
//! column names. The grammar matches them by case-insensitive text, and
//! only when written bare: a quoted identifier is always just a name.

use std::fmt::{self, Display};
use std::iter::Peekable;
use std::str::CharIndices;

use crate::error::{Error, Result};

/// A lexical token.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    /// A numeric literal, kept as written.
    Number(String),
    /// A single-quoted string literal, without quotes and with `''` unescaped.
    String(String),
    /// A bare identifier. Dialect words are matched against these only.
    Ident(String),
    /// An identifier quoted with backticks or double quotes, without quotes.
    /// Never matched as a keyword or dialect word.
    QuotedIdent(String),
    /// A reserved keyword.
    Keyword(Keyword),
    Period,             // .
    Equal,              // =
    NotEqual,           // != or <>
    GreaterThan,        // >
    GreaterThanOrEqual, // >=
    LessThan,           // <
    LessThanOrEqual,    // <=
    Plus,               // +
    Minus,              // -
    Asterisk,           // *
    Slash,              // /
    Percent,            // %
    OpenParen,          // (
    CloseParen,         // )
    Comma,              // ,
    Semicolon,          // ;
}

impl Token {
    /// The literal text of the token: identifier and number text, string
    /// contents, keyword text, or the punctuation itself.
    pub fn literal(&self) -> String {
        match self {
            Self::Number(text)
            | Self::String(text)
            | Self::Ident(text)
            | Self::QuotedIdent(text) => text.clone(),
            Self::Keyword(keyword) => keyword.to_string(),
            Self::Period => ".".into(),
            Self::Equal => "=".into(),
            Self::NotEqual => "!=".into(),
            Self::GreaterThan => ">".into(),
            Self::GreaterThanOrEqual => ">=".into(),
            Self::LessThan => "<".into(),
            Self::LessThanOrEqual => "<=".into(),
            Self::Plus => "+".into(),
            Self::Minus => "-".into(),
            Self::Asterisk => "*".into(),
            Self::Slash => "/".into(),
            Self::Percent => "%".into(),
            Self::OpenParen => "(".into(),
            Self::CloseParen => ")".into(),
            Self::Comma => ",".into(),
            Self::Semicolon => ";".into(),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keyword(keyword) => write!(f, "keyword {keyword}"),
            Self::Ident(ident) => write!(f, "identifier {ident}"),
            Self::QuotedIdent(ident) => write!(f, "quoted identifier {ident}"),
            Self::Number(number) => write!(f, "number {number}"),
            Self::String(string) => write!(f, "string '{string}'"),
            punctuation => write!(f, "'{}'", punctuation.literal()),
        }
    }
}

impl From<Keyword> for Token {
    fn from(keyword: Keyword) -> Self {
        Self::Keyword(keyword)
    }
}

/// Reserved SQL keywords.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    And,
    As,
    Asc,
    By,
    Constraint,
    Create,
    Default,
    Desc,
    Distinct,
    Exists,
    False,
    From,
    Group,
    Having,
    If,
    Index,
    Is,
    Key,
    Limit,
    Not,
    Null,
    Offset,
    On,
    Or,
    Order,
    Primary,
    Select,
    Table,
    Temporary,
    True,
    Unique,
    Where,
}

impl Keyword {
    /// Looks up a keyword, case-insensitively.
    pub fn lookup(word: &str) -> Option<Self> {
        Some(match word.to_uppercase().as_str() {
            "AND" => Self::And,
            "AS" => Self::As,
            "ASC" => Self::Asc,
            "BY" => Self::By,
            "CONSTRAINT" => Self::Constraint,
            "CREATE" => Self::Create,
            "DEFAULT" => Self::Default,
            "DESC" => Self::Desc,
            "DISTINCT" => Self::Distinct,
            "EXISTS" => Self::Exists,
            "FALSE" => Self::False,
            "FROM" => Self::From,
            "GROUP" => Self::Group,
            "HAVING" => Self::Having,
            "IF" => Self::If,
            "INDEX" => Self::Index,
            "IS" => Self::Is,
            "KEY" => Self::Key,
            "LIMIT" => Self::Limit,
            "NOT" => Self::Not,
            "NULL" => Self::Null,
            "OFFSET" => Self::Offset,
            "ON" => Self::On,
            "OR" => Self::Or,
            "ORDER" => Self::Order,
            "PRIMARY" => Self::Primary,
            "SELECT" => Self::Select,
            "TABLE" => Self::Table,
            "TEMPORARY" => Self::Temporary,
            "TRUE" => Self::True,
            "UNIQUE" => Self::Unique,
            "WHERE" => Self::Where,
            _ => return None,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::As => "AS",
            Self::Asc => "ASC",
            Self::By => "BY",
            Self::Constraint => "CONSTRAINT",
            Self::Create => "CREATE",
            Self::Default => "DEFAULT",
            Self::Desc => "DESC",
            Self::Distinct => "DISTINCT",
            Self::Exists => "EXISTS",
            Self::False => "FALSE",
            Self::From => "FROM",
            Self::Group => "GROUP",
            Self::Having => "HAVING",
            Self::If => "IF",
            Self::Index => "INDEX",
            Self::Is => "IS",
            Self::Key => "KEY",
            Self::Limit => "LIMIT",
            Self::Not => "NOT",
            Self::Null => "NULL",
            Self::Offset => "OFFSET",
            Self::On => "ON",
            Self::Or => "OR",
            Self::Order => "ORDER",
            Self::Primary => "PRIMARY",
            Self::Select => "SELECT",
            Self::Table => "TABLE",
            Self::Temporary => "TEMPORARY",
            Self::True => "TRUE",
            Self::Unique => "UNIQUE",
            Self::Where => "WHERE",
        }
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token together with the byte offset it starts at.
#[derive(Clone, Debug, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub offset: usize,
}

/// The lexer is an iterator over tokens. It does no lookahead of its own;
/// the parser wraps it in a `Peekable` for one token of lookahead.
pub struct Lexer<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl Iterator for Lexer<'_> {
    type Item = Result<Spanned>;

    fn next(&mut self) -> Option<Result<Spanned>> {
        self.scan().transpose()
    }
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given string.
    pub fn new(input: &'a str) -> Lexer<'a> {
        Lexer {
            input,
            chars: input.char_indices().peekable(),
        }
    }

    /// Tokenizes the whole input. Mostly useful in tests and diagnostics.
    pub fn tokenize(input: &str) -> Result<Vec<Token>> {
        Lexer::new(input)
            .map(|spanned| spanned.map(|spanned| spanned.token))
            .collect()
    }

    /// Returns the next character if it satisfies the predicate.
    fn next_if(&mut self, predicate: impl Fn(char) -> bool) -> Option<char> {
        self.chars.next_if(|&(_, c)| predicate(c)).map(|(_, c)| c)
    }

    /// Collects characters while the predicate holds.
    fn next_while(&mut self, predicate: impl Fn(char) -> bool) -> String {
        let mut value = String::new();
        while let Some(c) = self.next_if(&predicate) {
            value.push(c);
        }
        value
    }

    /// Offset of the next character, or the input length at the end.
    fn offset(&mut self) -> usize {
        self.chars
            .peek()
            .map(|&(offset, _)| offset)
            .unwrap_or(self.input.len())
    }

    /// Scans the next token, if any.
    fn scan(&mut self) -> Result<Option<Spanned>> {
        self.skip_whitespace_and_comments()?;
        let Some(&(offset, c)) = self.chars.peek() else {
            return Ok(None);
        };
        let token = match c {
            '\'' => self.scan_quoted('\'').map(Token::String)?,
            '"' | '`' => self.scan_quoted(c).map(Token::QuotedIdent)?,
            c if c.is_ascii_digit() => self.scan_number(),
            c if c.is_alphabetic() || c == '_' => self.scan_word(),
            c => self.scan_symbol().ok_or_else(|| Error::Lex {
                message: format!("unexpected character {c}"),
                offset,
            })?,
        };
        Ok(Some(Spanned { token, offset }))
    }

    /// Skips whitespace, `-- line` comments and `/* block */` comments.
    fn skip_whitespace_and_comments(&mut self) -> Result<()> {
        let input = self.input;
        loop {
            self.next_while(char::is_whitespace);
            let offset = self.offset();
            let rest = &input[offset..];
            if rest.starts_with("--") {
                self.next_while(|c| c != '\n');
            } else if rest.starts_with("/*") {
                let Some(end) = rest.find("*/") else {
                    return Err(Error::Lex {
                        message: "unterminated block comment".into(),
                        offset,
                    });
                };
                while self.offset() < offset + end + 2 {
                    self.chars.next();
                }
            } else {
                return Ok(());
            }
        }
    }

    /// Scans a quoted string or identifier. A doubled quote character stands
    /// for one literal quote.
    fn scan_quoted(&mut self, quote: char) -> Result<String> {
        let offset = self.offset();
        self.chars.next();
        let mut value = String::new();
        loop {
            match self.chars.next() {
                Some((_, c)) if c == quote => {
                    if self.next_if(|c| c == quote).is_none() {
                        return Ok(value);
                    }
                    value.push(quote);
                }
                Some((_, c)) => value.push(c),
                None => {
                    return Err(Error::Lex {
                        message: format!("unterminated {quote}-quoted text"),
                        offset,
                    })
                }
            }
        }
    }

    /// Scans a number: digits, an optional fraction and an optional exponent.
    fn scan_number(&mut self) -> Token {
        let mut number = self.next_while(|c| c.is_ascii_digit());
        if let Some(sep) = self.next_if(|c| c == '.') {
            number.push(sep);
            number.push_str(&self.next_while(|c| c.is_ascii_digit()));
        }
        if let Some(exp) = self.next_if(|c| c == 'e' || c == 'E') {
            number.push(exp);
            if let Some(sign) = self.next_if(|c| c == '+' || c == '-') {
                number.push(sign);
            }
            number.push_str(&self.next_while(|c| c.is_ascii_digit()));
        }
        Token::Number(number)
    }

    /// Scans an identifier or a keyword. Identifiers keep their case.
    fn scan_word(&mut self) -> Token {
        let word = self.next_while(|c| c.is_alphanumeric() || c == '_' || c == '$');
        match Keyword::lookup(&word) {
            Some(keyword) => Token::Keyword(keyword),
            None => Token::Ident(word),
        }
    }

    /// Scans a punctuation or operator symbol.
    fn scan_symbol(&mut self) -> Option<Token> {
        let (_, c) = self.chars.next()?;
        Some(match c {
            '.' => Token::Period,
            '=' => Token::Equal,
            ',' => Token::Comma,
            ';' => Token::Semicolon,
            '(' => Token::OpenParen,
            ')' => Token::CloseParen,
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Asterisk,
            '/' => Token::Slash,
            '%' => Token::Percent,
            '<' if self.next_if(|c| c == '=').is_some() => Token::LessThanOrEqual,
            '<' if self.next_if(|c| c == '>').is_some() => Token::NotEqual,
            '<' => Token::LessThan,
            '>' if self.next_if(|c| c == '=').is_some() => Token::GreaterThanOrEqual,
            '>' => Token::GreaterThan,
            '!' if self.next_if(|c| c == '=').is_some() => Token::NotEqual,
            _ => return None,
        })
    }
}
