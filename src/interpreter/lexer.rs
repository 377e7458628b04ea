use logos::Logos;
use tracing::trace;

/// Represents a lexical token in a single line.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens of the line grammar; any other
/// character is dropped by [`tokenize`].
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `1.` or `.5`.
    #[regex(r"[0-9]+(\.[0-9]*)?|\.[0-9]+", parse_number, priority = 3)]
    Number(f64),
    /// A run of digits and dots that does not form a number, such as `1.2.3`
    /// or a lone `.`. The parser rejects it.
    #[regex(r"[0-9.]+", |lex| lex.slice().to_string(), priority = 2)]
    MalformedNumber(String),
    /// A reference to an earlier line, such as `#3`.
    #[regex(r"#[0-9]+", parse_line_ref)]
    LineRef(usize),
    /// Identifier tokens; variable names such as `x` or `total2`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::MalformedNumber(text) | Self::Identifier(text) => write!(f, "{text}"),
            Self::LineRef(line_number) => write!(f, "#{line_number}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Equals => write!(f, "="),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Ignored => Ok(()),
        }
    }
}

/// Splits one line into tokens paired with their 1-based column.
///
/// Tokenizing never fails. Characters that do not start any token (`-` is an
/// operator, but `,`, `$`, `%`, a lone `#` and so on are not) are skipped
/// without producing a token or an error.
///
/// # Parameters
/// - `line`: The raw text of a single line.
///
/// # Returns
/// The tokens of the line in source order.
///
/// # Example
/// ```
/// use linepad::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x = #1 * 2");
/// assert_eq!(tokens,
///            vec![(Token::Identifier("x".into()), 1),
///                 (Token::Equals, 3),
///                 (Token::LineRef(1), 5),
///                 (Token::Star, 8),
///                 (Token::Number(2.0), 10)]);
///
/// // Unknown characters are dropped.
/// assert_eq!(tokenize("$5"), vec![(Token::Number(5.0), 2)]);
/// ```
#[must_use]
pub fn tokenize(line: &str) -> Vec<(Token, usize)> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(line);

    while let Some(token) = lexer.next() {
        let column = column_at(line, lexer.span().start);
        if let Ok(tok) = token {
            tokens.push((tok, column));
        } else {
            trace!(column, dropped = lexer.slice(), "skipping unrecognized input");
        }
    }

    tokens
}

/// Converts a byte offset into a 1-based character column.
fn column_at(line: &str, offset: usize) -> usize {
    line.get(..offset).map_or(offset, |prefix| prefix.chars().count()) + 1
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the token slice is not a valid float.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses the line number of a `#N` reference.
///
/// Numbers too large for `usize` saturate, which no document can reach, so
/// such a reference is always reported as invalid.
fn parse_line_ref(lex: &logos::Lexer<Token>) -> usize {
    lex.slice()[1..].parse().unwrap_or(usize::MAX)
}
