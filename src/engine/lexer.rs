use logos::Logos;

/// Represents a lexical token in a calculator expression.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the expression language.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// A maximal run of digits and decimal points, such as `42` or `3.14`.
    ///
    /// The run is captured whole, so a malformed literal like `1.2.3` is one
    /// token; it is rejected when the run is parsed into a number.
    #[regex(r"[0-9.]+", |lex| lex.slice().to_string())]
    Literal(String),
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
    /// `%`
    #[token("%")]
    Percent,
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

impl Token {
    /// The single-character form pushed on the operator stack, or `None` for
    /// tokens that are not operators.
    #[must_use]
    pub const fn op_char(&self) -> Option<char> {
        match self {
            Self::Plus => Some('+'),
            Self::Minus => Some('-'),
            Self::Star => Some('*'),
            Self::Slash => Some('/'),
            Self::Percent => Some('%'),
            _ => None,
        }
    }
}
