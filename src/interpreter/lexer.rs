use logos::Logos;

use crate::{
    ast::BinaryOperator,
    error::ParseError,
    interpreter::parser::ParseResult,
};

/// Represents a lexical token in an expression line.
///
/// The statement keyword has already been stripped, so a token stream only
/// ever holds operands, operators and parentheses.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// All-digit literal such as `42`. There are no negative literals: `-5`
    /// lexes as `Minus` followed by `Integer(5)`.
    #[regex(r"[0-9]+", parse_integer, priority = 3)]
    Integer(i64),
    /// Any other run of characters that are neither whitespace nor operators,
    /// resolved as a variable name during evaluation.
    #[regex(r"[^ \t\f\r\n+\-*/%()<>=!]+", |lex| lex.slice().to_string(), allow_greedy = true)]
    Identifier(String),
    /// A lone `=` or `!`. Either one is only an operator when followed by
    /// `=`; otherwise it is part of a name. `tokenize` glues it to the
    /// identifier it touches and never returns this token.
    #[regex(r"[=!]", |lex| lex.slice().to_string())]
    Stray(String),
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
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// Whitespace separates tokens and is never emitted.
    #[regex(r"[ \t\f\r\n]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Returns the binary operator this token stands for, if any.
    #[must_use]
    pub const fn as_operator(&self) -> Option<BinaryOperator> {
        match self {
            Self::Plus => Some(BinaryOperator::Add),
            Self::Minus => Some(BinaryOperator::Sub),
            Self::Star => Some(BinaryOperator::Mul),
            Self::Slash => Some(BinaryOperator::Div),
            Self::Percent => Some(BinaryOperator::Mod),
            Self::EqualEqual => Some(BinaryOperator::Equal),
            Self::BangEqual => Some(BinaryOperator::NotEqual),
            Self::LessEqual => Some(BinaryOperator::LessEqual),
            Self::GreaterEqual => Some(BinaryOperator::GreaterEqual),
            Self::Less => Some(BinaryOperator::Less),
            Self::Greater => Some(BinaryOperator::Greater),
            _ => None,
        }
    }

    /// Returns `true` for tokens that can be part of a name.
    #[must_use]
    pub const fn is_word(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Identifier(_) | Self::Stray(_))
    }
}

/// Splits one expression line into tokens.
///
/// Names, integer literals and lone `=`/`!` characters that touch each other
/// form a single identifier, so `a=b` is one name and `x = 5` reads `=` as
/// a name of its own.
///
/// # Parameters
/// - `expression`: The expression text, without its statement keyword.
/// - `line`: Source line number for error reporting.
///
/// # Returns
/// The tokens in source order.
///
/// # Errors
/// `ParseError::LiteralTooLarge` for an all-digit literal outside `i64`.
///
/// # Example
/// ```
/// use blockscript::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("i%15==0", 1).unwrap();
/// assert_eq!(tokens,
///            vec![Token::Identifier("i".into()),
///                 Token::Percent,
///                 Token::Integer(15),
///                 Token::EqualEqual,
///                 Token::Integer(0)]);
///
/// assert_eq!(tokenize("a=b", 1).unwrap(), vec![Token::Identifier("a=b".into())]);
/// ```
pub fn tokenize(expression: &str, line: usize) -> ParseResult<Vec<Token>> {
    let mut tokens = Vec::new();
    // Start offset of the last token while it can still absorb a neighbour.
    let mut word_start: Option<usize> = None;
    let mut last_end = 0;

    for (token, span) in Token::lexer(expression).spanned() {
        // Every character matches some rule, so only an integer literal
        // that overflows its callback can fail.
        let token = token.map_err(|()| ParseError::LiteralTooLarge { literal: expression[span.clone()].to_string(),
                                                                     line })?;

        match word_start {
            Some(start) if token.is_word() && span.start == last_end => {
                if let Some(last) = tokens.last_mut() {
                    *last = Token::Identifier(expression[start..span.end].to_string());
                }
            },
            _ => {
                word_start = token.is_word().then_some(span.start);
                tokens.push(match token {
                                Token::Stray(text) => Token::Identifier(text),
                                other => other,
                            });
            },
        }
        last_end = span.end;
    }

    Ok(tokens)
}

/// Parses an all-digit literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed value.
/// - `None`: If the literal does not fit in an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
