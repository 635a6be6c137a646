use std::fmt;

use logos::Logos;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Represents a lexical token handed to the parser.
///
/// Runs of `-` never reach the parser as such: the tokenizer collapses them
/// into a single `Plus` or `Minus` depending on their length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    Integer(i64),
    /// `+`, or an even run of `-`.
    Plus,
    /// An odd run of `-`.
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// The source is exhausted or an unrecognized character was reached.
    EndOfInput,
}

/// The kind of a [`Token`] without its payload.
///
/// Used wherever the parser states what it expects rather than what it has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Integer,
    Plus,
    Minus,
    Multiply,
    Divide,
    LParen,
    RParen,
    EndOfInput,
}

impl Token {
    /// Returns the payload-free kind of this token.
    ///
    /// # Example
    /// ```
    /// use intcalc::interpreter::lexer::{Token, TokenKind};
    ///
    /// assert_eq!(Token::Integer(7).kind(), TokenKind::Integer);
    /// assert_eq!(Token::RParen.kind(), TokenKind::RParen);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Integer(_) => TokenKind::Integer,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Multiply => TokenKind::Multiply,
            Self::Divide => TokenKind::Divide,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            Self::EndOfInput => TokenKind::EndOfInput,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Integer => "integer",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::EndOfInput => "end of input",
        };
        f.write_str(text)
    }
}

/// Errors reported by the generated lexer.
///
/// The default variant is what logos produces for any character no rule
/// matches.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum LexError {
    #[default]
    UnrecognizedCharacter,
    NumericOverflow,
}

/// Raw lexemes as recognized by logos, before minus runs are collapsed.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(error = LexError)]
#[logos(skip r" +")]
enum Lexeme {
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    #[regex(r"-+", |lex| lex.slice().len())]
    Minuses(usize),
    #[token("+")]
    Plus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}

/// Parses a run of decimal digits.
///
/// The regex guarantees the slice holds only digits, so the only possible
/// failure is a value beyond `i64::MAX`.
fn parse_integer(lex: &logos::Lexer<Lexeme>) -> Result<i64, LexError> {
    lex.slice().parse().map_err(|_| LexError::NumericOverflow)
}

/// Produces tokens from a single line of text on demand.
///
/// The tokenizer owns its cursor; the parser pulls one token at a time with
/// [`Tokenizer::next_token`]. Once the end of the text (or an unrecognized
/// character) has been reached every further call yields
/// [`Token::EndOfInput`].
pub struct Tokenizer<'src> {
    lexer:     logos::Lexer<'src, Lexeme>,
    offset:    usize,
    exhausted: bool,
}

impl<'src> Tokenizer<'src> {
    /// Creates a tokenizer positioned at the start of `text`.
    #[must_use]
    pub fn new(text: &'src str) -> Self {
        Self { lexer:     Lexeme::lexer(text),
               offset:    0,
               exhausted: false, }
    }

    /// Byte offset where the most recently produced token starts.
    ///
    /// After `EndOfInput` this is the offset at which lexing stopped.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the next token.
    ///
    /// # Errors
    /// Returns [`ParseError::NumericOverflow`] when a digit run does not fit
    /// an `i64`.
    ///
    /// # Example
    /// ```
    /// use intcalc::interpreter::lexer::{Token, Tokenizer};
    ///
    /// let mut tokenizer = Tokenizer::new("5---3");
    /// assert_eq!(tokenizer.next_token().unwrap(), Token::Integer(5));
    /// assert_eq!(tokenizer.next_token().unwrap(), Token::Minus);
    /// assert_eq!(tokenizer.next_token().unwrap(), Token::Integer(3));
    /// assert_eq!(tokenizer.next_token().unwrap(), Token::EndOfInput);
    /// assert_eq!(tokenizer.next_token().unwrap(), Token::EndOfInput);
    /// ```
    pub fn next_token(&mut self) -> ParseResult<Token> {
        if self.exhausted {
            return Ok(Token::EndOfInput);
        }

        let token = match self.lexer.next() {
            None => self.finish(),
            Some(Ok(lexeme)) => {
                self.offset = self.lexer.span().start;
                match lexeme {
                    Lexeme::Integer(value) => Token::Integer(value),
                    Lexeme::Minuses(count) if count % 2 == 0 => Token::Plus,
                    Lexeme::Minuses(_) => Token::Minus,
                    Lexeme::Plus => Token::Plus,
                    Lexeme::Star => Token::Multiply,
                    Lexeme::Slash => Token::Divide,
                    Lexeme::LParen => Token::LParen,
                    Lexeme::RParen => Token::RParen,
                }
            },
            Some(Err(LexError::NumericOverflow)) => {
                let position = self.lexer.span().start;
                return Err(ParseError::NumericOverflow { literal: self.lexer.slice().to_string(),
                                                         position });
            },
            Some(Err(LexError::UnrecognizedCharacter)) => {
                log::debug!("unrecognized character {:?} at {}, treating as end of input",
                            self.lexer.slice(),
                            self.lexer.span().start);
                self.offset = self.lexer.span().start;
                self.exhausted = true;
                Token::EndOfInput
            },
        };

        log::trace!("token {token:?} at {}", self.offset);
        Ok(token)
    }

    fn finish(&mut self) -> Token {
        self.offset = self.lexer.source().len();
        self.exhausted = true;
        Token::EndOfInput
    }
}

/// Collects every token of `text` up to and including the first
/// [`Token::EndOfInput`].
///
/// # Errors
/// Fails on the first digit run that does not fit an `i64`.
///
/// # Example
/// ```
/// use intcalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("(1+2)").unwrap();
/// assert_eq!(tokens,
///            vec![Token::LParen,
///                 Token::Integer(1),
///                 Token::Plus,
///                 Token::Integer(2),
///                 Token::RParen,
///                 Token::EndOfInput]);
/// ```
pub fn tokenize(text: &str) -> ParseResult<Vec<Token>> {
    let mut tokenizer = Tokenizer::new(text);
    let mut tokens = Vec::new();
    loop {
        let token = tokenizer.next_token()?;
        tokens.push(token);
        if token == Token::EndOfInput {
            return Ok(tokens);
        }
    }
}
