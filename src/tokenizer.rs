use crate::errors::SyntaxError;
use crate::operators::{self, Operator};
use lazy_static::lazy_static;
use log::trace;
use regex::Regex;
use std::fmt::{self, Display, Formatter};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Paren {
    Open,
    Close,
}

/// One lexical element of an expression.
///
/// Number literals are kept as text; converting them to floats is deferred
/// to evaluation time, so the tokenizer never decides questions of float
/// precision or literal well-formedness beyond the character class.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    /// A maximal run of digits and dots, e.g. `23.414`.
    Num(String),
    Op(Operator),
    Paren(Paren),
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Token::Num(text) => write!(f, "{}", text),
            Token::Op(op) => write!(f, "{}", op),
            Token::Paren(Paren::Open) => write!(f, "("),
            Token::Paren(Paren::Close) => write!(f, ")"),
        }
    }
}

/// A minus is unary at the start of the expression, after an opening
/// parenthesis, and after any operator. Everywhere else it subtracts.
fn minus_is_unary(last: Option<&Token>) -> bool {
    matches!(last, None | Some(Token::Paren(Paren::Open)) | Some(Token::Op(_)))
}

/// Checks that `next` may follow `last` (`None` meaning the start of the
/// expression). Runs once per emitted token, so the whole token stream is
/// validated by the time tokenization finishes.
fn check_adjacent(last: Option<&Token>, next: &Token, position: usize) -> Result<(), SyntaxError> {
    let ok = match last {
        // leading token: an operand, a group, or a unary prefix
        None => match next {
            Token::Num(_) | Token::Paren(Paren::Open) => true,
            Token::Op(op) => op.is_unary(),
            Token::Paren(Paren::Close) => false,
        },
        // no implicit multiplication, so no `4(` and no unary prefix after
        // an operand
        Some(Token::Num(_)) => match next {
            Token::Paren(Paren::Close) => true,
            Token::Op(op) => op.is_binary(),
            Token::Num(_) | Token::Paren(Paren::Open) => false,
        },
        Some(Token::Paren(Paren::Open)) => match next {
            Token::Num(_) | Token::Paren(Paren::Open) => true,
            Token::Op(op) => op.is_unary(),
            Token::Paren(Paren::Close) => false,
        },
        Some(Token::Paren(Paren::Close)) => match next {
            Token::Paren(Paren::Close) => true,
            Token::Op(op) => op.is_binary(),
            Token::Num(_) | Token::Paren(Paren::Open) => false,
        },
        // chained unary prefixes like `√−4` are fine
        Some(Token::Op(_)) => match next {
            Token::Num(_) | Token::Paren(Paren::Open) => true,
            Token::Op(op) => op.is_unary(),
            Token::Paren(Paren::Close) => false,
        },
    };
    if ok {
        Ok(())
    } else if last.is_none() {
        Err(SyntaxError::InvalidBoundary {
            token: next.to_string(),
            position,
        })
    } else {
        Err(SyntaxError::UnexpectedToken {
            token: next.to_string(),
            position,
        })
    }
}

/// Scans an expression string into a validated token sequence.
///
/// The scan walks the input once, left to right, with one token of history.
/// Maximal runs of `[0-9.]` become single [`Token::Num`]s, a minus becomes
/// unary or binary depending on its predecessor, and every emitted token is
/// checked against its predecessor on the spot, so an ill-formed input is
/// rejected without producing a partial token list.
///
/// # Errors
///
/// * [`SyntaxError::EmptyExpression`] for an input without any token,
/// * [`SyntaxError::InvalidCharacter`] for anything outside the accepted
///   character set (this includes whitespace),
/// * [`SyntaxError::InvalidBoundary`] for an illegal first or last token,
/// * [`SyntaxError::UnexpectedToken`] for an illegal pair of adjacent tokens.
///
pub fn tokenize(text: &str) -> Result<Vec<Token>, SyntaxError> {
    lazy_static! {
        static ref RE_NUMBER: Regex = Regex::new(r"^[0-9.]+").unwrap();
    }

    if text.is_empty() {
        return Err(SyntaxError::EmptyExpression);
    }

    let mut tokens = Vec::new();
    // byte offset of the first not-yet-consumed character; char_indices
    // yields bytes while diagnostics want character positions, so both are
    // tracked
    let mut consumed_until = 0usize;
    let mut last_position = 0usize;
    for (position, (byte_offset, c)) in text.char_indices().enumerate() {
        if byte_offset < consumed_until {
            continue;
        }
        let glyph = operators::fold_ascii_alias(c);
        let token = if glyph.is_ascii_digit() || glyph == '.' {
            let run = match RE_NUMBER.find(&text[byte_offset..]) {
                Some(m) => m.as_str(),
                None => unreachable!("a digit or dot always starts a number run"),
            };
            consumed_until = byte_offset + run.len();
            Token::Num(run.to_string())
        } else {
            consumed_until = byte_offset + c.len_utf8();
            if glyph == '(' {
                Token::Paren(Paren::Open)
            } else if glyph == ')' {
                Token::Paren(Paren::Close)
            } else if glyph == operators::MINUS {
                if minus_is_unary(tokens.last()) {
                    Token::Op(operators::NEG)
                } else {
                    Token::Op(operators::SUB)
                }
            } else if let Some(op) = operators::unary(glyph).or_else(|| operators::binary(glyph)) {
                Token::Op(op)
            } else {
                return Err(SyntaxError::InvalidCharacter {
                    character: c,
                    position,
                });
            }
        };
        check_adjacent(tokens.last(), &token, position)?;
        tokens.push(token);
        last_position = position;
    }

    // closing boundary: the expression has to end in an operand
    match tokens.last() {
        Some(Token::Num(_)) | Some(Token::Paren(Paren::Close)) => {}
        Some(token) => {
            return Err(SyntaxError::InvalidBoundary {
                token: token.to_string(),
                position: last_position,
            })
        }
        None => return Err(SyntaxError::EmptyExpression),
    }

    trace!("tokenized {:?} into {} tokens", text, tokens.len());
    Ok(tokens)
}
