use thiserror::Error;

/// Rejections raised while turning text into tokens or tokens into a tree.
///
/// All positions are character offsets into the input string, not byte
/// offsets, so they stay meaningful for the multi-byte operator glyphs.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum SyntaxError {
    /// A character outside of `0-9 . ( ) + − × ÷ ^ √` (or an ASCII alias).
    #[error("character '{character}' at position {position} is not a digit, parenthesis, or operator")]
    InvalidCharacter { character: char, position: usize },
    /// A token that is illegal as the first or last token of an expression,
    /// e.g. a leading `×` or a trailing `+`.
    #[error("an expression cannot begin or end with token '{token}' (position {position})")]
    InvalidBoundary { token: String, position: usize },
    /// A token that cannot follow its predecessor, e.g. the `√` in `4√2`.
    #[error("token '{token}' at position {position} cannot follow the preceding token")]
    UnexpectedToken { token: String, position: usize },
    /// Unbalanced parentheses, discovered while reducing the operator stack.
    #[error("mismatched parentheses")]
    MismatchedParens,
    /// The input contained no tokens at all.
    #[error("cannot evaluate an empty expression")]
    EmptyExpression,
}

/// Failures of the arithmetic itself, raised while walking a parse tree.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum EvalError {
    #[error("division by zero")]
    DivideByZero,
    /// Square root of a negative operand. Reported as an error instead of
    /// silently producing NaN.
    #[error("square root of a negative number")]
    DomainError,
    /// A leaf that does not parse as a number, e.g. `1..2`. The tokenizer
    /// accepts any run of digits and dots, so this is where malformed
    /// literals surface.
    #[error("'{0}' is not a number")]
    NotANumber(String),
}

/// Union of everything that can go wrong between raw text and a result.
/// This is the error type of [`eval_str`](crate::eval_str).
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum CalcError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

pub type CalcResult<T> = Result<T, CalcError>;
