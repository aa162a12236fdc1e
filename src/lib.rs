//! Yardcalc evaluates arithmetic expressions as a pocket calculator would:
//! the operators `+ − × ÷ ^ √` with standard precedence, parentheses, and
//! a minus that is unary or binary depending on where it stands. The ASCII
//! spellings `- * /` are accepted as aliases of the Unicode glyphs.
//!
//! ```rust
//! let y = yardcalc::eval_str::<f64>("−1+2×3")?;
//! assert_eq!(y, 5.0);
//! let y = yardcalc::eval_str::<f64>("2^2^2")?;
//! assert_eq!(y, 16.0);
//! # Ok::<(), yardcalc::CalcError>(())
//! ```
//!
//! Evaluation runs in three stages, each usable on its own: [`tokenize`]
//! scans and validates the text, [`parse`] builds an expression tree with
//! the shunting-yard algorithm, and [`evaluate`] folds the tree to a number.
//!
//! ```rust
//! use yardcalc::{evaluate, parse, tokenize};
//!
//! let tokens = tokenize("(1+2)×3")?;
//! let tree = parse(&tokens)?;
//! assert_eq!(format!("{}", tree), "((1+2)×3)");
//! assert_eq!(evaluate::<f64>(&tree), Ok(9.0));
//! # Ok::<(), yardcalc::CalcError>(())
//! ```
//!
//! Failures are values, not panics or NaNs:
//!
//! ```rust
//! use yardcalc::{eval_str, CalcError, EvalError};
//!
//! let err = eval_str::<f64>("5÷0").unwrap_err();
//! assert_eq!(err, CalcError::Eval(EvalError::DivideByZero));
//! ```
//!
//! All three stages are pure functions of their input. There is no shared
//! state besides the constant operator table, so independent evaluations
//! can run concurrently without any locking.

use num::Float;
use std::str::FromStr;

mod errors;
mod operators;
mod parser;
mod tokenizer;
mod tree;

pub use errors::{CalcError, CalcResult, EvalError, SyntaxError};
pub use operators::{Assoc, BinOpKind, OpKind, Operator, UnaryOpKind, OPERATORS};
pub use parser::parse;
pub use tokenizer::{tokenize, Paren, Token};
pub use tree::{evaluate, ParseTree};

/// Evaluates an expression string to a number, the whole pipeline in one
/// call. This is the function a front-end calls when `=` is pressed; on an
/// error the caller keeps its display untouched, the core never decides
/// that.
///
/// # Errors
///
/// Any [`SyntaxError`] or [`EvalError`] of the three stages, unified into
/// [`CalcError`].
///
pub fn eval_str<T: Float + FromStr>(text: &str) -> CalcResult<T> {
    let tokens = tokenize(text)?;
    let tree = parse(&tokens)?;
    Ok(evaluate::<T>(&tree)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eval_str() {
        assert_eq!(eval_str::<f64>("1.3+0.7"), Ok(2.0));
        assert_eq!(eval_str::<f64>("1+2×3"), Ok(7.0));
        assert_eq!(eval_str::<f64>("(1+2)×3"), Ok(9.0));
        assert_eq!(eval_str::<f64>("√4+1"), Ok(3.0));
        assert_eq!(eval_str::<f32>("2^2^2"), Ok(16.0));
    }

    #[test]
    fn test_error_unification() {
        assert_eq!(
            eval_str::<f64>("(1+2"),
            Err(CalcError::Syntax(SyntaxError::MismatchedParens))
        );
        assert_eq!(
            eval_str::<f64>("5÷0"),
            Err(CalcError::Eval(EvalError::DivideByZero))
        );
        assert_eq!(
            eval_str::<f64>(""),
            Err(CalcError::Syntax(SyntaxError::EmptyExpression))
        );
    }
}
