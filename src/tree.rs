use crate::errors::EvalError;
use crate::operators::{BinOpKind, UnaryOpKind};
use num::Float;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Elements the parser expects to fit on the stack without heap allocation.
/// Longer expressions work too, they just spill.
pub const N_NODES_ON_STACK: usize = 32;

/// An expression tree as built by [`parse`](crate::parse).
///
/// Each node owns its children exclusively; a tree built from a validated
/// token sequence always has a parseable literal in every leaf and the
/// right number of children under every operator.
#[derive(Clone, Debug, PartialEq)]
pub enum ParseTree {
    /// A numeric literal, still in its textual form.
    Leaf(String),
    Unary(UnaryOpKind, Box<ParseTree>),
    Binary(BinOpKind, Box<ParseTree>, Box<ParseTree>),
}

impl Display for ParseTree {
    /// Renders the tree as a fully parenthesized expression, e.g.
    /// `(1+(2×3))` for the input `1+2×3`. Handy for asserting tree shape.
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ParseTree::Leaf(text) => write!(f, "{}", text),
            ParseTree::Unary(op, only) => write!(f, "({}{})", op, only),
            ParseTree::Binary(op, left, right) => write!(f, "({}{}{})", left, op, right),
        }
    }
}

/// Recursively evaluates a parse tree to a single number.
///
/// Literals are parsed here, not in the tokenizer. The operator set is
/// closed, so every node is matched exhaustively and there is no fallback
/// path that could produce NaN from a well-formed tree.
///
/// # Errors
///
/// * [`EvalError::NotANumber`] if a leaf does not parse, e.g. `1..2`,
/// * [`EvalError::DivideByZero`] if the right operand of `÷` is exactly zero,
/// * [`EvalError::DomainError`] if the operand of `√` is negative.
///
pub fn evaluate<T: Float + FromStr>(tree: &ParseTree) -> Result<T, EvalError> {
    match tree {
        ParseTree::Leaf(text) => text
            .parse::<T>()
            .map_err(|_| EvalError::NotANumber(text.clone())),
        ParseTree::Unary(UnaryOpKind::Neg, only) => Ok(-evaluate::<T>(only)?),
        ParseTree::Unary(UnaryOpKind::Sqrt, only) => {
            let x = evaluate::<T>(only)?;
            if x < T::zero() {
                Err(EvalError::DomainError)
            } else {
                Ok(x.sqrt())
            }
        }
        ParseTree::Binary(op, left, right) => {
            let lhs = evaluate::<T>(left)?;
            let rhs = evaluate::<T>(right)?;
            match op {
                BinOpKind::Add => Ok(lhs + rhs),
                BinOpKind::Sub => Ok(lhs - rhs),
                BinOpKind::Mul => Ok(lhs * rhs),
                BinOpKind::Div => {
                    if rhs == T::zero() {
                        Err(EvalError::DivideByZero)
                    } else {
                        Ok(lhs / rhs)
                    }
                }
                BinOpKind::Pow => Ok(lhs.powf(rhs)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(text: &str) -> Box<ParseTree> {
        Box::new(ParseTree::Leaf(text.to_string()))
    }

    #[test]
    fn test_eval() {
        let tree = ParseTree::Binary(
            BinOpKind::Add,
            leaf("1"),
            Box::new(ParseTree::Binary(BinOpKind::Mul, leaf("2"), leaf("3"))),
        );
        assert_eq!(evaluate::<f64>(&tree), Ok(7.0));
        assert_eq!(format!("{}", tree), "(1+(2×3))");
    }

    #[test]
    fn test_unary() {
        let tree = ParseTree::Unary(UnaryOpKind::Neg, leaf("1.5"));
        assert_eq!(evaluate::<f64>(&tree), Ok(-1.5));
        let tree = ParseTree::Unary(UnaryOpKind::Sqrt, leaf("9"));
        assert_eq!(evaluate::<f64>(&tree), Ok(3.0));
        assert_eq!(format!("{}", tree), "(√9)");
    }

    #[test]
    fn test_domain_error() {
        let tree = ParseTree::Unary(
            UnaryOpKind::Sqrt,
            Box::new(ParseTree::Unary(UnaryOpKind::Neg, leaf("4"))),
        );
        assert_eq!(evaluate::<f64>(&tree), Err(EvalError::DomainError));
    }

    #[test]
    fn test_divide_by_zero() {
        let tree = ParseTree::Binary(BinOpKind::Div, leaf("5"), leaf("0"));
        assert_eq!(evaluate::<f64>(&tree), Err(EvalError::DivideByZero));
        // 0÷x for x≠0 is plain zero, not an error
        let tree = ParseTree::Binary(BinOpKind::Div, leaf("0"), leaf("5"));
        assert_eq!(evaluate::<f64>(&tree), Ok(0.0));
    }

    #[test]
    fn test_not_a_number() {
        let tree = ParseTree::Leaf("1..2".to_string());
        assert_eq!(
            evaluate::<f64>(&tree),
            Err(EvalError::NotANumber("1..2".to_string()))
        );
        let tree = ParseTree::Leaf(".".to_string());
        assert!(evaluate::<f64>(&tree).is_err());
    }

    #[test]
    fn test_f32_and_f64() {
        let tree = ParseTree::Binary(BinOpKind::Pow, leaf("2"), leaf("10"));
        assert_eq!(evaluate::<f32>(&tree), Ok(1024.0f32));
        assert_eq!(evaluate::<f64>(&tree), Ok(1024.0f64));
    }
}
