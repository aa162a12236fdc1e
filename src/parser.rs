use crate::errors::SyntaxError;
use crate::operators::{Assoc, OpKind, Operator};
use crate::tokenizer::{Paren, Token};
use crate::tree::{ParseTree, N_NODES_ON_STACK};
use log::trace;
use smallvec::SmallVec;

/// What may sit on the operator stack: a real operator or the opening
/// parenthesis that fences off reductions.
#[derive(Clone, Debug, PartialEq)]
enum StackOp {
    Op(Operator),
    OpenParen,
}

type OpStack = SmallVec<[StackOp; N_NODES_ON_STACK]>;
type OperandStack = SmallVec<[ParseTree; N_NODES_ON_STACK]>;

/// Pops one operator and its operands and pushes the built node back onto
/// the operand stack. Underflow here means the token sequence was not
/// validated, which is a caller bug, not a user error.
fn reduce(op_stack: &mut OpStack, operands: &mut OperandStack) {
    let op = match op_stack.pop() {
        Some(StackOp::Op(op)) => op,
        _ => panic!("bug: reduce needs an operator on top of the operator stack"),
    };
    let mut pop_operand = || match operands.pop() {
        Some(node) => node,
        None => panic!("bug: operand stack underflow while reducing '{}'", op),
    };
    let node = match op.kind {
        OpKind::Binary(kind) => {
            let right = pop_operand();
            let left = pop_operand();
            ParseTree::Binary(kind, Box::new(left), Box::new(right))
        }
        OpKind::Unary(kind) => ParseTree::Unary(kind, Box::new(pop_operand())),
    };
    trace!("reduced '{}' to {}", op, node);
    operands.push(node);
}

/// Builds an expression tree from a token sequence with the shunting-yard
/// algorithm.
///
/// Operands go on one stack, operators and opening parentheses on another.
/// Unary operators are pushed without any precedence comparison; they bind
/// to the next finished sub-expression through the reduction order. A binary
/// operator first reduces everything on the stack that outranks it, where
/// "outranks" depends on its associativity, which is what makes `2^2^2`
/// come out as `2^(2^2)`.
///
/// The token sequence is expected to come from
/// [`tokenize`](crate::tokenize); parenthesis balance is the one thing the
/// tokenizer leaves to this function.
///
/// # Errors
///
/// * [`SyntaxError::MismatchedParens`] if a closing parenthesis finds no
///   opening one, or an opening one is still unmatched at the end,
/// * [`SyntaxError::EmptyExpression`] for an empty token sequence.
///
pub fn parse(tokens: &[Token]) -> Result<ParseTree, SyntaxError> {
    let mut op_stack = OpStack::new();
    let mut operands = OperandStack::new();

    for token in tokens {
        match token {
            Token::Num(text) => operands.push(ParseTree::Leaf(text.clone())),
            Token::Op(op) => match op.kind {
                OpKind::Unary(_) => op_stack.push(StackOp::Op(*op)),
                OpKind::Binary(_) => {
                    while let Some(StackOp::Op(top)) = op_stack.last() {
                        let top_outranks = match op.assoc {
                            Assoc::Left => op.prio <= top.prio,
                            Assoc::Right => op.prio < top.prio,
                        };
                        if !top_outranks {
                            break;
                        }
                        reduce(&mut op_stack, &mut operands);
                    }
                    op_stack.push(StackOp::Op(*op));
                }
            },
            Token::Paren(Paren::Open) => op_stack.push(StackOp::OpenParen),
            Token::Paren(Paren::Close) => loop {
                match op_stack.last() {
                    Some(StackOp::Op(_)) => reduce(&mut op_stack, &mut operands),
                    Some(StackOp::OpenParen) => {
                        op_stack.pop();
                        break;
                    }
                    None => return Err(SyntaxError::MismatchedParens),
                }
            },
        }
    }

    while let Some(top) = op_stack.last() {
        match top {
            StackOp::OpenParen => return Err(SyntaxError::MismatchedParens),
            StackOp::Op(_) => reduce(&mut op_stack, &mut operands),
        }
    }

    let root = operands.pop().ok_or(SyntaxError::EmptyExpression)?;
    if !operands.is_empty() {
        // cannot happen for a validated token sequence
        panic!(
            "bug: {} operands left on the stack besides the root",
            operands.len()
        );
    }
    Ok(root)
}
