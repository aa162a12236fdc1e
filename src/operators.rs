use std::fmt::{self, Display, Formatter};

/// The canonical operator glyphs. The calculator front-ends that feed this
/// library produce the Unicode characters, not their ASCII lookalikes.
pub const MINUS: char = '−';
pub const TIMES: char = '×';
pub const DIVIDE: char = '÷';
pub const SQRT: char = '√';

/// Unary operations a parse tree node can hold.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum UnaryOpKind {
    Neg,
    Sqrt,
}

/// Binary operations a parse tree node can hold.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OpKind {
    Unary(UnaryOpKind),
    Binary(BinOpKind),
}

/// Grouping direction for operators of equal precedence.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Assoc {
    Left,
    Right,
}

/// One row of the operator metadata table. Unary and binary minus are
/// distinct operators that happen to share a glyph.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Operator {
    /// Canonical glyph of the operator in an expression string.
    pub glyph: char,
    /// What the operator computes, which also fixes its arity.
    pub kind: OpKind,
    /// A higher number binds tighter.
    pub prio: i32,
    /// Only meaningful for binary operators; unary operators reduce
    /// right-to-left by construction.
    pub assoc: Assoc,
}

impl Operator {
    pub fn is_unary(&self) -> bool {
        matches!(self.kind, OpKind::Unary(_))
    }
    pub fn is_binary(&self) -> bool {
        matches!(self.kind, OpKind::Binary(_))
    }
    /// Number of operands the operator consumes during a reduction.
    pub fn arity(&self) -> usize {
        match self.kind {
            OpKind::Unary(_) => 1,
            OpKind::Binary(_) => 2,
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.glyph)
    }
}

impl Display for UnaryOpKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            UnaryOpKind::Neg => write!(f, "{}", MINUS),
            UnaryOpKind::Sqrt => write!(f, "{}", SQRT),
        }
    }
}

impl Display for BinOpKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BinOpKind::Add => write!(f, "+"),
            BinOpKind::Sub => write!(f, "{}", MINUS),
            BinOpKind::Mul => write!(f, "{}", TIMES),
            BinOpKind::Div => write!(f, "{}", DIVIDE),
            BinOpKind::Pow => write!(f, "^"),
        }
    }
}

pub const SQRT_OP: Operator = Operator {
    glyph: SQRT,
    kind: OpKind::Unary(UnaryOpKind::Sqrt),
    prio: 3,
    assoc: Assoc::Right,
};
pub const POW: Operator = Operator {
    glyph: '^',
    kind: OpKind::Binary(BinOpKind::Pow),
    prio: 3,
    assoc: Assoc::Right,
};
pub const NEG: Operator = Operator {
    glyph: MINUS,
    kind: OpKind::Unary(UnaryOpKind::Neg),
    prio: 2,
    assoc: Assoc::Right,
};
pub const MUL: Operator = Operator {
    glyph: TIMES,
    kind: OpKind::Binary(BinOpKind::Mul),
    prio: 1,
    assoc: Assoc::Left,
};
pub const DIV: Operator = Operator {
    glyph: DIVIDE,
    kind: OpKind::Binary(BinOpKind::Div),
    prio: 1,
    assoc: Assoc::Left,
};
pub const ADD: Operator = Operator {
    glyph: '+',
    kind: OpKind::Binary(BinOpKind::Add),
    prio: 0,
    assoc: Assoc::Left,
};
pub const SUB: Operator = Operator {
    glyph: MINUS,
    kind: OpKind::Binary(BinOpKind::Sub),
    prio: 0,
    assoc: Assoc::Left,
};

/// The full operator table. Read-only, fixed for the lifetime of the process.
pub const OPERATORS: [Operator; 7] = [SQRT_OP, POW, NEG, MUL, DIV, ADD, SUB];

/// Folds the ASCII spellings `- * /` onto the canonical Unicode glyphs, so
/// that hand-typed expressions work the same as button-built ones.
pub fn fold_ascii_alias(c: char) -> char {
    match c {
        '-' => MINUS,
        '*' => TIMES,
        '/' => DIVIDE,
        _ => c,
    }
}

/// Looks up the unary operator written as `glyph`, if there is one.
pub fn unary(glyph: char) -> Option<Operator> {
    OPERATORS
        .iter()
        .copied()
        .find(|op| op.glyph == glyph && op.is_unary())
}

/// Looks up the binary operator written as `glyph`, if there is one.
pub fn binary(glyph: char) -> Option<Operator> {
    OPERATORS
        .iter()
        .copied()
        .find(|op| op.glyph == glyph && op.is_binary())
}
