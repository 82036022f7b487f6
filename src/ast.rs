use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOperator {
    pub fn symbol(self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Sub => '-',
            BinaryOperator::Mul => '*',
            BinaryOperator::Div => '/',
        }
    }
}

/// A parsed expression. Each `BinaryOp` owns its operands, so the tree has
/// no sharing and no cycles.
#[derive(Debug, Clone, PartialEq)]
pub enum ASTNode {
    Literal(f64),
    /// Resolved against the variable store at evaluation time.
    Variable(String),
    BinaryOp {
        op: BinaryOperator,
        left: Box<ASTNode>,
        right: Box<ASTNode>,
    },
}

impl ASTNode {
    pub fn binary(op: BinaryOperator, left: ASTNode, right: ASTNode) -> Self {
        ASTNode::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// Fully parenthesized form, handy in logs.
impl fmt::Display for ASTNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ASTNode::Literal(value) => write!(f, "{}", value),
            ASTNode::Variable(name) => write!(f, "{}", name),
            ASTNode::BinaryOp { op, left, right } => {
                write!(f, "({} {} {})", left, op.symbol(), right)
            }
        }
    }
}
