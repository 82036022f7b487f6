use crate::ast::{ASTNode, BinaryOperator};
use crate::error::EvalError;
use crate::variables::VariableStore;

/// Walks an AST against a borrowed variable store. Neither the tree nor the
/// store is modified.
pub struct Interpreter<'a> {
    variables: &'a VariableStore,
}

impl<'a> Interpreter<'a> {
    pub fn new(variables: &'a VariableStore) -> Self {
        Interpreter { variables }
    }

    /// Operands are evaluated left before right, so when both sides fail the
    /// left failure is the one reported.
    pub fn interpret(&self, node: &ASTNode) -> Result<f64, EvalError> {
        match node {
            ASTNode::Literal(value) => Ok(*value),
            ASTNode::Variable(name) => self
                .variables
                .get(name)
                .ok_or_else(|| EvalError::UndefinedVariable(name.clone())),
            ASTNode::BinaryOp { op, left, right } => {
                let left_val = self.interpret(left)?;
                let right_val = self.interpret(right)?;
                match op {
                    BinaryOperator::Add => Ok(left_val + right_val),
                    BinaryOperator::Sub => Ok(left_val - right_val),
                    BinaryOperator::Mul => Ok(left_val * right_val),
                    BinaryOperator::Div => {
                        if right_val == 0.0 {
                            Err(EvalError::DivisionByZero)
                        } else {
                            Ok(left_val / right_val)
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::BinaryOperator::{Add, Div, Mul, Sub};

    fn num(val: f64) -> ASTNode {
        ASTNode::Literal(val)
    }

    fn var(name: &str) -> ASTNode {
        ASTNode::Variable(name.to_string())
    }

    fn store() -> VariableStore {
        let mut variables = VariableStore::new();
        variables.set([("a", 5.0), ("b", 3.0), ("zero", 0.0)]);
        variables
    }

    #[test]
    fn test_interpret_number() {
        let variables = VariableStore::new();
        let interp = Interpreter::new(&variables);
        assert_eq!(interp.interpret(&num(42.0)).unwrap(), 42.0);
    }

    #[test]
    fn test_interpret_arithmetic() {
        let variables = store();
        let interp = Interpreter::new(&variables);
        assert_eq!(interp.interpret(&ASTNode::binary(Add, var("a"), var("b"))).unwrap(), 8.0);
        assert_eq!(interp.interpret(&ASTNode::binary(Sub, var("a"), var("b"))).unwrap(), 2.0);
        assert_eq!(interp.interpret(&ASTNode::binary(Mul, var("a"), var("b"))).unwrap(), 15.0);
        assert_eq!(interp.interpret(&ASTNode::binary(Div, var("a"), num(4.0))).unwrap(), 1.25);
    }

    #[test]
    fn test_interpret_division_is_not_truncated() {
        let variables = VariableStore::new();
        let interp = Interpreter::new(&variables);
        let node = ASTNode::binary(Div, num(7.0), num(2.0));
        assert_eq!(interp.interpret(&node).unwrap(), 3.5);
    }

    #[test]
    fn test_interpret_division_by_zero() {
        let variables = store();
        let interp = Interpreter::new(&variables);
        let node = ASTNode::binary(Div, var("a"), var("zero"));
        assert_eq!(interp.interpret(&node), Err(EvalError::DivisionByZero));

        let node = ASTNode::binary(Div, num(1.0), ASTNode::binary(Sub, var("b"), num(3.0)));
        assert_eq!(interp.interpret(&node), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_interpret_zero_numerator() {
        let variables = store();
        let interp = Interpreter::new(&variables);
        let node = ASTNode::binary(Div, var("zero"), var("a"));
        assert_eq!(interp.interpret(&node).unwrap(), 0.0);
    }

    #[test]
    fn test_interpret_undefined_variable() {
        let variables = store();
        let interp = Interpreter::new(&variables);
        assert_eq!(
            interp.interpret(&var("missing")),
            Err(EvalError::UndefinedVariable("missing".to_string()))
        );
    }

    #[test]
    fn test_interpret_reports_left_failure_first() {
        let variables = VariableStore::new();
        let interp = Interpreter::new(&variables);
        let node = ASTNode::binary(Div, var("m"), ASTNode::binary(Sub, var("n"), var("n")));
        assert_eq!(
            interp.interpret(&node),
            Err(EvalError::UndefinedVariable("m".to_string()))
        );
    }
}
