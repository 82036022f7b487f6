use thiserror::Error;

/// Failure to turn an expression string into an AST.
///
/// Positions are 0-based character offsets into the expression.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("empty expression")]
    EmptyExpression,
    #[error("invalid character '{ch}' at position {position}")]
    InvalidCharacter { ch: char, position: usize },
    #[error("invalid number '{literal}' at position {position}")]
    InvalidNumber { literal: String, position: usize },
    #[error("unexpected token '{token}' at position {position}")]
    UnexpectedToken { token: String, position: usize },
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("unbalanced parentheses: '(' at position {position} is never closed")]
    UnclosedParen { position: usize },
    #[error("unbalanced parentheses: unmatched ')' at position {position}")]
    UnmatchedCloseParen { position: usize },
    #[error("missing operator before '{token}' at position {position}")]
    MissingOperator { token: String, position: usize },
    #[error("expression nested too deeply at position {position}")]
    TooDeep { position: usize },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("Variable '{0}' is not defined")]
    UndefinedVariable(String),
    #[error("division by zero")]
    DivisionByZero,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Errors raised by the tabular writers. These are the only errors the
/// calculator hands back to its caller.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undefined_variable_message() {
        let err = EvalError::UndefinedVariable("m".to_string());
        assert_eq!(err.to_string(), "Variable 'm' is not defined");
    }

    #[test]
    fn test_calc_error_is_transparent() {
        let err: CalcError = EvalError::DivisionByZero.into();
        assert_eq!(err.to_string(), "division by zero");

        let err: CalcError = ParseError::UnclosedParen { position: 3 }.into();
        assert_eq!(
            err.to_string(),
            "unbalanced parentheses: '(' at position 3 is never closed"
        );
    }
}
