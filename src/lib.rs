mod ast;
mod calculator;
mod error;
mod export;
mod history;
mod interpreter;
mod lexer;
mod parser;
mod token;
mod variables;

pub use ast::{ASTNode, BinaryOperator};
pub use calculator::Calculator;
pub use error::{CalcError, EvalError, ExportError, ParseError};
pub use export::{
    CsvWriter, DEFAULT_CSV_FILE, DEFAULT_XLSX_FILE, HISTORY_HEADERS, TabularWriter, XlsxWriter,
};
pub use history::{History, HistoryEntry, Outcome, format_number};
pub use interpreter::Interpreter;
pub use lexer::Lexer;
pub use parser::{MAX_DEPTH, Parser};
pub use token::Token;
pub use variables::VariableStore;

/// Parses `expression` into an AST.
pub fn parse(expression: &str) -> Result<ASTNode, ParseError> {
    let lexer = Lexer::new(expression);
    let mut parser = Parser::new(lexer)?;
    parser.parse()
}

/// One-shot parse and evaluation against `variables`, without history.
pub fn evaluate(expression: &str, variables: &VariableStore) -> Result<f64, CalcError> {
    let tree = parse(expression)?;
    tracing::debug!(ast = %tree, "parsed");
    let value = Interpreter::new(variables).interpret(&tree)?;
    Ok(value)
}
