use std::path::PathBuf;

use clap::Parser;
use expr_calculator::{Calculator, DEFAULT_CSV_FILE, DEFAULT_XLSX_FILE};
use tracing_subscriber::EnvFilter;

const DEMO_EXPRESSIONS: &[&str] = &[
    "a + b",
    "a - c",
    "a * b",
    "a / d",
    "(((a + b) - c) * 10) / d",
    "a + x - d",
    "x / y",
    "m + n",
    "42 + 10",
    "(a + b) * (c + d)",
];

const DEMO_BINDINGS: &[(&str, f64)] = &[
    ("a", 5.0),
    ("b", 3.0),
    ("c", 2.0),
    ("d", 4.0),
    ("x", 10.0),
    ("y", 0.0),
];

#[derive(Parser, Debug)]
#[command(about = "Evaluate arithmetic expressions and keep a history")]
struct Cli {
    /// Expressions to evaluate; the built-in demo runs when none are given
    expressions: Vec<String>,

    /// Variable binding, repeatable
    #[arg(long = "var", value_name = "NAME=VALUE", value_parser = parse_binding)]
    vars: Vec<(String, f64)>,

    /// Write the history as CSV
    #[arg(long, value_name = "PATH", num_args = 0..=1, default_missing_value = DEFAULT_CSV_FILE)]
    csv: Option<PathBuf>,

    /// Write the history as an Excel workbook
    #[arg(long, value_name = "PATH", num_args = 0..=1, default_missing_value = DEFAULT_XLSX_FILE)]
    xlsx: Option<PathBuf>,

    /// Only show the newest N history entries
    #[arg(long, value_name = "N")]
    last: Option<usize>,
}

fn parse_binding(raw: &str) -> Result<(String, f64), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", raw))?;
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("invalid value for '{}': {}", name.trim(), err))?;
    Ok((name.trim().to_string(), value))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let demo = cli.expressions.is_empty();

    let mut calc = Calculator::new();
    if cli.vars.is_empty() && demo {
        calc.set_vars(DEMO_BINDINGS.iter().copied());
    } else {
        calc.set_vars(cli.vars);
    }

    let vars = calc.show_vars();
    if vars.is_empty() {
        println!("No variables defined.");
    } else {
        println!("Current Variables:");
        for line in vars {
            println!("  {}", line);
        }
    }

    let expressions: Vec<String> = if demo {
        DEMO_EXPRESSIONS.iter().map(|expr| expr.to_string()).collect()
    } else {
        cli.expressions
    };

    for expr in &expressions {
        let outcome = calc.evaluate(expr);
        println!("{} => {}", expr, outcome);
    }

    let history = calc.show_history(cli.last);
    if history.is_empty() {
        println!("No history yet.");
    } else {
        println!("History:");
        for line in history {
            println!("  {}", line);
        }
    }
    println!("Memory: {}", calc.get_memory());

    let csv = match cli.csv {
        Some(path) => Some(path),
        None if demo => Some(PathBuf::from(DEFAULT_CSV_FILE)),
        None => None,
    };
    let exports = csv
        .map(|path| calc.export_history_to_csv(path))
        .into_iter()
        .chain(cli.xlsx.map(|path| calc.export_history_to_excel(path)));

    for result in exports {
        match result {
            Ok(message) => println!("{}", message),
            Err(err) => {
                eprintln!("Error: {}", err);
                std::process::exit(1);
            }
        }
    }
}
