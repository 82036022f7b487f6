use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::ExportError;
use crate::export::{CsvWriter, HISTORY_HEADERS, TabularWriter, XlsxWriter};
use crate::history::{History, Outcome, format_number};
use crate::variables::VariableStore;

/// Expression calculator with its own variables, history and last-result
/// memory. Not synchronized; share it across threads behind a `Mutex`.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    variables: VariableStore,
    history: History,
    memory: Option<f64>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces every binding with `bindings`.
    pub fn set_vars<I, K>(&mut self, bindings: I)
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        self.variables.set(bindings);
        debug!(count = self.variables.len(), "variables replaced");
    }

    pub fn variables(&self) -> &VariableStore {
        &self.variables
    }

    /// `name = value` lines sorted by name.
    pub fn show_vars(&self) -> Vec<String> {
        self.variables
            .sorted()
            .into_iter()
            .map(|(name, value)| format!("{} = {}", name, format_number(value)))
            .collect()
    }

    /// Last successful result, `0.0` before any success.
    pub fn get_memory(&self) -> f64 {
        self.memory.unwrap_or(0.0)
    }

    /// Parses and evaluates `expression`, records the outcome in history and
    /// returns it. Failures come back as `Outcome::Error` and leave the
    /// memory untouched.
    #[tracing::instrument(skip(self), level = "debug")]
    pub fn evaluate(&mut self, expression: &str) -> Outcome {
        let outcome = match crate::evaluate(expression, &self.variables) {
            Ok(value) => {
                self.memory = Some(value);
                Outcome::Value(value)
            }
            Err(err) => {
                warn!(%err, "evaluation failed");
                Outcome::from_error(&err)
            }
        };

        let entry = self.history.append(expression, outcome.clone());
        debug!(index = entry.sequence_index, outcome = %entry.outcome, "recorded");
        outcome
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn show_history(&self, last_n: Option<usize>) -> Vec<String> {
        self.history.entries(last_n).collect()
    }

    pub fn clear_history(&mut self) -> String {
        let removed = self.history.len();
        let confirmation = self.history.clear();
        info!(removed, "history cleared");
        confirmation.to_string()
    }

    /// Writes the history as an `Expression`/`Result` table using `writer`.
    pub fn export_history(
        &self,
        writer: &dyn TabularWriter,
        path: impl AsRef<Path>,
    ) -> Result<String, ExportError> {
        let path = path.as_ref();
        let rows: Vec<Vec<String>> = self
            .history
            .iter()
            .map(|entry| vec![entry.expression.clone(), entry.outcome.to_string()])
            .collect();

        writer.write_table(path, &HISTORY_HEADERS, &rows)?;
        info!(path = %path.display(), rows = rows.len(), "history exported");
        Ok(format!("Exported to {}", path.display()))
    }

    pub fn export_history_to_csv(&self, path: impl AsRef<Path>) -> Result<String, ExportError> {
        self.export_history(&CsvWriter, path)
    }

    pub fn export_history_to_excel(&self, path: impl AsRef<Path>) -> Result<String, ExportError> {
        self.export_history(&XlsxWriter, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn calculator() -> Calculator {
        let mut calc = Calculator::new();
        calc.set_vars([
            ("a", 5.0),
            ("b", 3.0),
            ("c", 2.0),
            ("d", 4.0),
            ("x", 10.0),
            ("y", 0.0),
        ]);
        calc
    }

    #[test]
    fn test_memory_defaults_to_zero() {
        assert_eq!(Calculator::new().get_memory(), 0.0);
    }

    #[test]
    fn test_memory_tracks_last_success() {
        let mut calc = calculator();
        calc.evaluate("a * b");
        assert_eq!(calc.get_memory(), 15.0);

        let outcome = calc.evaluate("x / y");
        assert!(outcome.is_error());
        assert_eq!(calc.get_memory(), 15.0);

        calc.evaluate("(");
        assert_eq!(calc.get_memory(), 15.0);
    }

    #[test]
    fn test_failures_are_recorded() {
        let mut calc = calculator();
        calc.evaluate("a + b");
        calc.evaluate("x / y");
        calc.evaluate("a +");
        assert_eq!(
            calc.show_history(None),
            vec![
                "1: a + b = 8".to_string(),
                "2: x / y = Error: division by zero".to_string(),
                "3: a + = Error: unexpected end of input".to_string(),
            ]
        );
    }

    #[test]
    fn test_history_entries_record_outcomes() {
        let mut calc = calculator();
        calc.evaluate("a + b");
        calc.evaluate("x / y");

        let entries: Vec<_> = calc.history().iter().collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].sequence_index, 1);
        assert_eq!(entries[0].outcome, Outcome::Value(8.0));
        assert_eq!(entries[1].expression, "x / y");
        assert!(entries[1].outcome.is_error());
    }

    #[test]
    fn test_set_vars_replaces_store() {
        let mut calc = calculator();
        calc.set_vars([("z", 1.5)]);
        assert_eq!(calc.variables().len(), 1);
        assert_eq!(calc.variables().get("z"), Some(1.5));
        assert_eq!(calc.variables().get("a"), None);
    }

    #[test]
    fn test_show_vars() {
        let mut calc = Calculator::new();
        assert!(calc.show_vars().is_empty());
        calc.set_vars([("tax", 50.0), ("discount", 0.1)]);
        assert_eq!(
            calc.show_vars(),
            vec!["discount = 0.1".to_string(), "tax = 50".to_string()]
        );
    }

    #[test]
    fn test_clear_history_confirms() {
        let mut calc = calculator();
        calc.evaluate("a");
        assert_eq!(calc.clear_history(), "History cleared.");
        assert!(calc.show_history(None).is_empty());
        assert_eq!(calc.get_memory(), 5.0);
    }

    #[test]
    fn test_export_reports_destination() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");
        let mut calc = calculator();
        calc.evaluate("a + b");

        let message = calc.export_history_to_csv(&path).unwrap();
        assert_eq!(message, format!("Exported to {}", path.display()));
        assert!(path.exists());
    }
}
