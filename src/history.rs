use std::fmt;

use chrono::{DateTime, Utc};

/// What a single evaluate call produced. Failures are kept as display-ready
/// text, the same text that is returned to the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Value(f64),
    Error(String),
}

impl Outcome {
    pub fn from_error(err: &impl fmt::Display) -> Self {
        Outcome::Error(format!("Error: {}", err))
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Outcome::Value(value) => Some(*value),
            Outcome::Error(_) => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error(_))
    }
}

/// Plain decimal for everyday magnitudes, `1e+300` / `1.5e-07` style outside
/// `1e-4..1e16`.
pub fn format_number(value: f64) -> String {
    let magnitude = value.abs();
    if !value.is_finite() || value == 0.0 || (1e-4..1e16).contains(&magnitude) {
        return value.to_string();
    }

    let sci = format!("{:e}", value);
    match sci.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => sci,
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Value(value) => write!(f, "{}", format_number(*value)),
            Outcome::Error(msg) => write!(f, "{}", msg),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// 1-based position in the log.
    pub sequence_index: usize,
    pub expression: String,
    pub outcome: Outcome,
    pub recorded_at: DateTime<Utc>,
}

/// Append-only log of evaluations, oldest first.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn append(&mut self, expression: &str, outcome: Outcome) -> &HistoryEntry {
        let index = self.entries.len();
        self.entries.push(HistoryEntry {
            sequence_index: index + 1,
            expression: expression.to_string(),
            outcome,
            recorded_at: Utc::now(),
        });
        &self.entries[index]
    }

    /// Formatted `"<index>: <expression> = <result>"` lines in chronological
    /// order. A non-zero `last_n` keeps only the newest entries, numbered
    /// from 1 within that view; `None` and `Some(0)` list everything. The
    /// returned iterator is lazy and can be cloned to walk the lines again.
    pub fn entries(&self, last_n: Option<usize>) -> impl Iterator<Item = String> + Clone + '_ {
        let start = match last_n {
            Some(n) if n > 0 => self.entries.len().saturating_sub(n),
            _ => 0,
        };
        self.entries[start..]
            .iter()
            .enumerate()
            .map(|(idx, entry)| format!("{}: {} = {}", idx + 1, entry.expression, entry.outcome))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) -> &'static str {
        self.entries.clear();
        "History cleared."
    }
}
