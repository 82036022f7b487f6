use std::collections::HashMap;

/// Identifier bindings owned by one calculator. `set` replaces the whole
/// mapping; there is no per-name update.
#[derive(Debug, Clone, Default)]
pub struct VariableStore {
    bindings: HashMap<String, f64>,
}

impl VariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set<I, K>(&mut self, bindings: I)
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        self.bindings = bindings
            .into_iter()
            .map(|(name, value)| (name.into(), value))
            .collect();
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.bindings.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindings sorted by name.
    pub fn sorted(&self) -> Vec<(&str, f64)> {
        let mut vars: Vec<_> = self
            .bindings
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
            .collect();
        vars.sort_by_key(|(name, _)| *name);
        vars
    }
}
