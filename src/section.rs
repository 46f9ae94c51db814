use std::fmt;

/// A named group of key-value pairs, kept in the order they were declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

impl Section {
    #[must_use]
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            entries: Vec::with_capacity(16),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Appends a new entry. Callers must reject duplicate keys beforehand.
    pub(crate) fn push(&mut self, key: String, value: String) {
        debug_assert!(!self.contains_key(&key), "duplicate key {key:?}");
        self.entries.push((key, value));
    }

    /// Overwrites the value of an existing key, returning `false` if the key is absent.
    pub(crate) fn replace(&mut self, key: &str, value: String) -> bool {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => {
                *v = value;
                true
            }
            None => false,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}]", self.name)?;

        for (key, value) in &self.entries {
            writeln!(f, "{key}={value}")?;
        }

        Ok(())
    }
}
