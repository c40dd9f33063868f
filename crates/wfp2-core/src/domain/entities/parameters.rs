//! Placeholder parameters and literal `{key}` substitution.

use std::collections::BTreeMap;

/// Mapping from placeholder key to substitution value.
///
/// Backed by a `BTreeMap` so iteration (and therefore rendering) is
/// deterministic.
///
/// ## Placeholder vocabulary
///
/// | Placeholder          | Set by                         |
/// |----------------------|--------------------------------|
/// | `{generator.date}`   | renderer enrichment            |
/// | `{generator.name}`   | renderer enrichment            |
/// | `{generator.author}` | renderer enrichment            |
/// | `{generator.file}`   | renderer, file targets only    |
/// | `{name}`             | controller template            |
/// | `{namespace}`        | controller template            |
/// | `{body}`             | controller template            |
/// | `{actionname}`       | action template                |
/// | `{view}`             | action template                |
/// | `{controller}`       | view template                  |
/// | `{action}`           | view template                  |
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterMapping {
    values: BTreeMap<String, String>,
}

impl ParameterMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Replace every `{key}` whose key is present in the mapping.
    ///
    /// Single left-to-right pass over `template`: substituted values are
    /// copied to the output and never scanned again, so a value containing
    /// `{other}` stays literal. Unknown placeholders are kept verbatim.
    pub fn substitute(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];

            let Some(close) = after.find('}') else {
                out.push_str(&rest[open..]);
                return out;
            };

            match self.values.get(&after[..close]) {
                Some(value) => {
                    out.push_str(value);
                    rest = &after[close + 1..];
                }
                None => {
                    // Not ours; a later '{' may still open a known key.
                    out.push('{');
                    rest = after;
                }
            }
        }

        out.push_str(rest);
        out
    }
}

impl<K, V> FromIterator<(K, V)> for ParameterMapping
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
