// clusterlink-core/src/domain/credentials/parameters.rs

use secrecy::{ExposeSecret, SecretString};
use std::collections::{HashMap, HashSet};

/// Ordered list of parameter names to fetch in one batch.
/// Duplicates are tolerated; they are only sent once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterRequest {
    names: Vec<String>,
}

impl ParameterRequest {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Names in request order, first occurrence wins.
    pub fn unique_names(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.names
            .iter()
            .filter(|n| seen.insert(n.as_str()))
            .cloned()
            .collect()
    }
}

impl<S: Into<String>> FromIterator<S> for ParameterRequest {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Decrypted parameter values keyed by parameter name.
#[derive(Debug, Default)]
pub struct ParameterValues(HashMap<String, SecretString>);

impl ParameterValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), SecretString::new(value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&SecretString> {
        self.0.get(name)
    }

    pub fn expose(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(|v| v.expose_secret().as_str())
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sorted, for stable output.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.0.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Result of a batch fetch: what came back, and what did not.
///
/// The store silently drops names it does not know (or cannot decrypt for
/// us). Instead of guessing whether that is fine, the gap is carried here
/// and the caller decides.
#[derive(Debug, Default)]
pub struct ResolvedParameters {
    pub values: ParameterValues,
    pub missing: Vec<String>,
}

impl ResolvedParameters {
    /// Folds raw `(name, value)` records into the mapping.
    /// Records for names that were never requested are discarded.
    pub fn from_records<I>(request: &ParameterRequest, records: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut values = ParameterValues::new();
        for (name, value) in records {
            if request.contains(&name) {
                values.insert(name, value);
            } else {
                tracing::debug!(parameter = %name, "Ignoring unrequested parameter");
            }
        }

        let missing = request
            .unique_names()
            .into_iter()
            .filter(|n| !values.contains_key(n))
            .collect();

        Self { values, missing }
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}
