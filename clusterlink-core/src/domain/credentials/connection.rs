// clusterlink-core/src/domain/credentials/connection.rs

use super::parameters::{ParameterRequest, ParameterValues};
use crate::domain::error::DomainError;
use secrecy::{ExposeSecret, SecretString};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Options the warehouse connector expects, in the order it documents them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConnectionOption {
    Url,
    Account,
    User,
    Password,
    Database,
    Schema,
    Warehouse,
}

impl ConnectionOption {
    pub const ALL: [ConnectionOption; 7] = [
        ConnectionOption::Url,
        ConnectionOption::Account,
        ConnectionOption::User,
        ConnectionOption::Password,
        ConnectionOption::Database,
        ConnectionOption::Schema,
        ConnectionOption::Warehouse,
    ];

    /// Key as the connector reads it.
    pub fn key(&self) -> &'static str {
        match self {
            ConnectionOption::Url => "sfURL",
            ConnectionOption::Account => "sfAccount",
            ConnectionOption::User => "sfUser",
            ConnectionOption::Password => "sfPassword",
            ConnectionOption::Database => "sfDatabase",
            ConnectionOption::Schema => "sfSchema",
            ConnectionOption::Warehouse => "sfWarehouse",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ConnectionOption::Url => "url",
            ConnectionOption::Account => "account",
            ConnectionOption::User => "user",
            ConnectionOption::Password => "password",
            ConnectionOption::Database => "database",
            ConnectionOption::Schema => "schema",
            ConnectionOption::Warehouse => "warehouse",
        }
    }

    pub fn is_sensitive(&self) -> bool {
        matches!(self, ConnectionOption::Password)
    }
}

impl fmt::Display for ConnectionOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConnectionOption {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ConnectionOption::ALL
            .into_iter()
            .find(|opt| opt.name() == wanted || opt.key().to_ascii_lowercase() == wanted)
            .ok_or_else(|| DomainError::UnknownOption(s.to_string()))
    }
}

/// Which store parameter feeds which connection option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterBindings(BTreeMap<ConnectionOption, String>);

impl ParameterBindings {
    pub fn new(bindings: BTreeMap<ConnectionOption, String>) -> Self {
        Self(bindings)
    }

    /// Parses `option name -> parameter name` pairs (as read from settings).
    pub fn parse<'a, I>(pairs: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut bindings = BTreeMap::new();
        for (option, parameter) in pairs {
            bindings.insert(option.parse::<ConnectionOption>()?, parameter.clone());
        }
        Ok(Self(bindings))
    }

    /// Entries from `other` win.
    pub fn extend(&mut self, other: ParameterBindings) {
        self.0.extend(other.0);
    }

    pub fn parameter_for(&self, option: ConnectionOption) -> Option<&str> {
        self.0.get(&option).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ConnectionOption, &str)> {
        self.0.iter().map(|(opt, name)| (*opt, name.as_str()))
    }

    /// Batch request covering every bound parameter, in option order.
    pub fn request(&self) -> ParameterRequest {
        ParameterRequest::new(self.0.values().cloned())
    }
}

/// Assembled options for the warehouse connector. Lives for one session.
#[derive(Debug, Default)]
pub struct ConnectionOptions(BTreeMap<ConnectionOption, SecretString>);

impl ConnectionOptions {
    /// Fails fast unless every option is bound and its parameter is present in `values`.
    pub fn assemble(
        bindings: &ParameterBindings,
        values: &ParameterValues,
    ) -> Result<Self, DomainError> {
        let mut options = BTreeMap::new();
        let mut missing = Vec::new();

        for option in ConnectionOption::ALL {
            let Some(parameter) = bindings.parameter_for(option) else {
                missing.push(format!("{} (unbound)", option));
                continue;
            };
            match values.expose(parameter) {
                Some(value) => {
                    options.insert(option, SecretString::new(value.to_string()));
                }
                None => missing.push(parameter.to_string()),
            }
        }

        if !missing.is_empty() {
            return Err(DomainError::MissingParameters(missing));
        }

        Ok(Self(options))
    }

    pub fn get(&self, option: ConnectionOption) -> Option<&str> {
        self.0.get(&option).map(|v| v.expose_secret().as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Connector keys mapped to clear-text values. Handle with care.
    pub fn expose(&self) -> BTreeMap<&'static str, &str> {
        self.0
            .iter()
            .map(|(opt, value)| (opt.key(), value.expose_secret().as_str()))
            .collect()
    }

    /// Same as [`expose`](Self::expose) but with sensitive values masked.
    pub fn redacted(&self) -> BTreeMap<&'static str, String> {
        self.0
            .iter()
            .map(|(opt, value)| {
                let shown = if opt.is_sensitive() {
                    "********".to_string()
                } else {
                    value.expose_secret().clone()
                };
                (opt.key(), shown)
            })
            .collect()
    }
}
