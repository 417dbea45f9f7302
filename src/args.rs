//! Structured arguments handed to command executors.

use std::collections::BTreeMap;

use crate::{Error, Result};

/// Key under which positional tokens are collected.
pub const POSITIONAL: &str = "_";

/// Arguments passed to an executor: option name to its values, in the order
/// they were typed. Repeated options accumulate values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CmdArgs {
    values: BTreeMap<String, Vec<String>>,
}

impl CmdArgs {
    /// Create an empty argument map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value under `key`
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.entry(key.into()).or_default().push(value.into());
    }

    /// Append a positional token
    pub fn push_positional(&mut self, value: impl Into<String>) {
        self.push(POSITIONAL, value);
    }

    /// Returns the n-th value (1-based) of an argument.
    ///
    /// # Errors
    ///
    /// Fails when the key is absent, carries no values, or has fewer than
    /// `n` values.
    pub fn get_value(&self, key: &str, n: usize) -> Result<&str> {
        let values = self
            .values
            .get(key)
            .ok_or_else(|| Error::missing_argument(key))?;
        if values.is_empty() {
            return Err(Error::no_value(key));
        }
        if n == 0 || values.len() < n {
            return Err(Error::NotEnoughValues {
                key: key.to_string(),
                available: values.len(),
                requested: n,
            });
        }
        Ok(values[n - 1].as_str())
    }

    /// Returns the first value of an argument.
    ///
    /// # Errors
    ///
    /// Same conditions as [`CmdArgs::get_value`].
    pub fn first_value(&self, key: &str) -> Result<&str> {
        self.get_value(key, 1)
    }

    /// All values recorded for `key`, empty if absent
    #[must_use]
    pub fn values(&self, key: &str) -> &[String] {
        self.values.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Positional tokens, in order
    #[must_use]
    pub fn positional(&self) -> &[String] {
        self.values(POSITIONAL)
    }

    /// Returns true if the key exists.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// True when nothing was collected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over keys and their values in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl<K, V> FromIterator<(K, V)> for CmdArgs
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = Self::new();
        for (key, value) in iter {
            args.push(key, value);
        }
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CmdArgs {
        [("--name", "alice"), ("--tag", "a"), ("--tag", "b"), ("_", "extra")]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_first_value() {
        assert_eq!(sample().first_value("--name").unwrap(), "alice");
    }

    #[test]
    fn test_get_value_repeated() {
        let args = sample();
        assert_eq!(args.get_value("--tag", 1).unwrap(), "a");
        assert_eq!(args.get_value("--tag", 2).unwrap(), "b");
    }

    #[test]
    fn test_get_value_missing_key() {
        let err = sample().first_value("--missing").unwrap_err();
        assert!(matches!(err, Error::MissingArgument { .. }));
    }

    #[test]
    fn test_get_value_too_few() {
        let err = sample().get_value("--tag", 3).unwrap_err();
        match err {
            Error::NotEnoughValues {
                available,
                requested,
                ..
            } => {
                assert_eq!(available, 2);
                assert_eq!(requested, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_get_value_zero_index_rejected() {
        assert!(sample().get_value("--tag", 0).is_err());
    }

    #[test]
    fn test_get_value_empty_key() {
        let mut args = CmdArgs::new();
        args.values.insert("--flag".to_string(), Vec::new());
        let err = args.first_value("--flag").unwrap_err();
        assert!(matches!(err, Error::NoValue { .. }));
    }

    #[test]
    fn test_positional() {
        assert_eq!(sample().positional(), ["extra".to_string()]);
        assert!(CmdArgs::new().positional().is_empty());
    }

    #[test]
    fn test_contains() {
        let args = sample();
        assert!(args.contains("--name"));
        assert!(!args.contains("--other"));
    }

    #[test]
    fn test_iter_in_key_order() {
        let args = sample();
        let keys: Vec<&str> = args.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["--name", "--tag", "_"]);
    }
}
