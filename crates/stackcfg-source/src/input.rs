//! Raw option lookup
//!
//! Options arrive already parsed by whatever front end the user talks to
//! (command-line flags, an embedding application). This module defines
//! the read-only lookup the translator queries and an in-memory
//! implementation of it.

use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// A single raw option value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionValue<'a> {
    /// A toggle such as `--with-cron`
    Flag(bool),
    /// A value such as `--db 10.4`
    Text(&'a str),
}

impl<'a> OptionValue<'a> {
    /// Whether this value requests the option.
    ///
    /// `false`, the empty string and `"0"` do not; everything else does.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Flag(set) => *set,
            Self::Text(text) => !text.is_empty() && *text != "0",
        }
    }
}

impl fmt::Display for OptionValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(set) => write!(f, "{}", set),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<OptionValue<'_>> for Value {
    fn from(value: OptionValue<'_>) -> Self {
        match value {
            OptionValue::Flag(set) => Value::Bool(set),
            OptionValue::Text(text) => Value::String(text.to_string()),
        }
    }
}

/// Read-only lookup of raw options by key.
pub trait OptionInput {
    /// The value supplied for `key`, or `None` when it was not given.
    fn option(&self, key: &str) -> Option<OptionValue<'_>>;

    /// The value for `key` if it requests the option.
    fn truthy(&self, key: &str) -> Option<OptionValue<'_>> {
        self.option(key).filter(OptionValue::is_truthy)
    }

    /// Whether the toggle `key` is set.
    fn is_set(&self, key: &str) -> bool {
        self.truthy(key).is_some()
    }
}

impl<T: OptionInput + ?Sized> OptionInput for &T {
    fn option(&self, key: &str) -> Option<OptionValue<'_>> {
        (**self).option(key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Stored {
    Flag(bool),
    Text(String),
}

/// In-memory [`OptionInput`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOptions {
    values: HashMap<String, Stored>,
}

impl RawOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a toggle to `true`.
    pub fn with_flag(self, key: impl Into<String>) -> Self {
        self.with_toggle(key, true)
    }

    pub fn with_toggle(mut self, key: impl Into<String>, set: bool) -> Self {
        self.values.insert(key.into(), Stored::Flag(set));
        self
    }

    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), Stored::Text(value.into()));
        self
    }
}

impl OptionInput for RawOptions {
    fn option(&self, key: &str) -> Option<OptionValue<'_>> {
        self.values.get(key).map(|stored| match stored {
            Stored::Flag(set) => OptionValue::Flag(*set),
            Stored::Text(text) => OptionValue::Text(text.as_str()),
        })
    }
}
