//! The path-addressed configuration tree

use crate::error::{Error, Result};
use crate::format::Format;
use crate::path::ConfigPath;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// A hierarchical key/value store addressed by [`ConfigPath`].
///
/// Writes create intermediate tables as needed. Writing through a path
/// whose intermediate node holds a scalar replaces that scalar with a
/// table, so the last write to a path always wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Repository {
    root: Map<String, Value>,
}

impl Repository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `value` at `path`.
    ///
    /// Writing to the root path replaces the whole tree when `value` is a
    /// mapping and is ignored otherwise.
    pub fn set(&mut self, path: impl Into<ConfigPath>, value: impl Into<Value>) {
        let path = path.into();
        let value = value.into();

        let Some((last, parents)) = path.segments().split_last() else {
            match value {
                Value::Object(map) => self.root = map,
                other => tracing::debug!(?other, "Ignoring non-mapping write to the root path"),
            }
            return;
        };

        let mut node = &mut self.root;
        for key in parents {
            node = ensure_table(
                node.entry(key.clone())
                    .or_insert_with(|| Value::Object(Map::new())),
            );
        }
        node.insert(last.clone(), value);
    }

    /// Set several values in order.
    pub fn set_many<P, V>(&mut self, entries: impl IntoIterator<Item = (P, V)>)
    where
        P: Into<ConfigPath>,
        V: Into<Value>,
    {
        for (path, value) in entries {
            self.set(path, value);
        }
    }

    /// Get the value at `path`, if any.
    pub fn get(&self, path: impl Into<ConfigPath>) -> Option<&Value> {
        let path = path.into();
        let (first, rest) = path.segments().split_first()?;
        rest.iter()
            .try_fold(self.root.get(first)?, |node, key| node.get(key))
    }

    /// Check whether a value exists at `path`.
    pub fn has(&self, path: impl Into<ConfigPath>) -> bool {
        self.get(path).is_some()
    }

    /// Remove and return the value at `path`.
    pub fn remove(&mut self, path: impl Into<ConfigPath>) -> Option<Value> {
        let path = path.into();
        let (last, parents) = path.segments().split_last()?;

        let mut node = &mut self.root;
        for key in parents {
            node = node.get_mut(key)?.as_object_mut()?;
        }
        node.remove(last)
    }

    /// Deep merge `other` on top of this repository.
    ///
    /// Tables are merged key by key; any other value in `other` replaces
    /// the value already present.
    pub fn merge(&mut self, other: &Repository) {
        for (key, other_value) in &other.root {
            match self.root.get_mut(key) {
                Some(base_value) => deep_merge_value(base_value, other_value),
                None => {
                    self.root.insert(key.clone(), other_value.clone());
                }
            }
        }
    }

    /// All leaf paths, sorted. An empty table counts as a leaf.
    pub fn paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        for (key, value) in &self.root {
            collect_leaf_paths(key.clone(), value, &mut paths);
        }
        paths.sort();
        paths
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// The tree as a JSON value.
    pub fn as_value(&self) -> Value {
        Value::Object(self.root.clone())
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.root)?)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&self.root)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Self::parse(Format::Json, content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Self::parse(Format::Yaml, content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(Format::Toml, content)
    }

    /// Parse a document in the given format.
    pub fn parse(format: Format, content: &str) -> Result<Self> {
        Ok(Self {
            root: format.parse_table(content)?,
        })
    }

    /// Load a document from disk, picking the format from the extension.
    pub fn load(path: &Path) -> Result<Self> {
        let format = Format::from_path(path).ok_or_else(|| Error::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;
        tracing::debug!(?path, format = format.name(), "Loading configuration file");

        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(format, &content)
    }
}

fn ensure_table(slot: &mut Value) -> &mut Map<String, Value> {
    if !slot.is_object() {
        *slot = Value::Object(Map::new());
    }
    match slot {
        Value::Object(map) => map,
        _ => unreachable!("slot was just replaced by a table"),
    }
}

fn deep_merge_value(base: &mut Value, other: &Value) {
    match (base, other) {
        (Value::Object(base_map), Value::Object(other_map)) => {
            for (key, other_val) in other_map {
                if let Some(base_val) = base_map.get_mut(key) {
                    deep_merge_value(base_val, other_val);
                } else {
                    base_map.insert(key.clone(), other_val.clone());
                }
            }
        }
        (base, other) => {
            *base = other.clone();
        }
    }
}

fn collect_leaf_paths(prefix: String, value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (key, child) in map {
                collect_leaf_paths(format!("{}.{}", prefix, key), child, out);
            }
        }
        _ => out.push(prefix),
    }
}
