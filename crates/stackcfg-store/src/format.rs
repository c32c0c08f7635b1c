//! Serialized document formats a [`Repository`](crate::Repository) can be
//! loaded from or rendered to.

use crate::error::{Error, Result};
use serde_json::{Map, Value};
use std::path::Path;

/// Supported document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Yaml,
    Toml,
}

impl Format {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    /// Detect format from a file path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
            Self::Toml => "TOML",
        }
    }

    /// Parse `content` into a mapping. Documents whose root is not a
    /// mapping are rejected.
    pub(crate) fn parse_table(&self, content: &str) -> Result<Map<String, Value>> {
        let value: Value = match self {
            Self::Json => serde_json::from_str(content)?,
            Self::Yaml => {
                if content.trim().is_empty() {
                    Value::Object(Map::new())
                } else {
                    serde_yaml::from_str(content)?
                }
            }
            Self::Toml => toml::from_str(content)?,
        };

        match value {
            Value::Object(map) => Ok(map),
            // An empty YAML document deserializes as null
            Value::Null => Ok(Map::new()),
            other => Err(Error::parse(
                self.name(),
                format!("expected a mapping at the document root, found {}", kind(&other)),
            )),
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(Format::from_extension("json"), Some(Format::Json));
        assert_eq!(Format::from_extension("YML"), Some(Format::Yaml));
        assert_eq!(Format::from_extension("yaml"), Some(Format::Yaml));
        assert_eq!(Format::from_extension("toml"), Some(Format::Toml));
        assert_eq!(Format::from_extension("ini"), None);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            Format::from_path(Path::new("/tmp/.stackcfg.yaml")),
            Some(Format::Yaml)
        );
        assert_eq!(Format::from_path(Path::new("config")), None);
    }

    #[test]
    fn test_parse_table_rejects_scalar_root() {
        let err = Format::Json.parse_table("42").unwrap_err();
        assert!(err.to_string().contains("found a number"), "got: {}", err);
    }

    #[test]
    fn test_parse_table_empty_yaml_is_empty_mapping() {
        assert!(Format::Yaml.parse_table("").unwrap().is_empty());
        assert!(Format::Yaml.parse_table("# nothing\n").unwrap().is_empty());
    }
}
