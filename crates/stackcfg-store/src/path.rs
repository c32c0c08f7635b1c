//! Dot-separated configuration paths
//!
//! A configuration path addresses a node in the tree by its keys:
//! `services.db.enabled` is the `enabled` key of the `db` table inside
//! `services`. Empty segments are ignored, so `a..b` and `.a.b` both
//! address `a.b`.

use std::fmt;

/// A parsed configuration path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigPath {
    segments: Vec<String>,
}

impl ConfigPath {
    /// Parse a dot-separated path.
    pub fn new(path: &str) -> Self {
        Self {
            segments: parse_path(path),
        }
    }

    /// The keys of this path, outermost first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// True for the root path (no segments).
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Append a key, returning the child path.
    ///
    /// ```
    /// use stackcfg_store::ConfigPath;
    ///
    /// let db = ConfigPath::new("services.db");
    /// assert_eq!(db.child("version").to_string(), "services.db.version");
    /// ```
    pub fn child(&self, key: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.extend(parse_path(key));
        Self { segments }
    }
}

impl From<&str> for ConfigPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for ConfigPath {
    fn from(path: String) -> Self {
        Self::new(&path)
    }
}

impl From<&ConfigPath> for ConfigPath {
    fn from(path: &ConfigPath) -> Self {
        path.clone()
    }
}

impl fmt::Display for ConfigPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

/// Split a path string into its keys.
///
/// ```
/// use stackcfg_store::parse_path;
///
/// assert_eq!(parse_path("services.db.version"), vec!["services", "db", "version"]);
/// assert_eq!(parse_path("a..b."), vec!["a", "b"]);
/// ```
pub fn parse_path(path: &str) -> Vec<String> {
    path.split('.')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_path_simple() {
        assert_eq!(parse_path("mode"), vec!["mode"]);
    }

    #[test]
    fn test_parse_path_dotted() {
        assert_eq!(
            parse_path("services.xdebug.enabled"),
            vec!["services", "xdebug", "enabled"]
        );
    }

    #[test]
    fn test_parse_path_skips_empty_segments() {
        assert_eq!(parse_path(".cron..enabled."), vec!["cron", "enabled"]);
        assert!(parse_path("").is_empty());
    }

    #[test]
    fn test_child_and_display() {
        let selenium = ConfigPath::new("selenium");
        assert_eq!(selenium.child("image").to_string(), "selenium.image");
        assert!(ConfigPath::new("").is_root());
    }
}
