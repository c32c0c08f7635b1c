//! Hierarchical configuration store for stackcfg
//!
//! A [`Repository`] is a tree of JSON values addressed by dot-separated
//! paths (`services.db.version`). Sources write into it, the composer
//! merges several of them, and consumers read the result back by path or
//! render it as JSON/YAML.
//!
//! # Example
//!
//! ```
//! use stackcfg_store::Repository;
//! use serde_json::json;
//!
//! let mut repo = Repository::new();
//! repo.set("services.db.enabled", true);
//! repo.set("services.db.version", "10.4");
//!
//! assert_eq!(repo.get("services.db.version"), Some(&json!("10.4")));
//! assert_eq!(repo.paths(), vec!["services.db.enabled", "services.db.version"]);
//! ```

pub mod error;
pub mod format;
pub mod path;
pub mod repository;

pub use error::{Error, Result};
pub use format::Format;
pub use path::{ConfigPath, parse_path};
pub use repository::Repository;
