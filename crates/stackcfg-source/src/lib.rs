//! Configuration sources for stackcfg
//!
//! This crate turns loosely-typed user options into a structured
//! [`Repository`](stackcfg_store::Repository):
//!
//! - **Option schema**: the recognized option keys, the service options
//!   that map onto `services.<name>` tables, and the sync engines each
//!   operating [`Mode`] accepts
//! - **Engine resolution**: picks the effective sync engine for a mode and
//!   rejects engines the mode does not support
//! - **Option translation**: writes every requested option into the
//!   output repository
//!
//! Sources implement [`Source`] and are layered with [`compose`], later
//! sources overriding earlier ones.
//!
//! # Example
//!
//! ```
//! use stackcfg_source::{CliSource, RawOptions, Source};
//! use serde_json::json;
//!
//! let options = RawOptions::new()
//!     .with_value("mode", "developer")
//!     .with_value("db", "10.4")
//!     .with_flag("with-cron");
//!
//! let repo = CliSource::new(&options).read().unwrap();
//! assert_eq!(repo.get("sync_engine"), Some(&json!("native")));
//! assert_eq!(repo.get("services.db.version"), Some(&json!("10.4")));
//! assert_eq!(repo.get("cron.enabled"), Some(&json!(true)));
//! ```

pub mod cli_source;
pub mod engine;
pub mod error;
pub mod file_source;
pub mod input;
pub mod schema;
pub mod source;

pub use cli_source::{CliSource, translate};
pub use engine::{EngineSelection, resolve_engine};
pub use error::{Error, Result};
pub use file_source::FileSource;
pub use input::{OptionInput, OptionValue, RawOptions};
pub use schema::{Mode, SERVICE_OPTIONS};
pub use source::{Source, compose};
