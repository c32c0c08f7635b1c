//! Sync engine resolution
//!
//! Known modes default the sync engine when none is requested and reject
//! engines outside their allow-list. Unknown or absent modes pass the
//! requested engine through untouched.

use crate::error::{Error, Result};
use crate::schema::{Mode, paths};
use stackcfg_store::Repository;

/// The effective mode and sync engine after resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSelection {
    pub mode: Option<String>,
    pub sync_engine: Option<String>,
}

impl EngineSelection {
    /// Write the mode and engine into `repo`. Absent values are left unset.
    pub fn write_to(&self, repo: &mut Repository) {
        if let Some(mode) = &self.mode {
            repo.set(paths::MODE, mode.as_str());
        }
        if let Some(engine) = &self.sync_engine {
            repo.set(paths::SYNC_ENGINE, engine.as_str());
        }
    }
}

/// Resolve the sync engine for `mode`.
///
/// An explicitly requested engine is never replaced, even when it is
/// empty; only a missing one falls back to the mode's default.
pub fn resolve_engine(mode: Option<&str>, requested: Option<&str>) -> Result<EngineSelection> {
    let known = mode.and_then(Mode::from_name);

    let sync_engine = match (known, requested) {
        (Some(known), None) => {
            let engine = known.default_sync_engine();
            tracing::debug!(mode = %known, engine, "Defaulting sync engine");
            Some(engine.to_string())
        }
        (_, requested) => requested.map(str::to_string),
    };

    match (known, sync_engine.as_deref()) {
        (Some(known), Some(engine)) if !known.supports(engine) => {
            return Err(Error::UnsupportedEngine {
                engine: engine.to_string(),
                mode: known.to_string(),
                available: known.sync_engines().iter().map(|e| e.to_string()).collect(),
            });
        }
        (None, _) if mode.is_some() => {
            tracing::debug!(?mode, "Mode has no sync engine rules, skipping validation");
        }
        _ => {}
    }

    Ok(EngineSelection {
        mode: mode.map(str::to_string),
        sync_engine,
    })
}
