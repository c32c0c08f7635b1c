//! Error types for stackcfg-source

/// Result type for stackcfg-source operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading a configuration source
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested (or defaulted) sync engine is not allowed in the mode.
    ///
    /// The message names only the engine and the alternatives; `mode` is
    /// there for callers that report or match on the rejecting mode.
    #[error("File sync engine '{engine}' is not supported. Available: {}", .available.join(", "))]
    UnsupportedEngine {
        engine: String,
        mode: String,
        available: Vec<String>,
    },

    /// Error from the configuration store
    #[error(transparent)]
    Store(#[from] stackcfg_store::Error),
}
