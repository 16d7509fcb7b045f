//! Error types for HINTA plugins

use thiserror::Error;

/// Error type for plugin operations
///
/// This is the standard error type returned by cost source plugin
/// implementations. The SDK maps each category onto the matching RPC
/// status code, so plugins never deal with transport errors directly.
///
/// # Example
///
/// ```
/// use hinta_core::PluginError;
///
/// fn lookup_sku(sku: &str) -> Result<f64, PluginError> {
///     if sku.is_empty() {
///         return Err(PluginError::InvalidRequest("sku is required".to_string()));
///     }
///     Err(PluginError::NotFound(format!("no pricing for sku '{sku}'")))
/// }
///
/// match lookup_sku("") {
///     Err(PluginError::InvalidRequest(msg)) => println!("bad request: {}", msg),
///     Err(e) => println!("other error: {}", e),
///     Ok(_) => unreachable!(),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PluginError {
    /// Initialization failed
    ///
    /// Returned when a plugin fails to initialize, typically during startup.
    /// Examples: invalid configuration, missing credentials.
    #[error("initialization failed: {0}")]
    Init(String),

    /// Request rejected before any business logic ran
    ///
    /// Examples: missing resource descriptor, empty resource type,
    /// inverted time window.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The requested entity does not exist
    ///
    /// Examples: unknown recommendation id, unknown sku.
    #[error("not found: {0}")]
    NotFound(String),

    /// The plugin does not expose the requested optional capability
    #[error("capability not supported: {0}")]
    Unsupported(String),

    /// Not ready
    ///
    /// Returned when a plugin is queried before it can serve requests.
    /// This is typically a transient state during startup or recovery.
    #[error("plugin not ready")]
    NotReady,

    /// Internal plugin failure
    ///
    /// Examples: upstream billing API errors, datastore failures.
    #[error("internal error: {0}")]
    Internal(String),
}
