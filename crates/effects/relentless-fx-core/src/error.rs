//! Error types for page effects.
//!
//! Nothing here is fatal to the page: callers log these and leave the affected
//! element in its static state.

/// Why a counter element could not be turned into a [`CounterSpec`](crate::CounterSpec).
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CounterSpecError {
    /// The element carries no target attribute at all.
    #[error("counter element has no `{attr}` attribute")]
    MissingTarget { attr: String },

    /// The target attribute does not start with a number.
    #[error("counter target {value:?} is not a number")]
    InvalidTarget { value: String },
}

/// Errors raised while wiring effects into a host.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum FxError {
    /// A required host object (window, document, ...) is missing.
    #[error("host unavailable: {0}")]
    HostUnavailable(&'static str),

    /// Configuration could not be parsed.
    #[error("config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for FxError {
    fn from(err: serde_json::Error) -> Self {
        FxError::Config(err.to_string())
    }
}
