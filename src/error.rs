//! Error types for the BADSEC client.

use thiserror::Error;

/// Failures the client can surface to its caller.
///
/// Transient network failures are never exposed here; they are absorbed by
/// the retry loop and only show up as `AuthFailed` or `UsersFailed` once
/// the attempt budget is exhausted. `NonAsciiInput` is the one fatal,
/// non-retryable condition.
#[derive(Debug, Error)]
pub enum Error {
    /// Checksum inputs are defined over ascii bytes only.
    #[error("non-ascii {what}: checksum inputs must be ascii")]
    NonAsciiInput { what: &'static str },

    /// The auth token request exhausted its attempt budget.
    #[error("failed to get auth token after {attempts} attempts")]
    AuthFailed { attempts: u32 },

    /// The user list request exhausted its attempt budget.
    #[error("failed to get user list after {attempts} attempts")]
    UsersFailed { attempts: u32 },

    #[error("invalid server url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("failed to build http client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("failed to serialize user list: {0}")]
    Serialize(#[from] serde_json::Error),
}
