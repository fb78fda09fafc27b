//! Client configuration.
//!
//! All fields have defaults matching the BADSEC protocol constants, so the
//! CLI never has to spell them out.

use std::time::Duration;

/// Default attempt budget for BADSEC requests.
pub const DEFAULT_REQUEST_TRIES: u32 = 3;

/// Default deadline for a single BADSEC request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Tunables for the BADSEC client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Maximum attempts per request before giving up.
    pub request_tries: u32,

    /// Deadline applied to each individual request. There is no overall
    /// budget across retries, so worst-case latency per request is
    /// `request_tries * request_timeout`.
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            request_tries: DEFAULT_REQUEST_TRIES,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}
