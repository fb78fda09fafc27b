//! Client for the BADSEC user-list ("noclist") service.
//!
//! # Data Flow
//! ```text
//! GET {url}/auth
//!     → Badsec-Authentication-Token response header
//!     → checksum(token, "users")
//!     → GET {url}/users with X-Request-Checksum
//!     → newline-delimited user ids
//!     → JSON array on stdout
//! ```
//!
//! # Design Decisions
//! - Both requests retry internally with a fixed attempt budget; the
//!   orchestration in [`run`] never retries
//! - A non-ascii checksum input is a caller error and fails immediately,
//!   unlike network failures which are retried

pub mod client;
pub mod config;
pub mod error;
pub mod resilience;
pub mod security;

pub use client::BadsecClient;
pub use config::ClientConfig;
pub use error::Error;

/// Retrieve the user list from the BADSEC server at `url` and serialize it
/// as a JSON array, preserving order and duplicates.
///
/// The auth request runs first; its token authorizes the user-list request.
/// Each request retries up to `config.request_tries` times before its
/// failure becomes terminal for the whole run.
pub async fn run(url: &str, config: &ClientConfig) -> Result<String, Error> {
    let client = BadsecClient::new(url, config)?;
    let token = client.auth_token().await?;
    let users = client.user_list(&token).await?;
    Ok(serde_json::to_string(&users)?)
}
