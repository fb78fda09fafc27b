//! BADSEC HTTP clients.
//!
//! # Data Flow
//! ```text
//! auth.rs   GET {url}/auth  → Badsec-Authentication-Token header
//! users.rs  GET {url}/users → X-Request-Checksum request header,
//!                             newline-delimited ids in the body
//! ```
//!
//! # Design Decisions
//! - One `reqwest::Client` per run, with the per-request timeout baked in
//! - Both operations signal a failed attempt as `None` to the retry loop;
//!   only budget exhaustion becomes an [`Error`](crate::Error)

mod auth;
mod users;

use url::Url;

use crate::config::ClientConfig;
use crate::error::Error;

/// Response header carrying the session token from `/auth`.
pub const AUTH_TOKEN_HEADER: &str = "Badsec-Authentication-Token";

/// Request header carrying the authorization checksum for `/users`.
pub const CHECKSUM_HEADER: &str = "X-Request-Checksum";

/// HTTP client for a single BADSEC server.
#[derive(Debug)]
pub struct BadsecClient {
    http: reqwest::Client,
    base_url: String,
    tries: u32,
}

impl BadsecClient {
    /// Build a client for the server at `base_url`.
    ///
    /// The URL is validated up front; requests use the raw string so the
    /// paths appended to it stay byte-for-byte predictable.
    pub fn new(base_url: &str, config: &ClientConfig) -> Result<Self, Error> {
        Url::parse(base_url)?;
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.to_string(),
            tries: config.request_tries,
        })
    }
}
