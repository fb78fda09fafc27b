//! Auth token retrieval.

use tracing::{debug, info};

use crate::client::{BadsecClient, AUTH_TOKEN_HEADER};
use crate::error::Error;
use crate::resilience::retry;

impl BadsecClient {
    /// Fetch a session token from `/auth`.
    ///
    /// A network error, timeout, non-success status, or missing token
    /// header each count as one failed attempt against the budget. The
    /// token is opaque; it is returned exactly as the server sent it.
    pub async fn auth_token(&self) -> Result<String, Error> {
        let attempt = || {
            info!("requesting auth token");
            let request = self.http.get(format!("{}/auth", self.base_url));
            async move {
                let response = match request.send().await.and_then(|r| r.error_for_status()) {
                    Ok(response) => response,
                    Err(error) => {
                        debug!(%error, "auth token request failed");
                        return None;
                    }
                };
                let Some(value) = response.headers().get(AUTH_TOKEN_HEADER) else {
                    debug!("auth response is missing the token header");
                    return None;
                };
                match value.to_str() {
                    Ok(token) => Some(token.to_string()),
                    Err(error) => {
                        debug!(%error, "auth token header is not visible ascii");
                        None
                    }
                }
            }
        };

        retry(attempt, self.tries)
            .await
            .ok_or(Error::AuthFailed {
                attempts: self.tries,
            })
    }
}
