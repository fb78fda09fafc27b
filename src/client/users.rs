//! User list retrieval.

use tracing::{debug, info};

use crate::client::{BadsecClient, CHECKSUM_HEADER};
use crate::error::Error;
use crate::resilience::retry;
use crate::security::checksum;

impl BadsecClient {
    /// Fetch the user list from `/users`, authorized by `token`.
    ///
    /// The body is split on `'\n'` verbatim: no trimming, no filtering, so
    /// a trailing newline yields a trailing empty entry. The checksum
    /// depends only on the token and path, so it is computed once, outside
    /// the retry loop; a non-ascii token fails here immediately and is
    /// never retried.
    pub async fn user_list(&self, token: &str) -> Result<Vec<String>, Error> {
        let cs = checksum(token, "users")?;

        let attempt = || {
            info!("requesting user list");
            let request = self
                .http
                .get(format!("{}/users", self.base_url))
                .header(CHECKSUM_HEADER, cs.as_str());
            async move {
                let response = match request.send().await.and_then(|r| r.error_for_status()) {
                    Ok(response) => response,
                    Err(error) => {
                        debug!(%error, "user list request failed");
                        return None;
                    }
                };
                match response.text().await {
                    Ok(body) => Some(body.split('\n').map(str::to_string).collect()),
                    Err(error) => {
                        debug!(%error, "failed to read user list body");
                        None
                    }
                }
            }
        };

        retry(attempt, self.tries)
            .await
            .ok_or(Error::UsersFailed {
                attempts: self.tries,
            })
    }
}
