//! Checksum derivation for BADSEC requests.

use sha2::{Digest, Sha256};

use crate::error::Error;

/// Derive the authorization checksum for a request to `path` under the
/// session `token`.
///
/// The checksum is the lowercase hex SHA-256 digest of `token + "/" + path`.
/// The protocol defines the digest over ascii bytes only, so a non-ascii
/// token or path is rejected rather than re-encoded or stripped.
pub fn checksum(token: &str, path: &str) -> Result<String, Error> {
    if !token.is_ascii() {
        return Err(Error::NonAsciiInput { what: "token" });
    }
    if !path.is_ascii() {
        return Err(Error::NonAsciiInput { what: "path" });
    }

    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hasher.update(b"/");
    hasher.update(path.as_bytes());
    Ok(hex::encode(hasher.finalize()))
}
