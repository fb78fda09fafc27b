//! Request authorization.
//!
//! The BADSEC server does not use bearer auth on `/users`; instead each
//! request carries a checksum derived from the session token and the
//! request path, sent in the `X-Request-Checksum` header.

pub mod checksum;

pub use checksum::checksum;
