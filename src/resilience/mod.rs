//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Request to the BADSEC server:
//!     → one attempt (bounded by the client's request timeout)
//!     → on no result: retries.rs (re-attempt until the budget runs out)
//! ```
//!
//! # Design Decisions
//! - Every attempt has a deadline; the retry loop itself has none
//! - Retries are immediate, with no backoff between attempts

pub mod retries;

pub use retries::retry;
