//! Bounded retry.
//!
//! # Responsibilities
//! - Invoke an operation up to a fixed attempt budget
//! - Return the first produced value immediately
//!
//! # Design Decisions
//! - Pure control flow: no delays, no knowledge of HTTP or I/O
//! - Absence of a result is `None`, distinct from a valid empty value

use std::future::Future;

/// Run `op` up to `n_tries` times, returning the first `Some` it produces.
///
/// Returns `None` once the attempt budget is exhausted. A budget of zero
/// returns `None` without invoking `op` at all. Attempts run strictly in
/// sequence; each one completes before the next begins.
pub async fn retry<T, F, Fut>(mut op: F, n_tries: u32) -> Option<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Option<T>>,
{
    for _ in 0..n_tries {
        if let Some(value) = op().await {
            return Some(value);
        }
    }
    None
}
