//! Bounded retry with a flat inter-attempt delay.

use std::thread;
use std::time::Duration;

use tracing::warn;

/// Invoke `operation` until it succeeds or the attempt budget runs out.
///
/// The delay between attempts is constant; there is no delay after the final
/// failure. On exhaustion the error from the last attempt is returned, not
/// an aggregate. `label` identifies the operation in the retry log and has
/// no effect on control flow.
///
/// A `max_attempts` of `0` is clamped to a single attempt.
///
/// The inter-attempt wait blocks the calling thread and cannot be cancelled
/// externally; an operation needing cancellation must build it into its own
/// closure.
///
/// # Errors
///
/// Returns the error produced by the final attempt once all attempts have
/// failed.
pub fn do_with_backoff<T, E, F>(
    label: &str,
    mut operation: F,
    max_attempts: u32,
    interval: Duration,
) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
    E: std::fmt::Display,
{
    let budget = max_attempts.max(1);
    let mut attempt = 1;
    loop {
        match operation() {
            Ok(value) => return Ok(value),
            Err(err) if attempt < budget => {
                warn!(label, attempt, budget, "attempt failed, retrying: {err}");
                attempt += 1;
                thread::sleep(interval);
            }
            Err(err) => return Err(err),
        }
    }
}
