//! Bounded retry for fallible scenario setup, chiefly actor placement.

use std::fmt::Display;

/// Attempts a scenario makes to place an actor before giving up.
pub const DEFAULT_PLACEMENT_ATTEMPTS: u32 = 20;

/// Call `attempt(n)` for `n = 0, 1, …` until it succeeds or `max_attempts`
/// calls have failed, returning the first success or the last error.
///
/// The attempt index lets the caller perturb its input between tries (e.g.
/// push a spawn point further along the lane).  `max_attempts == 0` is
/// treated as a single attempt.
pub fn retry_bounded<T, E, F>(max_attempts: u32, mut attempt: F) -> Result<T, E>
where
    E: Display,
    F: FnMut(u32) -> Result<T, E>,
{
    let max_attempts = max_attempts.max(1);
    let mut n = 0;
    loop {
        match attempt(n) {
            Ok(value) => return Ok(value),
            Err(e) => {
                n += 1;
                if n >= max_attempts {
                    tracing::error!(attempts = n, error = %e, "giving up after final attempt");
                    return Err(e);
                }
                tracing::warn!(attempt = n, max_attempts, error = %e, "attempt failed; retrying");
            }
        }
    }
}
