//! Session secret generation.

use rand::distr::Alphanumeric;
use rand::Rng;

const SECRET_LEN: usize = 40;

/// Produce a fresh alphanumeric secret for signing dashboard sessions.
///
/// Only used when the operator has not pinned one via the `secret` option.
/// Each render without a pinned secret rotates it, invalidating existing
/// sessions.
pub fn generate_password() -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(SECRET_LEN)
        .map(char::from)
        .collect()
}
