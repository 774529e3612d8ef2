//! Probabilistic identifier generation.

use chrono::{SecondsFormat, Utc};
use sha2::{Digest, Sha256};

/// Hex characters kept from the digest.
const DIGEST_LEN: usize = 12;

/// Generate an identifier of the form `<prefix>-<12 hex chars>`.
///
/// The digest hashes the prefix, the current UTC timestamp at nanosecond
/// precision, and the process id. Uniqueness is probabilistic, not
/// guaranteed.
pub fn generate_id(prefix: &str) -> String {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Nanos, true);
    let input = format!("{}-{}-{}", prefix, timestamp, std::process::id());
    let digest = hex::encode(Sha256::digest(input.as_bytes()));
    format!("{}-{}", prefix, &digest[..DIGEST_LEN])
}
