//! # Hasher
//!
//! Computes the deterministic content fingerprint used to identify every
//! blob and commit in the object store. A fingerprint is a 40-character
//! lowercase hex SHA-1 digest of the raw bytes handed to it — no header is
//! mixed in, unlike the `<type> <size>\0<content>` framing other object
//! stores use for the same hash.

use sha1::{Digest, Sha1};

/// Compute the 40-char hex fingerprint of a byte sequence.
///
/// # Example
///
/// ```
/// use gitlet::hash::fingerprint;
///
/// let fp = fingerprint(b"hello");
/// assert_eq!(fp.len(), 40);
/// ```
pub fn fingerprint(bytes: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
