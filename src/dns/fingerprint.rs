//! DNS answer fingerprints.
//!
//! A fingerprint is a SHA-256 digest over the normalized answer records of a
//! response. It is only ever compared for equality (and printed in hex for
//! logging).

use std::fmt;

use sha2::{Digest, Sha256};

/// Digest of a DNS response's answer section.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// Digests already-normalized answer lines, in response order.
    ///
    /// Each line is terminated with `\n` before hashing, so an empty answer
    /// section digests the empty string.
    pub fn from_answers<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut hasher = Sha256::new();
        for line in lines {
            hasher.update(line.as_ref().as_bytes());
            hasher.update(b"\n");
        }
        Fingerprint(hasher.finalize().into())
    }

    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({self})")
    }
}
