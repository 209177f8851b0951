use sha2::{Digest, Sha256};

use crate::error::Result;

/// Length of a rendered digest (256 bits as lowercase hex).
pub const DIGEST_HEX_LEN: usize = 64;

/// One-way hash producing a fixed-length hex string from arbitrary text.
///
/// Implementations must be deterministic and must report a missing
/// primitive as `SandboxError::HashUnavailable` instead of returning a
/// placeholder value.
pub trait DigestFunction: Send + Sync {
    fn digest(&self, input: &str) -> Result<String>;
}

/// SHA-256 over the UTF-8 bytes of the input, hex encoded.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Digest;

impl DigestFunction for Sha256Digest {
    fn digest(&self, input: &str) -> Result<String> {
        let mut hasher = Sha256::new();
        hasher.update(input.as_bytes());
        Ok(hex::encode(hasher.finalize()))
    }
}

/// True when `value` looks like a full digest: 64 lowercase hex chars.
pub fn is_well_formed(value: &str) -> bool {
    value.len() == DIGEST_HEX_LEN
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}

#[cfg(test)]
pub mod testing {
    use super::DigestFunction;
    use crate::error::{Result, SandboxError};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Fails every call, as if the platform had no hash primitive.
    pub struct UnavailableDigest;

    impl DigestFunction for UnavailableDigest {
        fn digest(&self, _input: &str) -> Result<String> {
            Err(SandboxError::HashUnavailable("no sha-256 in test env".into()))
        }
    }

    /// Fails on any input containing `marker`, hashes everything else.
    pub struct RejectingDigest {
        pub marker: &'static str,
    }

    impl RejectingDigest {
        pub fn new(marker: &'static str) -> Self {
            Self { marker }
        }
    }

    impl DigestFunction for RejectingDigest {
        fn digest(&self, input: &str) -> Result<String> {
            if input.contains(self.marker) {
                return Err(SandboxError::HashUnavailable(format!("rejected {input:?}")));
            }
            super::Sha256Digest.digest(input)
        }
    }

    /// Succeeds `ok_calls` times then fails.
    pub struct FlakyDigest {
        pub ok_calls: usize,
        pub calls: AtomicUsize,
    }

    impl FlakyDigest {
        pub fn new(ok_calls: usize) -> Self {
            Self {
                ok_calls,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl DigestFunction for FlakyDigest {
        fn digest(&self, input: &str) -> Result<String> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if n >= self.ok_calls {
                return Err(SandboxError::HashUnavailable(format!("call #{n}")));
            }
            super::Sha256Digest.digest(input)
        }
    }
}
