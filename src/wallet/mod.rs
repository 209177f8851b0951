use rand::Rng;
use rand::distributions::Alphanumeric;
use serde::Serialize;

use crate::digest::DigestFunction;
use crate::error::Result;

/// Characters shown from the public key in the key-info card.
pub const PUBLIC_KEY_PREFIX_LEN: usize = 52;
/// Characters shown from the address (after `0x`).
pub const ADDRESS_PREFIX_LEN: usize = 28;
/// Characters shown from a fresh signature.
pub const SIGNATURE_PREFIX_LEN: usize = 56;

/// Demo identity for the signature simulator.
///
/// "Signing" is a salted hash of `message|private_key` and "verifying"
/// recomputes it and checks equality. This teaches tamper detection only;
/// there are no asymmetric keys and nothing here is a real signature.
#[derive(Debug, Clone)]
pub struct DemoWallet {
    private_key: String,
    pub public_key: String,
    pub address: String, // 40 hex chars, no 0x
    signature: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyInfo {
    pub public_key_prefix: String,
    pub address_prefix: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SignatureOutcome {
    Signed { signature_prefix: String },
    Valid,
    Invalid,
}

fn random_private_key() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(11)
        .map(|c| char::from(c).to_ascii_lowercase())
        .collect();
    format!("priv-{suffix}")
}

impl DemoWallet {
    /// Generate a throwaway identity: `pub = H(priv)`, `address = H(pub)[..40]`.
    pub fn generate(digest_fn: &dyn DigestFunction) -> Result<Self> {
        Self::from_private_key(random_private_key(), digest_fn)
    }

    pub fn from_private_key(private_key: String, digest_fn: &dyn DigestFunction) -> Result<Self> {
        let public_key = digest_fn.digest(&private_key)?;
        let mut address = digest_fn.digest(&public_key)?;
        address.truncate(40);
        Ok(Self {
            private_key,
            public_key,
            address,
            signature: None,
        })
    }

    fn salted(&self, message: &str, digest_fn: &dyn DigestFunction) -> Result<String> {
        digest_fn.digest(&format!("{message}|{}", self.private_key))
    }

    pub fn key_info(&self) -> KeyInfo {
        KeyInfo {
            public_key_prefix: self.public_key.chars().take(PUBLIC_KEY_PREFIX_LEN).collect(),
            address_prefix: format!(
                "0x{}",
                self.address.chars().take(ADDRESS_PREFIX_LEN).collect::<String>()
            ),
        }
    }

    /// Sign `message`, replacing any previous signature.
    pub fn sign(&mut self, message: &str, digest_fn: &dyn DigestFunction) -> Result<SignatureOutcome> {
        let signature = self.salted(message, digest_fn)?;
        let signature_prefix = signature.chars().take(SIGNATURE_PREFIX_LEN).collect();
        self.signature = Some(signature);
        Ok(SignatureOutcome::Signed { signature_prefix })
    }

    /// Valid only when a signature exists and `message` is exactly what was signed.
    pub fn verify(&self, message: &str, digest_fn: &dyn DigestFunction) -> Result<SignatureOutcome> {
        let Some(current) = self.signature.as_deref() else {
            return Ok(SignatureOutcome::Invalid);
        };
        let expected = self.salted(message, digest_fn)?;
        Ok(if expected == current {
            SignatureOutcome::Valid
        } else {
            SignatureOutcome::Invalid
        })
    }

    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::{DemoWallet, SignatureOutcome};
    use crate::digest::{DigestFunction, Sha256Digest, is_well_formed};

    fn wallet() -> DemoWallet {
        DemoWallet::from_private_key("priv-test".into(), &Sha256Digest).unwrap()
    }

    #[test]
    fn identity_is_derived_by_hashing() {
        let w = wallet();
        let public = Sha256Digest.digest("priv-test").unwrap();
        assert_eq!(w.public_key, public);
        assert_eq!(w.address, Sha256Digest.digest(&public).unwrap()[..40]);
        let info = w.key_info();
        assert_eq!(info.public_key_prefix.len(), 52);
        assert!(info.address_prefix.starts_with("0x"));
        assert_eq!(info.address_prefix.len(), 30);
    }

    #[test]
    fn generated_wallets_differ() {
        let a = DemoWallet::generate(&Sha256Digest).unwrap();
        let b = DemoWallet::generate(&Sha256Digest).unwrap();
        assert!(is_well_formed(&a.public_key));
        assert_ne!(a.public_key, b.public_key);
    }

    #[test]
    fn verify_without_signature_is_invalid() {
        assert_eq!(wallet().verify("hi", &Sha256Digest).unwrap(), SignatureOutcome::Invalid);
    }

    #[test]
    fn sign_then_verify() {
        let mut w = wallet();
        let signed = w.sign("send 1 coin", &Sha256Digest).unwrap();
        let SignatureOutcome::Signed { signature_prefix } = signed else {
            panic!("expected Signed");
        };
        assert_eq!(signature_prefix.len(), 56);
        assert_eq!(
            w.signature().unwrap(),
            Sha256Digest.digest("send 1 coin|priv-test").unwrap()
        );
        assert_eq!(w.verify("send 1 coin", &Sha256Digest).unwrap(), SignatureOutcome::Valid);
        assert_eq!(w.verify("send 9 coin", &Sha256Digest).unwrap(), SignatureOutcome::Invalid);
    }

    #[test]
    fn resigning_replaces_signature() {
        let mut w = wallet();
        w.sign("a", &Sha256Digest).unwrap();
        w.sign("b", &Sha256Digest).unwrap();
        assert_eq!(w.verify("a", &Sha256Digest).unwrap(), SignatureOutcome::Invalid);
        assert_eq!(w.verify("b", &Sha256Digest).unwrap(), SignatureOutcome::Valid);
    }
}
