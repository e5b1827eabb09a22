//! Ed25519 key derivation from a 32-byte seed
//!
//! The signature scheme's own key generation is used unchanged; only its
//! randomness source is replaced by a [`SeedExpander`], so the resulting keys
//! interoperate with any conforming Ed25519 verifier.

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use log::debug;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::error::{Error, Result};
use crate::expander::SeedExpander;

/// Algorithm tag used in both OpenSSH artifacts
pub const KEY_TYPE: &str = "ssh-ed25519";

const SELF_TEST_MESSAGE: &[u8] = b"mnemossh key self-test";

/// An Ed25519 signing key together with its verification key.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyPair {
    signing: SigningKey,
}

impl KeyPair {
    /// Run standard Ed25519 key generation against `rng`.
    ///
    /// With a [`SeedExpander`] as the source this is fully deterministic.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        let pair = Self {
            signing: SigningKey::generate(rng),
        };
        pair.self_test()?;
        Ok(pair)
    }

    /// Rebuild a key pair from the 32-byte private scalar seed.
    pub fn from_secret_bytes(secret: &[u8; 32]) -> Self {
        Self {
            signing: SigningKey::from_bytes(secret),
        }
    }

    /// Rebuild from `seed || public`, rejecting a public half that does not match.
    pub fn from_keypair_bytes(bytes: &[u8; 64]) -> Result<Self> {
        SigningKey::from_keypair_bytes(bytes)
            .map(|signing| Self { signing })
            .map_err(|e| Error::MalformedKey(format!("public key does not match secret: {}", e)))
    }

    pub fn verifying_key(&self) -> VerifyingKey {
        self.signing.verifying_key()
    }

    pub fn public_bytes(&self) -> [u8; 32] {
        self.signing.verifying_key().to_bytes()
    }

    pub fn secret_bytes(&self) -> Zeroizing<[u8; 32]> {
        Zeroizing::new(self.signing.to_bytes())
    }

    /// `seed || public`, the 64-byte layout OpenSSH stores
    pub fn keypair_bytes(&self) -> Zeroizing<[u8; 64]> {
        Zeroizing::new(self.signing.to_keypair_bytes())
    }

    pub fn sign(&self, message: &[u8]) -> Signature {
        self.signing.sign(message)
    }

    fn self_test(&self) -> Result<()> {
        let verifying = self.signing.verifying_key();
        if verifying.is_weak() {
            return Err(Error::KeyGeneration("derived a weak public key".into()));
        }
        let signature = self.signing.sign(SELF_TEST_MESSAGE);
        verifying
            .verify(SELF_TEST_MESSAGE, &signature)
            .map_err(|e| Error::KeyGeneration(format!("self-test signature rejected: {}", e)))
    }
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("public", &self.verifying_key())
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// Derive the Ed25519 key pair for `seed` (exactly 32 bytes).
pub fn derive_keypair(seed: &[u8]) -> Result<KeyPair> {
    let mut expander = SeedExpander::new(seed)?;
    let pair = KeyPair::generate(&mut expander)?;
    debug!(
        "derived ed25519 key pair from {} bytes of expansion stream",
        expander.position()
    );
    Ok(pair)
}
