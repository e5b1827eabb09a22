//! mnemossh core
//!
//! Deterministic Ed25519 SSH keys from a 32-byte seed.
//!
//! # Pipeline
//!
//! ```text
//! seed (32 bytes)
//!   → SeedExpander      SHA-256(seed || le32(i)) stream
//!   → KeyPair           standard Ed25519 keygen reading from the stream
//!   → KeyArtifacts      OpenSSH private PEM + authorized_keys line
//!   → ArtifactPaths     <stem> (0600), <stem>.pub (0644)
//! ```
//!
//! The same seed always produces byte-identical artifacts, so only the seed
//! (usually a 24-word BIP-39 phrase, see [`seed`]) needs to be kept.
//!
//! ```
//! use mnemossh_core::generate_artifacts;
//!
//! let a = generate_artifacts(&[7u8; 32], Some("me@host")).unwrap();
//! let b = generate_artifacts(&[7u8; 32], Some("me@host")).unwrap();
//! assert_eq!(a.public_line, b.public_line);
//! assert!(a.public_line.starts_with("ssh-ed25519 "));
//! ```

pub mod error;
pub mod expander;
pub mod keys;
pub mod memory;
pub mod openssh;
pub mod persist;
pub mod seed;
pub mod wire;

pub use error::{Error, Result};
pub use expander::{SeedExpander, SEED_LEN};
pub use keys::{derive_keypair, KeyPair, KEY_TYPE};
pub use openssh::{
    decode_private_key, encode_private_key, encode_public_key, fingerprint, parse_public_key,
    PublicKeyRecord,
};
pub use persist::ArtifactPaths;
pub use seed::{generate_mnemonic, parse_mnemonic, seed_from_mnemonic, SeedError};

use log::debug;
use zeroize::Zeroizing;

/// Both encoded halves of a derived key pair.
pub struct KeyArtifacts {
    /// Unencrypted OpenSSH private key (sensitive)
    pub private_pem: Zeroizing<String>,
    /// `authorized_keys` line, newline-terminated
    pub public_line: String,
    /// `SHA256:…` fingerprint of the public key
    pub fingerprint: String,
}

impl std::fmt::Debug for KeyArtifacts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyArtifacts")
            .field("private_pem", &"[REDACTED]")
            .field("public_line", &self.public_line)
            .field("fingerprint", &self.fingerprint)
            .finish()
    }
}

impl KeyArtifacts {
    /// Encode `pair` into both artifacts.
    pub fn encode(pair: &KeyPair, comment: Option<&str>) -> Result<Self> {
        let verifying = pair.verifying_key();
        let private_pem = encode_private_key(pair, comment)?;
        let public_line = encode_public_key(&verifying, comment)?;
        let fingerprint = fingerprint(&verifying)?;
        debug!("encoded key pair {}", fingerprint);
        Ok(Self {
            private_pem,
            public_line,
            fingerprint,
        })
    }

    /// Write the private key, then the public key.
    ///
    /// Not atomic: if the public write fails the private file stays on disk.
    /// Re-running with the same seed rewrites both.
    pub fn save(&self, paths: &ArtifactPaths) -> Result<()> {
        persist::write_private_key(&paths.private, &self.private_pem)?;
        persist::write_public_key(&paths.public, &self.public_line)?;
        Ok(())
    }
}

/// Seed → key pair → encoded artifacts.
pub fn generate_artifacts(seed: &[u8], comment: Option<&str>) -> Result<KeyArtifacts> {
    let pair = derive_keypair(seed)?;
    KeyArtifacts::encode(&pair, comment)
}

/// Run the whole pipeline and write `<stem>` / `<stem>.pub`.
pub fn generate_and_save(
    seed: &[u8],
    comment: Option<&str>,
    paths: &ArtifactPaths,
) -> Result<KeyArtifacts> {
    let artifacts = generate_artifacts(seed, comment)?;
    artifacts.save(paths)?;
    Ok(artifacts)
}
