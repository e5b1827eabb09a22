//! BIP-39 mnemonic handling
//!
//! Turns a 24-word phrase into the 32-byte signing seed the expander consumes.

use bip39::{Language, Mnemonic};
use log::debug;
use thiserror::Error;
use zeroize::Zeroizing;

use crate::expander::SEED_LEN;

/// Phrases are always 24 words (256 bits of entropy)
pub const MNEMONIC_WORDS: usize = 24;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Mnemonic must contain exactly {expected} words, got {actual}")]
    WrongWordCount { expected: usize, actual: usize },
    #[error("Invalid mnemonic: {0}")]
    InvalidMnemonic(String),
    #[error("Mnemonic generation failed: {0}")]
    Generation(String),
}

/// Generate a new 24-word English mnemonic
pub fn generate_mnemonic() -> Result<Mnemonic, SeedError> {
    Mnemonic::generate_in(Language::English, MNEMONIC_WORDS)
        .map_err(|e| SeedError::Generation(e.to_string()))
}

/// Parse a 24-word mnemonic, checking the word count before the checksum
pub fn parse_mnemonic(words: &str) -> Result<Mnemonic, SeedError> {
    let normalized = Zeroizing::new(words.split_whitespace().collect::<Vec<_>>().join(" "));
    let count = normalized.split(' ').filter(|w| !w.is_empty()).count();
    if count != MNEMONIC_WORDS {
        return Err(SeedError::WrongWordCount {
            expected: MNEMONIC_WORDS,
            actual: count,
        });
    }
    Mnemonic::parse_in(Language::English, normalized.as_str())
        .map_err(|e| SeedError::InvalidMnemonic(e.to_string()))
}

/// Derive the 64-byte BIP-39 seed (with optional passphrase)
pub fn derive_seed(mnemonic: &Mnemonic, passphrase: &str) -> Zeroizing<[u8; 64]> {
    Zeroizing::new(mnemonic.to_seed(passphrase))
}

/// Shorten a BIP-39 seed to the 32 bytes used for key derivation.
///
/// This is the only place seed material is truncated; the expander itself
/// rejects anything but exactly 32 bytes.
pub fn signing_seed(bip39_seed: &[u8; 64]) -> Zeroizing<[u8; SEED_LEN]> {
    let mut seed = Zeroizing::new([0u8; SEED_LEN]);
    seed.copy_from_slice(&bip39_seed[..SEED_LEN]);
    debug!("using first {} bytes of the BIP-39 seed", SEED_LEN);
    seed
}

/// Phrase → 32-byte signing seed, the usual path for the CLI
pub fn seed_from_mnemonic(mnemonic: &Mnemonic) -> Zeroizing<[u8; SEED_LEN]> {
    signing_seed(&derive_seed(mnemonic, ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABANDON_ART: &str = "abandon abandon abandon abandon abandon abandon abandon abandon \
        abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon \
        abandon abandon abandon abandon art";

    #[test]
    fn test_generate_has_24_words() {
        let mnemonic = generate_mnemonic().unwrap();
        assert_eq!(mnemonic.word_count(), 24);

        // A generated phrase must parse back
        let phrase = mnemonic.to_string();
        assert_eq!(parse_mnemonic(&phrase).unwrap().to_string(), phrase);
    }

    #[test]
    fn test_generated_mnemonics_differ() {
        let a = generate_mnemonic().unwrap();
        let b = generate_mnemonic().unwrap();
        assert_ne!(a.to_string(), b.to_string());
    }

    #[test]
    fn test_bip39_vector() {
        // Trezor test vector: all-zero 256-bit entropy, passphrase "TREZOR"
        let mnemonic = parse_mnemonic(ABANDON_ART).unwrap();
        let seed = derive_seed(&mnemonic, "TREZOR");
        assert_eq!(
            hex::encode(&seed[..]),
            "bda85446c68413707090a52022edd26a1c9462295029f2e60cd7c4f2bbd3097170af7a4d73245cafa9c3cca8d561a7c3de6f5d4a10be8ed2a5e608d68f92fcc8"
        );
    }

    #[test]
    fn test_signing_seed_is_prefix() {
        let mnemonic = parse_mnemonic(ABANDON_ART).unwrap();
        let full = derive_seed(&mnemonic, "");
        let seed = seed_from_mnemonic(&mnemonic);

        assert_eq!(&seed[..], &full[..32]);
        assert_eq!(
            hex::encode(&seed[..]),
            "408b285c123836004f4b8842c89324c1f01382450c0d439af345ba7fc49acf70"
        );
    }

    #[test]
    fn test_extra_whitespace_is_accepted() {
        let messy = format!("  {}\n", ABANDON_ART.replace(' ', "\t  "));
        assert!(parse_mnemonic(&messy).is_ok());
    }

    #[test]
    fn test_twelve_words_rejected() {
        let err = parse_mnemonic(
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SeedError::WrongWordCount {
                expected: 24,
                actual: 12
            }
        ));
    }

    #[test]
    fn test_bad_checksum_rejected() {
        let bad = ABANDON_ART.replace(" art", " abandon");
        assert!(matches!(
            parse_mnemonic(&bad),
            Err(SeedError::InvalidMnemonic(_))
        ));
    }

    #[test]
    fn test_unknown_word_rejected() {
        let bad = ABANDON_ART.replacen("abandon", "notaword", 1);
        assert!(matches!(
            parse_mnemonic(&bad),
            Err(SeedError::InvalidMnemonic(_))
        ));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            parse_mnemonic(""),
            Err(SeedError::WrongWordCount { actual: 0, .. })
        ));
    }
}
