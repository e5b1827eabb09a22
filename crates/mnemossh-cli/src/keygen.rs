//! A single key generation run: resolve the seed, derive, write.

use anyhow::{Context, Result};
use log::info;
use mnemossh_core::{
    generate_artifacts, generate_mnemonic, parse_mnemonic, seed_from_mnemonic, ArtifactPaths,
    KeyArtifacts, SEED_LEN,
};
use zeroize::Zeroizing;

use crate::config::{KeygenConfig, SeedSource};

/// The 32-byte signing seed, plus the phrase if one was just generated
#[cfg_attr(test, derive(Debug))]
pub struct ResolvedSeed {
    pub seed: Zeroizing<[u8; SEED_LEN]>,
    pub new_phrase: Option<Zeroizing<String>>,
}

pub fn resolve_seed(source: &SeedSource) -> Result<ResolvedSeed> {
    match source {
        SeedSource::Generate => {
            let mnemonic = generate_mnemonic().context("Failed to generate mnemonic")?;
            info!("generated a new 24-word mnemonic");
            Ok(ResolvedSeed {
                seed: seed_from_mnemonic(&mnemonic),
                new_phrase: Some(Zeroizing::new(mnemonic.to_string())),
            })
        }
        SeedSource::Phrase(words) => {
            let mnemonic = parse_mnemonic(words)?;
            Ok(ResolvedSeed {
                seed: seed_from_mnemonic(&mnemonic),
                new_phrase: None,
            })
        }
    }
}

/// Derive the key pair and write `<stem>` and `<stem>.pub`.
pub fn write_keys(seed: &[u8], config: &KeygenConfig) -> Result<(ArtifactPaths, KeyArtifacts)> {
    let artifacts = generate_artifacts(seed, config.comment.as_deref())
        .context("Failed to generate ed25519 key")?;

    let paths = ArtifactPaths::from_stem(&config.output_stem);
    artifacts.save(&paths).context("Failed to save keys")?;

    Ok((paths, artifacts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const ABANDON_ART: &str = "abandon abandon abandon abandon abandon abandon abandon abandon \
        abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon \
        abandon abandon abandon abandon art";

    fn phrase(words: &str) -> SeedSource {
        SeedSource::Phrase(Zeroizing::new(words.to_string()))
    }

    #[test]
    fn test_resolve_known_phrase() {
        let resolved = resolve_seed(&phrase(ABANDON_ART)).unwrap();
        assert!(resolved.new_phrase.is_none());
        assert_eq!(resolved.seed[0], 0x40);
    }

    #[test]
    fn test_resolve_generate_returns_phrase() {
        let resolved = resolve_seed(&SeedSource::Generate).unwrap();
        let words = resolved.new_phrase.expect("generated phrase");

        assert_eq!(words.split_whitespace().count(), 24);
        let again = resolve_seed(&phrase(&words)).unwrap();
        assert_eq!(*again.seed, *resolved.seed);
    }

    #[test]
    fn test_resolve_rejects_short_phrase() {
        let err = resolve_seed(&phrase("abandon abandon about")).unwrap_err();
        assert!(err.to_string().contains("exactly 24 words"));
    }

    #[test]
    fn test_write_keys() {
        let dir = TempDir::new().unwrap();
        let config = KeygenConfig {
            seed_source: SeedSource::Generate,
            output_stem: dir.path().join("id"),
            comment: Some("test".into()),
        };

        let (paths, artifacts) = write_keys(&[0u8; 32], &config).unwrap();

        assert_eq!(paths.public, PathBuf::from(format!("{}.pub", paths.private.display())));
        assert_eq!(
            std::fs::read_to_string(&paths.public).unwrap(),
            artifacts.public_line
        );
        assert!(artifacts.public_line.ends_with(" test\n"));
    }

    #[test]
    fn test_write_keys_reports_stage() {
        let dir = TempDir::new().unwrap();
        let config = KeygenConfig {
            seed_source: SeedSource::Generate,
            output_stem: dir.path().join("missing").join("id"),
            comment: None,
        };

        let err = write_keys(&[0u8; 32], &config).unwrap_err();
        let rendered = format!("{:#}", err);
        assert!(rendered.contains("Failed to save keys"));
        assert!(rendered.contains("missing"));
    }
}
