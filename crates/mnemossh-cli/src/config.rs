//! CLI configuration: optional TOML file plus environment variable overrides.
//!
//! Priority: command-line flags > environment variables > config file > defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use zeroize::Zeroizing;

/// Default output stem, matching the keys earlier releases wrote
pub const DEFAULT_STEM: &str = "bip39-id_ed25519";

/// Settings that may come from a file or the environment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub output: OutputSection,

    #[serde(default)]
    pub log: LogSection,
}

/// Where and how keys are written
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    /// Private key path; the public key goes to `<stem>.pub`
    #[serde(default = "default_stem")]
    pub stem: PathBuf,

    /// Comment appended to both artifacts
    #[serde(default)]
    pub comment: Option<String>,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            stem: default_stem(),
            comment: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogSection {
    /// env_logger filter (error, warn, info, debug, trace or per-module)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_stem() -> PathBuf {
    PathBuf::from(DEFAULT_STEM)
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Where the 32-byte seed comes from
pub enum SeedSource {
    /// Create a fresh 24-word mnemonic
    Generate,
    /// Use the given phrase
    Phrase(Zeroizing<String>),
}

impl std::fmt::Debug for SeedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeedSource::Generate => write!(f, "Generate"),
            SeedSource::Phrase(_) => write!(f, "Phrase([REDACTED])"),
        }
    }
}

/// Fully resolved input to a key generation run
#[derive(Debug)]
pub struct KeygenConfig {
    pub seed_source: SeedSource,
    pub output_stem: PathBuf,
    pub comment: Option<String>,
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let settings: Settings =
            toml::from_str(&contents).with_context(|| "Failed to parse TOML config")?;
        Ok(settings)
    }

    /// Apply environment variable overrides.
    ///
    /// Supported env vars:
    /// - `MNEMOSSH_OUTPUT`
    /// - `MNEMOSSH_COMMENT`
    /// - `MNEMOSSH_LOG_LEVEL`
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|name| std::env::var(name).ok());
    }

    fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(v) = lookup("MNEMOSSH_OUTPUT") {
            self.output.stem = PathBuf::from(v);
        }
        if let Some(v) = lookup("MNEMOSSH_COMMENT") {
            self.output.comment = Some(v);
        }
        if let Some(v) = lookup("MNEMOSSH_LOG_LEVEL") {
            self.log.level = v;
        }
    }

    /// Validate that the settings are usable.
    pub fn validate(&self) -> Result<()> {
        let stem = self.output.stem.as_os_str();
        anyhow::ensure!(!stem.is_empty(), "output.stem must not be empty");

        let stem = stem.to_string_lossy();
        anyhow::ensure!(
            !stem.ends_with('/') && !stem.ends_with(std::path::MAIN_SEPARATOR),
            "output.stem must name a file, not a directory: {}",
            stem
        );

        if let Some(ref comment) = self.output.comment {
            anyhow::ensure!(
                !comment.contains(|c| c == '\n' || c == '\r'),
                "output.comment must be a single line"
            );
        }

        anyhow::ensure!(!self.log.level.trim().is_empty(), "log.level must not be empty");
        Ok(())
    }

    /// Combine with the chosen seed source into a run configuration.
    pub fn into_keygen_config(self, seed_source: SeedSource) -> KeygenConfig {
        KeygenConfig {
            seed_source,
            output_stem: self.output.stem,
            comment: self.output.comment.filter(|c| !c.is_empty()),
        }
    }
}

/// Pick the seed source: explicit phrase, then `MNEMOSSH_MNEMONIC`, else generate.
pub fn seed_source(phrase: Option<String>) -> SeedSource {
    seed_source_from(phrase, |name| std::env::var(name).ok())
}

fn seed_source_from(phrase: Option<String>, lookup: impl Fn(&str) -> Option<String>) -> SeedSource {
    match phrase.or_else(|| lookup("MNEMOSSH_MNEMONIC")) {
        Some(p) if !p.is_empty() => SeedSource::Phrase(Zeroizing::new(p)),
        _ => SeedSource::Generate,
    }
}
