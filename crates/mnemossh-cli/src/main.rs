//! mnemossh — deterministic Ed25519 SSH keys from a BIP-39 mnemonic
//!
//! The 24-word phrase is the only thing to keep: running again with the same
//! phrase rewrites byte-identical key files on any machine.
//!
//! # Usage
//!
//! ```bash
//! mnemossh                                  # new phrase, writes bip39-id_ed25519{,.pub}
//! mnemossh -f ~/.ssh/id_backup -C me@host   # custom path and comment
//! mnemossh -f test -m "abandon ability able about ... actress"
//! echo "$PHRASE" | mnemossh --mnemonic-stdin
//! ```

mod config;
mod keygen;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;

use crate::config::Settings;

const AFTER_HELP: &str = "\
If no mnemonic is given a new one with 256-bit entropy is generated and printed.
The mnemonic is your key to regenerate the same SSH key pair later - keep it safe!

ENVIRONMENT VARIABLES (override the config file, overridden by flags):
    MNEMOSSH_OUTPUT       Output file for the private key
    MNEMOSSH_COMMENT      Key comment
    MNEMOSSH_LOG_LEVEL    Log filter (error/warn/info/debug/trace)
    MNEMOSSH_MNEMONIC     Mnemonic phrase, when neither -m nor --mnemonic-stdin is used";

/// Generate Ed25519 SSH keys from a 24-word BIP-39 mnemonic
#[derive(Parser)]
#[command(name = "mnemossh", version, after_help = AFTER_HELP)]
struct Cli {
    /// Output file for the private key (public key is written to <FILE>.pub)
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    file: Option<PathBuf>,

    /// BIP-39 mnemonic phrase (leave empty to generate a new 24-word mnemonic)
    #[arg(short = 'm', long, value_name = "PHRASE", conflicts_with = "mnemonic_stdin")]
    mnemonic: Option<String>,

    /// Read the mnemonic phrase from standard input
    #[arg(long)]
    mnemonic_stdin: bool,

    /// Comment stored in both key files
    #[arg(short = 'C', long, value_name = "COMMENT")]
    comment: Option<String>,

    /// TOML config file
    #[arg(short = 'c', long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log filter, e.g. "info" or "mnemossh_core=debug"
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = match cli.config {
        Some(ref path) => Settings::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Settings::default(),
    };
    settings.apply_env_overrides();
    if let Some(file) = cli.file {
        settings.output.stem = file;
    }
    if let Some(comment) = cli.comment {
        settings.output.comment = Some(comment);
    }
    if let Some(level) = cli.log_level {
        settings.log.level = level;
    }
    settings
        .validate()
        .context("Configuration validation failed")?;

    env_logger::Builder::new()
        .parse_filters(&settings.log.level)
        .init();

    // Keep seed material out of core files from here on
    mnemossh_core::memory::disable_core_dumps();

    let phrase = if cli.mnemonic_stdin {
        Some(read_stdin_phrase()?)
    } else {
        cli.mnemonic
    };
    let config = settings.into_keygen_config(config::seed_source(phrase));
    log::debug!("resolved configuration: {:?}", config);

    let resolved = keygen::resolve_seed(&config.seed_source)?;
    if let Some(ref phrase) = resolved.new_phrase {
        println!("new mnemonic generated - keep it secure:\n{}\n", phrase.as_str());
    }

    let (paths, artifacts) = keygen::write_keys(&resolved.seed[..], &config)?;

    println!("ed25519 keys generated:");
    println!("  - {} (private)", paths.private.display());
    println!("  - {} (public)", paths.public.display());
    println!("fingerprint: {}", artifacts.fingerprint);
    Ok(())
}

fn read_stdin_phrase() -> Result<String> {
    let mut phrase = String::new();
    std::io::stdin()
        .read_to_string(&mut phrase)
        .context("Failed to read mnemonic from stdin")?;
    let phrase = phrase.trim().to_string();
    anyhow::ensure!(!phrase.is_empty(), "No mnemonic on stdin");
    Ok(phrase)
}
