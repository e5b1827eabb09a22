//! Writing key artifacts to disk
//!
//! The private key is created owner-only (0600), the public key world-readable
//! (0644). Modes are re-applied to files that already existed, so overwriting
//! a loosely-permissioned file still leaves it locked down.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::{Error, Result};

pub const PRIVATE_KEY_MODE: u32 = 0o600;
pub const PUBLIC_KEY_MODE: u32 = 0o644;

/// Destination of both artifacts: `<stem>` and `<stem>.pub`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub private: PathBuf,
    pub public: PathBuf,
}

impl ArtifactPaths {
    pub fn from_stem(stem: impl AsRef<Path>) -> Self {
        let private = stem.as_ref().to_path_buf();
        let mut public = private.clone().into_os_string();
        public.push(".pub");
        Self {
            private,
            public: PathBuf::from(public),
        }
    }
}

/// Create or truncate `path`, set `mode` (unix only) and write `contents`.
pub fn write_artifact(path: &Path, contents: &[u8], mode: u32) -> Result<()> {
    let persistence = |source| Error::Persistence {
        path: path.to_path_buf(),
        source,
    };

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode);
    }

    let mut file = options.open(path).map_err(persistence)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(std::fs::Permissions::from_mode(mode))
            .map_err(persistence)?;
    }
    #[cfg(not(unix))]
    let _ = mode;

    file.write_all(contents).map_err(persistence)?;
    file.sync_all().map_err(persistence)?;
    Ok(())
}

pub fn write_private_key(path: &Path, pem: &str) -> Result<()> {
    write_artifact(path, pem.as_bytes(), PRIVATE_KEY_MODE)?;
    info!("wrote private key to {}", path.display());
    Ok(())
}

pub fn write_public_key(path: &Path, line: &str) -> Result<()> {
    write_artifact(path, line.as_bytes(), PUBLIC_KEY_MODE)?;
    info!("wrote public key to {}", path.display());
    Ok(())
}
