//! Deterministic byte expansion
//!
//! Stretches a 32-byte seed into an unbounded pseudorandom stream:
//!
//! ```text
//! block(i) = SHA-256(seed || le32(i))
//! stream   = block(0) || block(1) || block(2) || ...
//! ```
//!
//! The byte at stream position `p` depends only on the seed and `p`, so reads
//! of any size and alignment see the same stream. [`SeedExpander`] implements
//! [`RngCore`] + [`CryptoRng`] so it can stand in for the system RNG when a
//! key-generation routine asks for randomness.

use rand::{CryptoRng, RngCore};
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::error::{Error, Result};

/// Seed length accepted by the expander
pub const SEED_LEN: usize = 32;

/// Output width of SHA-256, i.e. one expansion block
pub const BLOCK_LEN: usize = 32;

/// Compute expansion block `index` for `seed`.
pub fn expansion_block(seed: &[u8; SEED_LEN], index: u32) -> [u8; BLOCK_LEN] {
    let mut hasher = Sha256::new();
    hasher.update(seed);
    hasher.update(index.to_le_bytes());
    hasher.finalize().into()
}

/// Cursor over the expansion stream of one seed.
pub struct SeedExpander {
    seed: Zeroizing<[u8; SEED_LEN]>,
    /// Most recently computed block
    block: Zeroizing<[u8; BLOCK_LEN]>,
    /// Index of the next block to compute
    next_block: u32,
    /// Unconsumed bytes at the tail of `block`
    available: usize,
    /// Bytes emitted so far
    position: u64,
}

impl SeedExpander {
    /// Create an expander positioned at the start of the stream.
    ///
    /// Any seed that is not exactly [`SEED_LEN`] bytes is rejected; callers
    /// holding longer material must shorten it themselves.
    pub fn new(seed: &[u8]) -> Result<Self> {
        if seed.len() != SEED_LEN {
            return Err(Error::InvalidSeedLength {
                expected: SEED_LEN,
                actual: seed.len(),
            });
        }

        let mut owned = Zeroizing::new([0u8; SEED_LEN]);
        owned.copy_from_slice(seed);

        Ok(Self {
            seed: owned,
            block: Zeroizing::new([0u8; BLOCK_LEN]),
            next_block: 0,
            available: 0,
            position: 0,
        })
    }

    /// Number of bytes emitted so far.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Fill `dest` with the next `dest.len()` bytes of the stream.
    pub fn fill(&mut self, dest: &mut [u8]) {
        let mut written = 0;
        while written < dest.len() {
            if self.available == 0 {
                self.refill();
            }
            let start = BLOCK_LEN - self.available;
            let take = self.available.min(dest.len() - written);
            dest[written..written + take].copy_from_slice(&self.block[start..start + take]);
            self.available -= take;
            written += take;
        }
        self.position += dest.len() as u64;
    }

    fn refill(&mut self) {
        *self.block = expansion_block(&self.seed, self.next_block);
        // The counter is a 32-bit field; it only wraps after 128 GiB of output.
        self.next_block = self.next_block.wrapping_add(1);
        self.available = BLOCK_LEN;
    }
}

impl std::fmt::Debug for SeedExpander {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedExpander")
            .field("seed", &"[REDACTED]")
            .field("position", &self.position)
            .finish()
    }
}

impl RngCore for SeedExpander {
    fn next_u32(&mut self) -> u32 {
        let mut bytes = [0u8; 4];
        self.fill(&mut bytes);
        u32::from_le_bytes(bytes)
    }

    fn next_u64(&mut self) -> u64 {
        let mut bytes = [0u8; 8];
        self.fill(&mut bytes);
        u64::from_le_bytes(bytes)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.fill(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
        self.fill(dest);
        Ok(())
    }
}

impl CryptoRng for SeedExpander {}

impl std::io::Read for SeedExpander {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.fill(buf);
        Ok(buf.len())
    }
}
