//! Block ID generation.

use crc32fast::Hasher;

/// Derive a stable page seed from its identifier using CRC32.
pub fn page_seed(page_id: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(page_id.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential block ID generator scoped to one page.
///
/// IDs are `{seed}-{n}` with a strictly increasing counter, so an ID is
/// never reused within a page even after the block it named is deleted.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String,
    count: u32,
}

impl IdGenerator {
    pub fn new(page_id: &str) -> Self {
        Self {
            seed: page_seed(page_id),
            count: 0,
        }
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Resume counting above IDs already present in a loaded sequence.
    pub fn resume(page_id: &str, existing: impl Iterator<Item = u32>) -> Self {
        Self {
            seed: page_seed(page_id),
            count: existing.max().unwrap_or(0),
        }
    }

    pub fn next_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Counter suffix of an ID minted by this generator, if it parses.
    pub fn counter_of(id: &str) -> Option<u32> {
        id.rsplit('-').next()?.parse().ok()
    }
}
