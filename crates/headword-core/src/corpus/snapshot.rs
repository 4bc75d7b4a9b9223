//! `HWDX` compiled corpus snapshot.
//!
//! Layout: `magic(4) | version(1) | crc32(4) | body_len(4) | body`, where the
//! body is the bincode-encoded entry list plus metadata and the checksum
//! covers the body only.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::path::Path;

use memmap2::Mmap;
use serde::{Deserialize, Serialize};

use super::{Corpus, CorpusError, Entry};

pub const MAGIC: &[u8; 4] = b"HWDX";
pub const VERSION: u8 = 1;
const HEADER_SIZE: usize = 4 + 1 + 4 + 4; // magic + version + crc32 + body_len = 13

#[derive(Serialize, Deserialize)]
struct CorpusData {
    entries: Vec<Entry>,
    metadata: BTreeMap<String, String>,
}

impl Corpus {
    pub fn to_bytes(&self) -> Result<Vec<u8>, CorpusError> {
        let data = CorpusData {
            entries: self.entries.clone(),
            metadata: self.metadata.clone(),
        };
        let body = bincode::serialize(&data).map_err(CorpusError::Serialize)?;

        let body_len: u32 = body.len().try_into().map_err(|_| CorpusError::InvalidEntry {
            index: self.entries.len(),
            reason: "corpus exceeds u32::MAX bytes".to_string(),
        })?;
        let crc = crc32fast::hash(&body);

        let mut buf = Vec::with_capacity(HEADER_SIZE + body.len());
        buf.extend_from_slice(MAGIC);
        buf.push(VERSION);
        buf.extend_from_slice(&crc.to_le_bytes());
        buf.extend_from_slice(&body_len.to_le_bytes());
        buf.extend_from_slice(&body);
        Ok(buf)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, CorpusError> {
        if data.len() < 5 {
            return Err(CorpusError::InvalidHeader);
        }
        if &data[..4] != MAGIC {
            return Err(CorpusError::InvalidMagic);
        }
        if data[4] != VERSION {
            return Err(CorpusError::UnsupportedVersion(data[4]));
        }
        if data.len() < HEADER_SIZE {
            return Err(CorpusError::InvalidHeader);
        }

        let expected = read_u32(&data[5..9]);
        let body_len = read_u32(&data[9..13]) as usize;
        if data.len() < HEADER_SIZE + body_len {
            return Err(CorpusError::InvalidHeader);
        }

        let body = &data[HEADER_SIZE..HEADER_SIZE + body_len];
        let actual = crc32fast::hash(body);
        if actual != expected {
            return Err(CorpusError::ChecksumMismatch { expected, actual });
        }

        let data: CorpusData = bincode::deserialize(body).map_err(CorpusError::Deserialize)?;
        Ok(Corpus::from_entries(data.entries)?.with_metadata(data.metadata))
    }

    /// Open a snapshot file, using mmap to avoid doubling peak memory.
    pub fn open(path: &Path) -> Result<Self, CorpusError> {
        let file = File::open(path)?;
        // SAFETY: The file is opened read-only and the mapping is immutable.
        // The Mmap is dropped after deserialization completes below.
        let mmap = unsafe { Mmap::map(&file)? };
        Self::from_bytes(&mmap)
    }

    /// Atomic write: write to .tmp then rename.
    pub fn save(&self, path: &Path) -> Result<(), CorpusError> {
        let bytes = self.to_bytes()?;
        let tmp = path.with_extension("tmp");
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}

fn read_u32(bytes: &[u8]) -> u32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(bytes);
    u32::from_le_bytes(buf)
}
