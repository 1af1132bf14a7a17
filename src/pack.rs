//! Binary shader pack container
//!
//! One pack file per target. Fixed layout, platform-native byte order for
//! the `u32` fields (the packs ship per platform and are never exchanged
//! across architectures):
//!
//! ```text
//! Header (8 bytes):
//!   magic        4 bytes   ASCII "RBXS"
//!   entry_count  4 bytes   u32
//!
//! Entry table (entry_count x 96 bytes, manifest order):
//!   name         64 bytes  UTF-8, truncated to <= 63 bytes, NUL-padded
//!   digest       16 bytes  MD5 of this entry's stored bytes
//!   data_offset  4 bytes   u32, byte offset from file start
//!   data_size    4 bytes   u32
//!   reserved     8 bytes   zero
//!
//! Data section: entry bytes concatenated in table order, starting at
//! offset 8 + entry_count * 96.
//! ```

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{PackError, PackResult};

/// Pack file magic
pub const PACK_MAGIC: [u8; 4] = *b"RBXS";

/// Size of the fixed header in bytes
pub const HEADER_SIZE: usize = 8;

/// Size of one entry table record in bytes
pub const ENTRY_SIZE: usize = 96;

/// Size of the NUL-padded name field in bytes
pub const NAME_SIZE: usize = 64;

/// Size of the content digest in bytes
pub const DIGEST_SIZE: usize = 16;

/// One named, hashed artifact inside a pack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackEntry {
    /// Entry name (unique within a pack)
    pub name: String,

    /// MD5 digest of `data`
    pub digest: [u8; DIGEST_SIZE],

    /// Compiled artifact bytes
    pub data: Vec<u8>,
}

impl PackEntry {
    /// Create an entry, computing the digest of `data`
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        let digest = md5::compute(&data).0;
        Self {
            name: name.into(),
            digest,
            data,
        }
    }

    /// Digest as lowercase hex
    pub fn digest_hex(&self) -> String {
        self.digest.iter().map(|b| format!("{b:02x}")).collect()
    }
}

/// Serialize `entries` to a pack file at `path`
///
/// Pure function of its input list; sizes and offsets are computed up front
/// and the header, entry table and data section are streamed in order. An
/// unopenable or unwritable destination is reported as [`PackError::PackWrite`].
pub fn write_pack(path: &Path, entries: &[PackEntry]) -> PackResult<()> {
    let file = fs::File::create(path).map_err(|e| PackError::PackWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut writer = BufWriter::new(file);
    write_pack_to(&mut writer, entries)
        .and_then(|()| writer.flush())
        .map_err(|e| PackError::PackWrite {
            path: path.to_path_buf(),
            source: e,
        })
}

fn write_pack_to(writer: &mut impl Write, entries: &[PackEntry]) -> std::io::Result<()> {
    writer.write_all(&PACK_MAGIC)?;
    writer.write_all(&(entries.len() as u32).to_ne_bytes())?;

    let mut offset = (HEADER_SIZE + entries.len() * ENTRY_SIZE) as u32;

    for entry in entries {
        let mut name_field = [0u8; NAME_SIZE];
        let name_bytes = entry.name.as_bytes();
        let len = name_bytes.len().min(NAME_SIZE - 1);
        name_field[..len].copy_from_slice(&name_bytes[..len]);
        writer.write_all(&name_field)?;

        writer.write_all(&entry.digest)?;
        writer.write_all(&offset.to_ne_bytes())?;
        writer.write_all(&(entry.data.len() as u32).to_ne_bytes())?;
        writer.write_all(&[0u8; 8])?;

        offset += entry.data.len() as u32;
    }

    for entry in entries {
        writer.write_all(&entry.data)?;
    }

    Ok(())
}

/// Read a pack file back into its entries, in table order
///
/// Validates magic, entry table bounds and per-entry data bounds; any
/// violation is a [`PackError::CorruptPack`]. No assumption is made about
/// entry name ordering.
pub fn read_pack(path: &Path) -> PackResult<Vec<PackEntry>> {
    let bytes = fs::read(path)?;
    parse_pack(path, &bytes)
}

fn parse_pack(path: &Path, bytes: &[u8]) -> PackResult<Vec<PackEntry>> {
    let corrupt = |message: &str| PackError::CorruptPack {
        path: path.to_path_buf(),
        message: message.to_string(),
    };

    if bytes.len() < HEADER_SIZE {
        return Err(corrupt("truncated header"));
    }
    if bytes[..4] != PACK_MAGIC {
        return Err(corrupt("bad magic"));
    }

    let count = u32::from_ne_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]) as usize;
    let table_end = count
        .checked_mul(ENTRY_SIZE)
        .and_then(|t| t.checked_add(HEADER_SIZE))
        .ok_or_else(|| corrupt("entry count overflow"))?;
    if bytes.len() < table_end {
        return Err(corrupt("truncated entry table"));
    }

    let mut entries = Vec::with_capacity(count);
    for i in 0..count {
        let record = &bytes[HEADER_SIZE + i * ENTRY_SIZE..HEADER_SIZE + (i + 1) * ENTRY_SIZE];

        let name_field = &record[..NAME_SIZE];
        let name_len = name_field.iter().position(|&b| b == 0).unwrap_or(NAME_SIZE);
        let name = String::from_utf8_lossy(&name_field[..name_len]).into_owned();

        let mut digest = [0u8; DIGEST_SIZE];
        digest.copy_from_slice(&record[NAME_SIZE..NAME_SIZE + DIGEST_SIZE]);

        let offset = u32::from_ne_bytes([record[80], record[81], record[82], record[83]]) as usize;
        let size = u32::from_ne_bytes([record[84], record[85], record[86], record[87]]) as usize;

        let end = offset
            .checked_add(size)
            .ok_or_else(|| corrupt("entry data out of bounds"))?;
        if offset < table_end || end > bytes.len() {
            return Err(corrupt("entry data out of bounds"));
        }

        entries.push(PackEntry {
            name,
            digest,
            data: bytes[offset..end].to_vec(),
        });
    }

    Ok(entries)
}
