//! Property tests for the binary pack container.

use std::fs;

use proptest::prelude::*;
use tempfile::TempDir;

use shaderpack::pack::{ENTRY_SIZE, HEADER_SIZE};
use shaderpack::{read_pack, write_pack, PackEntry};

fn entry_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_]{0,62}").unwrap()
}

fn entry() -> impl Strategy<Value = PackEntry> {
    (entry_name(), proptest::collection::vec(any::<u8>(), 0..=128))
        .prop_map(|(name, data)| PackEntry::new(name, data))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Packs round-trip - reading back yields the written entries
    /// and every stored digest matches a recomputation over the sliced bytes.
    #[test]
    fn property_pack_round_trips(
        entries in proptest::collection::vec(entry(), 0..=8),
    ) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shaders_test.pack");
        write_pack(&path, &entries).unwrap();

        let read_back = read_pack(&path).unwrap();
        prop_assert_eq!(&read_back, &entries);
        for e in &read_back {
            prop_assert_eq!(e.digest, md5::compute(&e.data).0);
        }
    }

    /// PROPERTY: Offsets are contiguous and monotonically increasing across
    /// the entry table, starting right after it, and cover the whole file.
    #[test]
    fn property_offsets_contiguous_and_monotonic(
        entries in proptest::collection::vec(entry(), 1..=8),
    ) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shaders_test.pack");
        write_pack(&path, &entries).unwrap();

        let bytes = fs::read(&path).unwrap();
        let mut expected_offset = HEADER_SIZE + entries.len() * ENTRY_SIZE;
        let mut last_offset = 0;

        for i in 0..entries.len() {
            let record = &bytes[HEADER_SIZE + i * ENTRY_SIZE..HEADER_SIZE + (i + 1) * ENTRY_SIZE];
            let offset = u32::from_ne_bytes([record[80], record[81], record[82], record[83]]) as usize;
            let size = u32::from_ne_bytes([record[84], record[85], record[86], record[87]]) as usize;

            prop_assert_eq!(offset, expected_offset);
            prop_assert!(offset >= last_offset);
            prop_assert_eq!(size, entries[i].data.len());

            expected_offset += size;
            last_offset = offset;
        }
        prop_assert_eq!(expected_offset, bytes.len());
    }

    /// PROPERTY: The reader never panics on arbitrary bytes - it returns
    /// entries or a corrupt-pack error.
    #[test]
    fn property_reader_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..=512)) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fuzzed.pack");
        fs::write(&path, &bytes).unwrap();
        let _ = read_pack(&path);
    }

    /// PROPERTY: Flipping the magic always yields a corrupt-pack error.
    #[test]
    fn property_bad_magic_rejected(
        entries in proptest::collection::vec(entry(), 0..=4),
        corrupt_byte in 0usize..4,
    ) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shaders_test.pack");
        write_pack(&path, &entries).unwrap();

        let mut bytes = fs::read(&path).unwrap();
        bytes[corrupt_byte] ^= 0xff;
        fs::write(&path, &bytes).unwrap();

        prop_assert!(read_pack(&path).is_err());
    }
}
