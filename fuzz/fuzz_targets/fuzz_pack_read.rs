#![no_main]

use std::io::Write;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Fuzz the pack reader - arbitrary bytes must yield entries or a
    // corrupt-pack error, never a panic
    let mut file = tempfile::NamedTempFile::new().expect("temp pack file");
    file.write_all(data).expect("write fuzz input");
    file.flush().expect("flush fuzz input");
    let _ = shaderpack::read_pack(file.path());
});
