#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        // Fuzz the textual patch pass - this should never panic
        let _ = shaderpack::patch_bias_samples(source);
    }
});
