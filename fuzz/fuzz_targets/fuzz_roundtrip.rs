#![no_main]

use libfuzzer_sys::fuzz_target;
use xpress_huff::{compress, compress_into, max_compressed_len};

fuzz_target!(|data: &[u8]| {
    // Skip very large inputs to avoid OOM
    if data.len() > 1_000_000 {
        return;
    }

    let compressed = compress(data).expect("compression failed");
    assert!(
        compressed.len() <= max_compressed_len(data.len()),
        "output exceeds the documented bound"
    );

    // An exactly-sized buffer must reproduce the same stream
    let mut buf = vec![0u8; compressed.len()];
    let written = compress_into(data, &mut buf).expect("exact-size compression failed");
    assert_eq!(&compressed[..], &buf[..written]);
});
