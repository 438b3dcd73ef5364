// Copyright 2024 Karpeles Lab Inc.
// Property-based tests using proptest

mod support;

use proptest::prelude::*;
use support::decompress;
use xpress_huff::{compress, compress_into, max_compressed_len};

proptest! {
    #[test]
    fn prop_roundtrip(data: Vec<u8>) {
        prop_assume!(data.len() <= 200_000);

        let compressed = compress(&data).expect("compress failed");
        let decoded = decompress(&compressed, data.len()).expect("decode failed");
        prop_assert_eq!(data, decoded);
    }

    #[test]
    fn prop_size_bound(data: Vec<u8>) {
        prop_assume!(data.len() <= 200_000);

        let compressed = compress(&data).expect("compress failed");
        prop_assert!(compressed.len() <= max_compressed_len(data.len()));
    }

    #[test]
    fn prop_compress_into_agrees(data: Vec<u8>) {
        prop_assume!(data.len() <= 50_000);

        let compressed = compress(&data).expect("compress failed");
        let mut buf = vec![0u8; max_compressed_len(data.len())];
        let written = compress_into(&data, &mut buf).expect("compress_into failed");
        prop_assert_eq!(&compressed[..], &buf[..written]);
    }

    #[test]
    fn prop_all_same_byte(byte: u8, size in 1usize..100_000) {
        let data = vec![byte; size];
        let compressed = compress(&data).expect("compress failed");
        let decoded = decompress(&compressed, data.len()).expect("decode failed");
        prop_assert_eq!(data, decoded);

        // long runs collapse to a few match records per chunk
        if size > 1000 {
            prop_assert!(compressed.len() < size / 2);
        }
    }

    #[test]
    fn prop_repeated_pattern(pattern in prop::collection::vec(any::<u8>(), 1..64), reps in 2usize..500) {
        let data: Vec<u8> = pattern.iter().copied().cycle().take(pattern.len() * reps).collect();
        let compressed = compress(&data).expect("compress failed");
        let decoded = decompress(&compressed, data.len()).expect("decode failed");
        prop_assert_eq!(data, decoded);
    }

    #[test]
    fn prop_empty_and_small(size in 0usize..300) {
        let data = vec![b'x'; size];
        let compressed = compress(&data).expect("compress failed");
        let decoded = decompress(&compressed, data.len()).expect("decode failed");
        prop_assert_eq!(data, decoded);
    }

    #[test]
    fn prop_concatenated_blocks(a: Vec<u8>, b: Vec<u8>, c: Vec<u8>) {
        prop_assume!(a.len() + b.len() + c.len() <= 100_000);

        let mut data = a;
        data.extend_from_slice(&b);
        data.extend_from_slice(&b);
        data.extend_from_slice(&c);
        data.extend_from_slice(&b);

        let compressed = compress(&data).expect("compress failed");
        let decoded = decompress(&compressed, data.len()).expect("decode failed");
        prop_assert_eq!(data, decoded);
    }
}
