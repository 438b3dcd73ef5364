// Copyright 2024 Karpeles Lab Inc.
// Implements the Xpress-Huffman compression format used by Microsoft
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! # Xpress-Huffman Compression
//!
//! This library implements an encoder for the Xpress-Huffman compressed
//! stream format, the LZ77-plus-canonical-Huffman variant used by Microsoft
//! system formats such as WIM archives and hibernation files.
//!
//! The encoder is one-shot: a complete input produces a complete stream that
//! a conforming Xpress-Huffman decoder reproduces bit-exactly. Input is
//! processed in 64 KiB chunks, each prefixed by its own packed table of 512
//! canonical code lengths; matches reach back up to 64 KiB, including across
//! chunk boundaries.
//!
//! ## Example
//!
//! ```rust
//! use xpress_huff::{compress, max_compressed_len};
//!
//! let data = b"Hello, World! Hello, World! Hello, World!";
//! let compressed = compress(data).expect("compression failed");
//! assert!(compressed.len() <= max_compressed_len(data.len()));
//! ```
//!
//! To compress into a caller-owned buffer, size it with
//! [`max_compressed_len`] and use [`compress_into`].

mod bitstream;
mod constants;
mod dict;
mod encode;
mod error;
mod huffman;

pub use encode::{compress, compress_into, max_compressed_len};
pub use error::{Error, Result};
