// Copyright 2024 Karpeles Lab Inc.
// Implements the Xpress-Huffman compression format used by Microsoft
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

/// Input bytes per chunk; each chunk carries its own canonical code table
pub const CHUNK_SIZE: usize = 0x10000;

/// Size of the Huffman alphabet: 256 literals plus 256 match symbols
pub const SYMBOLS: usize = 0x200;

/// Half the alphabet; the packed code-length header is this many bytes
pub const HALF_SYMBOLS: usize = 0x100;

/// End-of-stream symbol (offset bits 0, length nibble 0)
pub const STREAM_END: usize = 0x100;

/// Smallest possible output: a code-length header plus two bitstream words
pub const MIN_DATA: usize = HALF_SYMBOLS + 4;

/// Longest code length a 4-bit header nibble can describe
pub const MAX_CODE_LEN: u8 = 15;

/// Shortest match the symbol encoding can express
pub const MIN_MATCH: usize = 3;

/// Farthest back a match may reach
pub const MAX_OFFSET: usize = 0xFFFF;

/// Match length at which the finder accepts without searching further
pub const NICE_LENGTH: usize = 48;

/// Most chain entries visited per lookup
pub const MAX_CHAIN: usize = 11;
