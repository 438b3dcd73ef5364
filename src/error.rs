// Copyright 2024 Karpeles Lab Inc.
// Implements the Xpress-Huffman compression format used by Microsoft
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use std::fmt;

/// Result type for Xpress-Huffman operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Xpress-Huffman compression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The output buffer cannot hold the compressed stream
    BufferTooSmall,

    /// Scratch allocation failed at entry
    OutOfMemory,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferTooSmall => write!(f, "xpress-huff: output buffer too small"),
            Error::OutOfMemory => write!(f, "xpress-huff: out of memory"),
        }
    }
}

impl std::error::Error for Error {}
