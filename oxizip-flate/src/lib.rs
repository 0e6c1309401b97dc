//! # OxiZip Flate
//!
//! Bounded, single-shot zlib codec drivers.
//!
//! Each call owns one engine session, drives it to completion against
//! caller-owned buffers of known size, and releases it before returning.
//!
//! - [`inflate`]: decompress into a buffer whose length is the exact
//!   expected size
//! - [`deflate`]: compress the whole input in one finishing step, returning
//!   the number of bytes written
//!
//! The DEFLATE bit-stream itself is produced and consumed by [`flate2`]
//! through the [`engine`] adapters. The `*_with` variants accept any engine
//! implementing the `oxizip_core` traits.
//!
//! ## Example
//!
//! ```rust
//! use oxizip_flate::{deflate_to_vec, inflate_to_vec};
//!
//! let original = b"Hello, World! Hello, World!";
//! let compressed = deflate_to_vec(original).unwrap();
//! let decompressed = inflate_to_vec(&compressed, original.len()).unwrap();
//! assert_eq!(&decompressed, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod deflate;
pub mod engine;
pub mod inflate;

use oxizip_core::error::{OxiZipError, Result};

// Re-exports
pub use deflate::{deflate, deflate_to_vec, deflate_with};
pub use engine::{FlateDecoder, FlateEncoder};
pub use inflate::{inflate, inflate_to_vec, inflate_with};
pub use oxizip_core::compress_bound;

/// Reject buffers longer than the engine can count.
fn check_len(len: usize, limit: usize) -> Result<()> {
    if len > limit {
        return Err(OxiZipError::buffer_too_large(len, limit));
    }
    Ok(())
}

/// Convert an engine running total into an index into a buffer of `len` bytes.
fn cursor(total: u64, len: usize) -> usize {
    usize::try_from(total).map_or(len, |total| total.min(len))
}
