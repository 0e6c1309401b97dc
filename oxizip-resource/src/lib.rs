//! # OxiZip Resource
//!
//! Compressed resources as stored in runtime images.
//!
//! A resource may be wrapped in one or more compression layers. Each layer
//! starts with a [`ResourceHeader`] whose decompressor name is resolved
//! through a [`StringTable`]; layers are removed until the data no longer
//! starts with the header magic.
//!
//! ## Example
//!
//! ```rust
//! use oxizip_resource::{
//!     Endian, StringTable, ZipDecompressor, compress_resource, decompress_resource,
//! };
//!
//! let mut strings = StringTable::default();
//! let zip = strings.add(ZipDecompressor::NAME).unwrap();
//!
//! let original = b"java/lang/Object.class contents";
//! let packed = compress_resource(original, zip, Endian::Little).unwrap();
//! let unpacked =
//!     decompress_resource(&packed, original.len() as u64, &strings, Endian::Little).unwrap();
//! assert_eq!(unpacked, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod decompressor;
pub mod header;
pub mod strings;

use oxizip_core::error::Result;

// Re-exports
pub use decompressor::{Decompressors, ResourceDecompressor, ZipDecompressor};
pub use header::{Endian, RESOURCE_HEADER_LEN, RESOURCE_HEADER_MAGIC, ResourceHeader};
pub use strings::StringTable;

/// Decompress a resource using the built-in decompressors.
///
/// See [`Decompressors::decompress_resource`].
pub fn decompress_resource(
    data: &[u8],
    expected_size: u64,
    strings: &StringTable,
    endian: Endian,
) -> Result<Vec<u8>> {
    Decompressors::global().decompress_resource(data, expected_size, strings, endian)
}

/// Wrap `data` in one "zip" layer whose header names the decompressor at
/// `name_offset`.
///
/// See [`ZipDecompressor::compress`].
pub fn compress_resource(data: &[u8], name_offset: u32, endian: Endian) -> Result<Vec<u8>> {
    ZipDecompressor::compress(data, name_offset, endian)
}
