//! Resource decompressors and the registry that resolves them by name.

use crate::header::{Endian, RESOURCE_HEADER_LEN, ResourceHeader};
use crate::strings::StringTable;
use oxizip_core::error::{OxiZipError, Result};
use oxizip_flate::{deflate_to_vec, inflate_to_vec};
use std::borrow::Cow;
use std::sync::{Arc, OnceLock};
use tracing::debug;

/// A decompressor for one compressed-resource layer.
pub trait ResourceDecompressor: Send + Sync {
    /// Name stored in the string table and referenced by headers.
    fn name(&self) -> &str;

    /// Decompress the payload that follows `header`.
    fn decompress(&self, payload: &[u8], header: &ResourceHeader) -> Result<Vec<u8>>;
}

/// The "zip" decompressor: payload is one zlib stream whose decompressed
/// length is exactly `uncompressed_size`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipDecompressor;

impl ZipDecompressor {
    /// Registry name.
    pub const NAME: &'static str = "zip";

    /// Compress `data` into a resource layer.
    ///
    /// The layer is marked terminal unless `data` is itself a compressed
    /// resource.
    pub fn compress(data: &[u8], name_offset: u32, endian: Endian) -> Result<Vec<u8>> {
        let payload = deflate_to_vec(data)?;
        let is_terminal = ResourceHeader::read(data, endian)?.is_none();
        let header = ResourceHeader {
            is_terminal: u8::from(is_terminal),
            ..ResourceHeader::new(payload.len() as u64, data.len() as u64, name_offset)
        };

        let mut out = Vec::with_capacity(RESOURCE_HEADER_LEN + payload.len());
        out.extend_from_slice(&header.write(endian));
        out.extend_from_slice(&payload);
        Ok(out)
    }
}

impl ResourceDecompressor for ZipDecompressor {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn decompress(&self, payload: &[u8], header: &ResourceHeader) -> Result<Vec<u8>> {
        let size = usize::try_from(header.uncompressed_size).map_err(|_| {
            OxiZipError::invalid_resource_header(format!(
                "uncompressed size {} exceeds address space",
                header.uncompressed_size
            ))
        })?;
        inflate_to_vec(payload, size)
    }
}

/// Registry of resource decompressors.
#[derive(Clone, Default)]
pub struct Decompressors {
    decompressors: Vec<Arc<dyn ResourceDecompressor>>,
}

impl Decompressors {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in decompressors.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(ZipDecompressor));
        registry
    }

    /// Process-wide registry of built-in decompressors.
    pub fn global() -> &'static Self {
        static INSTANCE: OnceLock<Decompressors> = OnceLock::new();
        INSTANCE.get_or_init(Self::with_defaults)
    }

    /// Add a decompressor. A later registration shadows an earlier one of
    /// the same name.
    pub fn register(&mut self, decompressor: Arc<dyn ResourceDecompressor>) {
        self.decompressors.insert(0, decompressor);
    }

    /// Look up a decompressor by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn ResourceDecompressor>> {
        self.decompressors
            .iter()
            .find(|d| d.name() == name)
            .map(Arc::clone)
    }

    /// Names of all registered decompressors.
    pub fn names(&self) -> Vec<&str> {
        self.decompressors.iter().map(|d| d.name()).collect()
    }

    /// Strip compression layers from `data` until no header remains.
    ///
    /// Each layer names its decompressor through `strings`. The fully
    /// decompressed resource must be exactly `expected_size` bytes.
    pub fn decompress_resource(
        &self,
        data: &[u8],
        expected_size: u64,
        strings: &StringTable,
        endian: Endian,
    ) -> Result<Vec<u8>> {
        let mut current = Cow::Borrowed(data);
        let mut layers = 0usize;

        while let Some(header) = ResourceHeader::read(&current, endian)? {
            let name = strings.get(header.decompressor_name_offset)?;
            let decompressor = self
                .get(name)
                .ok_or_else(|| OxiZipError::unknown_decompressor(name))?;

            let end = usize::try_from(header.size)
                .ok()
                .and_then(|size| size.checked_add(RESOURCE_HEADER_LEN))
                .filter(|&end| end <= current.len())
                .ok_or_else(|| {
                    OxiZipError::invalid_resource_header(format!(
                        "payload of {} bytes overruns {}-byte resource",
                        header.size,
                        current.len()
                    ))
                })?;

            let decompressed = decompressor.decompress(&current[RESOURCE_HEADER_LEN..end], &header)?;
            if decompressed.len() as u64 != header.uncompressed_size {
                return Err(OxiZipError::resource_size_mismatch(
                    header.uncompressed_size,
                    decompressed.len() as u64,
                ));
            }

            layers += 1;
            debug!(
                decompressor = name,
                compressed = header.size,
                decompressed = header.uncompressed_size,
                layer = layers,
                "resource layer decompressed"
            );
            current = Cow::Owned(decompressed);
        }

        if current.len() as u64 != expected_size {
            return Err(OxiZipError::resource_size_mismatch(
                expected_size,
                current.len() as u64,
            ));
        }
        Ok(current.into_owned())
    }
}

impl std::fmt::Debug for Decompressors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Decompressors")
            .field("names", &self.names())
            .finish()
    }
}
