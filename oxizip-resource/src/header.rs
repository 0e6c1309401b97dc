//! Compressed resource header.
//!
//! A compressed resource starts with a fixed 29-byte header naming the
//! decompressor that produced it:
//!
//! ```text
//! +--------+----------+-------------------+-----------+-------------+----------+
//! | magic  |   size   | uncompressed_size | name_off  | config_off  | terminal |
//! |  u32   |   u64    |        u64        |    u32    |     u32     |    u8    |
//! +--------+----------+-------------------+-----------+-------------+----------+
//! ```
//!
//! Multi-byte fields use the byte order of the image that holds the resource.
//! `size` bytes of compressed payload follow the header.

use oxizip_core::error::{OxiZipError, Result};

/// Magic number opening every compressed resource.
pub const RESOURCE_HEADER_MAGIC: u32 = 0xCAFE_FAFA;

/// Encoded header length in bytes.
pub const RESOURCE_HEADER_LEN: usize = 29;

/// Byte order of header fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endian {
    /// Least significant byte first.
    #[default]
    Little,
    /// Most significant byte first.
    Big,
}

impl Endian {
    /// Byte order of the running platform.
    pub fn native() -> Self {
        if cfg!(target_endian = "big") {
            Self::Big
        } else {
            Self::Little
        }
    }

    fn u32(self, bytes: [u8; 4]) -> u32 {
        match self {
            Self::Little => u32::from_le_bytes(bytes),
            Self::Big => u32::from_be_bytes(bytes),
        }
    }

    fn u64(self, bytes: [u8; 8]) -> u64 {
        match self {
            Self::Little => u64::from_le_bytes(bytes),
            Self::Big => u64::from_be_bytes(bytes),
        }
    }

    fn u32_bytes(self, value: u32) -> [u8; 4] {
        match self {
            Self::Little => value.to_le_bytes(),
            Self::Big => value.to_be_bytes(),
        }
    }

    fn u64_bytes(self, value: u64) -> [u8; 8] {
        match self {
            Self::Little => value.to_le_bytes(),
            Self::Big => value.to_be_bytes(),
        }
    }
}

/// Header of a compressed resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceHeader {
    /// Always [`RESOURCE_HEADER_MAGIC`].
    pub magic: u32,
    /// Length of the compressed payload following the header.
    pub size: u64,
    /// Length of the payload once decompressed.
    pub uncompressed_size: u64,
    /// String table offset of the decompressor name.
    pub decompressor_name_offset: u32,
    /// String table offset of the decompressor configuration.
    pub decompressor_config_offset: u32,
    /// 1 if decompressing yields the final resource, 0 if it yields another
    /// compressed resource.
    pub is_terminal: u8,
}

impl ResourceHeader {
    /// Create a header for a payload of `size` bytes.
    pub fn new(size: u64, uncompressed_size: u64, decompressor_name_offset: u32) -> Self {
        Self {
            magic: RESOURCE_HEADER_MAGIC,
            size,
            uncompressed_size,
            decompressor_name_offset,
            decompressor_config_offset: 0,
            is_terminal: 1,
        }
    }

    /// Read a header from the start of `bytes`.
    ///
    /// Returns `Ok(None)` when `bytes` does not start with the magic number,
    /// i.e. the data is not (or no longer) compressed.
    pub fn read(bytes: &[u8], endian: Endian) -> Result<Option<Self>> {
        let Some(magic) = bytes.get(0..4) else {
            return Ok(None);
        };
        let magic = endian.u32(to_array(magic));
        if magic != RESOURCE_HEADER_MAGIC {
            return Ok(None);
        }

        let Some(fields) = bytes.get(..RESOURCE_HEADER_LEN) else {
            return Err(OxiZipError::invalid_resource_header(format!(
                "truncated: {} of {} bytes",
                bytes.len(),
                RESOURCE_HEADER_LEN
            )));
        };

        Ok(Some(Self {
            magic,
            size: endian.u64(to_array(&fields[4..12])),
            uncompressed_size: endian.u64(to_array(&fields[12..20])),
            decompressor_name_offset: endian.u32(to_array(&fields[20..24])),
            decompressor_config_offset: endian.u32(to_array(&fields[24..28])),
            is_terminal: fields[28],
        }))
    }

    /// Encode the header.
    pub fn write(&self, endian: Endian) -> [u8; RESOURCE_HEADER_LEN] {
        let mut out = [0u8; RESOURCE_HEADER_LEN];
        out[0..4].copy_from_slice(&endian.u32_bytes(self.magic));
        out[4..12].copy_from_slice(&endian.u64_bytes(self.size));
        out[12..20].copy_from_slice(&endian.u64_bytes(self.uncompressed_size));
        out[20..24].copy_from_slice(&endian.u32_bytes(self.decompressor_name_offset));
        out[24..28].copy_from_slice(&endian.u32_bytes(self.decompressor_config_offset));
        out[28] = self.is_terminal;
        out
    }

    /// Whether decompressing yields the final resource.
    pub fn is_terminal(&self) -> bool {
        self.is_terminal != 0
    }
}

fn to_array<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(bytes);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_roundtrip_both_orders() {
        let header = ResourceHeader {
            decompressor_config_offset: 7,
            is_terminal: 0,
            ..ResourceHeader::new(1234, 99_999, 42)
        };

        for endian in [Endian::Little, Endian::Big] {
            let bytes = header.write(endian);
            let parsed = ResourceHeader::read(&bytes, endian).unwrap().unwrap();
            assert_eq!(parsed, header);
            assert!(!parsed.is_terminal());
        }
    }

    #[test]
    fn test_magic_layout() {
        let bytes = ResourceHeader::new(0, 0, 0).write(Endian::Big);
        assert_eq!(&bytes[0..4], &[0xCA, 0xFE, 0xFA, 0xFA]);
        let bytes = ResourceHeader::new(0, 0, 0).write(Endian::Little);
        assert_eq!(&bytes[0..4], &[0xFA, 0xFA, 0xFE, 0xCA]);
    }

    #[test]
    fn test_wrong_byte_order_is_not_a_header() {
        let bytes = ResourceHeader::new(1, 2, 3).write(Endian::Little);
        assert!(ResourceHeader::read(&bytes, Endian::Big).unwrap().is_none());
    }

    #[test]
    fn test_no_header() {
        assert!(ResourceHeader::read(b"", Endian::Little).unwrap().is_none());
        assert!(ResourceHeader::read(b"abc", Endian::Little).unwrap().is_none());
        assert!(
            ResourceHeader::read(b"plain resource bytes here....", Endian::Little)
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_truncated_header() {
        let bytes = ResourceHeader::new(1, 2, 3).write(Endian::Little);
        let err = ResourceHeader::read(&bytes[..20], Endian::Little).unwrap_err();
        assert!(matches!(err, OxiZipError::InvalidResourceHeader { .. }));
    }
}
