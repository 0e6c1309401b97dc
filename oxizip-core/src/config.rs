//! Session parameters for the inflate and deflate engines.

/// Largest supported window size, in bits (32 KiB window).
pub const MAX_WBITS: u8 = 15;

/// Default memory level for the compressor's internal state.
pub const DEF_MEM_LEVEL: u8 = 8;

/// Compression level (0-9).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionLevel(u8);

impl CompressionLevel {
    /// No compression (store only).
    pub const NONE: Self = Self(0);
    /// Fastest compression.
    pub const FAST: Self = Self(1);
    /// Default compression (balanced).
    pub const DEFAULT: Self = Self(6);
    /// Best compression (slowest).
    pub const BEST: Self = Self(9);

    /// Create a custom compression level (0-9).
    pub fn new(level: u8) -> Self {
        Self(level.min(9))
    }

    /// Get the level value.
    pub fn level(&self) -> u8 {
        self.0
    }
}

impl Default for CompressionLevel {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u8> for CompressionLevel {
    fn from(level: u8) -> Self {
        Self::new(level)
    }
}

/// Compression method. DEFLATE is the only one zlib defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// DEFLATE (method 8).
    #[default]
    Deflated,
}

impl Method {
    /// The CM value stored in the zlib header.
    pub fn id(&self) -> u8 {
        match self {
            Self::Deflated => 8,
        }
    }
}

/// Match-finding strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Normal LZ77 matching.
    #[default]
    Default,
    /// Favor Huffman coding over string matching, for filtered data.
    Filtered,
    /// Huffman coding only.
    HuffmanOnly,
    /// Run-length encoding only (distance 1).
    Rle,
    /// Fixed Huffman codes only.
    Fixed,
}

/// Parameters for a decompression session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InflateParams {
    /// Window size in bits (8-15).
    pub window_bits: u8,
}

impl InflateParams {
    /// Maximum window, able to decode any standard stream.
    pub const DEFAULT: Self = Self {
        window_bits: MAX_WBITS,
    };
}

impl Default for InflateParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Parameters for a compression session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeflateParams {
    /// Compression level.
    pub level: CompressionLevel,
    /// Compression method.
    pub method: Method,
    /// Window size in bits (8-15).
    pub window_bits: u8,
    /// Memory level for internal state (1-9).
    pub mem_level: u8,
    /// Match-finding strategy.
    pub strategy: Strategy,
}

impl DeflateParams {
    /// The fixed parameter set used by the deflate driver.
    pub const DEFAULT: Self = Self {
        level: CompressionLevel::DEFAULT,
        method: Method::Deflated,
        window_bits: MAX_WBITS,
        mem_level: DEF_MEM_LEVEL,
        strategy: Strategy::Default,
    };
}

impl Default for DeflateParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Upper bound on the zlib-framed compressed size of `len` input bytes.
///
/// A deflate output buffer of this size never fails with "buffer too small".
pub fn compress_bound(len: usize) -> usize {
    len.saturating_add(len >> 12)
        .saturating_add(len >> 14)
        .saturating_add(len >> 25)
        .saturating_add(13)
}
