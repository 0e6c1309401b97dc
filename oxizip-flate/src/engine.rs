//! flate2-backed engine sessions.
//!
//! [`FlateDecoder`] and [`FlateEncoder`] adapt [`flate2::Decompress`] and
//! [`flate2::Compress`] to the engine traits. Both speak zlib framing. The
//! backend is fixed to a 15-bit window, memory level 8 and the default
//! strategy, so any other parameter set is refused at init.

use flate2::{Compress, Compression, Decompress, FlushCompress, FlushDecompress, Status};
use oxizip_core::config::{DEF_MEM_LEVEL, DeflateParams, InflateParams, MAX_WBITS, Strategy};
use oxizip_core::traits::{CompressEngine, DecompressEngine, EngineFault, FlushMode, StreamStatus};

fn map_status(status: Status) -> StreamStatus {
    match status {
        Status::Ok => StreamStatus::Ok,
        Status::StreamEnd => StreamStatus::StreamEnd,
        Status::BufError => StreamStatus::BufError,
    }
}

/// Decompression session over a zlib stream.
pub struct FlateDecoder {
    inner: Decompress,
}

impl DecompressEngine for FlateDecoder {
    fn init(params: &InflateParams) -> Result<Self, EngineFault> {
        if params.window_bits != MAX_WBITS {
            return Err(EngineFault::Stream(format!(
                "unsupported window size: {} bits",
                params.window_bits
            )));
        }
        Ok(Self {
            inner: Decompress::new(true),
        })
    }

    fn step(
        &mut self,
        input: &[u8],
        output: &mut [u8],
        flush: FlushMode,
    ) -> Result<StreamStatus, EngineFault> {
        // Inflate has no partial/full distinction; anything short of finish
        // that asks for output is a sync flush.
        let flush = match flush {
            FlushMode::None => FlushDecompress::None,
            FlushMode::Partial | FlushMode::Sync | FlushMode::Full => FlushDecompress::Sync,
            FlushMode::Finish => FlushDecompress::Finish,
        };

        match self.inner.decompress(input, output, flush) {
            Ok(status) => Ok(map_status(status)),
            Err(err) if err.needs_dictionary().is_some() => Err(EngineFault::NeedDictionary),
            Err(err) => Err(EngineFault::Data(err.to_string())),
        }
    }

    fn total_in(&self) -> u64 {
        self.inner.total_in()
    }

    fn total_out(&self) -> u64 {
        self.inner.total_out()
    }
}

/// Compression session producing a zlib stream.
pub struct FlateEncoder {
    inner: Compress,
}

impl CompressEngine for FlateEncoder {
    fn init(params: &DeflateParams) -> Result<Self, EngineFault> {
        if params.window_bits != MAX_WBITS {
            return Err(EngineFault::Stream(format!(
                "unsupported window size: {} bits",
                params.window_bits
            )));
        }
        if params.mem_level != DEF_MEM_LEVEL {
            return Err(EngineFault::Stream(format!(
                "unsupported memory level: {}",
                params.mem_level
            )));
        }
        if params.strategy != Strategy::Default {
            return Err(EngineFault::Stream(format!(
                "unsupported strategy: {:?}",
                params.strategy
            )));
        }

        let level = Compression::new(u32::from(params.level.level()));
        Ok(Self {
            inner: Compress::new(level, true),
        })
    }

    fn step(
        &mut self,
        input: &[u8],
        output: &mut [u8],
        flush: FlushMode,
    ) -> Result<StreamStatus, EngineFault> {
        let flush = match flush {
            FlushMode::None => FlushCompress::None,
            FlushMode::Partial => FlushCompress::Partial,
            FlushMode::Sync => FlushCompress::Sync,
            FlushMode::Full => FlushCompress::Full,
            FlushMode::Finish => FlushCompress::Finish,
        };

        self.inner
            .compress(input, output, flush)
            .map(map_status)
            .map_err(|err| EngineFault::Stream(err.to_string()))
    }

    fn total_in(&self) -> u64 {
        self.inner.total_in()
    }

    fn total_out(&self) -> u64 {
        self.inner.total_out()
    }
}
