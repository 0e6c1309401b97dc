//! Engine capability traits.
//!
//! The DEFLATE bit-stream algorithm is not implemented here. The drivers talk
//! to it through [`DecompressEngine`] and [`CompressEngine`]: an engine value
//! is one session, created by `init`, advanced by `step`, and released when it
//! is dropped.

use crate::config::{DeflateParams, InflateParams};
use thiserror::Error;

/// Non-fault outcome of a single engine step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamStatus {
    /// Progress was made; the stream is not finished.
    Ok,
    /// The logical stream is complete.
    StreamEnd,
    /// No progress was possible (input exhausted or output full).
    BufError,
}

/// Fault reported by an engine, either at init or during a step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineFault {
    /// The compressed input is malformed.
    #[error("data error: {0}")]
    Data(String),
    /// The engine could not allocate memory.
    #[error("insufficient memory")]
    Memory,
    /// The stream requires a preset dictionary.
    #[error("need dictionary")]
    NeedDictionary,
    /// Inconsistent stream state or unsupported parameters.
    #[error("stream error: {0}")]
    Stream(String),
}

/// Flush mode for a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlushMode {
    /// No flush - buffer data for best compression.
    #[default]
    None,
    /// Partial flush - emit output at every opportunity.
    Partial,
    /// Sync flush - emit all pending output on a byte boundary.
    Sync,
    /// Full flush - emit and reset encoder state.
    Full,
    /// Finish - complete the stream.
    Finish,
}

/// A decompression session.
pub trait DecompressEngine: Sized {
    /// Largest input or output length the engine can count.
    const MAX_BUFFER_LEN: usize = u32::MAX as usize;

    /// Create a session.
    fn init(params: &InflateParams) -> Result<Self, EngineFault>;

    /// Consume from `input` and produce into `output`.
    ///
    /// `input` and `output` are the unconsumed and unfilled remainders of the
    /// caller's buffers; progress is read back through [`Self::total_in`] and
    /// [`Self::total_out`].
    fn step(
        &mut self,
        input: &[u8],
        output: &mut [u8],
        flush: FlushMode,
    ) -> Result<StreamStatus, EngineFault>;

    /// Total bytes consumed since init.
    fn total_in(&self) -> u64;

    /// Total bytes produced since init.
    fn total_out(&self) -> u64;
}

/// A compression session.
pub trait CompressEngine: Sized {
    /// Largest input or output length the engine can count.
    const MAX_BUFFER_LEN: usize = u32::MAX as usize;

    /// Create a session.
    fn init(params: &DeflateParams) -> Result<Self, EngineFault>;

    /// Consume from `input` and produce into `output`.
    fn step(
        &mut self,
        input: &[u8],
        output: &mut [u8],
        flush: FlushMode,
    ) -> Result<StreamStatus, EngineFault>;

    /// Total bytes consumed since init.
    fn total_in(&self) -> u64;

    /// Total bytes produced since init.
    fn total_out(&self) -> u64;
}
