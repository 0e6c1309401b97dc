//! Single-shot deflate into a fixed-size buffer.
//!
//! The whole input is handed to the engine with a finish instruction in one
//! step. There is no second attempt: if the stream did not finish, the output
//! buffer was too small.

use crate::engine::FlateEncoder;
use crate::{check_len, cursor};
use oxizip_core::config::{DeflateParams, compress_bound};
use oxizip_core::error::{OxiZipError, Result, Stage};
use oxizip_core::traits::{CompressEngine, EngineFault, FlushMode, StreamStatus};
use tracing::{debug, warn};

/// Compress `input` as one zlib stream into `output`.
///
/// Returns the number of bytes written. Capacity beyond that is left
/// untouched. Sizing `output` with [`compress_bound`] guarantees success.
///
/// # Example
///
/// ```
/// use oxizip_flate::deflate;
///
/// let mut out = [0u8; 64];
/// let len = deflate(&mut out, b"hello hello hello").unwrap();
/// assert!(len > 2 && len < 64);
/// ```
pub fn deflate(output: &mut [u8], input: &[u8]) -> Result<usize> {
    deflate_with::<FlateEncoder>(output, input)
}

/// Compress `input` into a new buffer sized by [`compress_bound`].
pub fn deflate_to_vec(input: &[u8]) -> Result<Vec<u8>> {
    let mut output = vec![0u8; compress_bound(input.len())];
    let len = deflate(&mut output, input)?;
    output.truncate(len);
    Ok(output)
}

/// [`deflate`] driven by an arbitrary compression engine.
pub fn deflate_with<E: CompressEngine>(output: &mut [u8], input: &[u8]) -> Result<usize> {
    check_len(input.len(), E::MAX_BUFFER_LEN)?;
    check_len(output.len(), E::MAX_BUFFER_LEN)?;

    let mut engine = E::init(&DeflateParams::DEFAULT).map_err(|fault| {
        warn!(%fault, "deflate session init failed");
        match fault {
            EngineFault::Memory => OxiZipError::out_of_memory(Stage::DeflateInit),
            other => OxiZipError::internal(Stage::DeflateInit, other.to_string()),
        }
    })?;

    match engine.step(input, output, FlushMode::Finish) {
        Ok(StreamStatus::StreamEnd) => {
            let written = cursor(engine.total_out(), output.len());
            debug!(input = input.len(), written, "deflate complete");
            Ok(written)
        }
        Ok(StreamStatus::Ok | StreamStatus::BufError) => {
            debug!(
                capacity = output.len(),
                consumed = engine.total_in(),
                "deflate did not finish"
            );
            Err(OxiZipError::buffer_too_small(output.len()))
        }
        Err(fault) => {
            debug!(%fault, "deflate step failed");
            Err(OxiZipError::internal(Stage::Deflate, fault.to_string()))
        }
    }
}
