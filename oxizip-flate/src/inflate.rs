//! Single-shot inflate into a buffer of exactly known size.
//!
//! The caller declares the decompressed size by the length of the output
//! slice. Decompression succeeds only if the stream ends having produced
//! exactly that many bytes; every other outcome is an error.

use crate::engine::FlateDecoder;
use crate::{check_len, cursor};
use oxizip_core::config::InflateParams;
use oxizip_core::error::{OxiZipError, Result, Stage};
use oxizip_core::traits::{DecompressEngine, EngineFault, FlushMode, StreamStatus};
use tracing::{debug, trace, warn};

/// Decompress a complete zlib stream into `output`.
///
/// `output.len()` is the exact expected decompressed size.
///
/// # Example
///
/// ```
/// use oxizip_flate::{deflate, inflate};
///
/// let data = b"hello hello hello";
/// let mut compressed = [0u8; 64];
/// let len = deflate(&mut compressed, data).unwrap();
///
/// let mut plain = [0u8; 17];
/// inflate(&mut plain, &compressed[..len]).unwrap();
/// assert_eq!(&plain, data);
/// ```
pub fn inflate(output: &mut [u8], input: &[u8]) -> Result<()> {
    inflate_with::<FlateDecoder>(output, input)
}

/// Decompress `input` into a freshly allocated buffer of `size` bytes.
pub fn inflate_to_vec(input: &[u8], size: usize) -> Result<Vec<u8>> {
    let mut output = vec![0u8; size];
    inflate(&mut output, input)?;
    Ok(output)
}

/// [`inflate`] driven by an arbitrary decompression engine.
pub fn inflate_with<E: DecompressEngine>(output: &mut [u8], input: &[u8]) -> Result<()> {
    check_len(input.len(), E::MAX_BUFFER_LEN)?;
    check_len(output.len(), E::MAX_BUFFER_LEN)?;

    let expected = output.len() as u64;
    let mut engine = E::init(&InflateParams::DEFAULT).map_err(|fault| {
        warn!(%fault, "inflate session init failed");
        match fault {
            EngineFault::Memory => OxiZipError::out_of_memory(Stage::InflateInit),
            other => OxiZipError::internal(Stage::InflateInit, other.to_string()),
        }
    })?;

    loop {
        let consumed = cursor(engine.total_in(), input.len());
        let produced = cursor(engine.total_out(), output.len());

        let status = engine
            .step(&input[consumed..], &mut output[produced..], FlushMode::Partial)
            .map_err(|fault| {
                debug!(%fault, total_out = engine.total_out(), "inflate step failed");
                match fault {
                    EngineFault::Data(message) => OxiZipError::corrupted(message),
                    EngineFault::Memory => OxiZipError::out_of_memory(Stage::Inflate),
                    other => OxiZipError::internal(Stage::Inflate, other.to_string()),
                }
            })?;

        trace!(
            ?status,
            total_in = engine.total_in(),
            total_out = engine.total_out(),
            "inflate step"
        );

        let progressed = cursor(engine.total_in(), input.len()) != consumed
            || cursor(engine.total_out(), output.len()) != produced;

        match status {
            StreamStatus::StreamEnd if engine.total_out() == expected => {
                debug!(
                    compressed = engine.total_in(),
                    decompressed = expected,
                    "inflate complete"
                );
                return Ok(());
            }
            StreamStatus::StreamEnd => {
                debug!(
                    expected,
                    produced = engine.total_out(),
                    "stream ended at the wrong size"
                );
                return Err(OxiZipError::unexpected_end(expected, engine.total_out()));
            }
            // The engine may hold decoded bytes after swallowing the last of
            // the input, so keep stepping for as long as anything moves.
            StreamStatus::Ok if progressed => {}
            StreamStatus::Ok | StreamStatus::BufError => {
                // Full output without stream end means more data than declared,
                // whether or not the engine has already taken all the input.
                if !output.is_empty() && cursor(engine.total_out(), output.len()) == output.len() {
                    debug!(
                        expected,
                        consumed = engine.total_in(),
                        "output full before end of stream"
                    );
                    return Err(OxiZipError::internal(
                        Stage::Inflate,
                        "output buffer full before end of stream",
                    ));
                }
                if cursor(engine.total_in(), input.len()) >= input.len() {
                    debug!(
                        expected,
                        produced = engine.total_out(),
                        "input exhausted before end of stream"
                    );
                    return Err(OxiZipError::unexpected_end(expected, engine.total_out()));
                }
                return Err(OxiZipError::internal(
                    Stage::Inflate,
                    "no progress possible",
                ));
            }
        }
    }
}
