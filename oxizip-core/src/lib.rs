//! # OxiZip Core
//!
//! Core components for the OxiZip codec drivers.
//!
//! - [`traits`]: The engine capability the drivers are written against
//! - [`config`]: Session parameters and compression levels
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ CLI                                                     │
//! │     oxizip deflate / inflate / info / resource          │
//! ├─────────────────────────────────────────────────────────┤
//! │ Container                                               │
//! │     Compressed resource headers, stacked decompression  │
//! ├─────────────────────────────────────────────────────────┤
//! │ Drivers                                                 │
//! │     Single-shot inflate and deflate over fixed buffers  │
//! ├─────────────────────────────────────────────────────────┤
//! │ Core (this crate)                                       │
//! │     Engine traits, parameters, errors                   │
//! └─────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod traits;

// Re-exports for convenience
pub use config::{
    CompressionLevel, DEF_MEM_LEVEL, DeflateParams, InflateParams, MAX_WBITS, Method, Strategy,
    compress_bound,
};
pub use error::{ErrorKind, OxiZipError, Result, Stage};
pub use traits::{CompressEngine, DecompressEngine, EngineFault, FlushMode, StreamStatus};
