//! Inflate command implementation.

use crate::utils::{ratio, strip_suffix};
use oxizip_core::OxiZipError;
use oxizip_flate::inflate;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

pub fn cmd_inflate(
    file: &Path,
    size: usize,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let compressed = fs::read(file)?;
    let mut plain = vec![0u8; size];
    if let Err(e) = inflate(&mut plain, &compressed) {
        if let OxiZipError::UnexpectedEndOfStream { produced, .. } = &e {
            warn!(size, produced = *produced, "stream length differs from --size");
        }
        return Err(e.into());
    }

    let target = output.map_or_else(|| strip_suffix(file, ".zz", ".out"), Path::to_path_buf);
    fs::write(&target, &plain)?;

    info!(
        input = %file.display(),
        output = %target.display(),
        compressed = compressed.len(),
        size,
        "inflated"
    );
    println!(
        "{} -> {} ({} -> {} bytes, {})",
        file.display(),
        target.display(),
        compressed.len(),
        size,
        ratio(size, compressed.len())
    );
    Ok(())
}
