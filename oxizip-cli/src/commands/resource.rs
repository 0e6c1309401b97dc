//! Pack and resource command implementations.

use crate::utils::{ratio, strip_suffix, with_suffix};
use oxizip_resource::{
    Endian, StringTable, ZipDecompressor, compress_resource, decompress_resource,
};
use std::fs;
use std::path::Path;
use tracing::info;

fn endian(big_endian: bool) -> Endian {
    if big_endian { Endian::Big } else { Endian::Little }
}

/// The string table used when none is supplied: "zip" at offset 0.
fn default_strings() -> StringTable {
    StringTable::new(format!("{}\0", ZipDecompressor::NAME).into_bytes())
}

pub fn cmd_pack(
    file: &Path,
    output: Option<&Path>,
    big_endian: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(file)?;
    let packed = compress_resource(&data, 0, endian(big_endian))?;

    let target = output.map_or_else(|| with_suffix(file, ".res", None), Path::to_path_buf);
    fs::write(&target, &packed)?;

    info!(
        input = %file.display(),
        output = %target.display(),
        original = data.len(),
        packed = packed.len(),
        "packed resource"
    );
    println!(
        "{} -> {} ({} -> {} bytes, {})",
        file.display(),
        target.display(),
        data.len(),
        packed.len(),
        ratio(data.len(), packed.len())
    );
    Ok(())
}

pub fn cmd_resource(
    file: &Path,
    size: u64,
    names: Option<&Path>,
    big_endian: bool,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(file)?;
    let strings = match names {
        Some(path) => StringTable::new(fs::read(path)?),
        None => default_strings(),
    };

    let resource = decompress_resource(&data, size, &strings, endian(big_endian))?;

    let target = output.map_or_else(|| strip_suffix(file, ".res", ".out"), Path::to_path_buf);
    fs::write(&target, &resource)?;

    info!(
        input = %file.display(),
        output = %target.display(),
        size,
        "resource decompressed"
    );
    println!(
        "{} -> {} ({} -> {} bytes)",
        file.display(),
        target.display(),
        data.len(),
        resource.len()
    );
    Ok(())
}
