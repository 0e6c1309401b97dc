//! Info command implementation.

use serde::Serialize;
use std::fs;
use std::path::Path;

/// Fields of a two-byte zlib stream header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZlibHeader {
    pub method: u8,
    pub window_size: u32,
    pub level: &'static str,
    pub preset_dictionary: bool,
    pub check_ok: bool,
}

impl ZlibHeader {
    /// Parse the CMF and FLG bytes at the start of `data`.
    pub fn parse(data: &[u8]) -> Option<Self> {
        let (&cmf, &flg) = (data.first()?, data.get(1)?);
        let cinfo = u32::from(cmf >> 4);

        Some(Self {
            method: cmf & 0x0F,
            window_size: 1u32.checked_shl(cinfo + 8).unwrap_or(0),
            level: match flg >> 6 {
                0 => "fastest",
                1 => "fast",
                2 => "default",
                _ => "maximum",
            },
            preset_dictionary: flg & 0x20 != 0,
            check_ok: (u16::from(cmf) * 256 + u16::from(flg)) % 31 == 0,
        })
    }

    /// Whether the header describes a stream a zlib decoder would accept.
    pub fn is_valid(&self) -> bool {
        self.method == 8 && self.window_size <= 32 * 1024 && self.check_ok
    }
}

#[derive(Serialize)]
struct Report<'a> {
    file: String,
    compressed_size: usize,
    valid: bool,
    #[serde(flatten)]
    header: &'a ZlibHeader,
}

pub fn cmd_info(file: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(file)?;
    let header = ZlibHeader::parse(&data)
        .ok_or_else(|| format!("{}: too short for a zlib header", file.display()))?;

    if json {
        let report = Report {
            file: file.display().to_string(),
            compressed_size: data.len(),
            valid: header.is_valid(),
            header: &header,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Stream Information");
    println!("==================");
    println!("File: {}", file.display());
    println!("Compressed size: {} bytes", data.len());
    println!();
    println!("zlib Header:");
    println!(
        "  Method: {}{}",
        header.method,
        if header.method == 8 { " (deflate)" } else { "" }
    );
    println!("  Window: {} bytes", header.window_size);
    println!("  Level: {}", header.level);
    println!(
        "  Preset dictionary: {}",
        if header.preset_dictionary { "yes" } else { "no" }
    );
    println!(
        "  Header check: {}",
        if header.check_ok { "OK" } else { "FAILED" }
    );
    if !header.is_valid() {
        println!();
        println!("Not a valid zlib stream.");
    }

    Ok(())
}
