//! Deflate command implementation.

use crate::utils::{create_progress_bar, ratio, with_suffix};
use oxizip_flate::{compress_bound, deflate};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

struct Compressed {
    output: PathBuf,
    original: usize,
    compressed: usize,
}

fn deflate_file(
    file: &Path,
    dir: Option<&Path>,
    capacity: Option<usize>,
) -> Result<Compressed, Box<dyn std::error::Error + Send + Sync>> {
    let data = fs::read(file)?;
    let mut buffer = vec![0u8; capacity.unwrap_or_else(|| compress_bound(data.len()))];
    let written = deflate(&mut buffer, &data)?;

    let output = with_suffix(file, ".zz", dir);
    fs::write(&output, &buffer[..written])?;

    Ok(Compressed {
        output,
        original: data.len(),
        compressed: written,
    })
}

pub fn cmd_deflate(
    files: &[PathBuf],
    output: Option<&Path>,
    capacity: Option<usize>,
    progress: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(dir) = output {
        fs::create_dir_all(dir)?;
    }

    let pb = create_progress_bar(files.len() as u64, progress && files.len() > 1);

    let results: Vec<_> = files
        .par_iter()
        .map(|file| {
            let result = deflate_file(file, output, capacity);
            pb.inc(1);
            (file, result)
        })
        .collect();

    pb.finish_and_clear();

    let mut failed = 0usize;
    for (file, result) in results {
        match result {
            Ok(done) => {
                info!(
                    input = %file.display(),
                    output = %done.output.display(),
                    original = done.original,
                    compressed = done.compressed,
                    "deflated"
                );
                println!(
                    "{} -> {} ({} -> {} bytes, {})",
                    file.display(),
                    done.output.display(),
                    done.original,
                    done.compressed,
                    ratio(done.original, done.compressed)
                );
            }
            Err(e) => {
                warn!(input = %file.display(), error = %e, "deflate failed");
                eprintln!("{}: {}", file.display(), e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(format!("{} of {} files failed", failed, files.len()).into());
    }
    Ok(())
}
