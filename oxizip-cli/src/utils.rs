//! Utility functions for the CLI.

use indicatif::{ProgressBar, ProgressStyle};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Create a progress bar with standard styling.
pub fn create_progress_bar(len: u64, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("progress bar template is valid")
            .progress_chars("█▓▒░ "),
    );
    pb
}

/// `input` with `suffix` appended to its file name, placed in `dir` if given.
pub fn with_suffix(input: &Path, suffix: &str, dir: Option<&Path>) -> PathBuf {
    let mut name = input
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("stdin"));
    name.push(suffix);

    match dir {
        Some(dir) => dir.join(name),
        None => input.with_file_name(name),
    }
}

/// `input` with `suffix` removed from its file name, or `fallback` appended
/// when the name does not end in `suffix`.
pub fn strip_suffix(input: &Path, suffix: &str, fallback: &str) -> PathBuf {
    let name = input.file_name().and_then(|n| n.to_str()).unwrap_or("");
    match name.strip_suffix(suffix) {
        Some(stem) if !stem.is_empty() => input.with_file_name(stem),
        _ => with_suffix(input, fallback, None),
    }
}

/// Human-readable space saving, as in the listing commands of archivers.
pub fn ratio(original: usize, compressed: usize) -> String {
    if original == 0 {
        return "-".to_string();
    }
    format!(
        "{:.1}%",
        (1.0 - compressed as f64 / original as f64) * 100.0
    )
}
