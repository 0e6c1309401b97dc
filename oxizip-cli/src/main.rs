//! OxiZip CLI - single-shot zlib inflate/deflate over whole files.

mod commands;
mod utils;

use clap::{Parser, Subcommand};
use commands::{cmd_deflate, cmd_inflate, cmd_info, cmd_pack, cmd_resource};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "oxizip")]
#[command(author, version, about = "Single-shot zlib compression for fixed-size buffers")]
#[command(long_about = "
OxiZip compresses and decompresses whole files in one call each.
Decompression needs the exact decompressed size up front.

Examples:
  oxizip deflate a.txt b.txt -o out/
  oxizip inflate a.txt.zz --size 1024
  oxizip info a.txt.zz --json
  oxizip pack Object.class -o Object.class.res
  oxizip resource Object.class.res --size 1024
")]
struct Cli {
    /// Log driver activity (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress files into zlib streams (<name>.zz)
    #[command(alias = "d")]
    Deflate {
        /// Files to compress
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output directory (defaults to each file's directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output buffer size in bytes (defaults to the worst-case bound)
        #[arg(short, long)]
        capacity: Option<usize>,

        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },

    /// Decompress a zlib stream of known decompressed size
    #[command(alias = "x")]
    Inflate {
        /// Compressed file
        file: PathBuf,

        /// Exact decompressed size in bytes
        #[arg(short, long)]
        size: usize,

        /// Output file (defaults to the input name without .zz)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the zlib header of a compressed file
    #[command(alias = "i")]
    Info {
        /// Compressed file
        file: PathBuf,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Wrap a file in a "zip" compressed-resource layer
    Pack {
        /// File to pack
        file: PathBuf,

        /// Output file (defaults to <name>.res)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write big-endian header fields
        #[arg(long)]
        big_endian: bool,
    },

    /// Strip compressed-resource layers from a file
    Resource {
        /// Compressed resource
        file: PathBuf,

        /// Exact size of the fully decompressed resource
        #[arg(short, long)]
        size: u64,

        /// String table holding decompressor names (defaults to "zip" at offset 0)
        #[arg(short, long)]
        names: Option<PathBuf>,

        /// Read big-endian header fields
        #[arg(long)]
        big_endian: bool,

        /// Output file (defaults to the input name without .res)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "oxizip_cli=debug,oxizip_flate=debug,oxizip_resource=debug"
    } else {
        "oxizip_cli=info,oxizip_flate=warn,oxizip_resource=warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Deflate {
            files,
            output,
            capacity,
            quiet,
        } => cmd_deflate(&files, output.as_deref(), capacity, !quiet),
        Commands::Inflate { file, size, output } => cmd_inflate(&file, size, output.as_deref()),
        Commands::Info { file, json } => cmd_info(&file, json),
        Commands::Pack {
            file,
            output,
            big_endian,
        } => cmd_pack(&file, output.as_deref(), big_endian),
        Commands::Resource {
            file,
            size,
            names,
            big_endian,
            output,
        } => cmd_resource(&file, size, names.as_deref(), big_endian, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
