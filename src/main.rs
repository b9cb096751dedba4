use anyhow::{Context, Result};
use clap::Parser;
use embedfs::{Config, DEFAULT_MODULE};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Embed files and directories into Rust source as a read-only virtual filesystem
#[derive(Parser, Debug)]
#[command(name = "embedfs", version, about)]
struct Args {
    /// Output file, else stdout
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Name of the generated module
    #[arg(long = "module", default_value = DEFAULT_MODULE)]
    module: String,

    /// Prefix to strip from file names
    #[arg(long, default_value = "")]
    prefix: String,

    /// Regexp for files to ignore (for example \.DS_Store)
    #[arg(long)]
    ignore: Option<String>,

    /// Regexp for files to include; only matching files are embedded
    #[arg(long)]
    include: Option<String>,

    /// Unix timestamp to use as the modification time of every file
    #[arg(long)]
    modtime: Option<String>,

    /// Don't export the generated module and accessors
    #[arg(long)]
    private: bool,

    /// Store files without compression
    #[arg(long = "no-compress")]
    no_compress: bool,

    /// Log more (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Files or directories to embed
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let invocation = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let mut config = Config::new(args.files)
        .module(args.module)
        .prefix(args.prefix)
        .private(args.private)
        .no_compression(args.no_compress)
        .invocation(invocation);
    config.ignore = args.ignore;
    config.include = args.include;
    config.mod_time = args.modtime;
    config.output = args.output;

    let source = embedfs::generate(&config)?;

    match &config.output {
        Some(path) => fs::write(path, &source)
            .with_context(|| format!("Failed to write output file: {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(&source)
                .and_then(|_| stdout.flush())
                .context("Failed to write to stdout")?;
        }
    }

    info!(bytes = source.len(), "generated source written");
    Ok(())
}
