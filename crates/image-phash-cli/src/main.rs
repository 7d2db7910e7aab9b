use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use image_phash_core::logging::{init_logger, log_hash_error, LOG_ENV_VAR};
use image_phash_core::{Config, Hasher, LogLevel, ResizeFilter};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, LevelFilter};

#[derive(Parser)]
#[command(name = "image-phash")]
#[command(about = "Compute DCT perceptual hashes of images")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Resampling filter used when shrinking to 32x32
    #[arg(long, value_enum, global = true)]
    filter: Option<FilterArg>,

    /// Write logs to rotating files in this directory
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash image files and print one `<hash>  <path>` line each
    Hash {
        /// Image files to hash
        #[arg(required_unless_present = "stdin")]
        files: Vec<PathBuf>,

        /// Hash raw image bytes read from standard input
        #[arg(long, conflicts_with = "files")]
        stdin: bool,
    },

    /// Generate default configuration file
    GenerateConfig {
        /// Path to save configuration file
        #[arg(default_value = "image-phash.json")]
        path: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FilterArg {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<FilterArg> for ResizeFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::Nearest => ResizeFilter::Nearest,
            FilterArg::Triangle => ResizeFilter::Triangle,
            FilterArg::CatmullRom => ResizeFilter::CatmullRom,
            FilterArg::Gaussian => ResizeFilter::Gaussian,
            FilterArg::Lanczos3 => ResizeFilter::Lanczos3,
        }
    }
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    // Set up configuration
    let mut config = if let Some(config_path) = &cli.config {
        Config::from_file(config_path)?
    } else {
        Config::default()
    };

    // Override config with command line arguments
    if let Some(filter) = cli.filter {
        config.resize_filter = filter.into();
    }
    if cli.log_dir.is_some() {
        config.log_dir = cli.log_dir.clone();
    }
    config.log_level = match cli.verbose {
        0 => config.log_level,
        1 => LogLevel::Debug,
        _ => LogLevel::Trace,
    };

    config.validate()?;
    init_logging(&config)?;

    match cli.command {
        Commands::Hash { files, stdin } => {
            let hasher = Hasher::new(&config);
            debug!("Hashing with {:?}", config.resize_filter);

            if stdin {
                let mut bytes = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut bytes)
                    .context("Failed to read standard input")?;
                let hash = hasher.hash_bytes(&bytes)?;
                println!("{}  -", hash);
                return Ok(());
            }

            let failures = hash_files(&hasher, &files);
            if failures > 0 {
                anyhow::bail!("{} of {} images could not be hashed", failures, files.len());
            }

            Ok(())
        }

        Commands::GenerateConfig { path } => {
            config.save_to_file(&path)?;
            println!("Configuration file generated at: {}", path.display());
            Ok(())
        }
    }
}

/// Hash every file, printing results as they arrive. Returns the failure count.
fn hash_files(hasher: &Hasher, files: &[PathBuf]) -> usize {
    let progress = if files.len() > 1 {
        let bar = ProgressBar::new(files.len() as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        bar
    } else {
        ProgressBar::hidden()
    };

    let mut failures = 0;
    for path in files {
        progress.set_message(path.display().to_string());

        match hasher.hash_file(path) {
            Ok(hash) => progress.suspend(|| println!("{}  {}", hash, path.display())),
            Err(e) => {
                failures += 1;
                log_hash_error(&path.display().to_string(), &e);
                progress.suspend(|| eprintln!("error: {}: {}", path.display(), e));
            }
        }

        progress.inc(1);
    }
    progress.finish_and_clear();

    info!("Hashed {} images, {} failed", files.len() - failures, failures);
    failures
}

fn init_logging(config: &Config) -> anyhow::Result<()> {
    let level = LevelFilter::from(config.log_level);

    match &config.log_dir {
        Some(dir) => init_logger(dir, level)
            .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?,
        None => env_logger::Builder::new()
            .filter_level(level)
            .parse_env(LOG_ENV_VAR)
            .init(),
    }

    Ok(())
}
