//! Inspect, verify and convert AudioSet record files
//!
//! ```text
//! cargo run --features cli --example cli -- info bal_train*.dat --json
//! cargo run --features cli --example cli -- verify bal_train*.dat
//! cargo run --features cli --example cli -- dump bal_train00.dat --clips 0:4
//! cargo run --features cli --example cli -- convert bal_train00.dat bal_train00.dat.gz
//! ```

use audioset::{
    active_classes, parse_range, peak_amplitude, AudioSetFile, AudioSetHeader, Codec,
    CodecConfig, DenseMatrix, ScaleMode,
};
use clap::{Parser, Subcommand, ValueEnum};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "AudioSet CLI - inspect, verify and convert AudioSet record files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show header information
    Info {
        /// Record files (.gz files are decompressed)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Print one JSON object per file
        #[arg(long)]
        json: bool,
    },
    /// Decode every file completely and report failures
    Verify {
        /// Record files (.gz files are decompressed)
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Print active classes and peak amplitude per clip
    Dump {
        /// Record file
        file: PathBuf,

        /// Clip range (format: start:end, or a single index)
        #[arg(long, default_value = "0")]
        clips: String,
    },
    /// Re-encode a record, e.g. to compress it
    Convert {
        /// Source record file
        input: PathBuf,

        /// Destination record file (.gz to compress)
        output: PathBuf,

        /// How to interpret decoded amplitudes when re-encoding
        #[arg(long, value_enum, default_value_t = Scale::Normalized)]
        scale: Scale,

        /// JSON codec configuration file; overrides --scale
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Scale {
    Auto,
    Normalized,
    Raw,
}

impl From<Scale> for ScaleMode {
    fn from(scale: Scale) -> Self {
        match scale {
            Scale::Auto => ScaleMode::Auto,
            Scale::Normalized => ScaleMode::Normalized,
            Scale::Raw => ScaleMode::Raw,
        }
    }
}

#[derive(serde::Serialize)]
struct InfoReport {
    path: String,
    header: AudioSetHeader,
    label_bytes_per_clip: usize,
    record_size: usize,
    duration_secs: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let start_time = std::time::Instant::now();

    match &cli.command {
        Commands::Info { files, json } => handle_info(files, *json)?,
        Commands::Verify { files } => {
            let failures = handle_verify(files);
            if failures > 0 {
                return Err(format!("{failures} of {} files failed verification", files.len()).into());
            }
        }
        Commands::Dump { file, clips } => handle_dump(file, clips)?,
        Commands::Convert {
            input,
            output,
            scale,
            config,
        } => handle_convert(input, output, *scale, config.as_deref())?,
    }

    tracing::info!("completed in {:.2?}", start_time.elapsed());
    Ok(())
}

fn handle_info(files: &[PathBuf], json: bool) -> audioset::Result<()> {
    for path in files {
        let file = AudioSetFile::open(path)?;
        let header = file.header;
        let report = InfoReport {
            path: path.display().to_string(),
            header,
            label_bytes_per_clip: header.byte_count(),
            record_size: header.record_size()?,
            duration_secs: header.duration_secs(),
        };

        if json {
            println!("{}", serde_json::to_string(&report)?);
            continue;
        }

        println!("{}:", report.path);
        println!("  Clips: {}", header.clip_count);
        println!(
            "  Samples per clip: {} ({:.2}s at 16 kHz)",
            header.sample_count, report.duration_secs
        );
        println!("  Label classes: {}", header.label_count);
        println!("  Label bytes per clip: {}", report.label_bytes_per_clip);
        println!("  Record size: {} bytes", report.record_size);
    }
    Ok(())
}

/// Verify files in parallel, one file handle per task. Returns the failure count.
fn handle_verify(files: &[PathBuf]) -> usize {
    let results: Vec<(&PathBuf, audioset::Result<String>)> =
        files.par_iter().map(|path| (path, verify_one(path))).collect();

    let mut failures = 0;
    for (path, result) in results {
        match result {
            Ok(summary) => println!("OK    {}: {summary}", path.display()),
            Err(err) => {
                failures += 1;
                println!("FAIL  {}: {err}", path.display());
            }
        }
    }
    failures
}

fn verify_one(path: &Path) -> audioset::Result<String> {
    let header = AudioSetFile::read_header(path)?;

    if !AudioSetFile::is_compressed(path) {
        let on_disk = std::fs::metadata(path)?.len();
        let expected = header.record_size()? as u64;
        if on_disk > expected {
            return Err(audioset::AudioSetError::TrailingBytes.into());
        }
    }

    let (waveform, labels) = AudioSetFile::read(path)?;
    let positives: i64 = labels.as_slice().iter().map(|&l| l as i64).sum();

    Ok(format!(
        "{} clips x {} samples, {} positive labels",
        waveform.nrows(),
        waveform.ncols(),
        positives
    ))
}

fn handle_dump(path: &Path, clips: &str) -> audioset::Result<()> {
    let range = parse_range(clips)?;
    let (waveform, labels) = AudioSetFile::read(path)?;
    let end = range.end.min(waveform.nrows());

    for clip in range.start..end {
        let (Some(samples), Some(flags)) = (waveform.row(clip), labels.row(clip)) else {
            break;
        };
        let peak = peak_amplitude(samples);
        let active: Vec<usize> = active_classes(flags).collect();

        println!("clip {clip}: peak {peak:.4}, classes {active:?}");
    }
    Ok(())
}

fn handle_convert(
    input: &Path,
    output: &Path,
    scale: Scale,
    config: Option<&Path>,
) -> audioset::Result<()> {
    let config = match config {
        Some(path) => CodecConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => CodecConfig::default().with_scale_mode(scale.into()),
    };
    tracing::debug!(?config, "converting");

    let (waveform, labels) = AudioSetFile::read(input)?;
    let codec = Codec::new(config);

    AudioSetFile::write_with(output, &codec, &waveform, &labels)?;
    println!(
        "Converted {} clips: {} -> {}",
        waveform.nrows(),
        input.display(),
        output.display()
    );
    Ok(())
}
