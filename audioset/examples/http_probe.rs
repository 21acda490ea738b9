//! Inspect or download a remote AudioSet record over HTTP
//!
//! ```text
//! cargo run --features http --example http_probe -- info https://host/bal_train00.dat
//! cargo run --features http --example http_probe -- fetch https://host/bal_train00.dat --clips 0:3
//! ```

use audioset::{active_classes, parse_range, Codec, DenseMatrix, HttpRecord};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "AudioSet HTTP probe - inspect remote AudioSet records using range requests")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the remote header without downloading the record
    Info {
        /// Remote URL of the record file
        url: String,
    },
    /// Download and decode the record
    Fetch {
        /// Remote URL of the record file
        url: String,

        /// Clip range to print (format: start:end)
        #[arg(long)]
        clips: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let start_time = std::time::Instant::now();

    match &cli.command {
        Commands::Info { url } => handle_info(url).await?,
        Commands::Fetch { url, clips } => handle_fetch(url, clips.as_deref()).await?,
    }

    println!("Completed in {:.2?}", start_time.elapsed());
    Ok(())
}

async fn handle_info(url: &str) -> audioset::Result<()> {
    let record = HttpRecord::new(url).await?;
    let header = record.header();

    println!("Remote record:");
    println!("  URL: {}", record.url());
    println!("  Clips: {}", header.clip_count);
    println!("  Samples per clip: {}", header.sample_count);
    println!("  Label classes: {}", header.label_count);
    println!("  Record size: {} bytes", header.record_size()?);
    Ok(())
}

async fn handle_fetch(url: &str, clips: Option<&str>) -> audioset::Result<()> {
    let record = HttpRecord::new(url).await?;
    let (waveform, labels) = record.fetch(&Codec::default()).await?;

    println!(
        "Fetched {} clips x {} samples, {} classes",
        waveform.nrows(),
        waveform.ncols(),
        labels.ncols()
    );

    if let Some(clips) = clips {
        let range = parse_range(clips)?;
        for clip in range.start..range.end.min(labels.nrows()) {
            if let Some(flags) = labels.row(clip) {
                let active: Vec<usize> = active_classes(flags).collect();
                println!("  clip {clip}: classes {active:?}");
            }
        }
    }
    Ok(())
}
