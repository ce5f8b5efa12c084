use flying_phasor::stream;
use flying_phasor::{Float, StreamConfig, StreamFormat};

use clap::Parser;
use flexi_logger::Logger;
use log::info;

use std::io::{self, BufWriter};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "flying_phasor_stream", about = "Stream samples of a complex tone to stdout")]
struct Args {
    /// Phase advance per sample in radians [default: PI/256].
    #[arg(long, allow_negative_numbers = true)]
    rads_per_sample: Option<Float>,

    /// Initial phase in radians [default: 0].
    #[arg(long, allow_negative_numbers = true)]
    phase: Option<Float>,

    /// Samples per chunk [default: 4096].
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Number of chunks to write [default: 1].
    #[arg(long)]
    num_chunks: Option<usize>,

    /// Number of chunks to generate and discard before writing [default: 0].
    #[arg(long)]
    skip_chunks: Option<usize>,

    /// Output format: t32, t64, b32 or b64 [default: t64].
    #[arg(long, value_parser = parse_format)]
    stream_format: Option<StreamFormat>,

    /// Prefix every sample with its index (--include-x=false turns it off).
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    include_x: Option<bool>,

    /// Use the trig-per-sample generator instead of the flying phasor (--legacy=false turns it off).
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    legacy: Option<bool>,

    /// JSON file with stream settings. Command line options take precedence.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the resulting settings to this JSON file.
    #[arg(long)]
    save_config: Option<PathBuf>,
}

impl Args {
    fn apply(&self, config: &mut StreamConfig) {
        if let Some(rate) = self.rads_per_sample { config.rads_per_sample = rate }
        if let Some(phase) = self.phase { config.phase = phase }
        if let Some(size) = self.chunk_size { config.chunk_size = size }
        if let Some(num) = self.num_chunks { config.num_chunks = num }
        if let Some(num) = self.skip_chunks { config.skip_chunks = num }
        if let Some(format) = self.stream_format { config.stream_format = format }
        if let Some(include_x) = self.include_x { config.include_x = include_x }
        if let Some(legacy) = self.legacy { config.legacy = legacy }
    }
}

fn parse_format(s: &str) -> Result<StreamFormat, String> {
    s.parse().map_err(|e: flying_phasor::PhasorError| e.to_string())
}

fn main() -> Result<(), failure::Error> {
    // Logs go to stderr, stdout carries the samples.
    let _logger = Logger::with_env_or_str("warn")
        .start()
        .map_err(|e| failure::format_err!("Failed to start logger: {}", e))?;

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => StreamConfig::load(path)?,
        None => StreamConfig::default(),
    };
    args.apply(&mut config);
    info!("Stream config: {:?}", config);

    if let Some(path) = &args.save_config {
        config.save(path)?;
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    stream::run(&config, &mut out)
}

// ----------------------------------------------
//                  Unit tests
// ----------------------------------------------
