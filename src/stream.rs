use super::{Float, Sample};
use super::{FlyingPhasorToneGenerator, LegacyToneGenerator, ToneGenerator};
use super::PhasorError;

use log::{debug, info};
use serde::{Serialize, Deserialize};

use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::io::prelude::*;
use std::path::Path;
use std::str::FromStr;

/** Output encoding of a sample stream. */
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub enum StreamFormat {
    #[serde(rename = "t32")]
    Text32,
    #[serde(rename = "t64")]
    Text64,
    #[serde(rename = "b32")]
    Bin32,
    #[serde(rename = "b64")]
    Bin64,
}

impl FromStr for StreamFormat {
    type Err = PhasorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "t32" => Ok(StreamFormat::Text32),
            "t64" => Ok(StreamFormat::Text64),
            "b32" => Ok(StreamFormat::Bin32),
            "b64" => Ok(StreamFormat::Bin64),
            _ => Err(PhasorError::InvalidStreamFormat(s.to_string())),
        }
    }
}

impl fmt::Display for StreamFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            StreamFormat::Text32 => "t32",
            StreamFormat::Text64 => "t64",
            StreamFormat::Bin32 => "b32",
            StreamFormat::Bin64 => "b64",
        };
        write!(f, "{}", name)
    }
}

/** Settings of a streaming run. */
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct StreamConfig {
    pub rads_per_sample: Float,
    pub phase: Float,
    pub chunk_size: usize,
    pub num_chunks: usize,
    pub skip_chunks: usize, // Chunks generated and discarded before output starts
    pub stream_format: StreamFormat,
    pub include_x: bool,    // Prefix every sample with its index
    pub legacy: bool,       // Use the trig-per-sample generator
}

impl Default for StreamConfig {
    fn default() -> Self {
        StreamConfig{
            rads_per_sample: std::f64::consts::PI / 256.0,
            phase: 0.0,
            chunk_size: 4096,
            num_chunks: 1,
            skip_chunks: 0,
            stream_format: StreamFormat::Text64,
            include_x: false,
            legacy: false,
        }
    }
}

impl StreamConfig {
    pub fn load<P: AsRef<Path>>(filename: P) -> Result<StreamConfig, failure::Error> {
        let file = File::open(filename.as_ref())?;
        let mut reader = BufReader::new(file);
        let mut serialized = String::new();
        reader.read_to_string(&mut serialized)?;
        let config = serde_json::from_str(&serialized)?;
        info!("Loaded stream config from {}", filename.as_ref().display());
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, filename: P) -> Result<(), failure::Error> {
        let mut file = File::create(filename.as_ref())?;
        let serialized = serde_json::to_string_pretty(&self)?;
        file.write_all(serialized.as_bytes())?;
        info!("Saved stream config to {}", filename.as_ref().display());
        Ok(())
    }
}

/** Write a block of samples in the given format.
 *
 * first_index is the absolute index of samples[0], used when include_x is set.
 */
pub fn write_samples<W: Write>(out: &mut W,
                               format: StreamFormat,
                               first_index: u64,
                               samples: &[Sample],
                               include_x: bool) -> std::io::Result<()> {
    for (i, sample) in samples.iter().enumerate() {
        let x = first_index + i as u64;
        match format {
            StreamFormat::Text32 => {
                if include_x {
                    write!(out, "{} ", x)?;
                }
                writeln!(out, "{:.8e} {:.8e}", sample.re as f32, sample.im as f32)?;
            }
            StreamFormat::Text64 => {
                if include_x {
                    write!(out, "{} ", x)?;
                }
                writeln!(out, "{:.17e} {:.17e}", sample.re, sample.im)?;
            }
            StreamFormat::Bin32 => {
                if include_x {
                    out.write_all(&(x as f32).to_ne_bytes())?;
                }
                out.write_all(&(sample.re as f32).to_ne_bytes())?;
                out.write_all(&(sample.im as f32).to_ne_bytes())?;
            }
            StreamFormat::Bin64 => {
                if include_x {
                    out.write_all(&(x as f64).to_ne_bytes())?;
                }
                out.write_all(&sample.re.to_ne_bytes())?;
                out.write_all(&sample.im.to_ne_bytes())?;
            }
        }
    }
    Ok(())
}

/** Generate the tone described by config and stream it into out. */
pub fn run<W: Write>(config: &StreamConfig, out: &mut W) -> Result<(), failure::Error> {
    info!("Streaming {} x {} samples ({} skipped), rate={}, phase={}, format={}, legacy={}",
        config.num_chunks, config.chunk_size, config.skip_chunks,
        config.rads_per_sample, config.phase, config.stream_format, config.legacy);

    let mut generator: Box<dyn ToneGenerator> = if config.legacy {
        Box::new(LegacyToneGenerator::new(config.rads_per_sample, config.phase))
    } else {
        Box::new(FlyingPhasorToneGenerator::new(config.rads_per_sample, config.phase))
    };

    let mut chunk = vec![Sample::new(0.0, 0.0); config.chunk_size];
    for _ in 0..config.skip_chunks {
        generator.get_samples(&mut chunk);
    }
    for n in 0..config.num_chunks {
        let first_index = generator.get_sample_count();
        generator.get_samples(&mut chunk);
        write_samples(out, config.stream_format, first_index, &chunk, config.include_x)?;
        debug!("Wrote chunk {} starting at sample {}", n, first_index);
    }
    out.flush()?;
    Ok(())
}

// ----------------------------------------------
//                  Unit tests
// ----------------------------------------------
