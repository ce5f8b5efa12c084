extern crate num;

pub mod error;
pub mod flying_phasor;
pub mod legacy_tone;
pub mod stream;
pub mod tone_generator;

#[cfg(test)]
mod test_utils;

pub use error::PhasorError;
pub use flying_phasor::FlyingPhasorToneGenerator;
pub use legacy_tone::LegacyToneGenerator;
pub use stream::{StreamConfig, StreamFormat};
pub use tone_generator::ToneGenerator;

/** Precision type used for all generator math. */
pub type Float = f64;

/** A single complex sample of a generated tone. */
pub type Sample = num::complex::Complex<Float>;
