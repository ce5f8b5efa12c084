/*
 * Recursive complex tone generator.
 *
 * Instead of evaluating cos(theta) + j*sin(theta) for every sample, the
 * phase is advanced by multiplying a unit phasor with a constant unit
 * rotation. Trig functions are only needed when the rate and initial phase
 * are set (construction or reset).
 *
 * Repeated multiplication lets rounding errors pile up, so the magnitude of
 * the phasor slowly drifts away from 1. Every second sample the phasor is
 * scaled back towards unity. The exact correction would be 1 / |p|, which
 * needs a square root. Since |p|^2 = 1 + e with e tiny, the first order
 * Taylor expansion of 1 / sqrt(1 + e) around 0 is good enough:
 *
 *     d = 1 - (re^2 + im^2 - 1) / 2
 *
 * The correction is a real scalar multiply. Doing it every second sample
 * pushes the residual modulation out to Nyquist.
 */

use super::{Float, Sample};
use super::ToneGenerator;

use log::debug;

pub struct FlyingPhasorToneGenerator {
    rate: Sample,        // Constant rotation per sample
    phasor: Sample,      // Value of the next sample
    sample_counter: u64, // Samples produced since construction or reset
}

impl FlyingPhasorToneGenerator {
    /** Create a generator advancing by radians_per_sample, starting at phase phi.
     *
     * Any finite input is valid. A rate of 0.0 produces a constant (DC) phasor.
     * Non-finite inputs propagate NaN through the generated samples.
     */
    pub fn new(radians_per_sample: Float, phi: Float) -> FlyingPhasorToneGenerator {
        debug!("FlyingPhasor: new rate={}, phi={}", radians_per_sample, phi);
        let rate = Sample::from_polar(1.0, radians_per_sample);
        let phasor = Sample::from_polar(1.0, phi);
        FlyingPhasorToneGenerator{rate, phasor, sample_counter: 0}
    }

    /** Rotate the phasor by one sample, renormalizing every second sample. */
    fn advance(&mut self) {
        self.phasor *= self.rate;

        // The counter is u64, overflow is not reachable in practice.
        self.sample_counter = self.sample_counter.wrapping_add(1);
        if self.sample_counter & 0x1 == 0x1 {
            let d = 1.0 - (self.phasor.re * self.phasor.re + self.phasor.im * self.phasor.im - 1.0) / 2.0;
            self.phasor *= d;
        }
    }
}

impl Default for FlyingPhasorToneGenerator {
    fn default() -> Self {
        FlyingPhasorToneGenerator::new(0.0, 0.0)
    }
}

impl ToneGenerator for FlyingPhasorToneGenerator {
    fn get_sample(&mut self) -> Sample {
        // Emit before rotating, so that sample 0 is exactly e^(j*phi).
        let sample = self.phasor;
        self.advance();
        sample
    }

    fn peek_next_sample(&self) -> Sample {
        self.phasor
    }

    fn reset(&mut self, radians_per_sample: Float, phi: Float) {
        *self = FlyingPhasorToneGenerator::new(radians_per_sample, phi);
    }

    fn get_sample_count(&self) -> u64 {
        self.sample_counter
    }
}

/** Endless stream of samples, equivalent to calling get_sample() repeatedly. */
impl Iterator for FlyingPhasorToneGenerator {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        Some(self.get_sample())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

// ----------------------------------------------
//                  Unit tests
// ----------------------------------------------
