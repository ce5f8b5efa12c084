use super::{Float, Sample};
use super::ToneGenerator;

use log::debug;

/** Traditional tone generator, evaluating exp(j * (n * rate + phi)) for every sample.
 *
 * Costs a sin/cos pair per sample and loses precision as n * rate grows. It is
 * kept as the baseline the flying phasor is compared against.
 */
pub struct LegacyToneGenerator {
    radians_per_sample: Float,
    phi: Float,
    sample_counter: u64,
}

impl LegacyToneGenerator {
    pub fn new(radians_per_sample: Float, phi: Float) -> LegacyToneGenerator {
        debug!("Legacy: new rate={}, phi={}", radians_per_sample, phi);
        LegacyToneGenerator{radians_per_sample, phi, sample_counter: 0}
    }
}

impl Default for LegacyToneGenerator {
    fn default() -> Self {
        LegacyToneGenerator::new(0.0, 0.0)
    }
}

impl ToneGenerator for LegacyToneGenerator {
    fn get_sample(&mut self) -> Sample {
        let sample = self.peek_next_sample();
        self.sample_counter = self.sample_counter.wrapping_add(1);
        sample
    }

    fn peek_next_sample(&self) -> Sample {
        let theta = self.sample_counter as Float * self.radians_per_sample + self.phi;
        Sample::new(0.0, theta).exp()
    }

    fn reset(&mut self, radians_per_sample: Float, phi: Float) {
        *self = LegacyToneGenerator::new(radians_per_sample, phi);
    }

    fn get_sample_count(&self) -> u64 {
        self.sample_counter
    }
}

// ----------------------------------------------
//                  Unit tests
// ----------------------------------------------
