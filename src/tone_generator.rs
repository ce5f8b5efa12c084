use super::{Float, Sample};
use super::PhasorError;

/** Common interface of the complex tone generators.
 *
 * Implementors supply single-sample access, peeking, reset and the sample
 * count. The batch, scaled and accumulating deliveries are built on top of
 * get_sample(), so mixing single-sample and batch calls yields exactly the
 * same sequence as either style alone.
 *
 * Batch calls write one sample per buffer element; the buffer length is the
 * number of samples requested.
 */
pub trait ToneGenerator {
    /** Return the current sample and advance by one sample. */
    fn get_sample(&mut self) -> Sample;

    /** Return what the next get_sample() call would return, without advancing. */
    fn peek_next_sample(&self) -> Sample;

    /** Restart with a new rate and initial phase, clearing the sample count. */
    fn reset(&mut self, radians_per_sample: Float, phi: Float);

    /** Number of samples produced since construction or the last reset. */
    fn get_sample_count(&self) -> u64;

    /** Fill the buffer with consecutive samples. */
    fn get_samples(&mut self, buffer: &mut [Sample]) {
        for sample in buffer.iter_mut() {
            *sample = self.get_sample();
        }
    }

    /** Fill the buffer with samples multiplied by a fixed magnitude. */
    fn get_samples_scaled(&mut self, buffer: &mut [Sample], magnitude: Float) {
        for sample in buffer.iter_mut() {
            *sample = self.get_sample() * magnitude;
        }
    }

    /** Fill the buffer with samples multiplied by a per-sample envelope.
     *
     * The envelope must hold at least as many values as the buffer. If it
     * doesn't, nothing is generated and the generator state is unchanged.
     */
    fn get_samples_enveloped(&mut self, buffer: &mut [Sample], envelope: &[Float]) -> Result<(), PhasorError> {
        check_envelope(buffer.len(), envelope.len())?;
        for (sample, magnitude) in buffer.iter_mut().zip(envelope) {
            *sample = self.get_sample() * *magnitude;
        }
        Ok(())
    }

    /** Add samples into the existing buffer contents. */
    fn accum_samples(&mut self, buffer: &mut [Sample]) {
        for sample in buffer.iter_mut() {
            *sample += self.get_sample();
        }
    }

    /** Add samples multiplied by a fixed magnitude into the buffer. */
    fn accum_samples_scaled(&mut self, buffer: &mut [Sample], magnitude: Float) {
        for sample in buffer.iter_mut() {
            *sample += self.get_sample() * magnitude;
        }
    }

    /** Add samples multiplied by a per-sample envelope into the buffer.
     *
     * Same envelope length rule as get_samples_enveloped().
     */
    fn accum_samples_enveloped(&mut self, buffer: &mut [Sample], envelope: &[Float]) -> Result<(), PhasorError> {
        check_envelope(buffer.len(), envelope.len())?;
        for (sample, magnitude) in buffer.iter_mut().zip(envelope) {
            *sample += self.get_sample() * *magnitude;
        }
        Ok(())
    }
}

fn check_envelope(requested: usize, available: usize) -> Result<(), PhasorError> {
    if available < requested {
        return Err(PhasorError::EnvelopeTooShort{requested, available});
    }
    Ok(())
}

// ----------------------------------------------
//                  Unit tests
// ----------------------------------------------
