use super::Float;

use std::f64::consts::PI;

/** Check that value lies within desired * (1 +/- ratio). */
pub fn in_tolerance(value: Float, desired: Float, ratio: Float) -> bool {
    let limit_a = desired * (1.0 + ratio);
    let limit_b = desired * (1.0 - ratio);
    let (min, max) = if desired.is_sign_negative() { (limit_a, limit_b) } else { (limit_b, limit_a) };
    min <= value && value <= max
}

/** Angle from a to b, wrapped into (-PI, PI]. */
pub fn delta_angle(angle_a: Float, angle_b: Float) -> Float {
    let mut delta = angle_b - angle_a;
    if delta > PI {
        delta -= 2.0 * PI;
    } else if delta <= -PI {
        delta += 2.0 * PI;
    }
    delta
}

/** Welford online mean and variance, plus the peak deviation from the final mean.
 *
 * Feed it deviations from an expected value (e.g. magnitude - 1.0) rather
 * than the raw values, so the tiny spread keeps its full precision.
 */
pub struct RunningStats {
    count: u64,
    mean: Float,
    m2: Float,
    min: Float,
    max: Float,
}

impl RunningStats {
    pub fn new() -> RunningStats {
        RunningStats{count: 0, mean: 0.0, m2: 0.0, min: Float::MAX, max: Float::MIN}
    }

    pub fn add_sample(&mut self, value: Float) {
        let delta = value - self.mean;
        self.count += 1;
        self.mean += delta / self.count as Float;
        self.m2 += delta * (value - self.mean);

        if value < self.min { self.min = value }
        if value > self.max { self.max = value }
    }

    pub fn mean(&self) -> Float {
        if self.count == 0 { Float::NAN } else { self.mean }
    }

    /** Sample variance (n - 1 denominator). */
    pub fn variance(&self) -> Float {
        if self.count < 2 { Float::NAN } else { self.m2 / (self.count - 1) as Float }
    }

    /** Largest absolute deviation of any sample from the current mean. */
    pub fn peak_abs_dev(&self) -> Float {
        if self.count == 0 { Float::NAN } else { (self.mean - self.min).max(self.max - self.mean) }
    }
}

#[test]
fn test_tolerance_handles_negative_targets() {
    assert!(in_tolerance(-0.5, -0.5, 1e-12));
    assert!(in_tolerance(-0.5000000001, -0.5, 1e-9));
    assert!(!in_tolerance(-0.49, -0.5, 1e-9));
    assert!(!in_tolerance(1.1, 1.0, 0.05));
}

#[test]
fn test_delta_angle_wraps() {
    assert!((delta_angle(3.0, -3.0) - (2.0 * PI - 6.0)).abs() < 1e-15);
    assert!((delta_angle(-3.0, 3.0) + (2.0 * PI - 6.0)).abs() < 1e-15);
    assert_eq!(delta_angle(1.0, 1.5), 0.5);
}

#[test]
fn test_running_stats() {
    let mut stats = RunningStats::new();
    assert!(stats.mean().is_nan());
    for v in &[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
        stats.add_sample(*v);
    }
    assert!((stats.mean() - 5.0).abs() < 1e-12);
    assert!((stats.variance() - 32.0 / 7.0).abs() < 1e-12);
    assert!((stats.peak_abs_dev() - 4.0).abs() < 1e-12);
}

#[test]
fn test_peak_deviation_uses_final_mean() {
    let mut stats = RunningStats::new();
    for v in &[0.0, 10.0, 10.0, 10.0] {
        stats.add_sample(*v);
    }
    assert!((stats.mean() - 7.5).abs() < 1e-12);
    assert!((stats.peak_abs_dev() - 7.5).abs() < 1e-12);
}
