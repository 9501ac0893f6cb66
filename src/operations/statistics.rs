//! Statistical analysis operations for [`Samples`].

use super::traits::AudioStatistics;
use crate::{AudioSample, Samples};

/// Sums `values` without losing low-order bits to cancellation.
///
/// Keeps a list of non-overlapping partial sums (Shewchuk's algorithm) and adds
/// them together at the end.
pub(crate) fn exact_sum(values: impl IntoIterator<Item = f64>) -> f64 {
    let mut partials: Vec<f64> = Vec::new();
    for mut x in values {
        let mut kept = 0;
        for i in 0..partials.len() {
            let p = partials[i];
            let sum = p + x;
            let err = if x.abs() < p.abs() {
                x - (sum - p)
            } else {
                p - (sum - x)
            };
            if err != 0.0 {
                partials[kept] = err;
                kept += 1;
            }
            x = sum;
        }
        partials.truncate(kept);
        partials.push(x);
    }
    partials.iter().sum()
}

/// Mean of the raw sample values in `f64`. Zero when `samples` is empty.
pub(crate) fn mean_f64<T: AudioSample>(samples: &[T]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    exact_sum(samples.iter().map(|s| s.as_f64())) / samples.len() as f64
}

impl<T: AudioSample> AudioStatistics<T> for Samples<T> {
    fn min(&self) -> T {
        if self.is_empty() {
            return T::zero();
        }
        self.iter()
            .fold(T::max_value(), |min, &v| if v < min { v } else { min })
    }

    fn max(&self) -> T {
        if self.is_empty() {
            return T::zero();
        }
        self.iter()
            .fold(T::min_value(), |max, &v| if v > max { v } else { max })
    }

    fn peak(&self) -> T {
        let max = AudioStatistics::max(self).magnitude();
        let min = AudioStatistics::min(self).magnitude();
        if max < min { min } else { max }
    }

    fn mean(&self) -> T {
        T::from_f64(mean_f64(self))
    }

    fn rms(&self) -> T {
        if self.is_empty() {
            return T::zero();
        }
        let squares: f64 = self.iter().map(|s| s.as_f64() * s.as_f64()).sum();
        T::from_f64((squares / self.len() as f64).sqrt())
    }
}
