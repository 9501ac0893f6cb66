//! In-place processing operations for [`Samples`].

use std::cmp::Ordering;

use super::statistics::mean_f64;
use super::traits::{AudioProcessing, AudioStatistics};
use crate::{AudioSample, AudioSampleResult, ParameterError, Samples};

impl<T: AudioSample> AudioProcessing<T> for Samples<T> {
    fn clip(&mut self, min: T, max: T) -> AudioSampleResult<()> {
        if min > max {
            return Err(ParameterError::invalid_value(
                "clip_range",
                format!("min ({min}) must not exceed max ({max})"),
            )
            .into());
        }
        for sample in self.iter_mut() {
            if *sample < min {
                *sample = min;
            } else if *sample > max {
                *sample = max;
            }
        }
        Ok(())
    }

    fn normalize(&mut self) {
        let peak = self.peak();
        if peak.partial_cmp(&T::zero()) != Some(Ordering::Greater) {
            return;
        }
        for sample in self.iter_mut() {
            *sample = *sample / peak;
        }
    }

    fn remove_dc(&mut self) {
        if self.is_empty() {
            return;
        }
        let mean = mean_f64(self);
        for sample in self.iter_mut() {
            *sample = T::from_f64(sample.as_f64() - mean);
        }
    }
}
