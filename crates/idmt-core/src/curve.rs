//! IDMT curve generation.
//!
//! Curves use the IEC Standard Inverse characteristic
//! `t = 0.14 / ((I/Is)^0.02 - 1) * TMS` sampled over multiples of the pickup
//! current. Multiples at or below 1 are never emitted: the relay does not
//! operate at pickup, the formula divides by zero at exactly 1 and turns
//! negative below it.

use crate::constants::{
    DEFAULT_RANGE_END, DEFAULT_RANGE_START, DEFAULT_RANGE_STEP, IEC_SI_ALPHA, IEC_SI_K,
    MAX_RANGE_POINTS, RANGE_EPSILON,
};
use crate::error::RangeError;

/// Closed sampling grid `start, start + step, ... <= end` over the multiple axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleRange {
    start: f64,
    end: f64,
    step: f64,
}

impl Default for SampleRange {
    fn default() -> Self {
        Self {
            start: DEFAULT_RANGE_START,
            end: DEFAULT_RANGE_END,
            step: DEFAULT_RANGE_STEP,
        }
    }
}

impl SampleRange {
    pub fn new(start: f64, end: f64, step: f64) -> Result<Self, RangeError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(RangeError::NonFiniteBound { start, end });
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(RangeError::InvalidStep(step));
        }
        if end < start {
            return Err(RangeError::Reversed { start, end });
        }
        let count = point_count(start, end, step);
        if !count.is_finite() || count > MAX_RANGE_POINTS as f64 {
            return Err(RangeError::TooManyPoints {
                count,
                max: MAX_RANGE_POINTS,
            });
        }
        Ok(Self { start, end, step })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of grid points, `floor((end - start) / step) + 1`.
    pub fn len(&self) -> usize {
        point_count(self.start, self.end, self.step).min(MAX_RANGE_POINTS as f64) as usize
    }

    /// Never true; a valid range always holds at least `start`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Grid points in ascending order. Computed by index so the end point is
    /// not lost to accumulated rounding.
    pub fn points(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).map(move |i| self.start + i as f64 * self.step)
    }
}

fn point_count(start: f64, end: f64, step: f64) -> f64 {
    ((end - start) / step + RANGE_EPSILON).floor() + 1.0
}

/// A single point on a relay curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveSample {
    pub multiple: f64,
    pub operating_time: f64,
}

/// Samples ordered by ascending `multiple`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Curve {
    samples: Vec<CurveSample>,
}

impl Curve {
    pub fn samples(&self) -> &[CurveSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CurveSample> {
        self.samples.iter()
    }

    /// Sample at a given multiple, if the grid contains it.
    pub fn at_multiple(&self, multiple: f64) -> Option<&CurveSample> {
        self.samples
            .iter()
            .find(|s| (s.multiple - multiple).abs() < RANGE_EPSILON)
    }

    /// Longest operating time on the curve, used to size the time axis.
    pub fn max_time(&self) -> Option<f64> {
        self.samples
            .iter()
            .map(|s| s.operating_time)
            .reduce(f64::max)
    }
}

impl FromIterator<CurveSample> for Curve {
    fn from_iter<I: IntoIterator<Item = CurveSample>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Curve {
    type Item = &'a CurveSample;
    type IntoIter = std::slice::Iter<'a, CurveSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

// Time for TMS = 1 at a given current ratio.
#[inline]
fn standard_inverse(ratio: f64) -> f64 {
    IEC_SI_K / (ratio.powf(IEC_SI_ALPHA) - 1.0)
}

/// Operating time in seconds for a single fault current.
///
/// Returns `0.0` for non-positive inputs and for currents at or below pickup,
/// where the relay does not trip.
pub fn operating_time(fault_current: f64, pickup_current: f64, time_multiplier: f64) -> f64 {
    if !(fault_current > 0.0 && pickup_current > 0.0 && time_multiplier > 0.0) {
        return 0.0;
    }
    let ratio = fault_current / pickup_current;
    if ratio <= 1.0 {
        return 0.0;
    }
    let t = standard_inverse(ratio) * time_multiplier;
    if t.is_finite() {
        t
    } else {
        0.0
    }
}

/// Sample the Standard Inverse curve of one relay over `range`.
///
/// Degenerate settings (non-positive or NaN pickup or multiplier) give an
/// empty curve. Grid points with a ratio at or below 1, or whose time is not
/// finite, are skipped, so a grid lying wholly at or below 1 also gives an
/// empty curve.
pub fn generate_curve(pickup_current: f64, time_multiplier: f64, range: &SampleRange) -> Curve {
    if !(pickup_current > 0.0 && time_multiplier > 0.0) {
        return Curve::default();
    }
    range
        .points()
        .filter_map(|multiple| {
            let current = multiple * pickup_current;
            // huge pickups overflow the current; the ratio is still the multiple
            let ratio = if current.is_finite() {
                current / pickup_current
            } else {
                multiple
            };
            if !(ratio > 1.0) {
                return None;
            }
            let operating_time = standard_inverse(ratio) * time_multiplier;
            operating_time.is_finite().then_some(CurveSample {
                multiple,
                operating_time,
            })
        })
        .collect()
}

/// [`generate_curve`] over the default `1.0..=15.0` step `0.5` grid.
#[inline]
pub fn generate_default_curve(pickup_current: f64, time_multiplier: f64) -> Curve {
    generate_curve(pickup_current, time_multiplier, &SampleRange::default())
}
