use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::scalar::Scalar;
use crate::core::types::Sample;

/// Finite extremes of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    fn extend(range: &mut Option<(OrderedFloat<f64>, OrderedFloat<f64>)>, value: f64) {
        if !value.is_finite() {
            return;
        }
        let value = OrderedFloat(value);
        *range = Some(match *range {
            Some((min, max)) => (min.min(value), max.max(value)),
            None => (value, value),
        });
    }
}

/// Extremes of one series snapshot, tracked per axis.
///
/// Bounds are never cached: the series can lose samples at the front and gain
/// samples at the back between two passes, so every pass derives them again.
/// An axis is `None` when it holds no finite value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x: Option<AxisRange>,
    pub y: Option<AxisRange>,
}

impl Bounds {
    /// Computes bounds in a single pass. Non-finite coordinates are skipped
    /// on their own axis only.
    #[must_use]
    pub fn from_samples<S: Scalar>(samples: &[Sample<S>]) -> Self {
        let mut x_range = None;
        let mut y_range = None;

        for sample in samples {
            let (x, y) = sample.to_f64_pair();
            AxisRange::extend(&mut x_range, x);
            AxisRange::extend(&mut y_range, y);
        }

        let finish = |range: Option<(OrderedFloat<f64>, OrderedFloat<f64>)>| {
            range.map(|(min, max)| AxisRange {
                min: min.0,
                max: max.0,
            })
        };
        Self {
            x: finish(x_range),
            y: finish(y_range),
        }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.x.is_none() && self.y.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::{AxisRange, Bounds};
    use crate::core::Sample;

    #[test]
    fn empty_snapshot_has_no_bounds() {
        let bounds = Bounds::from_samples::<f64>(&[]);
        assert!(bounds.is_empty());
        assert_eq!(bounds, Bounds::default());
    }

    #[test]
    fn bounds_cover_every_sample() {
        let samples = [
            Sample::new(3, -2),
            Sample::new(-1, 8),
            Sample::new(10, 4),
        ];
        let bounds = Bounds::from_samples(&samples);
        let x = bounds.x.expect("x range");
        let y = bounds.y.expect("y range");
        assert_eq!(x, AxisRange { min: -1.0, max: 10.0 });
        assert_eq!(y, AxisRange { min: -2.0, max: 8.0 });
        assert_eq!(x.span(), 11.0);
        assert_eq!(y.span(), 10.0);
    }

    #[test]
    fn non_finite_values_are_skipped() {
        let samples = [
            Sample::new(f64::NAN, 1.0),
            Sample::new(2.0, f64::INFINITY),
            Sample::new(4.0, 3.0),
        ];
        let bounds = Bounds::from_samples(&samples);
        assert_eq!(bounds.x, Some(AxisRange { min: 2.0, max: 4.0 }));
        assert_eq!(bounds.y, Some(AxisRange { min: 1.0, max: 3.0 }));
    }

    #[test]
    fn all_nan_axis_leaves_the_other_axis_intact() {
        let samples = [Sample::new(f64::NAN, 1.0), Sample::new(f64::NAN, 2.0)];
        let bounds = Bounds::from_samples(&samples);
        assert_eq!(bounds.x, None);
        assert_eq!(bounds.y, Some(AxisRange { min: 1.0, max: 2.0 }));
        assert!(!bounds.is_empty());
    }
}
