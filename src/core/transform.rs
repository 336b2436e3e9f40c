#[cfg(feature = "parallel-transform")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::bounds::Bounds;
use crate::core::layout::PlotRect;
use crate::core::plot_state::SeriesSnapshot;
use crate::core::scalar::Scalar;
use crate::core::types::{Sample, ScalingPolicy, ScreenPoint};

/// Minimum snapshot length before the `parallel-transform` path is used.
pub const PARALLEL_THRESHOLD: usize = 16_384;

/// Screen-space points derived from one series snapshot.
///
/// Same length and order as the source snapshot; `revision` names that
/// snapshot. Buffers are rebuilt whole, never patched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PointBuffer {
    points: Vec<ScreenPoint>,
    revision: u64,
}

impl PointBuffer {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn points(&self) -> &[ScreenPoint] {
        &self.points
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Per-axis linear factors derived from one snapshot's bounds.
///
/// A zero or non-finite divisor turns the factor into 0, which collapses that
/// axis onto the anchor. The same rule covers `max_x`, `max_x - min_x` and
/// `max_y`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct AxisMapping {
    x_origin: f64,
    x_factor: f64,
    y_factor: f64,
}

impl AxisMapping {
    fn new(bounds: Bounds, rect: PlotRect, policy: ScalingPolicy) -> Self {
        let (x_origin, x_divisor) = match (bounds.x, policy) {
            (Some(x), ScalingPolicy::FitToOrigin) => (0.0, x.max),
            (Some(x), ScalingPolicy::FitToMinimum) => (x.min, x.span()),
            (None, _) => (0.0, 0.0),
        };
        let y_divisor = bounds.y.map_or(0.0, |y| y.max);

        Self {
            x_origin,
            x_factor: ratio_factor(rect.size.width, x_divisor),
            y_factor: ratio_factor(rect.size.height, y_divisor),
        }
    }

    #[inline]
    fn map(self, sample: (f64, f64), rect: PlotRect) -> ScreenPoint {
        let (x, y) = sample;
        ScreenPoint::new(
            rect.anchor.x + guard_product(x - self.x_origin, self.x_factor),
            rect.anchor.y - guard_product(y, self.y_factor),
        )
    }
}

fn ratio_factor(extent: f64, divisor: f64) -> f64 {
    if divisor == 0.0 || !divisor.is_finite() {
        0.0
    } else {
        extent / divisor
    }
}

// 0 * NaN is NaN; keep non-finite samples visible as such only when the axis
// actually scales.
#[inline]
fn guard_product(offset: f64, factor: f64) -> f64 {
    if factor == 0.0 { 0.0 } else { offset * factor }
}

/// Maps a series snapshot into surface coordinates.
///
/// - `FitToOrigin`: `x' = anchor.x + x / max_x * width`
/// - `FitToMinimum`: `x' = anchor.x + (x - min_x) / (max_x - min_x) * width`
/// - both: `y' = anchor.y - y / max_y * height`
///
/// Pure and recomputed from scratch on each call. An empty snapshot yields an
/// empty buffer without computing bounds.
#[must_use]
pub fn compute<S: Scalar>(
    snapshot: &SeriesSnapshot<S>,
    rect: PlotRect,
    policy: ScalingPolicy,
) -> PointBuffer {
    PointBuffer {
        points: project_samples(snapshot.samples(), rect, policy),
        revision: snapshot.revision(),
    }
}

/// Slice-level form of [`compute`] used by benchmarks and tests.
#[must_use]
pub fn project_samples<S: Scalar>(
    samples: &[Sample<S>],
    rect: PlotRect,
    policy: ScalingPolicy,
) -> Vec<ScreenPoint> {
    if samples.is_empty() {
        return Vec::new();
    }

    let mapping = AxisMapping::new(Bounds::from_samples(samples), rect, policy);

    #[cfg(feature = "parallel-transform")]
    {
        if samples.len() >= PARALLEL_THRESHOLD {
            return samples
                .par_iter()
                .map(|sample| mapping.map(sample.to_f64_pair(), rect))
                .collect();
        }
    }

    samples
        .iter()
        .map(|sample| mapping.map(sample.to_f64_pair(), rect))
        .collect()
}
