use serde::{Deserialize, Serialize};

use crate::core::scalar::Scalar;

/// Pixel size of a rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    #[must_use]
    pub fn size(self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }
}

/// Width/height pair in surface units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// 2-D coordinate in surface units.
///
/// Whether the origin is bottom-left or top-left depends on where the value
/// came from; `LayoutFrame` documents which convention each accessor uses.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One producer sample. Its place in the series is its only identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sample<S> {
    pub x: S,
    pub y: S,
}

impl<S> Sample<S> {
    #[must_use]
    pub const fn new(x: S, y: S) -> Self {
        Self { x, y }
    }
}

impl<S: Scalar> Sample<S> {
    #[must_use]
    pub fn to_f64_pair(self) -> (f64, f64) {
        (self.x.to_f64(), self.y.to_f64())
    }
}

impl<S> From<(S, S)> for Sample<S> {
    fn from((x, y): (S, S)) -> Self {
        Self { x, y }
    }
}

/// Projected sample in top-left-origin surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Horizontal mapping policy of a plot element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScalingPolicy {
    /// Maps x against `[0, max_x]`.
    #[default]
    FitToOrigin,
    /// Maps x against `[min_x, max_x]`.
    FitToMinimum,
}
