use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::PointBuffer;
use crate::error::{PlotError, PlotResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> PlotResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(PlotError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Unconnected markers, one per buffer point.
///
/// The buffer is shared with the element that published it, so emitting a
/// primitive never copies points.
#[derive(Debug, Clone, PartialEq)]
pub struct PointsPrimitive {
    pub buffer: Arc<PointBuffer>,
    pub radius: f64,
    pub color: Color,
}

impl PointsPrimitive {
    #[must_use]
    pub fn new(buffer: Arc<PointBuffer>, radius: f64, color: Color) -> Self {
        Self {
            buffer,
            radius,
            color,
        }
    }

    pub fn validate(&self) -> PlotResult<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(PlotError::InvalidData(
                "point radius must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Buffer points joined in series order.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylinePrimitive {
    pub buffer: Arc<PointBuffer>,
    pub stroke_width: f64,
    pub color: Color,
}

impl PolylinePrimitive {
    #[must_use]
    pub fn new(buffer: Arc<PointBuffer>, stroke_width: f64, color: Color) -> Self {
        Self {
            buffer,
            stroke_width,
            color,
        }
    }

    pub fn validate(&self) -> PlotResult<()> {
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(PlotError::InvalidData(
                "polyline stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Filled rectangle with optional border, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
    pub border_width: f64,
    pub border_color: Color,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color,
            border_width: 0.0,
            border_color: fill_color,
        }
    }

    #[must_use]
    pub fn with_border(mut self, border_width: f64, border_color: Color) -> Self {
        self.border_width = border_width;
        self.border_color = border_color;
        self
    }

    pub fn validate(self) -> PlotResult<()> {
        if !self.x.is_finite()
            || !self.y.is_finite()
            || !self.width.is_finite()
            || !self.height.is_finite()
        {
            return Err(PlotError::InvalidData(
                "rect geometry must be finite".to_owned(),
            ));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(PlotError::InvalidData(
                "rect size must be >= 0".to_owned(),
            ));
        }
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(PlotError::InvalidData(
                "rect border width must be finite and >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()?;
        self.border_color.validate()
    }
}
