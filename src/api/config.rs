use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{PlotError, PlotResult};
use crate::render::Color;

/// Public dashboard bootstrap configuration.
///
/// Serializable so host applications can persist/load dashboard setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub viewport: Viewport,
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    #[serde(default = "default_clear_color")]
    pub clear_color: Color,
}

impl DashboardConfig {
    /// Creates a config with a ~60 Hz tick and black background.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            tick_interval_ms: default_tick_interval_ms(),
            clear_color: default_clear_color(),
        }
    }

    /// Sets the frame loop tick interval, truncated to whole milliseconds.
    #[must_use]
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self
    }

    #[must_use]
    pub fn with_clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn validate(&self) -> PlotResult<()> {
        if !self.viewport.is_valid() {
            return Err(PlotError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.clear_color.validate()
    }

    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> PlotResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn default_tick_interval_ms() -> u64 {
    16
}

fn default_clear_color() -> Color {
    Color::BLACK
}

/// How a plot element emits its point buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DrawMode {
    /// One marker per sample.
    #[default]
    Points,
    /// Samples joined in series order.
    Polyline,
    PointsAndPolyline,
}

/// Visual style of one plot element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotStyle {
    #[serde(default = "default_plot_color")]
    pub color: Color,
    #[serde(default = "default_point_radius")]
    pub point_radius: f64,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    #[serde(default)]
    pub draw_mode: DrawMode,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            color: default_plot_color(),
            point_radius: default_point_radius(),
            stroke_width: default_stroke_width(),
            draw_mode: DrawMode::default(),
        }
    }
}

impl PlotStyle {
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_point_radius(mut self, radius: f64) -> Self {
        self.point_radius = radius;
        self
    }

    #[must_use]
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    #[must_use]
    pub fn with_draw_mode(mut self, mode: DrawMode) -> Self {
        self.draw_mode = mode;
        self
    }

    pub fn validate(&self) -> PlotResult<()> {
        if !self.point_radius.is_finite() || self.point_radius <= 0.0 {
            return Err(PlotError::InvalidConfig(
                "point radius must be finite and > 0".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(PlotError::InvalidConfig(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

fn default_plot_color() -> Color {
    Color::WHITE
}

fn default_point_radius() -> f64 {
    1.0
}

fn default_stroke_width() -> f64 {
    1.0
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{DashboardConfig, DrawMode, PlotStyle};
    use crate::core::Viewport;
    use crate::error::PlotError;

    #[test]
    fn config_json_fills_defaults() {
        let config = DashboardConfig::from_json_str(r#"{"viewport":{"width":640,"height":480}}"#)
            .expect("parse config");
        assert_eq!(config, DashboardConfig::new(Viewport::new(640, 480)));
        assert_eq!(config.tick_interval(), Duration::from_millis(16));
    }

    #[test]
    fn config_json_rejects_zero_viewport() {
        let err = DashboardConfig::from_json_str(r#"{"viewport":{"width":0,"height":480}}"#)
            .expect_err("zero width must fail");
        assert!(matches!(err, PlotError::InvalidViewport { width: 0, .. }));
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = DashboardConfig::new(Viewport::new(1000, 1000))
            .with_tick_interval(Duration::from_millis(33));
        let json = config.to_json_pretty().expect("serialize");
        let parsed = DashboardConfig::from_json_str(&json).expect("parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn style_validation_rejects_non_positive_sizes() {
        assert!(PlotStyle::default().validate().is_ok());
        assert!(PlotStyle::default().with_point_radius(0.0).validate().is_err());
        assert!(
            PlotStyle::default()
                .with_draw_mode(DrawMode::Polyline)
                .with_stroke_width(f64::NAN)
                .validate()
                .is_err()
        );
    }
}
