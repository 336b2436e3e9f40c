use crate::core::Viewport;
use crate::error::{PlotError, PlotResult};
use crate::render::{Color, PointsPrimitive, PolylinePrimitive, RectPrimitive};

/// Backend-agnostic scene for one dashboard draw pass.
///
/// Backends paint `rects`, then `polylines`, then `points`, each in push order.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub clear_color: Color,
    pub rects: Vec<RectPrimitive>,
    pub polylines: Vec<PolylinePrimitive>,
    pub points: Vec<PointsPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            clear_color: Color::BLACK,
            rects: Vec::new(),
            polylines: Vec::new(),
            points: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_clear_color(mut self, clear_color: Color) -> Self {
        self.clear_color = clear_color;
        self
    }

    pub fn push_rect(&mut self, rect: RectPrimitive) {
        self.rects.push(rect);
    }

    pub fn push_polyline(&mut self, polyline: PolylinePrimitive) {
        self.polylines.push(polyline);
    }

    pub fn push_points(&mut self, points: PointsPrimitive) {
        self.points.push(points);
    }

    /// Checks viewport and primitive styling.
    ///
    /// Point coordinates are not checked: a degenerate series is drawn as it
    /// maps, never rejected.
    pub fn validate(&self) -> PlotResult<()> {
        if !self.viewport.is_valid() {
            return Err(PlotError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        self.clear_color.validate()?;
        for rect in &self.rects {
            rect.validate()?;
        }
        for polyline in &self.polylines {
            polyline.validate()?;
        }
        for points in &self.points {
            points.validate()?;
        }

        Ok(())
    }

    /// Total number of buffer points referenced by this frame.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points
            .iter()
            .map(|points| points.buffer.len())
            .chain(self.polylines.iter().map(|line| line.buffer.len()))
            .sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty() && self.polylines.is_empty() && self.points.is_empty()
    }
}
