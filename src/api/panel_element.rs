use std::any::Any;

use crate::core::{LayoutFrame, Size};
use crate::error::PlotResult;
use crate::render::{Color, RectPrimitive, RenderFrame};

use super::{Element, ElementKind};

/// Static filled rectangle, typically placed behind a plot as its backdrop.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelElement {
    layout: LayoutFrame,
    fill_color: Color,
    border_width: f64,
    border_color: Color,
}

impl PanelElement {
    #[must_use]
    pub fn new(width: f64, height: f64, fill_color: Color) -> Self {
        let mut layout = LayoutFrame::default();
        layout.set_dimensions(Size::new(width, height));
        Self {
            layout,
            fill_color,
            border_width: 0.0,
            border_color: fill_color,
        }
    }

    pub fn with_border(mut self, border_width: f64, border_color: Color) -> PlotResult<Self> {
        RectPrimitive::new(0.0, 0.0, 0.0, 0.0, self.fill_color)
            .with_border(border_width, border_color)
            .validate()?;
        self.border_width = border_width;
        self.border_color = border_color;
        Ok(self)
    }

    #[must_use]
    pub fn fill_color(&self) -> Color {
        self.fill_color
    }
}

impl Element for PanelElement {
    fn kind(&self) -> ElementKind {
        ElementKind::Panel
    }

    fn layout(&self) -> &LayoutFrame {
        &self.layout
    }

    fn layout_mut(&mut self) -> &mut LayoutFrame {
        &mut self.layout
    }

    fn update_state(&mut self) {}

    /// Layout is never validated here: a negative size draws as an empty
    /// rect and non-finite geometry draws nothing.
    fn draw(&self, frame: &mut RenderFrame) {
        let bounds = self.layout.bounding_box();
        if ![bounds.x, bounds.y, bounds.width, bounds.height]
            .iter()
            .all(|value| value.is_finite())
        {
            return;
        }
        frame.push_rect(
            RectPrimitive::new(
                bounds.x,
                bounds.y,
                bounds.width.max(0.0),
                bounds.height.max(0.0),
                self.fill_color,
            )
            .with_border(self.border_width, self.border_color),
        );
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
