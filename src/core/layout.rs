use serde::{Deserialize, Serialize};

use crate::core::types::{Position, Size};

/// Absolute placement handed to the transform.
///
/// `anchor` is the element's bottom-left corner in top-left-origin surface
/// coordinates; `size` is the mapping width/height.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlotRect {
    pub anchor: Position,
    pub size: Size,
}

impl PlotRect {
    #[must_use]
    pub const fn new(anchor: Position, size: Size) -> Self {
        Self { anchor, size }
    }
}

/// Top-left corner and size of an element on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Position and size of one element relative to its parent.
///
/// Requested positions use a bottom-left origin. The surface uses a top-left
/// origin, so the absolute position depends on the parent height and is
/// re-derived whenever either the request or the parent size changes.
/// Placement is not validated against the parent; anything outside the parent
/// simply draws off-surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutFrame {
    parent_dimensions: Size,
    dimensions: Size,
    requested_position: Position,
    absolute_position: Position,
}

impl LayoutFrame {
    #[must_use]
    pub fn new(parent_dimensions: Size) -> Self {
        let mut frame = Self::default();
        frame.set_parent_dimensions(parent_dimensions);
        frame
    }

    pub fn set_parent_dimensions(&mut self, parent_dimensions: Size) {
        self.parent_dimensions = parent_dimensions;
        self.set_position(self.requested_position);
    }

    pub fn set_position(&mut self, position: Position) {
        self.requested_position = position;
        self.absolute_position = Position::new(
            position.x,
            self.parent_dimensions.height - position.y,
        );
    }

    pub fn set_dimensions(&mut self, dimensions: Size) {
        self.dimensions = dimensions;
    }

    #[must_use]
    pub fn parent_dimensions(&self) -> Size {
        self.parent_dimensions
    }

    #[must_use]
    pub fn dimensions(&self) -> Size {
        self.dimensions
    }

    /// Position as last requested, bottom-left origin.
    #[must_use]
    pub fn requested_position(&self) -> Position {
        self.requested_position
    }

    /// Position in surface coordinates, top-left origin.
    #[must_use]
    pub fn absolute_position(&self) -> Position {
        self.absolute_position
    }

    #[must_use]
    pub fn rect(&self) -> PlotRect {
        PlotRect::new(self.absolute_position, self.dimensions)
    }

    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox {
            x: self.absolute_position.x,
            y: self.absolute_position.y - self.dimensions.height,
            width: self.dimensions.width,
            height: self.dimensions.height,
        }
    }
}
