use std::any::Any;

use serde::{Deserialize, Serialize};

use crate::core::{LayoutFrame, Position, Size};
use crate::render::RenderFrame;

/// Runtime handle of an element registered in a `Dashboard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(u32);

impl ElementId {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementKind {
    Plot,
    Panel,
}

/// Capability shared by every drawable dashboard element.
///
/// The frame loop calls `update_state` then `draw` once per tick, on the
/// render thread. `draw` takes `&self`, so it can only observe state that a
/// completed `update_state` left behind.
pub trait Element: Any + Send {
    fn kind(&self) -> ElementKind;

    fn layout(&self) -> &LayoutFrame;

    fn layout_mut(&mut self) -> &mut LayoutFrame;

    fn update_state(&mut self);

    fn draw(&self, frame: &mut RenderFrame);

    /// Number of points the last `update_state` produced. Zero for elements
    /// that do not plot series.
    fn point_count(&self) -> usize {
        0
    }

    /// Revision of the series behind the current points, if any.
    fn revision(&self) -> Option<u64> {
        None
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn set_parent_dimensions(&mut self, width: f64, height: f64) {
        self.layout_mut()
            .set_parent_dimensions(Size::new(width, height));
    }

    /// Bottom-left-origin position relative to the parent.
    fn set_position(&mut self, x: f64, y: f64) {
        self.layout_mut().set_position(Position::new(x, y));
    }

    fn set_dimensions(&mut self, width: f64, height: f64) {
        self.layout_mut().set_dimensions(Size::new(width, height));
    }
}
