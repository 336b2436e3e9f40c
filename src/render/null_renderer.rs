use crate::error::PlotResult;
use crate::render::{RenderFrame, Renderer};

/// No-op surface used by tests and headless dashboards.
///
/// It still validates frame content so tests catch invalid styling before a
/// real backend is introduced, and keeps the last presented frame around for
/// inspection.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: u64,
    pub last_rect_count: usize,
    pub last_polyline_count: usize,
    pub last_points_count: usize,
    pub last_frame: Option<RenderFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_rect_count = frame.rects.len();
        self.last_polyline_count = frame.polylines.len();
        self.last_points_count = frame.points.len();
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
