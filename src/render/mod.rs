mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, PointsPrimitive, PolylinePrimitive, RectPrimitive};

use crate::error::PlotResult;

/// Contract implemented by any drawing surface.
///
/// Surfaces receive a fully materialized `RenderFrame` once per tick, so
/// drawing code stays isolated from series ingestion and layout.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()>;
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()> {
        (**self).render(frame)
    }
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
