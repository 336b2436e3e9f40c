use std::f64::consts::TAU;
use std::fs::File;
use std::path::Path;

use cairo::{Context, Format, ImageSurface};

use crate::error::{PlotError, PlotResult};
use crate::render::{Color, RenderFrame, Renderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub rects_drawn: usize,
    pub polylines_drawn: usize,
    pub points_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a host toolkit's paint callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> PlotResult<()>;
}

/// Cairo renderer backend.
///
/// Supports offscreen image-surface rendering through `Renderer::render` and
/// in-place rendering on an external context through `CairoContextRenderer`.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> PlotResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(PlotError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Writes the current surface content as PNG.
    pub fn write_png(&self, path: impl AsRef<Path>) -> PlotResult<()> {
        let mut file = File::create(path.as_ref())
            .map_err(|err| PlotError::Backend(format!("failed to create png file: {err}")))?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| PlotError::Backend(format!("failed to write png: {err}")))
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> PlotResult<()> {
        frame.validate()?;

        apply_color(context, frame.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();

        for rect in &frame.rects {
            context.rectangle(rect.x, rect.y, rect.width, rect.height);
            apply_color(context, rect.fill_color);
            if rect.border_width > 0.0 {
                context
                    .fill_preserve()
                    .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
                apply_color(context, rect.border_color);
                context.set_line_width(rect.border_width);
                context
                    .stroke()
                    .map_err(|err| map_backend_error("failed to stroke rectangle border", err))?;
            } else {
                context
                    .fill()
                    .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
            }
            stats.rects_drawn += 1;
        }

        for polyline in &frame.polylines {
            let mut points = polyline
                .buffer
                .points()
                .iter()
                .filter(|point| point.x.is_finite() && point.y.is_finite());
            let Some(first) = points.next() else {
                continue;
            };
            apply_color(context, polyline.color);
            context.set_line_width(polyline.stroke_width);
            context.move_to(first.x, first.y);
            for point in points {
                context.line_to(point.x, point.y);
            }
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke polyline", err))?;
            stats.polylines_drawn += 1;
        }

        for markers in &frame.points {
            apply_color(context, markers.color);
            for point in markers.buffer.points() {
                if !point.x.is_finite() || !point.y.is_finite() {
                    continue;
                }
                context.new_sub_path();
                context.arc(point.x, point.y, markers.radius, 0.0, TAU);
                stats.points_drawn += 1;
            }
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill points", err))?;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> PlotResult<()> {
        self.render_with_context(context, frame)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> PlotError {
    PlotError::Backend(format!("{prefix}: {err}"))
}
