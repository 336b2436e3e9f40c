use std::any::Any;
use std::sync::Arc;

use tracing::trace;

use crate::core::{
    LayoutFrame, PlotRect, PointBuffer, Sample, ScalingPolicy, Scalar, SeriesSnapshot,
    SeriesState, Size, compute,
};
use crate::error::PlotResult;
use crate::render::{PointsPrimitive, PolylinePrimitive, RenderFrame};

use super::{DrawMode, Element, ElementKind, PlotStyle};

/// Producer-side ingestion handle of one plot element.
///
/// Cheap to clone and safe to move to any thread. Each call publishes a whole
/// snapshot; the render thread picks up whichever snapshot is current at its
/// next tick.
#[derive(Debug)]
pub struct PlotHandle<S> {
    state: Arc<SeriesState<S>>,
}

impl<S> Clone for PlotHandle<S> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<S: Scalar> PlotHandle<S> {
    /// Replaces the plotted series. Returns the revision assigned to it.
    pub fn update_data<I>(&self, series: I) -> u64
    where
        I: IntoIterator<Item = Sample<S>>,
    {
        self.state.replace(series)
    }

    /// Same as `update_data` for `(x, y)` tuples.
    pub fn update_pairs<I>(&self, series: I) -> u64
    where
        I: IntoIterator<Item = (S, S)>,
    {
        self.state.replace(series.into_iter().map(Sample::from))
    }

    pub fn clear(&self) -> u64 {
        self.state.replace(std::iter::empty())
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        self.state.revision()
    }
}

/// Live scatter/line plot of one series.
///
/// Owned by the render thread. The published point buffer is replaced whole
/// after each transform, and `draw` only clones the `Arc` of the last
/// published buffer.
#[derive(Debug)]
pub struct PlotElement<S> {
    layout: LayoutFrame,
    scaling: ScalingPolicy,
    style: PlotStyle,
    state: Arc<SeriesState<S>>,
    snapshot: SeriesSnapshot<S>,
    published: Arc<PointBuffer>,
    projected_with: Option<(PlotRect, ScalingPolicy)>,
}

impl<S: Scalar> PlotElement<S> {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        let mut layout = LayoutFrame::default();
        layout.set_dimensions(Size::new(width, height));
        Self {
            layout,
            scaling: ScalingPolicy::default(),
            style: PlotStyle::default(),
            state: Arc::new(SeriesState::new()),
            snapshot: SeriesSnapshot::empty(),
            published: Arc::new(PointBuffer::empty()),
            projected_with: None,
        }
    }

    #[must_use]
    pub fn with_scaling(mut self, scaling: ScalingPolicy) -> Self {
        self.scaling = scaling;
        self
    }

    pub fn with_style(mut self, style: PlotStyle) -> PlotResult<Self> {
        style.validate()?;
        self.style = style;
        Ok(self)
    }

    #[must_use]
    pub fn handle(&self) -> PlotHandle<S> {
        PlotHandle {
            state: Arc::clone(&self.state),
        }
    }

    /// Render-thread shortcut for `handle().update_data(..)`.
    pub fn update_data<I>(&self, series: I) -> u64
    where
        I: IntoIterator<Item = Sample<S>>,
    {
        self.state.replace(series)
    }

    pub fn set_horizontal_scaling_mode(&mut self, scaling: ScalingPolicy) {
        self.scaling = scaling;
    }

    #[must_use]
    pub fn horizontal_scaling_mode(&self) -> ScalingPolicy {
        self.scaling
    }

    #[must_use]
    pub fn style(&self) -> PlotStyle {
        self.style
    }

    pub fn set_style(&mut self, style: PlotStyle) -> PlotResult<()> {
        style.validate()?;
        self.style = style;
        Ok(())
    }

    /// Buffer produced by the last completed `update_state`.
    #[must_use]
    pub fn point_buffer(&self) -> Arc<PointBuffer> {
        Arc::clone(&self.published)
    }

    /// Snapshot the current buffer was derived from.
    #[must_use]
    pub fn snapshot(&self) -> &SeriesSnapshot<S> {
        &self.snapshot
    }
}

impl<S: Scalar> Element for PlotElement<S> {
    fn kind(&self) -> ElementKind {
        ElementKind::Plot
    }

    fn layout(&self) -> &LayoutFrame {
        &self.layout
    }

    fn layout_mut(&mut self) -> &mut LayoutFrame {
        &mut self.layout
    }

    /// Re-projects when new data arrived or when layout/scaling changed since
    /// the last projection.
    fn update_state(&mut self) {
        let fresh = self.state.consume_if_dirty();
        let target = (self.layout.rect(), self.scaling);
        if fresh.is_none() && self.projected_with == Some(target) {
            return;
        }

        if let Some(snapshot) = fresh {
            self.snapshot = snapshot;
        }
        let buffer = compute(&self.snapshot, target.0, target.1);
        trace!(
            len = buffer.len(),
            revision = buffer.revision(),
            "publish point buffer"
        );
        self.published = Arc::new(buffer);
        self.projected_with = Some(target);
    }

    fn draw(&self, frame: &mut RenderFrame) {
        if self.published.is_empty() {
            return;
        }

        let style = self.style;
        if matches!(style.draw_mode, DrawMode::Polyline | DrawMode::PointsAndPolyline) {
            frame.push_polyline(PolylinePrimitive::new(
                Arc::clone(&self.published),
                style.stroke_width,
                style.color,
            ));
        }
        if matches!(style.draw_mode, DrawMode::Points | DrawMode::PointsAndPolyline) {
            frame.push_points(PointsPrimitive::new(
                Arc::clone(&self.published),
                style.point_radius,
                style.color,
            ));
        }
    }

    fn point_count(&self) -> usize {
        self.published.len()
    }

    fn revision(&self) -> Option<u64> {
        Some(self.published.revision())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::PlotElement;
    use crate::api::{DrawMode, Element, PlotStyle};
    use crate::core::{Sample, ScalingPolicy, ScreenPoint, Viewport};
    use crate::render::RenderFrame;

    fn plot_in_parent() -> PlotElement<i32> {
        let mut plot = PlotElement::new(100.0, 100.0);
        plot.set_parent_dimensions(100.0, 100.0);
        plot.set_position(0.0, 0.0);
        plot
    }

    #[test]
    fn update_state_publishes_projected_snapshot() {
        let mut plot = plot_in_parent();
        plot.update_data([Sample::new(0, 0), Sample::new(10, 5), Sample::new(20, 0)]);
        plot.update_state();

        let buffer = plot.point_buffer();
        assert_eq!(
            buffer.points(),
            &[
                ScreenPoint::new(0.0, 100.0),
                ScreenPoint::new(50.0, 0.0),
                ScreenPoint::new(100.0, 100.0),
            ]
        );
        assert_eq!(buffer.revision(), 1);
    }

    #[test]
    fn update_state_without_changes_keeps_published_buffer() {
        let mut plot = plot_in_parent();
        plot.update_data([Sample::new(1, 1)]);
        plot.update_state();
        let first = plot.point_buffer();

        plot.update_state();
        assert!(Arc::ptr_eq(&first, &plot.point_buffer()));
    }

    #[test]
    fn layout_change_reprojects_last_snapshot() {
        let mut plot = plot_in_parent();
        plot.update_data([Sample::new(10, 10)]);
        plot.update_state();
        assert_eq!(plot.point_buffer().points()[0], ScreenPoint::new(100.0, 0.0));

        plot.set_parent_dimensions(100.0, 300.0);
        plot.update_state();
        assert_eq!(plot.point_buffer().points()[0], ScreenPoint::new(100.0, 200.0));
        assert_eq!(plot.point_buffer().revision(), 1);
    }

    #[test]
    fn scaling_change_reprojects_last_snapshot() {
        let mut plot = plot_in_parent();
        plot.update_data([Sample::new(50, 1), Sample::new(100, 1)]);
        plot.update_state();
        assert_eq!(plot.point_buffer().points()[0].x, 50.0);

        plot.set_horizontal_scaling_mode(ScalingPolicy::FitToMinimum);
        plot.update_state();
        assert_eq!(plot.point_buffer().points()[0].x, 0.0);
    }

    #[test]
    fn draw_emits_primitives_per_draw_mode() {
        let mut plot = plot_in_parent()
            .with_style(PlotStyle::default().with_draw_mode(DrawMode::PointsAndPolyline))
            .expect("valid style");
        plot.update_data([Sample::new(1, 1), Sample::new(2, 2)]);
        plot.update_state();

        let mut frame = RenderFrame::new(Viewport::new(100, 100));
        plot.draw(&mut frame);
        assert_eq!(frame.points.len(), 1);
        assert_eq!(frame.polylines.len(), 1);
        assert_eq!(frame.point_count(), 4);
    }

    #[test]
    fn draw_skips_empty_buffer() {
        let mut plot = plot_in_parent();
        plot.update_state();
        let mut frame = RenderFrame::new(Viewport::new(100, 100));
        plot.draw(&mut frame);
        assert!(frame.is_empty());
    }

    #[test]
    fn invalid_style_is_rejected() {
        let mut plot = plot_in_parent();
        assert!(plot.set_style(PlotStyle::default().with_point_radius(-1.0)).is_err());
        assert_eq!(plot.style(), PlotStyle::default());
    }

    #[test]
    fn handle_feeds_the_same_state() {
        let mut plot = plot_in_parent();
        let handle = plot.handle();
        let cloned = handle.clone();
        handle.update_pairs([(1, 1), (2, 2)]);
        assert_eq!(cloned.revision(), 1);
        cloned.clear();

        plot.update_state();
        assert!(plot.point_buffer().is_empty());
        assert_eq!(plot.revision(), Some(2));
    }
}
