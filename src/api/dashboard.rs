use std::time::Duration;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{BoundingBox, Scalar, Viewport};
use crate::error::{PlotError, PlotResult};
use crate::render::{Color, RenderFrame, Renderer};

use super::{DashboardConfig, Element, ElementId, ElementKind, PlotElement};

/// Diagnostics row for one registered element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementSnapshot {
    pub id: ElementId,
    pub kind: ElementKind,
    pub bounding_box: BoundingBox,
    pub point_count: usize,
    pub revision: Option<u64>,
}

/// Serializable view of the dashboard for diagnostics and tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub viewport: Viewport,
    pub elements: Vec<ElementSnapshot>,
}

/// Runtime registry of dashboard elements.
///
/// Elements are addressed by `ElementId` and drawn in registration order.
/// Every registered element tracks the dashboard size as its parent size.
pub struct Dashboard {
    viewport: Viewport,
    clear_color: Color,
    tick_interval: Duration,
    elements: IndexMap<ElementId, Box<dyn Element>>,
    next_id: u32,
}

impl Dashboard {
    pub fn new(config: DashboardConfig) -> PlotResult<Self> {
        config.validate()?;
        Ok(Self {
            viewport: config.viewport,
            clear_color: config.clear_color,
            tick_interval: config.tick_interval(),
            elements: IndexMap::new(),
            next_id: 0,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Pacing used when this dashboard is driven by a `RenderThread`.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn register<E: Element>(&mut self, element: E) -> ElementId {
        self.register_boxed(Box::new(element))
    }

    pub fn register_boxed(&mut self, mut element: Box<dyn Element>) -> ElementId {
        let id = ElementId::new(self.next_id);
        self.next_id = self.next_id.saturating_add(1);

        let parent = self.viewport.size();
        element.set_parent_dimensions(parent.width, parent.height);
        debug!(id = id.raw(), kind = ?element.kind(), "register element");
        self.elements.insert(id, element);
        id
    }

    /// Removes an element, keeping the draw order of the others.
    pub fn remove(&mut self, id: ElementId) -> Option<Box<dyn Element>> {
        let removed = self.elements.shift_remove(&id);
        if removed.is_some() {
            debug!(id = id.raw(), "remove element");
        }
        removed
    }

    #[must_use]
    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&dyn Element> {
        self.elements.get(&id).map(|element| &**element)
    }

    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut (dyn Element + 'static)> {
        self.elements.get_mut(&id).map(|element| &mut **element)
    }

    /// Typed access to a plot element; `None` when the id is unknown or holds
    /// another element type.
    #[must_use]
    pub fn plot<S: Scalar>(&self, id: ElementId) -> Option<&PlotElement<S>> {
        self.element(id)?.as_any().downcast_ref()
    }

    pub fn plot_mut<S: Scalar>(&mut self, id: ElementId) -> Option<&mut PlotElement<S>> {
        self.element_mut(id)?.as_any_mut().downcast_mut()
    }

    pub fn ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.elements.keys().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Applies a host resize and propagates it to every element.
    pub fn resize(&mut self, width: u32, height: u32) -> PlotResult<()> {
        let viewport = Viewport::new(width, height);
        if !viewport.is_valid() {
            return Err(PlotError::InvalidViewport { width, height });
        }

        self.viewport = viewport;
        let parent = viewport.size();
        for element in self.elements.values_mut() {
            element.set_parent_dimensions(parent.width, parent.height);
        }
        debug!(width, height, elements = self.elements.len(), "resize dashboard");
        Ok(())
    }

    pub fn update_states(&mut self) {
        for element in self.elements.values_mut() {
            element.update_state();
        }
    }

    /// Collects every element's primitives into one frame.
    #[must_use]
    pub fn draw(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport).with_clear_color(self.clear_color);
        for element in self.elements.values() {
            element.draw(&mut frame);
        }
        frame
    }

    /// One full tick: refresh every element, then draw every element, then
    /// present through the surface.
    pub fn tick<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> PlotResult<()> {
        self.update_states();
        let frame = self.draw();
        trace!(
            rects = frame.rects.len(),
            points = frame.point_count(),
            "present frame"
        );
        renderer.render(&frame)
    }

    #[must_use]
    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            viewport: self.viewport,
            elements: self
                .elements
                .iter()
                .map(|(id, element)| ElementSnapshot {
                    id: *id,
                    kind: element.kind(),
                    bounding_box: element.layout().bounding_box(),
                    point_count: element.point_count(),
                    revision: element.revision(),
                })
                .collect(),
        }
    }

    pub fn snapshot_json_pretty(&self) -> PlotResult<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("viewport", &self.viewport)
            .field("tick_interval", &self.tick_interval)
            .field("elements", &self.elements.len())
            .finish()
    }
}
