//! dash-plot: live-updating plot elements for windowed dashboards.
//!
//! Producers on any thread publish whole series snapshots through a
//! `PlotHandle`; a single render thread turns the latest snapshot into
//! screen-space points once per tick and hands a finished `RenderFrame` to a
//! `Renderer` surface.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{Dashboard, DashboardConfig, PlotElement, PlotHandle};
pub use error::{PlotError, PlotResult};
