mod config;
mod dashboard;
mod element;
mod frame_loop;
mod panel_element;
mod plot_element;

pub use config::{DashboardConfig, DrawMode, PlotStyle};
pub use dashboard::{Dashboard, DashboardSnapshot, ElementSnapshot};
pub use element::{Element, ElementId, ElementKind};
pub use frame_loop::{
    FrameLoop, HostEvent, HostEventSender, RenderThread, RenderThreadReport, TickOutcome,
};
pub use panel_element::PanelElement;
pub use plot_element::{PlotElement, PlotHandle};
