pub mod bounds;
pub mod layout;
pub mod plot_state;
pub mod scalar;
pub mod sliding_window;
pub mod transform;
pub mod types;

pub use bounds::{AxisRange, Bounds};
pub use layout::{BoundingBox, LayoutFrame, PlotRect};
pub use plot_state::{SeriesSnapshot, SeriesState};
pub use scalar::Scalar;
pub use sliding_window::SlidingWindow;
pub use transform::{PARALLEL_THRESHOLD, PointBuffer, compute, project_samples};
pub use types::{Position, Sample, ScalingPolicy, ScreenPoint, Size, Viewport};
