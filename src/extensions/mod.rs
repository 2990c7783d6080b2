//! Draw hooks run by `PresentationHost` on every redraw.

pub mod chart_area_border;
mod plugins;

pub use chart_area_border::{CHART_AREA_BORDER_PLUGIN_ID, ChartAreaBorderPlugin};
pub use plugins::{DrawContext, DrawHook};
