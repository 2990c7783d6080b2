//! chart-presentation: typed presentation options for dashboard charts.
//!
//! Zoom, tooltip, legend, title and axis options serialize to the option tree
//! a Chart.js style host consumes. Tooltip titles are produced by Portuguese
//! date-label helpers, and a headless host runs draw hooks such as the
//! wheel-zoom chart-area border on every redraw.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod render;
pub mod telemetry;

pub use api::{
    ChartPresentationConfig, PresentationHost, format_long_date, format_title_label,
    strip_label_artifacts,
};
pub use core::{DateValue, MonthCode, expand_month_code};
pub use error::{ChartError, ChartResult};
