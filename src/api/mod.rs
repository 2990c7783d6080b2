mod date_label_format;
mod json_contract;
mod label_config;
mod presentation_config;
mod presentation_host;
pub mod styling;
mod tooltip;
mod zoom;

pub use date_label_format::{
    format_calendar_date, format_long_date, format_long_date_with, format_title_label,
    strip_label_artifacts,
};
pub use json_contract::{PRESENTATION_CONFIG_JSON_SCHEMA_V1, PresentationConfigJsonContractV1};
pub use label_config::{DateLabelConfig, TitleLabelFormat};
pub use presentation_config::ChartPresentationConfig;
pub use presentation_host::PresentationHost;
pub use styling::{
    Align, AxisScaleConfig, FontSpec, FontWeight, GridConfig, LegendConfig, LegendLabelsConfig,
    Padding, PointStyle, ScalesConfig, TitleConfig,
};
pub use tooltip::{LabelPointStyle, TooltipConfig, TooltipItem};
pub use zoom::{Toggle, ZoomConfig, ZoomGestures, ZoomMode};
