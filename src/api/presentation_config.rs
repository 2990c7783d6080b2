use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::{ChartError, ChartResult};

use super::styling::{LegendConfig, ScalesConfig, TitleConfig};
use super::{DateLabelConfig, TitleLabelFormat, TooltipConfig, TooltipItem, ZoomConfig};

const DEFAULT_TITLE_TEXT: &str = "Sites";
const DEFAULT_SUBTITLE_TEXT: &str = "Veja o tempo médio de acessos de cada site";

/// Complete presentation options for one chart.
///
/// This type is serializable so dashboards can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartPresentationConfig {
    pub zoom: ZoomConfig,
    pub tooltip: TooltipConfig,
    pub title: TitleConfig,
    pub subtitle: TitleConfig,
    pub legend: LegendConfig,
    pub scales: ScalesConfig,
    pub title_label_format: TitleLabelFormat,
    pub date_labels: DateLabelConfig,
}

impl Default for ChartPresentationConfig {
    fn default() -> Self {
        Self {
            zoom: ZoomConfig::default(),
            tooltip: TooltipConfig::default(),
            title: TitleConfig::heading(DEFAULT_TITLE_TEXT),
            subtitle: TitleConfig::subheading(DEFAULT_SUBTITLE_TEXT),
            legend: LegendConfig::default(),
            scales: ScalesConfig::default(),
            title_label_format: TitleLabelFormat::default(),
            date_labels: DateLabelConfig::default(),
        }
    }
}

impl ChartPresentationConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets heading text, keeping heading styling.
    #[must_use]
    pub fn with_title_text(mut self, text: impl Into<String>) -> Self {
        self.title.text = text.into();
        self
    }

    /// Sets subtitle text, keeping subtitle styling.
    #[must_use]
    pub fn with_subtitle_text(mut self, text: impl Into<String>) -> Self {
        self.subtitle.text = text.into();
        self
    }

    #[must_use]
    pub fn with_title_label_format(mut self, format: TitleLabelFormat) -> Self {
        self.title_label_format = format;
        self
    }

    #[must_use]
    pub fn with_zoom(mut self, zoom: ZoomConfig) -> Self {
        self.zoom = zoom;
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: TooltipConfig) -> Self {
        self.tooltip = tooltip;
        self
    }

    #[must_use]
    pub fn with_date_label_config(mut self, config: DateLabelConfig) -> Self {
        self.date_labels = config;
        self
    }

    #[must_use]
    pub fn wheel_zoom_enabled(&self) -> bool {
        self.zoom.wheel_enabled()
    }

    pub fn set_wheel_zoom_enabled(&mut self, enabled: bool) {
        self.zoom.zoom.wheel.enabled = enabled;
    }

    /// Flips wheel zoom and returns the new state.
    pub fn toggle_wheel_zoom(&mut self) -> bool {
        let enabled = !self.wheel_zoom_enabled();
        self.set_wheel_zoom_enabled(enabled);
        enabled
    }

    /// Tooltip title callback wired to this config's label format.
    pub fn tooltip_title(&self, items: &[TooltipItem]) -> ChartResult<String> {
        self.tooltip
            .title(items, self.title_label_format, self.date_labels)
    }

    /// Builds the `{ plugins, scales }` option tree expected by the charting host.
    pub fn to_chart_options_json(&self) -> ChartResult<Value> {
        let tooltip = &self.tooltip;
        let zoom = to_value(&self.zoom, "zoom")?;
        let title = to_value(&self.title, "title")?;
        let subtitle = to_value(&self.subtitle, "subtitle")?;
        let legend = to_value(&self.legend, "legend")?;
        let scales = to_value(&self.scales, "scales")?;
        Ok(json!({
            "plugins": {
                "zoom": zoom,
                "tooltip": {
                    "backgroundColor": tooltip.background_color.to_hex(),
                    "usePointStyle": tooltip.use_point_style,
                    "padding": tooltip.padding,
                    "boxPadding": tooltip.box_padding,
                    "displayColors": tooltip.display_colors,
                },
                "title": title,
                "subtitle": subtitle,
                "legend": legend,
            },
            "scales": scales,
        }))
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON. Missing fields take default values.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn to_value<T: Serialize>(value: &T, section: &str) -> ChartResult<Value> {
    serde_json::to_value(value).map_err(|e| {
        ChartError::InvalidData(format!("failed to serialize `{section}` options: {e}"))
    })
}
