use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ChartResult;
use crate::render::Color;

use super::date_label_format::format_title_label;
use super::styling::{PointStyle, TOOLTIP_BACKGROUND_COLOR, TOOLTIP_TEXT_COLOR};
use super::{DateLabelConfig, TitleLabelFormat};

/// Hovered entry handed to tooltip callbacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipItem {
    /// Raw x-axis label of the hovered point.
    pub label: String,
    #[serde(default)]
    pub dataset_label: Option<String>,
    pub dataset_index: usize,
    pub data_index: usize,
}

impl TooltipItem {
    #[must_use]
    pub fn new(label: impl Into<String>, dataset_index: usize, data_index: usize) -> Self {
        Self {
            label: label.into(),
            dataset_label: None,
            dataset_index,
            data_index,
        }
    }

    #[must_use]
    pub fn with_dataset_label(mut self, dataset_label: impl Into<String>) -> Self {
        self.dataset_label = Some(dataset_label.into());
        self
    }
}

/// Marker drawn next to each tooltip body line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelPointStyle {
    pub point_style: PointStyle,
    pub rotation: f64,
}

/// Tooltip box styling plus per-entry callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TooltipConfig {
    pub background_color: Color,
    pub use_point_style: bool,
    pub padding: f64,
    pub box_padding: f64,
    pub display_colors: bool,
    /// Returned for every entry by `label_point_style`.
    pub entry_point_style: PointStyle,
    /// Returned for every entry by `label_text_color`.
    pub entry_text_color: Color,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            background_color: TOOLTIP_BACKGROUND_COLOR,
            use_point_style: true,
            padding: 16.0,
            box_padding: 4.0,
            display_colors: true,
            entry_point_style: PointStyle::RectRounded,
            entry_text_color: TOOLTIP_TEXT_COLOR,
        }
    }
}

impl TooltipConfig {
    #[must_use]
    pub fn label_point_style(&self, _item: &TooltipItem) -> LabelPointStyle {
        LabelPointStyle {
            point_style: self.entry_point_style,
            rotation: 0.0,
        }
    }

    #[must_use]
    pub fn label_text_color(&self, _item: &TooltipItem) -> Color {
        self.entry_text_color
    }

    /// Builds the tooltip title from the first hovered entry.
    ///
    /// No hovered entries yield an empty title.
    pub fn title(
        &self,
        items: &[TooltipItem],
        format: TitleLabelFormat,
        config: DateLabelConfig,
    ) -> ChartResult<String> {
        let Some(first) = items.first() else {
            return Ok(String::new());
        };
        format_title_label(&first.label, format, config)
    }

    /// Like `title`, but shows the raw label when it cannot be converted.
    #[must_use]
    pub fn title_or_raw(
        &self,
        items: &[TooltipItem],
        format: TitleLabelFormat,
        config: DateLabelConfig,
    ) -> String {
        match self.title(items, format, config) {
            Ok(title) => title,
            Err(err) => {
                warn!(error = %err, "falling back to raw tooltip title");
                items
                    .first()
                    .map(|item| item.label.clone())
                    .unwrap_or_default()
            }
        }
    }
}
