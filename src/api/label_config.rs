use serde::{Deserialize, Serialize};

use crate::core::LabelTimeZone;

/// Which conversion the tooltip title applies to the hovered x label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum TitleLabelFormat {
    /// Daily labels: `"15 de Janeiro de 2023"`.
    #[default]
    FullDate,
    /// Monthly labels carrying a three-letter code: `"janeiro"`.
    MonthCode,
}

/// Runtime configuration for date label conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct DateLabelConfig {
    pub time_zone: LabelTimeZone,
}

impl DateLabelConfig {
    #[must_use]
    pub fn with_time_zone(mut self, time_zone: LabelTimeZone) -> Self {
        self.time_zone = time_zone;
        self
    }
}
