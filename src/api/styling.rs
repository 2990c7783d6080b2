use serde::{Deserialize, Serialize};

use crate::render::Color;

/// `#495057`
pub const TITLE_COLOR: Color = Color::rgb8(0x49, 0x50, 0x57);
/// `#6c757d`, shared by subtitle, legend labels and the chart-area border.
pub const MUTED_COLOR: Color = Color::rgb8(0x6c, 0x75, 0x7d);
/// `#22223b`
pub const TOOLTIP_BACKGROUND_COLOR: Color = Color::rgb8(0x22, 0x22, 0x3b);
/// `#eeee`
pub const TOOLTIP_TEXT_COLOR: Color = Color::rgba8(0xee, 0xee, 0xee, 0xee);

const NEUTRAL_TEXT_COLOR: Color = Color::rgb8(0x66, 0x66, 0x66);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Start,
    #[default]
    Center,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSpec {
    pub size: f64,
    pub weight: FontWeight,
}

impl FontSpec {
    #[must_use]
    pub const fn new(size: f64, weight: FontWeight) -> Self {
        Self { size, weight }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new(12.0, FontWeight::Normal)
    }
}

/// Per-side padding. Unset sides are left to the host's defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Padding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<f64>,
}

impl Padding {
    #[must_use]
    pub const fn bottom(bottom: f64) -> Self {
        Self {
            top: None,
            bottom: Some(bottom),
            left: None,
            right: None,
        }
    }
}

/// Title or subtitle block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleConfig {
    pub display: bool,
    pub align: Align,
    pub text: String,
    pub color: Color,
    pub font: FontSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            display: false,
            align: Align::Center,
            text: String::new(),
            color: NEUTRAL_TEXT_COLOR,
            font: FontSpec::default(),
            padding: None,
        }
    }
}

impl TitleConfig {
    /// Bold start-aligned chart heading.
    #[must_use]
    pub fn heading(text: impl Into<String>) -> Self {
        Self {
            display: true,
            align: Align::Start,
            text: text.into(),
            color: TITLE_COLOR,
            font: FontSpec::new(20.0, FontWeight::Bold),
            padding: None,
        }
    }

    /// Muted start-aligned line under the heading.
    #[must_use]
    pub fn subheading(text: impl Into<String>) -> Self {
        Self {
            display: true,
            align: Align::Start,
            text: text.into(),
            color: MUTED_COLOR,
            font: FontSpec::new(14.0, FontWeight::Normal),
            padding: Some(Padding::bottom(10.0)),
        }
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    #[must_use]
    pub fn with_display(mut self, display: bool) -> Self {
        self.display = display;
        self
    }
}

/// Marker shape used by legend entries and tooltip color boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum PointStyle {
    #[default]
    Circle,
    Cross,
    CrossRot,
    Dash,
    Line,
    Rect,
    RectRounded,
    RectRot,
    Star,
    Triangle,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LegendLabelsConfig {
    pub color: Color,
    pub box_width: f64,
    pub box_height: f64,
    pub use_point_style: bool,
    pub point_style: PointStyle,
    pub padding: f64,
}

impl Default for LegendLabelsConfig {
    fn default() -> Self {
        Self {
            color: MUTED_COLOR,
            box_width: 20.0,
            box_height: 20.0,
            use_point_style: true,
            point_style: PointStyle::RectRounded,
            padding: 24.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LegendConfig {
    pub labels: LegendLabelsConfig,
}

/// Grid-line switches. Unset switches keep the host's defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct GridConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draw_on_chart_area: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AxisScaleConfig {
    pub grid: GridConfig,
}

impl AxisScaleConfig {
    /// Whether grid lines cross the plotting area; unset switches count as `true`.
    #[must_use]
    pub fn grid_crosses_chart_area(self) -> bool {
        self.grid.display.unwrap_or(true) && self.grid.draw_on_chart_area.unwrap_or(true)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScalesConfig {
    pub x: AxisScaleConfig,
    pub y: AxisScaleConfig,
}

impl Default for ScalesConfig {
    fn default() -> Self {
        Self {
            // Only tick marks on the category axis; value grid spans the plot.
            x: AxisScaleConfig {
                grid: GridConfig {
                    display: None,
                    draw_on_chart_area: Some(false),
                },
            },
            y: AxisScaleConfig {
                grid: GridConfig {
                    display: Some(true),
                    draw_on_chart_area: None,
                },
            },
        }
    }
}

