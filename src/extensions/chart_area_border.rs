use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::api::ChartPresentationConfig;
use crate::api::styling::MUTED_COLOR;
use crate::core::ChartArea;
use crate::error::ChartResult;
use crate::render::{Color, RectPrimitive, RenderFrame};

use super::{DrawContext, DrawHook};

pub const CHART_AREA_BORDER_PLUGIN_ID: &str = "chartAreaBorder";

/// Strokes the plotting-area outline while wheel zoom is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartAreaBorderPlugin {
    pub color: Color,
    pub line_width: f64,
}

impl Default for ChartAreaBorderPlugin {
    fn default() -> Self {
        Self {
            color: MUTED_COLOR,
            line_width: 1.0,
        }
    }
}

impl ChartAreaBorderPlugin {
    /// Border for `area` under `options`, or `None` while wheel zoom is off.
    #[must_use]
    pub fn border_for(
        &self,
        area: ChartArea,
        options: &ChartPresentationConfig,
    ) -> Option<RectPrimitive> {
        if !options.wheel_zoom_enabled() {
            return None;
        }
        Some(RectPrimitive::stroked(
            area.left,
            area.top,
            area.width,
            area.height,
            self.color,
            self.line_width,
        ))
    }
}

impl DrawHook for ChartAreaBorderPlugin {
    fn id(&self) -> &str {
        CHART_AREA_BORDER_PLUGIN_ID
    }

    fn before_draw(&self, context: &DrawContext<'_>, frame: &mut RenderFrame) -> ChartResult<()> {
        let Some(border) = self.border_for(context.chart_area, context.options) else {
            trace!("wheel zoom disabled, skipping chart-area border");
            return Ok(());
        };
        border.validate()?;
        frame.push_rect(border);
        Ok(())
    }
}
