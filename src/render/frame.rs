use crate::core::{ChartArea, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::RectPrimitive;

/// Backend-agnostic scene for one chart draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub chart_area: ChartArea,
    pub rects: Vec<RectPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport, chart_area: ChartArea) -> Self {
        Self {
            viewport,
            chart_area,
            rects: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    pub fn push_rect(&mut self, rect: RectPrimitive) {
        self.rects.push(rect);
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.chart_area.validate()?;

        for rect in &self.rects {
            rect.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}
