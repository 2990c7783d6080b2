use tracing::{debug, trace};

use crate::core::{ChartArea, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::extensions::{ChartAreaBorderPlugin, DrawContext, DrawHook};
use crate::render::{RenderFrame, Renderer};

use super::ChartPresentationConfig;

/// Headless redraw driver.
///
/// Owns the live presentation config and runs every registered draw hook
/// against it on each `redraw`, then hands the frame to the renderer.
pub struct PresentationHost<R: Renderer> {
    renderer: R,
    viewport: Viewport,
    chart_area: ChartArea,
    config: ChartPresentationConfig,
    hooks: Vec<Box<dyn DrawHook>>,
    redraw_count: u64,
}

impl<R: Renderer> PresentationHost<R> {
    pub fn new(
        renderer: R,
        viewport: Viewport,
        config: ChartPresentationConfig,
    ) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        Ok(Self {
            renderer,
            viewport,
            chart_area: ChartArea::from_viewport(viewport),
            config,
            hooks: Vec::new(),
            redraw_count: 0,
        })
    }

    /// Registers a hook; ids must be unique.
    pub fn register_hook(&mut self, hook: Box<dyn DrawHook>) -> ChartResult<()> {
        if self.hooks.iter().any(|existing| existing.id() == hook.id()) {
            return Err(ChartError::InvalidData(format!(
                "draw hook `{}` is already registered",
                hook.id()
            )));
        }
        debug!(hook = hook.id(), "register draw hook");
        self.hooks.push(hook);
        Ok(())
    }

    pub fn register_chart_area_border(&mut self) -> ChartResult<()> {
        self.register_hook(Box::new(ChartAreaBorderPlugin::default()))
    }

    /// Removes a hook by id. Returns `true` when one was removed.
    pub fn unregister_hook(&mut self, id: &str) -> bool {
        let before = self.hooks.len();
        self.hooks.retain(|hook| hook.id() != id);
        before != self.hooks.len()
    }

    #[must_use]
    pub fn hook_ids(&self) -> Vec<&str> {
        self.hooks.iter().map(|hook| hook.id()).collect()
    }

    /// Sets the plotting area laid out by the host; it must fit the viewport.
    pub fn set_chart_area(&mut self, chart_area: ChartArea) -> ChartResult<()> {
        chart_area.validate()?;
        if !chart_area.fits_within(self.viewport) {
            return Err(ChartError::InvalidData(
                "chart area must fit inside the viewport".to_owned(),
            ));
        }
        self.chart_area = chart_area;
        Ok(())
    }

    /// Resizes the viewport and resets the chart area to cover it.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.viewport = viewport;
        self.chart_area = ChartArea::from_viewport(viewport);
        Ok(())
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn chart_area(&self) -> ChartArea {
        self.chart_area
    }

    #[must_use]
    pub fn config(&self) -> &ChartPresentationConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ChartPresentationConfig {
        &mut self.config
    }

    pub fn set_config(&mut self, config: ChartPresentationConfig) {
        self.config = config;
    }

    pub fn set_wheel_zoom_enabled(&mut self, enabled: bool) {
        debug!(enabled, "set wheel zoom");
        self.config.set_wheel_zoom_enabled(enabled);
    }

    #[must_use]
    pub fn redraw_count(&self) -> u64 {
        self.redraw_count
    }

    /// Builds the frame for the current config without rendering it.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.viewport, self.chart_area);
        let context = DrawContext {
            viewport: self.viewport,
            chart_area: self.chart_area,
            options: &self.config,
        };
        for hook in &self.hooks {
            hook.before_draw(&context, &mut frame)?;
        }
        Ok(frame)
    }

    pub fn redraw(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        trace!(
            rects = frame.rects.len(),
            wheel_zoom = self.config.wheel_zoom_enabled(),
            "redraw"
        );
        self.renderer.render(&frame)?;
        self.redraw_count += 1;
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
