use crate::api::ChartPresentationConfig;
use crate::core::{ChartArea, Viewport};
use crate::error::ChartResult;
use crate::render::RenderFrame;

/// Read-only state passed to draw hooks on every redraw.
///
/// `options` is the configuration as it is at draw time, not a copy taken
/// when the hook was registered.
#[derive(Debug, Clone, Copy)]
pub struct DrawContext<'a> {
    pub viewport: Viewport,
    pub chart_area: ChartArea,
    pub options: &'a ChartPresentationConfig,
}

/// Hook run once per redraw, before the chart body is drawn.
///
/// Hooks may only append primitives to the frame; they never mutate options.
pub trait DrawHook {
    fn id(&self) -> &str;
    fn before_draw(&self, context: &DrawContext<'_>, frame: &mut RenderFrame) -> ChartResult<()>;
}
