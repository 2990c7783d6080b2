use chart_presentation::ChartError;
use chart_presentation::api::{ChartPresentationConfig, PresentationHost, ZoomConfig};
use chart_presentation::core::{ChartArea, Viewport};
use chart_presentation::extensions::{
    CHART_AREA_BORDER_PLUGIN_ID, ChartAreaBorderPlugin, DrawContext, DrawHook,
};
use chart_presentation::render::{Color, NullRenderer, RectPrimitive, RenderFrame, Renderer};

fn host() -> PresentationHost<NullRenderer> {
    let mut host = PresentationHost::new(
        NullRenderer::default(),
        Viewport::new(800, 400),
        ChartPresentationConfig::default(),
    )
    .expect("host init");
    host.register_chart_area_border().expect("register border");
    host.set_chart_area(ChartArea::new(40.0, 60.0, 720.0, 300.0))
        .expect("chart area");
    host
}

#[test]
fn border_is_absent_while_wheel_zoom_is_disabled() {
    let plugin = ChartAreaBorderPlugin::default();
    let config = ChartPresentationConfig::default();
    assert!(!config.wheel_zoom_enabled());
    assert_eq!(
        plugin.border_for(ChartArea::new(0.0, 0.0, 100.0, 50.0), &config),
        None
    );
}

#[test]
fn border_strokes_chart_area_when_wheel_zoom_is_enabled() {
    let plugin = ChartAreaBorderPlugin::default();
    let config =
        ChartPresentationConfig::default().with_zoom(ZoomConfig::default().with_wheel_enabled(true));
    let area = ChartArea::new(12.0, 34.0, 500.0, 250.0);

    let rect = plugin.border_for(area, &config).expect("border");
    assert_eq!((rect.x, rect.y, rect.width, rect.height), (12.0, 34.0, 500.0, 250.0));
    assert_eq!(rect.fill_color, None);
    let stroke = rect.stroke.expect("stroke");
    assert_eq!(stroke.color.to_hex(), "#6c757d");
    assert_eq!(stroke.line_width, 1.0);
}

#[test]
fn toggling_wheel_zoom_changes_next_redraw_without_rebuilding() {
    let mut host = host();

    host.redraw().expect("redraw 1");
    assert_eq!(host.renderer().last_rect_count, 0);

    host.set_wheel_zoom_enabled(true);
    host.redraw().expect("redraw 2");
    assert_eq!(host.renderer().last_rect_count, 1);
    let frame = host.renderer().last_frame.as_ref().expect("frame");
    assert_eq!(frame.rects[0].x, 40.0);
    assert_eq!(frame.rects[0].y, 60.0);

    assert!(!host.config_mut().toggle_wheel_zoom());
    host.redraw().expect("redraw 3");
    assert_eq!(host.renderer().last_rect_count, 0);

    assert_eq!(host.redraw_count(), 3);
    assert_eq!(host.renderer().frames_rendered, 3);
}

#[test]
fn hook_reads_options_passed_at_draw_time() {
    let plugin = ChartAreaBorderPlugin::default();
    let mut config = ChartPresentationConfig::default();
    let viewport = Viewport::new(300, 200);
    let area = ChartArea::from_viewport(viewport);

    let mut first = RenderFrame::new(viewport, area);
    plugin
        .before_draw(
            &DrawContext {
                viewport,
                chart_area: area,
                options: &config,
            },
            &mut first,
        )
        .expect("first draw");
    assert!(first.is_empty());

    config.set_wheel_zoom_enabled(true);
    let mut second = RenderFrame::new(viewport, area);
    plugin
        .before_draw(
            &DrawContext {
                viewport,
                chart_area: area,
                options: &config,
            },
            &mut second,
        )
        .expect("second draw");
    assert_eq!(second.rects.len(), 1);
}

#[test]
fn duplicate_hook_ids_are_rejected() {
    let mut host = host();
    assert_eq!(host.hook_ids(), vec![CHART_AREA_BORDER_PLUGIN_ID]);

    let err = host
        .register_chart_area_border()
        .expect_err("duplicate hook");
    assert!(matches!(err, ChartError::InvalidData(_)));

    assert!(host.unregister_hook(CHART_AREA_BORDER_PLUGIN_ID));
    assert!(!host.unregister_hook(CHART_AREA_BORDER_PLUGIN_ID));
    host.set_wheel_zoom_enabled(true);
    host.redraw().expect("redraw");
    assert_eq!(host.renderer().last_rect_count, 0);
}

#[test]
fn host_rejects_invalid_geometry() {
    let err = PresentationHost::new(
        NullRenderer::default(),
        Viewport::new(0, 100),
        ChartPresentationConfig::default(),
    )
    .err()
    .expect("invalid viewport");
    assert!(matches!(
        err,
        ChartError::InvalidViewport {
            width: 0,
            height: 100
        }
    ));

    let mut host = host();
    assert!(
        host.set_chart_area(ChartArea::new(10.0, 10.0, 900.0, 100.0))
            .is_err()
    );
    assert!(
        host.set_chart_area(ChartArea::new(f64::NAN, 10.0, 10.0, 10.0))
            .is_err()
    );
    assert_eq!(host.chart_area(), ChartArea::new(40.0, 60.0, 720.0, 300.0));

    host.set_viewport(Viewport::new(1024, 512)).expect("resize");
    assert_eq!(host.chart_area(), ChartArea::new(0.0, 0.0, 1024.0, 512.0));
}

#[test]
fn replacing_config_applies_on_next_redraw() {
    let mut host = host();
    host.redraw().expect("redraw 1");

    host.set_config(
        ChartPresentationConfig::default().with_zoom(ZoomConfig::default().with_wheel_enabled(true)),
    );
    host.redraw().expect("redraw 2");

    let renderer = host.into_renderer();
    assert_eq!(renderer.frames_rendered, 2);
    assert_eq!(renderer.last_rect_count, 1);
}

#[test]
fn renderer_rejects_frames_with_invalid_rects() {
    let viewport = Viewport::new(200, 100);
    let area = ChartArea::from_viewport(viewport);
    let fill = Color::rgb8(0x6c, 0x75, 0x7d);
    let mut renderer = NullRenderer::default();

    let frame = RenderFrame::new(viewport, area).with_rect(RectPrimitive::filled(
        0.0, 0.0, 20.0, 10.0, fill,
    ));
    renderer.render(&frame).expect("valid frame");
    assert_eq!(renderer.last_rect_count, 1);

    let broken = frame.with_rect(RectPrimitive::filled(0.0, 0.0, -5.0, 10.0, fill));
    assert!(renderer.render(&broken).is_err());
    assert_eq!(renderer.frames_rendered, 1);
}
