#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use dash_plot::PlotError;
use dash_plot::api::{Dashboard, DashboardConfig, DrawMode, PanelElement, PlotElement, PlotStyle};
use dash_plot::core::{Sample, Viewport};
use dash_plot::render::{CairoContextRenderer, CairoRenderer, Color};

fn dashboard() -> Dashboard {
    let mut dashboard =
        Dashboard::new(DashboardConfig::new(Viewport::new(400, 300))).expect("dashboard");
    dashboard.register(PanelElement::new(400.0, 300.0, Color::rgb(0.1, 0.1, 0.1)));
    let plot = PlotElement::<f64>::new(400.0, 300.0)
        .with_style(PlotStyle::default().with_draw_mode(DrawMode::PointsAndPolyline))
        .expect("style");
    plot.update_data([
        Sample::new(0.0, 1.0),
        Sample::new(1.0, 3.0),
        Sample::new(2.0, 2.0),
        Sample::new(3.0, f64::NAN),
    ]);
    dashboard.register(plot);
    dashboard
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, PlotError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_panel_polyline_and_points() {
    let mut renderer = CairoRenderer::new(400, 300).expect("renderer");
    let mut dashboard = dashboard();
    dashboard.tick(&mut renderer).expect("tick");

    let stats = renderer.last_stats();
    assert_eq!(stats.rects_drawn, 1);
    assert_eq!(stats.polylines_drawn, 1);
    assert_eq!(stats.points_drawn, 3);
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let mut renderer = CairoRenderer::new(400, 300).expect("renderer");
    let mut dashboard = dashboard();
    dashboard.update_states();
    let frame = dashboard.draw();

    let surface = ImageSurface::create(Format::ARgb32, 400, 300).expect("surface");
    let context = Context::new(&surface).expect("context");
    renderer
        .render_on_cairo_context(&context, &frame)
        .expect("render on external context");
    assert_eq!(renderer.last_stats().points_drawn, 3);
}
