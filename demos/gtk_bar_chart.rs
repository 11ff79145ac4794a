use bidir_bar_chart::api::{BarChartEngine, ChartConfig};
use bidir_bar_chart::core::{DataPoint, Viewport};
use bidir_bar_chart::platform_gtk::GtkChartAdapter;
use bidir_bar_chart::render::{CairoRenderer, PangoTextMeasurer};
use bidir_bar_chart::ChartResult;
use gtk4 as gtk;
use gtk4::prelude::*;

const SAMPLE_POINTS: [(f64, f64); 5] = [
    (94.0, 80.0),
    (106.0, 80.0),
    (94.0, 76.0),
    (150.0, 90.0),
    (120.0, 70.0),
];

fn main() {
    let _ = bidir_bar_chart::telemetry::init_default_tracing();
    let app = gtk::Application::builder()
        .application_id("rs.bidir_bar_chart.demos.gtk_bar_chart")
        .build();
    app.connect_activate(build_ui);
    app.run();
}

fn build_ui(app: &gtk::Application) {
    let engine = match build_engine() {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("failed to initialize bar chart engine: {err}");
            return;
        }
    };
    let adapter = GtkChartAdapter::new(engine);

    let controls = gtk::Box::new(gtk::Orientation::Horizontal, 8);
    let float_toggle = gtk::ToggleButton::with_label("Float Ruler Labels");
    float_toggle.set_active(true);
    controls.append(&float_toggle);

    float_toggle.connect_toggled({
        let engine = adapter.engine();
        let area = adapter.drawing_area().clone();
        move |toggle| {
            let config = engine.borrow().config().with_float_label(toggle.is_active());
            if let Err(err) = engine.borrow_mut().set_config(config) {
                eprintln!("failed to update config: {err}");
            }
            area.queue_draw();
        }
    });

    let root = gtk::Box::new(gtk::Orientation::Vertical, 8);
    root.append(&controls);
    root.append(adapter.drawing_area());

    let window = gtk::ApplicationWindow::builder()
        .application(app)
        .title("bidir-bar-chart")
        .default_width(550)
        .default_height(340)
        .child(&root)
        .build();
    window.present();
}

fn build_engine() -> ChartResult<BarChartEngine<CairoRenderer>> {
    let renderer = CairoRenderer::new(1, 1)?;
    let config = ChartConfig::default();
    let mut engine = BarChartEngine::new(renderer, config, Viewport::new(550, 300))?
        .with_text_measurer(PangoTextMeasurer::new()?);

    let points = SAMPLE_POINTS
        .iter()
        .cycle()
        .take(15)
        .map(|&(high, low)| DataPoint::new(high, low))
        .collect::<ChartResult<Vec<_>>>()?;
    engine.set_data(points)?;
    Ok(engine)
}
