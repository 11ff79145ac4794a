#[cfg(feature = "cairo-backend")]
use bidir_bar_chart::api::{BarChartEngine, ChartConfig};
#[cfg(feature = "cairo-backend")]
use bidir_bar_chart::core::{DataPoint, Viewport};
#[cfg(feature = "cairo-backend")]
use std::fs;
#[cfg(feature = "cairo-backend")]
use std::path::PathBuf;

#[cfg(feature = "cairo-backend")]
const DEFAULT_OUTPUT_PATH: &str = "bar_chart.png";
#[cfg(feature = "cairo-backend")]
const DEFAULT_WIDTH: u32 = 550;
#[cfg(feature = "cairo-backend")]
const DEFAULT_HEIGHT: u32 = 300;

#[cfg(feature = "cairo-backend")]
const SAMPLE_POINTS: [(f64, f64); 15] = [
    (94.0, 80.0),
    (106.0, 80.0),
    (94.0, 76.0),
    (150.0, 90.0),
    (120.0, 70.0),
    (94.0, 80.0),
    (106.0, 80.0),
    (94.0, 76.0),
    (150.0, 90.0),
    (120.0, 70.0),
    (94.0, 80.0),
    (106.0, 80.0),
    (94.0, 76.0),
    (150.0, 90.0),
    (120.0, 70.0),
];

#[cfg(feature = "cairo-backend")]
#[derive(Debug)]
struct CliArgs {
    output_path: PathBuf,
    config_path: Option<PathBuf>,
    data_path: Option<PathBuf>,
    width: u32,
    height: u32,
    scroll_offset_px: f64,
}

#[cfg(feature = "cairo-backend")]
fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cairo-backend"))]
fn main() {
    eprintln!("this tool requires feature `cairo-backend`");
    std::process::exit(1);
}

#[cfg(feature = "cairo-backend")]
fn run() -> Result<(), String> {
    use bidir_bar_chart::render::{CairoRenderer, PangoTextMeasurer};

    let _ = bidir_bar_chart::telemetry::init_default_tracing();
    let args = parse_args()?;

    let config = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read config `{}`: {err}", path.display()))?;
            ChartConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => ChartConfig::default(),
    };

    let points = match &args.data_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read data `{}`: {err}", path.display()))?;
            serde_json::from_str::<Vec<DataPoint>>(&raw)
                .map_err(|err| format!("failed to parse data json: {err}"))?
        }
        None => SAMPLE_POINTS
            .iter()
            .map(|&(high, low)| DataPoint::new(high, low))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| err.to_string())?,
    };

    let width = i32::try_from(args.width).map_err(|_| "width is too large".to_owned())?;
    let height = i32::try_from(args.height).map_err(|_| "height is too large".to_owned())?;
    let mut renderer = CairoRenderer::new(width, height).map_err(|err| err.to_string())?;
    renderer
        .set_clear_color(config.colors.background)
        .map_err(|err| err.to_string())?;
    let measurer = PangoTextMeasurer::new().map_err(|err| err.to_string())?;

    let mut engine = BarChartEngine::new(renderer, config, Viewport::new(args.width, args.height))
        .map_err(|err| err.to_string())?
        .with_text_measurer(measurer);
    engine.set_data(points).map_err(|err| err.to_string())?;
    engine.scroll_to(args.scroll_offset_px);
    engine.render().map_err(|err| err.to_string())?;

    let renderer = engine.into_renderer();
    renderer
        .write_png(&args.output_path)
        .map_err(|err| err.to_string())?;
    let stats = renderer.last_stats();
    println!(
        "wrote `{}` (lines={}, rects={}, texts={})",
        args.output_path.display(),
        stats.lines_drawn,
        stats.rects_drawn,
        stats.texts_drawn
    );
    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn parse_args() -> Result<CliArgs, String> {
    let mut output_path = PathBuf::from(DEFAULT_OUTPUT_PATH);
    let mut config_path: Option<PathBuf> = None;
    let mut data_path: Option<PathBuf> = None;
    let mut width = DEFAULT_WIDTH;
    let mut height = DEFAULT_HEIGHT;
    let mut scroll_offset_px = 0.0;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output_path = PathBuf::from(value);
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config_path = Some(PathBuf::from(value));
            }
            "--data" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --data".to_owned())?;
                data_path = Some(PathBuf::from(value));
            }
            "--width" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --width".to_owned())?;
                width = value
                    .parse()
                    .map_err(|err| format!("invalid --width `{value}`: {err}"))?;
            }
            "--height" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --height".to_owned())?;
                height = value
                    .parse()
                    .map_err(|err| format!("invalid --height `{value}`: {err}"))?;
            }
            "--scroll" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --scroll".to_owned())?;
                scroll_offset_px = value
                    .parse()
                    .map_err(|err| format!("invalid --scroll `{value}`: {err}"))?;
            }
            "--help" | "-h" => {
                println!("{}", usage_message());
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    Ok(CliArgs {
        output_path,
        config_path,
        data_path,
        width,
        height,
        scroll_offset_px,
    })
}

#[cfg(feature = "cairo-backend")]
fn usage_message() -> String {
    format!(
        "usage: render_bar_chart_png [--output PATH] [--config CONFIG.json] [--data POINTS.json] \
         [--width PX] [--height PX] [--scroll PX]\n\
         defaults: --output {DEFAULT_OUTPUT_PATH} --width {DEFAULT_WIDTH} --height {DEFAULT_HEIGHT}"
    )
}
