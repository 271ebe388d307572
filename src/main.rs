use anyhow::{Context, Result, bail};
use clap::Parser;
use env_logger::Builder;
use indicatif::{ProgressBar, ProgressStyle};
use log::{LevelFilter, debug, info, warn};
use std::io::Read;
use std::path::{Path, PathBuf};

use polycheck::config::{DEFAULT_OUTPUT, FileConfig};
use polycheck::input::{parse_pixel, parse_point, parse_points, parse_polygon};
use polycheck::render::{self, Probe, Report, Scene, describe, write_svg};
use polycheck::{GeoPoint, Viewport};

/// Batches at least this large get a progress bar
const PROGRESS_THRESHOLD: usize = 10_000;

/// Render a lat/lng polygon to SVG and test points for containment
///
/// Examples:
///   # Draw a polygon and test one point
///   polycheck -p area.txt --point "2,2"
///
///   # Test a batch of points, JSON output, no rendering
///   polycheck -p area.txt --points-file queries.txt --json --no-render
///
///   # Test the location under a pixel of a 1024x768 rendering
///   polycheck -p area.txt -W 1024 -H 768 --pixel 512,300 -o area.svg
///
/// Polygon and point files hold one "lat,lng" pair per line.
#[derive(Parser, Debug)]
#[command(name = "polycheck")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches polycheck.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Polygon file, one "lat,lng" vertex per line ("-" reads stdin)
    #[arg(short = 'p', long)]
    polygon: PathBuf,

    /// Query point as "lat,lng" (repeatable)
    #[arg(short = 'q', long = "point", allow_hyphen_values = true)]
    points: Vec<String>,

    /// File of query points, one "lat,lng" per line
    #[arg(long)]
    points_file: Option<PathBuf>,

    /// Pixel position "x,y" to map back to coordinates and test (repeatable)
    #[arg(long = "pixel", allow_hyphen_values = true)]
    pixels: Vec<String>,

    /// Viewport width in pixels
    #[arg(short = 'W', long)]
    width: Option<f64>,

    /// Viewport height in pixels
    #[arg(short = 'H', long)]
    height: Option<f64>,

    /// Number of background grid divisions per axis
    #[arg(long)]
    grid: Option<u32>,

    /// Output SVG file path (defaults to polygon.svg)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Skip writing the SVG rendering
    #[arg(long)]
    no_render: bool,

    /// Print a JSON report instead of text
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (file_config, skipped) = match args.config {
        Some(ref path) => {
            if !path.exists() {
                bail!("Config file not found: {:?}", path);
            }
            (FileConfig::from_path(path)?, Vec::new())
        }
        None => {
            let discovered = FileConfig::load();
            (discovered.config.unwrap_or_default(), discovered.skipped)
        }
    };

    let verbose = args.verbose || file_config.verbose;
    init_logger(verbose);
    for message in &skipped {
        warn!("{}", message);
    }

    let json = args.json || file_config.json;
    let width = args.width.unwrap_or(file_config.width);
    let height = args.height.unwrap_or(file_config.height);
    let grid_divisions = args.grid.unwrap_or(file_config.grid_divisions);
    let output = args
        .output
        .clone()
        .or_else(|| file_config.output.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
        bail!(
            "Viewport must have a positive size, got {}x{}",
            width,
            height
        );
    }
    let viewport = Viewport::new(width, height);

    debug!("Polygon: {}", args.polygon.display());
    debug!("Viewport: {}x{}", width, height);
    debug!("Grid divisions: {}", grid_divisions);
    debug!(
        "Output: {}",
        if args.no_render {
            "disabled".to_string()
        } else {
            output.display().to_string()
        }
    );

    let polygon_text = read_input(&args.polygon)?;
    let polygon = parse_polygon(&polygon_text)
        .with_context(|| format!("Invalid polygon in {}", args.polygon.display()))?;
    let scene = Scene::new(polygon, viewport);

    let mut queries: Vec<GeoPoint> = args
        .points
        .iter()
        .map(|text| parse_point(text).with_context(|| format!("Invalid point: {:?}", text)))
        .collect::<Result<_>>()?;

    if let Some(ref path) = args.points_file {
        let text = read_input(path)?;
        let batch = parse_points(&text).context("Invalid points file")?;
        info!("Loaded {} query points from {}", batch.len(), path.display());
        queries.extend(batch);
    }

    let mut probes = probe_all(&scene, &queries, !json);
    for text in &args.pixels {
        let pixel = parse_pixel(text).with_context(|| format!("Invalid pixel: {:?}", text))?;
        probes.push(scene.probe_pixel(pixel));
    }

    if json {
        let report = Report::new(&scene, &probes);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&scene);
        for probe in &probes {
            println!("{}", describe(probe));
        }
    }

    if !args.no_render {
        let commands = render::draw(&scene, grid_divisions, &probes);
        write_svg(&output, scene.viewport(), &commands).context("Failed to write SVG file")?;
        if json {
            info!("Wrote {}", output.display());
        } else {
            println!();
            println!("Output: {}", output.display());
        }
    }

    Ok(())
}

fn init_logger(verbose: bool) {
    let mut builder = Builder::new();
    builder.filter_level(if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn probe_all(scene: &Scene, queries: &[GeoPoint], show_progress: bool) -> Vec<Probe> {
    if !show_progress || queries.len() < PROGRESS_THRESHOLD {
        return queries.iter().map(|&q| scene.probe(q)).collect();
    }

    let bar = create_progress_bar(queries.len() as u64);
    let probes = queries
        .iter()
        .map(|&q| {
            bar.inc(1);
            scene.probe(q)
        })
        .collect();
    bar.finish_with_message("Tested points");
    probes
}

fn print_summary(scene: &Scene) {
    let polygon = scene.polygon();
    let bounds = scene.bounds();

    println!("polycheck - Point in Polygon");
    println!("============================");
    println!();
    println!("Polygon: {} vertices", polygon.len());
    println!(
        "Bounds:  lat [{:.6}, {:.6}]  lng [{:.6}, {:.6}]",
        bounds.min_lat, bounds.max_lat, bounds.min_lng, bounds.max_lng
    );
    println!(
        "Canvas:  {}x{} px",
        scene.viewport().width,
        scene.viewport().height
    );
    println!();
}

fn create_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} [{bar:40}] {pos}/{len} {msg}")
    {
        pb.set_style(style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]));
    }
    pb.set_message("Testing points...");
    pb
}
