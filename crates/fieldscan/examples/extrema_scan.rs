//! Example: locate highs and lows in a pressure-like field.
//!
//! By default a synthetic mean-sea-level pressure field is generated from a
//! few Gaussian highs and lows. With `--input` a grayscale PNG is scanned
//! instead, intensity taken as the field value.
//!
//! Writes `extrema.json` (coordinates and counts) and `extrema_map.png`
//! (maxima white, minima black, background gray) into `--out`.
//!
//! Run from the workspace root:
//!   cargo run -p fieldscan --example extrema_scan -- --help
//!   RUST_LOG=debug cargo run -p fieldscan --example extrema_scan -- --parallel

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use fieldscan::{Coord, Extrema, ExtremaScanner, Grid, OverflowPolicy, ScanConfig};
use image::{GrayImage, ImageReader, Luma};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(about = "Find local maxima and minima of a 2D scalar field")]
struct Args {
    /// Grayscale PNG to scan; a synthetic field is used when omitted
    #[arg(long)]
    input: Option<PathBuf>,

    /// Rows of the synthetic field
    #[arg(long, default_value_t = 91)]
    rows: usize,

    /// Columns of the synthetic field
    #[arg(long, default_value_t = 180)]
    cols: usize,

    /// Maximum coordinates recorded per list
    #[arg(long, default_value_t = 1000, allow_negative_numbers = true)]
    capacity: i64,

    /// Keep marking the map after a list is full
    #[arg(long)]
    mark_only: bool,

    /// Classify rows in parallel
    #[arg(long)]
    parallel: bool,

    /// Output directory
    #[arg(long, default_value = "extrema_out")]
    out: PathBuf,
}

// ── JSON DTOs ─────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct CoordDto {
    row: usize,
    col: usize,
    value: f32,
}

#[derive(Serialize)]
struct Report {
    rows: usize,
    cols: usize,
    capacity: i64,
    overflow: &'static str,
    elapsed_ms: f64,
    maxima: Vec<CoordDto>,
    minima: Vec<CoordDto>,
    dropped_maxima: usize,
    dropped_minima: usize,
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Pressure in Pa around 1013 hPa with alternating highs and lows.
fn synthetic_pressure(rows: usize, cols: usize) -> Grid<f32> {
    let centers = [
        (0.25f32, 0.20f32, 2400.0f32, 0.08f32),
        (0.60, 0.45, -3100.0, 0.06),
        (0.35, 0.75, 1800.0, 0.10),
        (0.80, 0.15, -1500.0, 0.05),
        (0.70, 0.85, -2200.0, 0.07),
    ];

    Grid::from_fn(rows, cols, |r, c| {
        let y = r as f32 / rows.max(1) as f32;
        let x = c as f32 / cols.max(1) as f32;
        let anomaly: f32 = centers
            .iter()
            .map(|&(cy, cx, amp, sigma)| {
                let d2 = (y - cy).powi(2) + (x - cx).powi(2);
                amp * (-d2 / (2.0 * sigma * sigma)).exp()
            })
            .sum();
        // Rounded to whole Pa, as reanalysis pressure fields are stored.
        (101_300.0 + anomaly).round()
    })
}

fn load_png(path: &Path) -> Result<Grid<f32>> {
    let gray = ImageReader::open(path)
        .with_context(|| format!("opening {}", path.display()))?
        .decode()
        .with_context(|| format!("decoding {}", path.display()))?
        .into_luma8();

    let (cols, rows) = (gray.width() as usize, gray.height() as usize);
    let data = gray.as_raw().iter().map(|&v| v as f32).collect();
    Grid::from_vec(rows, cols, data).context("building grid from PNG")
}

fn to_dtos(coords: &[Coord], grid: &Grid<f32>) -> Vec<CoordDto> {
    coords
        .iter()
        .map(|at| CoordDto {
            row: at.row,
            col: at.col,
            value: grid.get(at.row, at.col).copied().unwrap_or(f32::NAN),
        })
        .collect()
}

fn save_map(path: &Path, map: &Grid<i8>) -> Result<()> {
    let mut img = GrayImage::new(map.cols() as u32, map.rows() as u32);
    for (idx, &mark) in map.data().iter().enumerate() {
        let (r, c) = (idx / map.cols(), idx % map.cols());
        let v = match mark {
            1 => 255u8,
            -1 => 0u8,
            _ => 128u8,
        };
        img.put_pixel(c as u32, r as u32, Luma([v]));
    }
    img.save(path)
        .with_context(|| format!("writing {}", path.display()))
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let args = Args::parse();

    let grid = match &args.input {
        Some(path) => load_png(path)?,
        None => synthetic_pressure(args.rows, args.cols),
    };
    info!(rows = grid.rows(), cols = grid.cols(), "field ready");

    let overflow = if args.mark_only {
        OverflowPolicy::MarkOnly
    } else {
        OverflowPolicy::Truncate
    };
    let cfg = ScanConfig {
        overflow,
        ..ScanConfig::try_with_capacity(args.capacity)?
    };
    let scanner = ExtremaScanner::new(cfg);

    let mut map = Grid::new_fill(grid.rows(), grid.cols(), 0i8);
    let mut extrema = Extrema::for_grid(&cfg, grid.rows(), grid.cols());

    let t0 = Instant::now();
    if args.parallel {
        scanner.scan_par(&grid.as_view(), &mut map.as_view_mut(), &mut extrema)?;
    } else {
        scanner.scan_into(&grid.as_view(), &mut map.as_view_mut(), &mut extrema)?;
    }
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1e3;

    info!(
        maxima = extrema.maxima.len(),
        minima = extrema.minima.len(),
        truncated = extrema.is_truncated(),
        elapsed_ms,
        "scan finished"
    );

    fs::create_dir_all(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;

    let report = Report {
        rows: grid.rows(),
        cols: grid.cols(),
        capacity: args.capacity,
        overflow: match overflow {
            OverflowPolicy::Truncate => "truncate",
            OverflowPolicy::MarkOnly => "mark_only",
        },
        elapsed_ms,
        maxima: to_dtos(&extrema.maxima, &grid),
        minima: to_dtos(&extrema.minima, &grid),
        dropped_maxima: extrema.dropped_maxima,
        dropped_minima: extrema.dropped_minima,
    };

    let json_path = args.out.join("extrema.json");
    let out_file =
        fs::File::create(&json_path).with_context(|| format!("creating {}", json_path.display()))?;
    serde_json::to_writer_pretty(out_file, &report)
        .with_context(|| format!("writing JSON to {}", json_path.display()))?;

    save_map(&args.out.join("extrema_map.png"), &map)?;

    info!(out = %args.out.display(), "results written");
    Ok(())
}
