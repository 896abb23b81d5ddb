// File: crates/tufte-demo/src/main.rs
// Summary: Demo loads two CSV columns and renders one Tufte-styled graph to an image file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info, warn};
use tufte_core::render::RenderOptions;
use tufte_core::style::find;
use tufte_core::{Graph, GraphKind, Series, StepWhere, ValueLabels};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Kind {
    Line,
    Scatter,
    Step,
    Hbar,
    Vbar,
}

impl Kind {
    fn graph_kind(self) -> GraphKind {
        match self {
            Kind::Line => GraphKind::Line,
            Kind::Scatter => GraphKind::Scatter,
            Kind::Step => GraphKind::Step(StepWhere::Pre),
            Kind::Hbar => GraphKind::HorizontalBar,
            Kind::Vbar => GraphKind::VerticalBar,
        }
    }

    fn is_bar(self) -> bool { matches!(self, Kind::Hbar | Kind::Vbar) }
}

#[derive(Parser)]
#[command(name = "tufte-demo")]
#[command(about = "Render two CSV columns as a Tufte-styled graph")]
struct Cli {
    /// Input CSV file (first row is treated as headers)
    csv: PathBuf,
    /// Graph variant
    #[arg(long, value_enum, default_value = "line")]
    kind: Kind,
    /// Column holding x values (category names for bar graphs)
    #[arg(long, default_value_t = 0)]
    x_column: usize,
    /// Column holding y values
    #[arg(long, default_value_t = 1)]
    y_column: usize,
    /// Output image; png, jpg or bmp by extension. Defaults to target/out/tufte_<stem>_<kind>.png
    #[arg(long)]
    out: Option<PathBuf>,
    /// Graph title (defaults to the y column header)
    #[arg(long)]
    title: Option<String>,
    /// Keep full-length spines instead of limiting them to the data
    #[arg(long)]
    no_limit_spines: bool,
    /// Style sheet name (tufte or base)
    #[arg(long, default_value = "tufte")]
    theme: String,
    /// Figure width in pixels
    #[arg(long, default_value_t = 1024)]
    width: i32,
    /// Figure height in pixels
    #[arg(long, default_value_t = 640)]
    height: i32,
    /// Log filter, e.g. info or tufte_core=debug (overridden by RUST_LOG)
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Columns read from the CSV file.
struct Columns {
    x_header: String,
    y_header: String,
    x: Vec<String>,
    y: Vec<f64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let columns = load_columns(&cli.csv, cli.x_column, cli.y_column)
        .with_context(|| format!("failed to load CSV '{}'", cli.csv.display()))?;
    info!(rows = columns.y.len(), x = %columns.x_header, y = %columns.y_header, "loaded columns");
    if columns.y.is_empty() {
        anyhow::bail!("no numeric rows in columns {} and {}", cli.x_column, cli.y_column);
    }

    let opts = RenderOptions { width: cli.width, height: cli.height, ..RenderOptions::default() };
    let mut graph = Graph::with_stylesheet(cli.kind.graph_kind(), find(&cli.theme)).with_options(opts);
    graph.add(build_series(cli.kind, &columns)?).context("adding series")?;
    graph.title(cli.title.clone().unwrap_or_else(|| columns.y_header.clone()));
    if cli.kind.is_bar() {
        graph.show_values(ValueLabels::default())?;
        if cli.kind == Kind::Vbar {
            graph.rotate_xlabels(0.8);
        }
    } else {
        graph.x_label(&columns.x_header).y_label(&columns.y_header);
    }
    if !cli.no_limit_spines {
        graph.limit_spines().context("limiting spines")?;
    }

    let out = cli.out.clone().unwrap_or_else(|| out_name_with(&cli.csv, cli.kind));
    graph.save(&out).with_context(|| format!("writing {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}

fn init_tracing(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    if tracing_subscriber::fmt().with_env_filter(filter).with_target(false).compact().try_init().is_err() {
        eprintln!("tracing subscriber already installed");
    }
}

fn build_series(kind: Kind, columns: &Columns) -> Result<Series> {
    if kind.is_bar() {
        return Ok(Series::categorical(columns.x.iter().cloned(), columns.y.clone()));
    }
    let x = columns
        .x
        .iter()
        .enumerate()
        .map(|(row, s)| {
            s.trim()
                .parse::<f64>()
                .with_context(|| format!("row {}: x value '{}' is not a number", row + 1, s))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Series::new(x, columns.y.clone()))
}

/// Read the x column as text and the y column as numbers. Rows with a missing or
/// non-numeric y value are skipped.
fn load_columns(path: &Path, x_column: usize, y_column: usize) -> Result<Columns> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.clone();
    debug!(?headers, "csv headers");
    let header = |i: usize| headers.get(i).map(|h| h.trim().to_string()).unwrap_or_else(|| format!("column {i}"));
    let (x_header, y_header) = (header(x_column), header(y_column));

    let mut x = Vec::new();
    let mut y = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("reading row {}", row + 1))?;
        let value = rec.get(y_column).and_then(|s| s.trim().parse::<f64>().ok());
        match (rec.get(x_column), value) {
            (Some(xv), Some(yv)) => {
                x.push(xv.trim().to_string());
                y.push(yv);
            }
            _ => warn!(row = row + 1, "skipping row without usable values"),
        }
    }
    Ok(Columns { x_header, y_header, x, y })
}

/// Produce output file name like target/out/tufte_<stem>_<kind>.png
fn out_name_with(input: &Path, kind: Kind) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("graph");
    let kind = format!("{kind:?}").to_lowercase();
    PathBuf::from("target/out").join(format!("tufte_{stem}_{kind}.png"))
}
