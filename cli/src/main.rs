//! edge-graph: shortest routes and fewest turns over intersection maps.
//!
//! Wraps edge-graph-core with a map loader for `;`/`,` delimited
//! intersection lists and reports, for two intersections, the minimum path
//! length (intersections crossed) and the minimum number of turns.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod intersection;
mod load;
mod report;

use config::Settings;
use intersection::Intersection;
use load::MapGraph;
use report::{RouteReport, StatusReport};

#[derive(Parser, Debug)]
#[command(name = "edge-graph")]
#[command(version, about = "Shortest routes and fewest turns over intersection maps", long_about = None)]
struct Cli {
    #[command(flatten)]
    settings: Settings,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Minimum path length and minimum turns between two intersections
    Route {
        /// Map file (relative names resolve under --data-dir)
        map: PathBuf,
        /// Start cross streets, e.g. "Main,Oak"
        #[arg(long)]
        from: Intersection,
        /// End cross streets
        #[arg(long)]
        to: Intersection,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Load a map and report its size
    Status {
        /// Map file (relative names resolve under --data-dir)
        map: PathBuf,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.settings.log_level);

    match cli.command {
        Commands::Route {
            map,
            from,
            to,
            json,
        } => run_route(&cli.settings, &map, from, to, json),
        Commands::Status { map, json } => run_status(&cli.settings, &map, json),
    }
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn open_map(settings: &Settings, map: &Path) -> Result<MapGraph> {
    let path = settings.map_path(map);
    let graph = load::load_file(&path, settings.capacity)
        .with_context(|| format!("loading map {}", path.display()))?;
    info!(
        path = %path.display(),
        intersections = graph.vertex_count(),
        streets = graph.edge_count(),
        "map loaded"
    );
    Ok(graph)
}

fn run_route(
    settings: &Settings,
    map: &Path,
    from: Intersection,
    to: Intersection,
    json: bool,
) -> Result<()> {
    let mut graph = open_map(settings, map)?;

    if !graph.has_vertex(&from) {
        bail!("start intersection {} does not exist in the map", from);
    }
    if !graph.has_vertex(&to) {
        bail!("end intersection {} does not exist in the map", to);
    }

    let report = RouteReport::compute(&mut graph, from, to)?;
    if !report.is_reachable() {
        info!("no route between {} and {}", report.origination, report.destination);
    }
    print_report(&report, json)
}

fn run_status(settings: &Settings, map: &Path, json: bool) -> Result<()> {
    let graph = open_map(settings, map)?;
    let report = StatusReport::of(&map.display().to_string(), &graph);
    print_report(&report, json)
}

fn print_report<T>(report: &T, json: bool) -> Result<()>
where
    T: serde::Serialize + std::fmt::Display,
{
    println!("{}", render(report, json)?);
    Ok(())
}

fn render<T>(report: &T, json: bool) -> Result<String>
where
    T: serde::Serialize + std::fmt::Display,
{
    if json {
        Ok(serde_json::to_string_pretty(report)?)
    } else {
        Ok(report.to_string())
    }
}
