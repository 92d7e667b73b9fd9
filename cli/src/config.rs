use std::path::{Path, PathBuf};

use clap::builder::RangedU64ValueParser;
use clap::Args;
use edge_graph_core::DEFAULT_CAPACITY;

pub const DEFAULT_DATA_DIR: &str = "data";

/// Upper bound accepted for `--capacity`.
pub const MAX_CAPACITY: u64 = 100_000;

/// Settings shared by every subcommand. Each one falls back to an
/// environment variable, then to its default.
#[derive(Args, Debug, Clone)]
pub struct Settings {
    /// Directory that relative map names are resolved against
    #[arg(long, global = true, env = "EDGE_GRAPH_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Maximum number of intersections a map may hold
    #[arg(
        long,
        global = true,
        env = "EDGE_GRAPH_CAPACITY",
        default_value_t = DEFAULT_CAPACITY,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_CAPACITY)
    )]
    pub capacity: usize,

    /// Log filter, e.g. "debug" or "edge_graph_core=trace"
    #[arg(long, global = true, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

impl Settings {
    /// Absolute map paths are used as given; relative ones live under `data_dir`.
    pub fn map_path(&self, map: &Path) -> PathBuf {
        if map.is_absolute() {
            map.to_path_buf()
        } else {
            self.data_dir.join(map)
        }
    }
}
