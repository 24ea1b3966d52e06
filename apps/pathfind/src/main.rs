//! pathfind: fastest, shortest and balanced routes for a fixture directory.
//!
//! Reads `demand.txt` and every `map_HHMM.csv` under `--test-path`, routes
//! the demand on each snapshot under all three weight modes and prints the
//! results.  Results are cached on disk keyed by the snapshot's signature.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use rn_cache::{CacheConfig, PathCache};
use rn_congestion::BprParams;
use rn_io::{find_case_files, load_records, read_demand, snapshot_time};
use rn_network::{
    DijkstraRouter, MultiPath, NetworkError, PathWeights, RoadNetwork, WeightMode, plan_all,
};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_CACHE_DIR:  &str = ".cache";
const DEFAULT_CACHE_SIZE: usize = 50;
const BANNER_WIDTH:       usize = 60;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "pathfind", about = "Route a fixture's demand on every snapshot", long_about = None)]
struct Cli {
    /// Fixture directory holding a demand file and map_HHMM.csv snapshots
    #[arg(long, required_unless_present = "clear_cache")]
    test_path: Option<PathBuf>,

    /// Compute every route, neither reading nor writing the cache
    #[arg(long)]
    no_cache: bool,

    /// Delete every cached result and exit
    #[arg(long, conflicts_with_all = ["test_path", "no_cache"])]
    clear_cache: bool,

    #[arg(long, default_value = DEFAULT_CACHE_DIR)]
    cache_dir: PathBuf,

    /// Maximum number of cached results
    #[arg(long, default_value_t = DEFAULT_CACHE_SIZE)]
    cache_size: usize,
}

/// Where a snapshot's routes came from.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Source {
    Hit,
    Miss,
    Disabled,
}

impl Source {
    fn as_str(self) -> &'static str {
        match self {
            Source::Hit      => "cache hit",
            Source::Miss     => "computed",
            Source::Disabled => "computed (cache disabled)",
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let cli = Cli::parse();

    let config = CacheConfig { dir: cli.cache_dir.clone(), max_entries: cli.cache_size };

    if cli.clear_cache {
        let mut cache = PathCache::open(config).context("opening path cache")?;
        let removed = cache.len();
        cache.clear().context("clearing path cache")?;
        println!("Cleared {removed} cached result(s) from {}", cli.cache_dir.display());
        return Ok(());
    }

    let Some(test_path) = cli.test_path else {
        anyhow::bail!("--test-path is required");
    };

    let files = find_case_files(&test_path)
        .with_context(|| format!("scanning {}", test_path.display()))?;
    let demand = read_demand(&files.demand)
        .with_context(|| format!("reading {}", files.demand.display()))?;

    println!("=== pathfind ===");
    println!("Fixture:   {}", test_path.display());
    println!("Request:   {} → {}", demand.start, demand.end);
    if let Some(desc) = &demand.description {
        println!("           {desc}");
    }
    println!("Snapshots: {}", files.snapshots.len());

    let mut cache = if cli.no_cache {
        None
    } else {
        Some(PathCache::open(config).context("opening path cache")?)
    };

    for snapshot in &files.snapshots {
        print_banner(snapshot);

        let cached = match cache.as_mut() {
            Some(c) => c.get(&demand.start, &demand.end, snapshot)?,
            None => None,
        };
        let (paths, source) = match cached {
            Some(paths) => (paths, Source::Hit),
            None => {
                let Some(paths) = compute(snapshot, &demand.start, &demand.end)? else {
                    continue;
                };
                if let Some(c) = cache.as_mut() {
                    c.put(&demand.start, &demand.end, snapshot, &paths)?;
                }
                let source = if cache.is_some() { Source::Miss } else { Source::Disabled };
                (paths, source)
            }
        };

        println!("Source: {}", source.as_str());
        print_paths(&paths);
    }

    if let Some(c) = &cache {
        let stats = c.stats();
        println!();
        println!("Cache: {} hit(s), {} miss(es), {} entr(ies) in {}",
            stats.hits, stats.misses, stats.entries, c.dir().display());
    }
    Ok(())
}

/// Route the demand on one snapshot.  `None` when an endpoint does not
/// appear in the snapshot.
fn compute(snapshot: &Path, start: &str, end: &str) -> Result<Option<MultiPath>> {
    let records = load_records(snapshot)
        .with_context(|| format!("loading {}", snapshot.display()))?;
    let network = RoadNetwork::from_records(&records, &BprParams::default(), PathWeights::default());
    info!(
        snapshot = %snapshot.display(),
        nodes = network.node_count(),
        edges = network.edge_count(),
        "network built"
    );

    match plan_all(&DijkstraRouter, &network, start, end) {
        Ok(paths) => Ok(Some(paths)),
        Err(NetworkError::UnknownNode(name)) => {
            warn!(snapshot = %snapshot.display(), point = %name, "point not in snapshot; skipping");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

fn print_banner(snapshot: &Path) {
    let label = match snapshot_time(snapshot) {
        Some(t) => format!("Snapshot {t}"),
        None => format!("Snapshot {}", snapshot.display()),
    };
    println!();
    println!("{}", "─".repeat(BANNER_WIDTH));
    println!("{label}");
    println!("{}", "─".repeat(BANNER_WIDTH));
}

fn print_paths(paths: &MultiPath) {
    for mode in WeightMode::ALL {
        match paths.get(mode) {
            Some(p) => {
                println!("  {:<9} {}", mode.as_str(), p.nodes.join(" -> "));
                println!(
                    "  {:<9} {:.1} min, {:.2} km",
                    "",
                    p.total_time_secs / 60.0,
                    p.total_length_m / 1_000.0
                );
            }
            None => println!("  {:<9} no route", mode.as_str()),
        }
    }
}
