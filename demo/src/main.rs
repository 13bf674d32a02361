use anyhow::{Context, Result};
use clap::Parser;
use kdindex::KdTree;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Build a KD-tree from a CSV point set and run a nearest neighbor and an
/// orthotope query against it.
#[derive(Debug, Parser)]
#[command(name = "kdindex-demo", version)]
struct Args {
    /// CSV file with one point per line, coordinates separated by commas
    #[arg(long, default_value = "demo/data/points.csv")]
    data: PathBuf,

    /// Query point for the nearest neighbor search
    #[arg(long, default_value = "9,2")]
    query: Coordinates,

    /// Lower corner of the orthotope
    #[arg(long, default_value = "4,2")]
    lower: Coordinates,

    /// Upper corner of the orthotope
    #[arg(long, default_value = "14,16")]
    upper: Coordinates,
}

/// Comma-separated coordinates, e.g. `1.5,-2,3`.
#[derive(Debug, Clone)]
struct Coordinates(Vec<f64>);

impl FromStr for Coordinates {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let coordinates = s
            .split(',')
            .map(|x| {
                x.trim()
                    .parse::<f64>()
                    .with_context(|| format!("invalid coordinate {x:?}"))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Coordinates(coordinates))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // Read the dataset
    let points = read_points(&args.data)?;
    info!("Loaded {} points from {}", points.len(), args.data.display());

    let tree = KdTree::new(points).context("failed to build the tree")?;
    info!("Dimensions: {}", tree.dimensions());
    info!("Tree height: {}", tree.height());

    let Coordinates(query) = &args.query;
    let nearest = tree.nearest_neighbor(query)?;
    println!("Nearest neighbor to {query:?}: {nearest:?}");

    let (Coordinates(lower), Coordinates(upper)) = (&args.lower, &args.upper);
    let in_range = tree.points_in_orthotope(lower, upper)?;
    println!("Points in range {lower:?} -> {upper:?}: {in_range:?}");

    Ok(())
}

fn read_points(path: &Path) -> Result<Vec<Vec<f64>>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let mut points = Vec::new();
    for (number, line) in std::io::BufReader::new(file).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let Coordinates(point) = line
            .parse::<Coordinates>()
            .with_context(|| format!("{}: line {}", path.display(), number + 1))?;
        points.push(point);
    }
    Ok(points)
}
