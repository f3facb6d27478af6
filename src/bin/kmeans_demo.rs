//! Clusters the two demo datasets and prints centroids and clusters.
//!
//! Usage: `kmeans-demo <scalar|points> <k> <seed> [sample|range] [--verbose]`

use lloyd_kmeans::{Bounded, InitStrategy, KMeans, KMeansConfig, Point2};
use std::env;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

const SCALARS: [f64; 25] = [
    1.0, 3.0, 5.0, 7.0, 9.0, 10.0, 12.0, 12.0, 14.0, 15.0, 17.0, 18.0, 19.0, 22.0, 24.0, 26.0,
    27.0, 29.0, 30.0, 31.0, 32.0, 35.0, 37.0, 49.0, 59.0,
];

const POINTS: [(f64, f64); 12] = [
    (11.0, 52.0),
    (43.0, 24.0),
    (5.0, 57.0),
    (52.0, 4.0),
    (94.0, 22.0),
    (15.0, 56.0),
    (21.0, 47.0),
    (50.0, 14.0),
    (2.0, 86.0),
    (92.0, 25.0),
    (14.0, 34.0),
    (22.0, 27.0),
];

fn report<T: Bounded>(data: &[T], config: KMeansConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut kmeans = KMeans::with_config(config);
    kmeans.train(data)?;

    let result = kmeans.result().ok_or("No result after training")?;
    println!(
        "Converged after {} iterations, inertia = {:.4}",
        result.n_iterations,
        result.inertia()
    );
    for (i, (centroid, cluster)) in result
        .centroids
        .iter()
        .zip(result.clusters.iter())
        .enumerate()
    {
        println!("  Cluster {}: centroid {:?}", i, centroid);
        println!("    {} members: {:?}", cluster.len(), cluster);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 4 {
        eprintln!(
            "Usage: {} <scalar|points> <k> <seed> [sample|range] [--verbose]",
            args[0]
        );
        std::process::exit(1);
    }

    let dataset = args[1].as_str();
    let k: usize = args[2].parse()?;
    if k == 0 {
        return Err("k must be greater than 0".into());
    }
    let seed: u64 = args[3].parse()?;
    let init = match args.get(4).map(String::as_str) {
        None | Some("sample") | Some("--verbose") => InitStrategy::Sample,
        Some("range") => InitStrategy::Range,
        Some(other) => return Err(format!("unknown init strategy: {}", other).into()),
    };
    let verbose = args.iter().any(|a| a == "--verbose");

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if verbose { Level::DEBUG } else { Level::WARN })
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = KMeansConfig::new(k)
        .with_seed(seed)
        .with_init(init)
        .with_verbose(verbose);

    eprintln!(
        "Running k-means on {} data with k={}, seed={}, init={:?}",
        dataset, k, seed, init
    );

    match dataset {
        "scalar" => report(&SCALARS, config),
        "points" => {
            let points: Vec<Point2> = POINTS.iter().copied().map(Point2::from).collect();
            report(&points, config)
        }
        other => Err(format!("unknown dataset: {} (expected scalar or points)", other).into()),
    }
}
