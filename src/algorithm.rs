use crate::assign::assign_clusters;
use crate::config::KMeansConfig;
use crate::error::KMeansError;
use crate::init::{check_initial_centroids, initialize_centroids};
use crate::metric::{Bounded, Metric};
use crate::update::update_centroids;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Result of the k-means algorithm
#[derive(Debug, Clone, PartialEq)]
pub struct KMeansResult<T> {
    /// Final centroids; `centroids[i]` is the centroid of `clusters[i]`
    pub centroids: Vec<T>,
    /// Dataset items grouped by nearest centroid
    pub clusters: Vec<Vec<T>>,
    /// Cluster index of every dataset item, in dataset order
    pub labels: Vec<usize>,
    pub n_iterations: usize,
}

impl<T: Metric> KMeansResult<T> {
    /// Sum of squared distances from every item to its centroid
    pub fn inertia(&self) -> f64 {
        self.clusters
            .iter()
            .zip(self.centroids.iter())
            .flat_map(|(cluster, centroid)| cluster.iter().map(move |item| item.distance(centroid)))
            .map(|d| d * d)
            .sum()
    }
}

/// Cluster `dataset` into `k` groups with the default configuration
pub fn run_kmeans<T: Bounded>(dataset: &[T], k: usize) -> Result<KMeansResult<T>, KMeansError> {
    let config = KMeansConfig::new(k);
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    kmeans_lloyd(dataset, &config, &mut rng)
}

/// Run Lloyd's algorithm, drawing the initial centroids with `config.init`
pub fn kmeans_lloyd<T, R>(
    dataset: &[T],
    config: &KMeansConfig,
    rng: &mut R,
) -> Result<KMeansResult<T>, KMeansError>
where
    T: Bounded,
    R: Rng + ?Sized,
{
    let centroids = initialize_centroids(dataset, config, rng)?;
    iterate(dataset, centroids, config, rng)
}

/// Run Lloyd's algorithm from caller-supplied initial centroids.
///
/// `initial.len()` takes precedence over `config.k`.
pub fn kmeans_from_centroids<T, R>(
    dataset: &[T],
    initial: Vec<T>,
    config: &KMeansConfig,
    rng: &mut R,
) -> Result<KMeansResult<T>, KMeansError>
where
    T: Metric,
    R: Rng + ?Sized,
{
    check_initial_centroids(dataset, &initial)?;
    iterate(dataset, initial, config, rng)
}

/// Largest distance moved by any centroid
fn centroid_shift<T: Metric>(old: &[T], new: &[T]) -> f64 {
    old.iter()
        .zip(new.iter())
        .map(|(a, b)| a.distance(b))
        .fold(0.0, f64::max)
}

fn has_converged<T: Metric>(current: &[T], candidate: &[T], tol: f64) -> bool {
    if tol > 0.0 {
        centroid_shift(current, candidate) <= tol
    } else {
        current == candidate
    }
}

/// Assign/update until the centroid set stops changing.
///
/// On success the returned centroids are the ones the returned clusters were
/// assigned against, so assigning the dataset again reproduces the clusters.
fn iterate<T, R>(
    dataset: &[T],
    mut centroids: Vec<T>,
    config: &KMeansConfig,
    rng: &mut R,
) -> Result<KMeansResult<T>, KMeansError>
where
    T: Metric,
    R: Rng + ?Sized,
{
    let k = centroids.len();
    info!(
        n_samples = dataset.len(),
        k = k,
        init = ?config.init,
        tol = config.tol,
        "training k-means"
    );

    let mut iteration = 0usize;
    loop {
        if let Some(max_iters) = config.max_iters {
            if iteration >= max_iters {
                warn!(max_iters = max_iters, "k-means did not converge within iteration limit");
                return Err(KMeansError::DidNotConverge {
                    iterations: iteration,
                });
            }
        }

        let iter_start = Instant::now();
        iteration += 1;

        let (clusters, labels) = assign_clusters(dataset, &centroids)?;
        let candidate = update_centroids(&clusters, &centroids, dataset, config.empty_cluster, rng)?;
        let shift = centroid_shift(&centroids, &candidate);
        let iter_time = iter_start.elapsed().as_secs_f64();

        if config.verbose {
            info!(iteration = iteration, shift = shift, time = iter_time, "k-means iteration");
        } else {
            debug!(iteration = iteration, shift = shift, time = iter_time, "k-means iteration");
        }

        if has_converged(&centroids, &candidate, config.tol) {
            info!(iterations = iteration, shift = shift, "k-means converged");
            return Ok(KMeansResult {
                centroids,
                clusters,
                labels,
                n_iterations: iteration,
            });
        }

        centroids = candidate;
    }
}
