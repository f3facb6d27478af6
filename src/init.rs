use crate::config::{InitStrategy, KMeansConfig};
use crate::error::KMeansError;
use crate::metric::{Bounded, Metric};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Check the preconditions shared by every initializer: a non-empty dataset
/// of mutually compatible items and `0 < k <= n`.
pub fn validate_inputs<T: Metric>(dataset: &[T], k: usize) -> Result<(), KMeansError> {
    if dataset.is_empty() {
        return Err(KMeansError::InvalidArgument(
            "dataset must not be empty".to_string(),
        ));
    }

    if k == 0 {
        return Err(KMeansError::InvalidArgument(
            "k must be greater than 0".to_string(),
        ));
    }

    if dataset.len() < k {
        return Err(KMeansError::InvalidArgument(format!(
            "Number of samples ({}) is less than k ({})",
            dataset.len(),
            k
        )));
    }

    T::check_compatible(dataset)
}

/// Initialize centroids with the strategy selected in `config`
pub fn initialize_centroids<T, R>(
    dataset: &[T],
    config: &KMeansConfig,
    rng: &mut R,
) -> Result<Vec<T>, KMeansError>
where
    T: Bounded,
    R: Rng + ?Sized,
{
    match config.init {
        InitStrategy::Sample => sample_centroids(dataset, config.k, rng),
        InitStrategy::Range => range_centroids(dataset, config.k, config.max_init_attempts, rng),
    }
}

/// Initialize centroids by randomly selecting k distinct data points.
///
/// Indices are visited in a random order and an item is skipped when an
/// equal value was already taken, so repeated values in the dataset never
/// yield duplicate centroids.
pub fn sample_centroids<T, R>(dataset: &[T], k: usize, rng: &mut R) -> Result<Vec<T>, KMeansError>
where
    T: Metric,
    R: Rng + ?Sized,
{
    validate_inputs(dataset, k)?;

    let mut indices: Vec<usize> = (0..dataset.len()).collect();
    indices.shuffle(rng);

    let mut centroids: Vec<T> = Vec::with_capacity(k);
    for &idx in &indices {
        let candidate = &dataset[idx];
        if !centroids.contains(candidate) {
            centroids.push(candidate.clone());
            if centroids.len() == k {
                return Ok(centroids);
            }
        }
    }

    Err(KMeansError::InvalidArgument(format!(
        "dataset holds only {} distinct values, fewer than k ({})",
        centroids.len(),
        k
    )))
}

/// Initialize centroids by drawing random values inside the dataset's
/// bounding box, discarding duplicates.
///
/// At most `k + max_attempts` candidates are drawn before giving up with
/// `ResourceExhausted`.
pub fn range_centroids<T, R>(
    dataset: &[T],
    k: usize,
    max_attempts: usize,
    rng: &mut R,
) -> Result<Vec<T>, KMeansError>
where
    T: Bounded,
    R: Rng + ?Sized,
{
    validate_inputs(dataset, k)?;

    let (lo, hi) = T::bounds(dataset)?;
    let mut centroids: Vec<T> = Vec::with_capacity(k);
    let mut rejected = 0usize;

    while centroids.len() < k {
        let candidate = T::sample_within(&lo, &hi, rng);
        if centroids.contains(&candidate) {
            rejected += 1;
            if rejected > max_attempts {
                return Err(KMeansError::ResourceExhausted(format!(
                    "collected {} of {} distinct centroids after {} duplicate draws",
                    centroids.len(),
                    k,
                    rejected
                )));
            }
            continue;
        }
        centroids.push(candidate);
    }

    debug!(k = k, rejected = rejected, "range initialization done");
    Ok(centroids)
}

/// Validate caller-supplied initial centroids against the dataset
pub fn check_initial_centroids<T: Metric>(dataset: &[T], initial: &[T]) -> Result<(), KMeansError> {
    validate_inputs(dataset, initial.len())?;
    T::check_compatible_with(&dataset[0], initial)?;

    for (i, c) in initial.iter().enumerate() {
        if initial[..i].contains(c) {
            return Err(KMeansError::InvalidArgument(format!(
                "initial centroid {} duplicates an earlier centroid",
                i
            )));
        }
    }
    Ok(())
}
