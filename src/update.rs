use crate::config::EmptyClusterPolicy;
use crate::error::KMeansError;
use crate::metric::Metric;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::warn;

/// Recompute every centroid as the mean of its cluster.
///
/// `previous` is the centroid set the clusters were assigned against; it is
/// needed to resolve empty clusters under `KeepPrevious`, and to keep reseeded
/// centroids distinct from the rest.
pub fn update_centroids<T, R>(
    clusters: &[Vec<T>],
    previous: &[T],
    dataset: &[T],
    policy: EmptyClusterPolicy,
    rng: &mut R,
) -> Result<Vec<T>, KMeansError>
where
    T: Metric,
    R: Rng + ?Sized,
{
    if clusters.len() != previous.len() {
        return Err(KMeansError::InvalidArgument(format!(
            "{} clusters for {} centroids",
            clusters.len(),
            previous.len()
        )));
    }

    let mut centroids = Vec::with_capacity(clusters.len());
    let mut empty_clusters = Vec::new();

    for (cluster_idx, cluster) in clusters.iter().enumerate() {
        if cluster.is_empty() {
            if policy == EmptyClusterPolicy::Fail {
                return Err(KMeansError::EmptyCluster(cluster_idx));
            }
            empty_clusters.push(cluster_idx);
            centroids.push(previous[cluster_idx].clone());
        } else {
            centroids.push(T::mean(cluster)?);
        }
    }

    if empty_clusters.is_empty() {
        return Ok(centroids);
    }

    if policy == EmptyClusterPolicy::Reseed {
        for &cluster_idx in &empty_clusters {
            let candidates: Vec<&T> = dataset
                .iter()
                .filter(|item| !centroids.contains(*item))
                .collect();
            if let Some(&item) = candidates.choose(rng) {
                centroids[cluster_idx] = item.clone();
            }
        }
    }

    warn!(
        empty = empty_clusters.len(),
        policy = ?policy,
        "handled empty clusters"
    );

    Ok(centroids)
}
