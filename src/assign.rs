use crate::error::KMeansError;
use crate::metric::Metric;

fn no_centroids() -> KMeansError {
    KMeansError::InvalidArgument("centroid set must not be empty".to_string())
}

/// Index of the centroid closest to `item`.
///
/// The scan starts from centroid 0 and only moves on a strictly smaller
/// distance, so ties go to the lowest index.
#[inline]
pub fn nearest_centroid<T: Metric>(item: &T, centroids: &[T]) -> Result<usize, KMeansError> {
    let first = centroids.first().ok_or_else(no_centroids)?;

    let mut best_label = 0;
    let mut best_dist = item.distance(first);
    for (j, centroid) in centroids.iter().enumerate().skip(1) {
        let dist = item.distance(centroid);
        if dist < best_dist {
            best_dist = dist;
            best_label = j;
        }
    }
    Ok(best_label)
}

/// Label every dataset item with the index of its nearest centroid
pub fn assign_labels<T: Metric>(dataset: &[T], centroids: &[T]) -> Result<Vec<usize>, KMeansError> {
    if centroids.is_empty() {
        return Err(no_centroids());
    }
    dataset
        .iter()
        .map(|item| nearest_centroid(item, centroids))
        .collect()
}

/// Partition the dataset into `centroids.len()` groups, group i holding the
/// items whose nearest centroid is centroid i. Items keep their dataset order
/// inside each group.
pub fn assign_clusters<T: Metric>(
    dataset: &[T],
    centroids: &[T],
) -> Result<(Vec<Vec<T>>, Vec<usize>), KMeansError> {
    let labels = assign_labels(dataset, centroids)?;

    let mut clusters: Vec<Vec<T>> = vec![Vec::new(); centroids.len()];
    for (item, &label) in dataset.iter().zip(labels.iter()) {
        clusters[label].push(item.clone());
    }

    Ok((clusters, labels))
}
