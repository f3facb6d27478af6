use crate::algorithm::{kmeans_from_centroids, kmeans_lloyd, KMeansResult};
use crate::assign::assign_labels;
use crate::config::KMeansConfig;
use crate::error::KMeansError;
use crate::metric::Bounded;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Lloyd's k-means over any `Bounded` item type.
///
/// Provides a `train()` / `fit()` / `predict()` interface on top of
/// [`kmeans_lloyd`]. Randomness comes from a `ChaCha8Rng` seeded with
/// `config.seed`, so the same data and configuration always give the same
/// clustering.
///
/// # Example
///
/// ```
/// use lloyd_kmeans::{KMeans, Point2};
///
/// let data = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(0.5, 0.5),
///     Point2::new(9.0, 9.0),
///     Point2::new(9.5, 9.5),
/// ];
///
/// let mut kmeans = KMeans::new(2);
/// let labels = kmeans.fit_predict(&data).unwrap();
/// assert_eq!(labels[0], labels[1]);
/// assert_ne!(labels[0], labels[2]);
/// ```
#[derive(Debug, Clone)]
pub struct KMeans<T> {
    /// Model configuration
    config: KMeansConfig,

    /// Result of the last training run (None if not yet fitted)
    result: Option<KMeansResult<T>>,
}

impl<T: Bounded> KMeans<T> {
    /// Create a new KMeans instance with default configuration.
    ///
    /// # Panics
    ///
    /// Panics if `k` is 0.
    pub fn new(k: usize) -> Self {
        Self::with_config(KMeansConfig::new(k))
    }

    /// Create a new KMeans instance with custom configuration.
    ///
    /// # Panics
    ///
    /// Panics if `config.k` is 0.
    pub fn with_config(config: KMeansConfig) -> Self {
        assert!(config.k > 0, "k must be greater than 0");

        Self {
            config,
            result: None,
        }
    }

    /// Train the model on `data`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `data` is empty or holds fewer than k (distinct) items
    /// - The iteration cap is reached before convergence
    /// - A cluster comes out empty under `EmptyClusterPolicy::Fail`
    pub fn train(&mut self, data: &[T]) -> Result<(), KMeansError> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.result = Some(kmeans_lloyd(data, &self.config, &mut rng)?);
        Ok(())
    }

    /// Train the model starting from the given centroids instead of a random
    /// initialization. `initial` must hold exactly k distinct items.
    pub fn train_from(&mut self, data: &[T], initial: Vec<T>) -> Result<(), KMeansError> {
        if initial.len() != self.config.k {
            return Err(KMeansError::InvalidArgument(format!(
                "Expected {} initial centroids, got {}",
                self.config.k,
                initial.len()
            )));
        }

        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.result = Some(kmeans_from_centroids(data, initial, &self.config, &mut rng)?);
        Ok(())
    }

    /// Fit the model to the data. Equivalent to `train()`, returning
    /// `&mut Self` for method chaining.
    pub fn fit(&mut self, data: &[T]) -> Result<&mut Self, KMeansError> {
        self.train(data)?;
        Ok(self)
    }

    /// Index of the nearest trained centroid for every item of `data`.
    ///
    /// # Errors
    ///
    /// Returns `NotFitted` if the model has not been trained, or
    /// `InvalidArgument` if `data` is incompatible with the centroids.
    pub fn predict(&self, data: &[T]) -> Result<Vec<usize>, KMeansError> {
        let centroids = self.centroids().ok_or(KMeansError::NotFitted)?;

        if let Some(reference) = centroids.first() {
            T::check_compatible_with(reference, data)?;
        }
        assign_labels(data, centroids)
    }

    /// Fit the model and return the labels of the training data
    pub fn fit_predict(&mut self, data: &[T]) -> Result<Vec<usize>, KMeansError> {
        self.train(data)?;
        self.result
            .as_ref()
            .map(|r| r.labels.clone())
            .ok_or(KMeansError::NotFitted)
    }

    /// Centroids of the fitted model
    pub fn centroids(&self) -> Option<&[T]> {
        self.result.as_ref().map(|r| r.centroids.as_slice())
    }

    /// Clusters of the training data, index-aligned with `centroids()`
    pub fn clusters(&self) -> Option<&[Vec<T>]> {
        self.result.as_ref().map(|r| r.clusters.as_slice())
    }

    /// Full result of the last training run
    pub fn result(&self) -> Option<&KMeansResult<T>> {
        self.result.as_ref()
    }

    /// Consume the model, returning the last training result
    pub fn into_result(self) -> Option<KMeansResult<T>> {
        self.result
    }

    /// Get the number of clusters.
    pub fn k(&self) -> usize {
        self.config.k
    }

    /// Get the configuration.
    pub fn config(&self) -> &KMeansConfig {
        &self.config
    }
}
