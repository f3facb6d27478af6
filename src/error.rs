use thiserror::Error;

/// Error types for the lloyd-kmeans library
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KMeansError {
    /// A precondition on the inputs does not hold (k, dataset size, centroid set, ...)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The range initializer could not collect k distinct centroids within its draw budget
    #[error("Resource exhausted: {0}")]
    ResourceExhausted(String),

    /// The iteration cap was reached before the centroids stopped moving
    #[error("Did not converge after {iterations} iterations")]
    DidNotConverge { iterations: usize },

    /// Model has not been fitted yet
    #[error("Model has not been fitted. Call train() or fit() first.")]
    NotFitted,

    /// A cluster received no items and the configured policy is to fail
    #[error("Cluster {0} is empty; its mean is undefined")]
    EmptyCluster(usize),
}
