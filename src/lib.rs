//! # lloyd-kmeans
//!
//! Lloyd's k-means clustering over any item type with a distance and a mean.
//!
//! ## Features
//!
//! - **Generic items**: anything implementing [`Metric`] can be clustered.
//!   Scalars (`f32`, `f64`), plane coordinates ([`Point2`]) and n-dimensional
//!   `ndarray::Array1<f64>` vectors are supported out of the box
//! - **Two initializers**: sample k distinct data points, or draw k distinct
//!   random values inside the dataset's bounding box
//! - **Reproducible**: all randomness flows through an injected `rand::Rng`;
//!   the [`KMeans`] model seeds a `ChaCha8Rng` from [`KMeansConfig::seed`]
//! - **Exact fixed point by default**: iteration stops when the recomputed
//!   centroids equal the previous ones; a tolerance can be set instead
//!
//! ## Example
//!
//! ```rust
//! use lloyd_kmeans::run_kmeans;
//!
//! let data = [1.0, 3.0, 5.0, 7.0, 9.0, 10.0, 12.0, 12.0, 14.0, 15.0, 17.0, 18.0];
//! let result = run_kmeans(&data, 3).unwrap();
//!
//! assert_eq!(result.centroids.len(), 3);
//! assert_eq!(result.clusters.iter().map(Vec::len).sum::<usize>(), data.len());
//! ```
//!
//! ## Custom Configuration
//!
//! ```rust
//! use lloyd_kmeans::{EmptyClusterPolicy, InitStrategy, KMeans, KMeansConfig, Point2};
//!
//! let data: Vec<Point2> = [(11.0, 52.0), (43.0, 24.0), (5.0, 57.0), (52.0, 4.0), (94.0, 22.0)]
//!     .into_iter()
//!     .map(Point2::from)
//!     .collect();
//!
//! let config = KMeansConfig::new(2)
//!     .with_init(InitStrategy::Range)
//!     .with_empty_cluster(EmptyClusterPolicy::Reseed)
//!     .with_max_iters(Some(100))
//!     .with_seed(42);
//!
//! let mut kmeans = KMeans::with_config(config);
//! let labels = kmeans.fit_predict(&data).unwrap();
//! assert_eq!(labels.len(), 5);
//! ```

mod algorithm;
mod assign;
mod config;
mod error;
mod init;
mod kmeans;
mod metric;
mod update;

pub use algorithm::{kmeans_from_centroids, kmeans_lloyd, run_kmeans, KMeansResult};
pub use assign::{assign_clusters, assign_labels, nearest_centroid};
pub use config::{EmptyClusterPolicy, InitStrategy, KMeansConfig};
pub use error::KMeansError;
pub use init::{range_centroids, sample_centroids};
pub use kmeans::KMeans;
pub use metric::{Bounded, Metric, Point2};
pub use update::update_centroids;
