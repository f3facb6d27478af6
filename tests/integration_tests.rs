use lloyd_kmeans::{
    assign_clusters, kmeans_lloyd, run_kmeans, EmptyClusterPolicy, InitStrategy, KMeans,
    KMeansConfig, KMeansError, Metric, Point2,
};
use ndarray::{Array1, Array2};
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const SCALARS: [f64; 25] = [
    1.0, 3.0, 5.0, 7.0, 9.0, 10.0, 12.0, 12.0, 14.0, 15.0, 17.0, 18.0, 19.0, 22.0, 24.0, 26.0,
    27.0, 29.0, 30.0, 31.0, 32.0, 35.0, 37.0, 49.0, 59.0,
];

fn demo_points() -> Vec<Point2> {
    [
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
    ]
    .into_iter()
    .map(Point2::from)
    .collect()
}

/// Generate points scattered around `n_clusters` random centers
fn generate_clustered_data(
    n_samples: usize,
    n_features: usize,
    n_clusters: usize,
    seed: u64,
) -> Vec<Array1<f64>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let centers = Array2::random_using(
        (n_clusters, n_features),
        Uniform::new(-10.0, 10.0),
        &mut rng,
    );
    let noise = Array2::random_using(
        (n_samples, n_features),
        Uniform::new(-0.5, 0.5),
        &mut rng,
    );

    (0..n_samples)
        .map(|i| &centers.row(i % n_clusters) + &noise.row(i))
        .collect()
}

/// Every dataset item appears in exactly one cluster
fn assert_partition<T: Metric>(data: &[T], clusters: &[Vec<T>]) {
    let total: usize = clusters.iter().map(Vec::len).sum();
    assert_eq!(total, data.len(), "clusters should cover the dataset");

    for item in data {
        let expected = data.iter().filter(|x| *x == item).count();
        let found: usize = clusters
            .iter()
            .map(|c| c.iter().filter(|x| *x == item).count())
            .sum();
        assert_eq!(found, expected, "item {:?} should appear exactly once", item);
    }
}

// ============================================================================
// Scenario Tests
// ============================================================================

#[test]
fn test_scalar_scenario() {
    let result = run_kmeans(&SCALARS, 5).unwrap();

    assert_eq!(result.centroids.len(), 5);
    assert_eq!(result.clusters.len(), 5);
    assert!(
        result.clusters.iter().all(|c| !c.is_empty()),
        "no cluster should be empty"
    );
    assert_partition(&SCALARS, &result.clusters);

    // Order clusters by centroid: means strictly increase and clusters are
    // contiguous ranges of the sorted data
    let mut order: Vec<usize> = (0..5).collect();
    order.sort_by(|&a, &b| {
        result.centroids[a]
            .partial_cmp(&result.centroids[b])
            .unwrap()
    });
    for pair in order.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        assert!(result.centroids[lo] < result.centroids[hi]);

        let lo_max = result.clusters[lo].iter().cloned().fold(f64::MIN, f64::max);
        let hi_min = result.clusters[hi].iter().cloned().fold(f64::MAX, f64::min);
        assert!(lo_max < hi_min, "clusters should be contiguous");
    }
}

#[test]
fn test_scalar_scenario_many_seeds() {
    for seed in 0..20 {
        let config = KMeansConfig::new(5).with_seed(seed);
        let mut kmeans = KMeans::with_config(config);
        kmeans.train(&SCALARS).unwrap();

        let clusters = kmeans.clusters().unwrap();
        assert!(clusters.iter().all(|c| !c.is_empty()), "seed {}", seed);
        assert_partition(&SCALARS, clusters);
    }
}

#[test]
fn test_points_scenario() {
    let data = demo_points();

    for seed in 0..10 {
        let config = KMeansConfig::new(5)
            .with_seed(seed)
            .with_max_iters(Some(50));
        let mut kmeans = KMeans::with_config(config);
        kmeans.train(&data).unwrap();

        let result = kmeans.result().unwrap();
        assert!(result.n_iterations < 50);
        assert_eq!(result.centroids.len(), 5);
        assert_eq!(result.labels.len(), 12);
        assert_partition(&data, &result.clusters);
    }
}

#[test]
fn test_points_scenario_range_init() {
    let data = demo_points();
    let config = KMeansConfig::new(5)
        .with_init(InitStrategy::Range)
        .with_seed(3)
        .with_max_iters(Some(50));
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

    let result = kmeans_lloyd(&data, &config, &mut rng).unwrap();

    assert_eq!(result.centroids.len(), 5);
    assert_partition(&data, &result.clusters);
}

#[test]
fn test_range_init_over_huge_span() {
    let data = [-1e308, 0.0, 1e308];
    let config = KMeansConfig::new(3)
        .with_init(InitStrategy::Range)
        .with_seed(5);
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

    let result = kmeans_lloyd(&data, &config, &mut rng).unwrap();

    assert_eq!(result.clusters.len(), 3);
    assert_partition(&data, &result.clusters);
}

// ============================================================================
// Correctness Tests
// ============================================================================

#[test]
fn test_fixed_point_property() {
    let data = demo_points();
    let result = run_kmeans(&data, 4).unwrap();

    let (clusters, labels) = assign_clusters(&data, &result.centroids).unwrap();
    assert_eq!(clusters, result.clusters);
    assert_eq!(labels, result.labels);

    // Recomputing the means reproduces the centroids exactly
    for (centroid, cluster) in result.centroids.iter().zip(result.clusters.iter()) {
        if cluster.is_empty() {
            continue;
        }
        assert_eq!(&Point2::mean(cluster).unwrap(), centroid);
    }
}

#[test]
fn test_labels_match_clusters() {
    let result = run_kmeans(&SCALARS, 4).unwrap();

    for (item, &label) in SCALARS.iter().zip(result.labels.iter()) {
        assert!(result.clusters[label].contains(item));
    }
}

#[test]
fn test_high_dimensional_data() {
    let data = generate_clustered_data(200, 4, 5, 42);
    let config = KMeansConfig::new(5).with_seed(42);

    let mut kmeans = KMeans::with_config(config);
    let labels = kmeans.fit_predict(&data).unwrap();

    assert_eq!(labels.len(), 200);
    assert!(labels.iter().all(|&l| l < 5));
    assert_partition(&data, kmeans.clusters().unwrap());

    // Predicting on the training data reproduces the training labels
    assert_eq!(kmeans.predict(&data).unwrap(), labels);
}

#[test]
fn test_uniform_random_vectors() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let raw = Array2::random_using((300, 8), Uniform::new(-1.0, 1.0), &mut rng);
    let data: Vec<Array1<f64>> = raw.outer_iter().map(|row| row.to_owned()).collect();

    let result = run_kmeans(&data, 6).unwrap();

    assert_eq!(result.centroids.len(), 6);
    assert!(result.centroids.iter().all(|c| c.len() == 8));
    assert_partition(&data, &result.clusters);
}

// ============================================================================
// Reproducibility Tests
// ============================================================================

#[test]
fn test_reproducibility_with_seed() {
    let data = generate_clustered_data(150, 3, 4, 7);
    let config = KMeansConfig::new(4).with_seed(123);

    let mut a = KMeans::with_config(config.clone());
    let mut b = KMeans::with_config(config);
    a.train(&data).unwrap();
    b.train(&data).unwrap();

    assert_eq!(a.result(), b.result());
}

#[test]
fn test_injected_rng_is_used() {
    let config = KMeansConfig::new(5).with_init(InitStrategy::Range);

    let first = kmeans_lloyd(&SCALARS, &config, &mut ChaCha8Rng::seed_from_u64(99)).unwrap();
    let second = kmeans_lloyd(&SCALARS, &config, &mut ChaCha8Rng::seed_from_u64(99)).unwrap();

    assert_eq!(first, second);
}

// ============================================================================
// Edge Cases Tests
// ============================================================================

#[test]
fn test_k_equals_one() {
    let result = run_kmeans(&SCALARS, 1).unwrap();

    assert_eq!(result.clusters[0].len(), SCALARS.len());
    assert_eq!(result.centroids[0], f64::mean(&SCALARS).unwrap());
    assert!(result.n_iterations <= 2);
}

#[test]
fn test_k_equals_n_samples() {
    let data = [1.0, 4.0, 9.0, 16.0, 25.0];
    let result = run_kmeans(&data, data.len()).unwrap();

    assert_eq!(result.n_iterations, 1);
    assert!(result.clusters.iter().all(|c| c.len() == 1));

    let mut centroids = result.centroids.clone();
    centroids.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(centroids, data.to_vec());

    for (centroid, cluster) in result.centroids.iter().zip(result.clusters.iter()) {
        assert_eq!(cluster, &vec![*centroid]);
    }
}

#[test]
fn test_k_equals_n_points() {
    let data = demo_points();
    let result = run_kmeans(&data, data.len()).unwrap();

    assert_eq!(result.n_iterations, 1);
    for (centroid, cluster) in result.centroids.iter().zip(result.clusters.iter()) {
        assert_eq!(cluster, &vec![*centroid]);
    }
}

#[test]
fn test_insufficient_data_for_k() {
    let result = run_kmeans(&SCALARS, SCALARS.len() + 1);
    assert!(matches!(result, Err(KMeansError::InvalidArgument(_))));

    let mut kmeans = KMeans::new(13);
    let result = kmeans.train(&demo_points());
    assert!(matches!(result, Err(KMeansError::InvalidArgument(_))));
    assert!(kmeans.centroids().is_none());
}

#[test]
fn test_invalid_k_zero() {
    let result = run_kmeans(&SCALARS, 0);
    assert!(matches!(result, Err(KMeansError::InvalidArgument(_))));
}

#[test]
fn test_empty_dataset() {
    let data: Vec<Point2> = Vec::new();
    let result = run_kmeans(&data, 1);
    assert!(matches!(result, Err(KMeansError::InvalidArgument(_))));
}

#[test]
fn test_range_init_exhausted() {
    let data = [3.0, 3.0, 3.0, 3.0];
    let config = KMeansConfig::new(2)
        .with_init(InitStrategy::Range)
        .with_max_init_attempts(20);

    let mut kmeans = KMeans::with_config(config);
    let result = kmeans.train(&data);
    assert!(matches!(result, Err(KMeansError::ResourceExhausted(_))));
}

#[test]
fn test_did_not_converge() {
    let config = KMeansConfig::new(5).with_max_iters(Some(0));
    let mut kmeans = KMeans::with_config(config);

    let result = kmeans.train(&SCALARS);
    assert_eq!(result, Err(KMeansError::DidNotConverge { iterations: 0 }));
}

// ============================================================================
// Empty Cluster Policy Tests
// ============================================================================

#[test]
fn test_empty_cluster_policies() {
    let data = [0.0, 1.0, 2.0, 10.0, 11.0, 12.0];
    // Centroid 2 starts out of reach of every item
    let initial = vec![1.0, 11.0, 1000.0];

    let mut keep = KMeans::new(3);
    keep.train_from(&data, initial.clone()).unwrap();
    assert_eq!(keep.centroids().unwrap(), &[1.0, 11.0, 1000.0]);
    assert!(keep.clusters().unwrap()[2].is_empty());

    let mut fail =
        KMeans::with_config(KMeansConfig::new(3).with_empty_cluster(EmptyClusterPolicy::Fail));
    let result = fail.train_from(&data, initial.clone());
    assert_eq!(result, Err(KMeansError::EmptyCluster(2)));

    let mut reseed =
        KMeans::with_config(KMeansConfig::new(3).with_empty_cluster(EmptyClusterPolicy::Reseed));
    reseed.train_from(&data, initial).unwrap();
    let clusters = reseed.clusters().unwrap();
    assert!(clusters.iter().all(|c| !c.is_empty()));
    assert_partition(&data, clusters);
}
