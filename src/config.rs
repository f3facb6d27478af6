/// How the initial centroid set is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitStrategy {
    /// Pick k distinct items of the dataset at random
    #[default]
    Sample,
    /// Draw k distinct random values inside the dataset's bounding box
    Range,
}

/// What the update step does with a centroid whose cluster came out empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyClusterPolicy {
    /// Carry the previous centroid over unchanged
    #[default]
    KeepPrevious,
    /// Replace it with a random dataset item that is not already a centroid
    Reseed,
    /// Abort the run with `KMeansError::EmptyCluster`
    Fail,
}

/// Configuration for the k-means algorithm
#[derive(Debug, Clone)]
pub struct KMeansConfig {
    /// Number of clusters
    pub k: usize,

    /// Maximum number of iterations. `None` iterates until a fixed point,
    /// however long that takes.
    pub max_iters: Option<usize>,

    /// Convergence tolerance on the largest centroid shift.
    /// `0.0` requires the new centroid set to equal the previous one exactly.
    pub tol: f64,

    /// Random seed for centroid initialization and reseeding
    pub seed: u64,

    /// Initial centroid selection
    pub init: InitStrategy,

    /// Treatment of clusters that receive no items
    pub empty_cluster: EmptyClusterPolicy,

    /// Extra draws the range initializer may spend on duplicates before giving up
    pub max_init_attempts: usize,

    /// Report every iteration at info level instead of debug
    pub verbose: bool,
}

impl Default for KMeansConfig {
    fn default() -> Self {
        Self {
            k: 8,
            max_iters: Some(300),
            tol: 0.0,
            seed: 0,
            init: InitStrategy::Sample,
            empty_cluster: EmptyClusterPolicy::KeepPrevious,
            max_init_attempts: 10_000,
            verbose: false,
        }
    }
}

impl KMeansConfig {
    /// Create a new configuration with the specified number of clusters
    pub fn new(k: usize) -> Self {
        Self {
            k,
            ..Default::default()
        }
    }

    /// Set the maximum number of iterations (`None` for unbounded)
    pub fn with_max_iters(mut self, max_iters: Option<usize>) -> Self {
        self.max_iters = max_iters;
        self
    }

    /// Set the convergence tolerance
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Set the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the initialization strategy
    pub fn with_init(mut self, init: InitStrategy) -> Self {
        self.init = init;
        self
    }

    /// Set the empty-cluster policy
    pub fn with_empty_cluster(mut self, policy: EmptyClusterPolicy) -> Self {
        self.empty_cluster = policy;
        self
    }

    /// Set the duplicate-draw budget of the range initializer
    pub fn with_max_init_attempts(mut self, attempts: usize) -> Self {
        self.max_init_attempts = attempts;
        self
    }

    /// Set verbose mode
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
