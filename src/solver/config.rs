/// How the numerical stage reports roots it could not find on the real line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ComplexRootStrategy {
    /// Emit `Complex root k` / `Complex root k (conjugate)` placeholders.
    #[default]
    Label,
    /// Compute the remaining roots with Durand-Kerner iteration, falling back to labels
    /// when the iteration does not settle.
    DurandKerner,
}

/// Tunables for a solve call.
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfig {
    /// Residual below which a value counts as a root. Also the distance under which two
    /// numerical roots are treated as the same root.
    pub root_tolerance: f64,
    /// Newton-Raphson step size that ends an iteration.
    pub newton_tolerance: f64,
    /// Newton-Raphson steps per seed.
    pub max_iterations: usize,
    /// Newton-Raphson runs per numerical search.
    pub max_attempts: usize,
    /// Seed for the random part of the guess pool.
    pub seed: u64,
    pub complex_roots: ComplexRootStrategy,
    /// Largest constant or leading coefficient magnitude the rational root search will
    /// factor. Trial division is O(sqrt(value)).
    pub max_factor_search: u64,
    /// Discriminants within this fraction of their round-off scale are treated as zero.
    pub discriminant_epsilon: f64,
    /// Relative distance within which a Newton result is snapped onto a nearby root of
    /// a derivative, which marks it as a repeated root.
    pub cluster_tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            root_tolerance: 1e-10,
            newton_tolerance: 1e-12,
            max_iterations: 100,
            max_attempts: 1000,
            seed: 42,
            complex_roots: ComplexRootStrategy::Label,
            max_factor_search: 1_000_000,
            discriminant_epsilon: 1e-12,
            cluster_tolerance: 1e-4,
        }
    }
}

impl SolverConfig {
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_complex_roots(mut self, strategy: ComplexRootStrategy) -> Self {
        self.complex_roots = strategy;
        self
    }

    #[must_use]
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts;
        self
    }

    #[must_use]
    pub fn with_max_factor_search(mut self, limit: u64) -> Self {
        self.max_factor_search = limit;
        self
    }
}
