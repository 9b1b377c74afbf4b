//! Run configuration shared by the library entry points and the CLI driver.
use std::path::PathBuf;

/// Depth bound applied everywhere the path enumerator would otherwise loop
/// forever on a recursive schema (`Foo` containing `Foo`).
pub const DEFAULT_MAX_DEPTH: usize = 12;

#[derive(Debug, Clone)]
pub struct CoverageConfig {
    pub schema_path: PathBuf,
    pub max_depth: usize,
    /// Extra `xmlns:prefix="uri"` declarations to stamp onto the root
    /// element of every generated document, beyond the schema's own
    /// target namespace.
    pub namespaces: Vec<(String, String)>,
}

impl CoverageConfig {
    pub fn new(schema_path: impl Into<PathBuf>) -> Self {
        CoverageConfig {
            schema_path: schema_path.into(),
            max_depth: DEFAULT_MAX_DEPTH,
            namespaces: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GreedyConfig {
    pub coverage: CoverageConfig,
    /// Depth bound applied per candidate snippet (separate from, and never
    /// deeper than, `coverage.max_depth`).
    pub max_gen_depth: usize,
    /// Stop once covered/total reaches this fraction.
    pub target_coverage: f64,
    /// Stop once this many files have been emitted.
    pub max_files: usize,
}

impl GreedyConfig {
    pub fn new(coverage: CoverageConfig) -> Self {
        GreedyConfig {
            coverage,
            max_gen_depth: 10,
            target_coverage: 0.90,
            max_files: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SmtConfig {
    pub coverage: CoverageConfig,
    pub timeout_ms: u64,
    pub solver_path: String,
    /// Stop ratcheting the soft-objective threshold once covered/total
    /// reaches this fraction.
    pub target_coverage: f64,
}

impl SmtConfig {
    pub fn new(coverage: CoverageConfig) -> Self {
        SmtConfig {
            coverage,
            timeout_ms: 60_000,
            solver_path: "z3".to_string(),
            target_coverage: 0.95,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PairwiseConfig {
    pub coverage: CoverageConfig,
    pub samples_per_round: usize,
    pub seed: u64,
    /// Stop once this many covering-array rows have been emitted.
    pub max_patterns: usize,
}

impl PairwiseConfig {
    pub fn new(coverage: CoverageConfig) -> Self {
        PairwiseConfig {
            coverage,
            samples_per_round: 100,
            seed: 42,
            max_patterns: 50,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ValidateConfig {
    pub coverage: CoverageConfig,
    pub instances: Vec<PathBuf>,
}

impl ValidateConfig {
    pub fn new(coverage: CoverageConfig, instances: Vec<PathBuf>) -> Self {
        ValidateConfig { coverage, instances }
    }
}
