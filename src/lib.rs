//! Path coverage enumeration, measurement and generation for XML Schema
//! Definitions.
//!
//! A schema is loaded once into a [`model::SchemaModel`]; everything else
//! reads that owned representation:
//!
//! - [`enumerate`] walks it into a [`enumerate::GroundSet`] plus
//!   [`enumerate::ConstraintSet`] (component B/C).
//! - [`coverage`] measures a set of XML instance documents against a ground
//!   set (component D).
//! - [`snippet`], [`smt`] and [`pairwise`] each generate a minimal set of
//!   documents that covers the ground set, trading off exactness against
//!   speed (components E/F/G).
//! - [`materialize`] turns a chosen subset of paths into an actual,
//!   schema-valid XML document (component H).

pub mod basics;
pub mod particles;
pub mod facets;
pub mod raw;

pub mod error;
pub mod path;
pub mod model;
pub mod config;
pub mod enumerate;
pub mod coverage;
pub mod snippet;
pub mod smt;
pub mod pairwise;
pub mod materialize;
pub mod validate;

pub use error::{Result, Warning, XcoverError};
pub use model::SchemaModel;
pub use path::Path;

use config::{CoverageConfig, GreedyConfig, PairwiseConfig, SmtConfig, ValidateConfig};
use enumerate::{ConstraintSet, GroundSet};

/// Loads a schema and enumerates its ground set and constraints. Every
/// other entry point in this module starts from this pair.
pub fn load_and_enumerate(config: &CoverageConfig) -> Result<(SchemaModel, GroundSet, ConstraintSet)> {
    let model = SchemaModel::load(&config.schema_path)?;
    let (ground_set, constraints) = enumerate::enumerate(&model, config);
    Ok((model, ground_set, constraints))
}

/// Measures how much of a schema's ground set a set of XML instance
/// documents exercises.
pub fn measure_coverage(
    config: &CoverageConfig,
    instances: &[std::path::PathBuf],
) -> Result<coverage::CoverageReport> {
    let (_, ground_set, _) = load_and_enumerate(config)?;
    coverage::measure(&ground_set, instances)
}

/// Generates the smallest snippet set a greedy set-cover pass can find.
pub fn generate_greedy(config: &GreedyConfig) -> Result<snippet::SnippetPlan> {
    let (model, ground_set, constraints) = load_and_enumerate(&config.coverage)?;
    snippet::generate_greedy(&model, &ground_set, &constraints, config)
}

/// Generates a snippet plan using an SMT solver to search for a provably
/// smaller set than the greedy heuristic.
pub fn generate_smt(config: &SmtConfig) -> Result<snippet::SnippetPlan> {
    let (model, ground_set, constraints) = load_and_enumerate(&config.coverage)?;
    smt::generate(&model, &ground_set, &constraints, config)
}

/// Generates a pairwise covering array over a schema's optional items.
pub fn generate_pairwise(config: &PairwiseConfig) -> Result<pairwise::CoveringArray> {
    let (model, ground_set, constraints) = load_and_enumerate(&config.coverage)?;
    pairwise::generate(&model, &ground_set, &constraints, config)
}

/// Structurally validates a batch of XML instance documents against a
/// schema: each file's own valid/invalid status (required children and
/// attributes present at every visited node) plus undefined-path warnings,
/// without aborting the batch on the first failure.
pub fn validate(config: &ValidateConfig) -> Result<validate::ValidationReport> {
    let (model, ground_set, _) = load_and_enumerate(&config.coverage)?;
    validate::validate_batch(&model, &ground_set, &config.instances)
}
