//! Coverage-optimizing generator, pairwise strategy (component G): instead
//! of covering every individual path, covers every pair of independent
//! optional-path/choice-branch decisions at least once, using far fewer
//! documents than the product of all combinations would require.
use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::config::PairwiseConfig;
use crate::enumerate::{ConstraintSet, GroundSet};
use crate::error::{Result, Warning, XcoverError};
use crate::model::SchemaModel;
use crate::path::Path;
use crate::snippet::Snippet;

/// One independent decision a document can make: whether to include an
/// optional path, or which branch of a choice group to take.
#[derive(Debug, Clone)]
enum Factor {
    Optional(Path),
    Choice(Vec<Path>),
}

impl Factor {
    fn level_count(&self) -> usize {
        match self {
            Factor::Optional(_) => 2,
            Factor::Choice(branches) => branches.len(),
        }
    }

    /// The paths an assignment of `level` to this factor contributes.
    fn paths_for_level(&self, level: usize) -> Vec<Path> {
        match self {
            Factor::Optional(path) => {
                if level == 1 {
                    vec![path.clone()]
                } else {
                    Vec::new()
                }
            }
            Factor::Choice(branches) => vec![branches[level].clone()],
        }
    }
}

/// Above this many optional items, the factor list is truncated to the
/// shallowest `OPTIONAL_SOFT_CAP_KEEP` (ties broken lexicographically) before
/// building pairs, since the full cross product would make even sampling
/// impractical.
const OPTIONAL_SOFT_CAP: usize = 1000;
const OPTIONAL_SOFT_CAP_KEEP: usize = 300;

/// Every pair of (factor, level) decisions the covering array needs to hit
/// at least once, across every pair of distinct factors.
fn build_factors(ground_set: &GroundSet, constraints: &ConstraintSet) -> (Vec<Factor>, Vec<Warning>) {
    let in_choice: BTreeSet<&Path> = constraints.choice_groups().iter().flatten().collect();
    let mut factors: Vec<Factor> = constraints
        .choice_groups()
        .iter()
        .map(|group| Factor::Choice(group.iter().cloned().collect()))
        .collect();

    let mut optional_paths: Vec<&Path> = ground_set
        .iter()
        .filter(|p| !constraints.is_required(p) && !in_choice.contains(p))
        .collect();

    let mut warnings = Vec::new();
    if optional_paths.len() > OPTIONAL_SOFT_CAP {
        optional_paths.sort_by(|a, b| a.depth().cmp(&b.depth()).then_with(|| a.as_str().cmp(b.as_str())));
        let dropped = optional_paths.len() - OPTIONAL_SOFT_CAP_KEEP;
        optional_paths.truncate(OPTIONAL_SOFT_CAP_KEEP);
        tracing::warn!(dropped, kept = OPTIONAL_SOFT_CAP_KEEP, "truncated optional item list before pairwise factor construction");
        warnings.push(Warning::OptionalTruncated {
            kept: OPTIONAL_SOFT_CAP_KEEP,
            dropped,
        });
    }

    for path in optional_paths {
        factors.push(Factor::Optional(path.clone()));
    }
    (factors, warnings)
}

type PairKey = (usize, usize, usize, usize);

fn all_pairs(factors: &[Factor]) -> BTreeSet<PairKey> {
    let mut pairs = BTreeSet::new();
    for i in 0..factors.len() {
        for j in (i + 1)..factors.len() {
            for li in 0..factors[i].level_count() {
                for lj in 0..factors[j].level_count() {
                    pairs.insert((i, li, j, lj));
                }
            }
        }
    }
    pairs
}

fn pairs_covered_by(assignment: &[usize], factors: &[Factor]) -> BTreeSet<PairKey> {
    let mut covered = BTreeSet::new();
    for i in 0..factors.len() {
        for j in (i + 1)..factors.len() {
            covered.insert((i, assignment[i], j, assignment[j]));
        }
    }
    covered
}

fn random_assignment(rng: &mut StdRng, factors: &[Factor]) -> Vec<usize> {
    factors
        .iter()
        .map(|f| rng.random_range(0..f.level_count()))
        .collect()
}

fn included_paths(assignment: &[usize], factors: &[Factor]) -> BTreeSet<Path> {
    let mut included = BTreeSet::new();
    for (factor, &level) in factors.iter().zip(assignment) {
        included.extend(factor.paths_for_level(level));
    }
    included
}

/// A set of documents, each one row of the covering array, together
/// covering every pairwise combination of independent schema decisions.
#[derive(Debug, Clone)]
pub struct CoveringArray {
    pub rows: Vec<Snippet>,
    pub total_pairs: usize,
    pub covered_pairs: usize,
    pub warnings: Vec<Warning>,
}

impl CoveringArray {
    pub fn is_complete(&self) -> bool {
        self.covered_pairs >= self.total_pairs
    }
}

/// Randomized greedy pairwise covering: each round samples
/// `config.samples_per_round` candidate assignments and keeps whichever one
/// covers the most still-uncovered pairs, until every pair is covered or no
/// sampled candidate makes progress.
pub fn generate(
    model: &SchemaModel,
    ground_set: &GroundSet,
    constraints: &ConstraintSet,
    config: &PairwiseConfig,
) -> Result<CoveringArray> {
    let (factors, mut warnings) = build_factors(ground_set, constraints);
    let mut needed = all_pairs(&factors);
    let total_pairs = needed.len();

    if factors.len() < 2 {
        // Fewer than two independent decisions: there are no pairs to
        // cover, just materialize the one document there is to show.
        let included = included_paths(&vec![0; factors.len()], &factors);
        let (xml, mut row_warnings) = crate::materialize::materialize_with_namespaces(
            model,
            None,
            &included,
            config.coverage.max_depth,
            &config.coverage.namespaces,
        )?;
        warnings.append(&mut row_warnings);
        return Ok(CoveringArray {
            rows: vec![Snippet {
                label: "pairwise_generated_001".to_string(),
                included,
                xml,
            }],
            total_pairs: 0,
            covered_pairs: 0,
            warnings,
        });
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut rows = Vec::new();
    let max_rows = config.max_patterns.max(1);

    while !needed.is_empty() && rows.len() < max_rows {
        let mut best_assignment: Option<Vec<usize>> = None;
        let mut best_new = 0usize;

        for _ in 0..config.samples_per_round.max(1) {
            let candidate = random_assignment(&mut rng, &factors);
            let covered = pairs_covered_by(&candidate, &factors);
            let new_count = covered.intersection(&needed).count();
            if new_count > best_new {
                best_new = new_count;
                best_assignment = Some(candidate);
            }
        }

        let Some(assignment) = best_assignment else {
            // No sampled candidate in this round made progress; more
            // samples wouldn't help without changing the factor model, so
            // stop rather than spin until `max_rows`.
            break;
        };

        let covered = pairs_covered_by(&assignment, &factors);
        needed.retain(|pair| !covered.contains(pair));

        let included = included_paths(&assignment, &factors);
        let (xml, mut row_warnings) = crate::materialize::materialize_with_namespaces(
            model,
            None,
            &included,
            config.coverage.max_depth,
            &config.coverage.namespaces,
        )?;
        warnings.append(&mut row_warnings);

        rows.push(Snippet {
            label: format!("pairwise_generated_{:03}", rows.len() + 1),
            included,
            xml,
        });
    }

    if !needed.is_empty() {
        // Reuses `OptionalTruncated` for a pair-count shortfall rather than
        // an item-count one: `max_patterns` or sampling luck ran out before
        // every pair was hit.
        warnings.push(Warning::OptionalTruncated {
            kept: total_pairs - needed.len(),
            dropped: needed.len(),
        });
    }

    info!(rows = rows.len(), total_pairs, remaining = needed.len(), "pairwise generation complete");

    if rows.is_empty() {
        return Err(XcoverError::Infeasible {
            reason: "pairwise generation produced no rows".to_string(),
        });
    }

    Ok(CoveringArray {
        covered_pairs: total_pairs - needed.len(),
        total_pairs,
        rows,
        warnings,
    })
}
