//! Coverage-optimizing generator, greedy strategy (component E): builds a
//! finite family of candidate snippets parameterized by target depth,
//! whether to include optional items, and which choice branch to realize,
//! then runs a set-cover optimizer over that family until the ground set is
//! covered, the file budget runs out, or the next candidate's gain is zero.
use std::collections::BTreeSet;

use tracing::info;

use crate::config::GreedyConfig;
use crate::coverage::paths_in_bytes;
use crate::enumerate::{ConstraintSet, GroundSet};
use crate::error::{Result, Warning, XcoverError};
use crate::materialize::materialize_with_namespaces;
use crate::model::SchemaModel;
use crate::path::Path;

/// One materialized document and the ground-set paths it was built to
/// demonstrate.
#[derive(Debug, Clone)]
pub struct Snippet {
    pub label: String,
    pub included: BTreeSet<Path>,
    pub xml: String,
}

/// A set of snippets together covering as much of the ground set as the
/// strategy could manage within its budget.
#[derive(Debug, Clone)]
pub struct SnippetPlan {
    pub snippets: Vec<Snippet>,
    pub covered: BTreeSet<Path>,
    pub total: usize,
    pub warnings: Vec<Warning>,
}

impl SnippetPlan {
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.covered.len() as f64 / self.total as f64
        }
    }

    pub fn missing(&self, ground_set: &GroundSet) -> BTreeSet<Path> {
        ground_set
            .iter()
            .filter(|p| !self.covered.contains(*p))
            .cloned()
            .collect()
    }
}

/// The set of ground-set paths a candidate snippet asks the materializer to
/// include: every optional path (when `include_optional`), plus exactly one
/// branch per choice group, chosen by `choice_index` modulo the group's
/// branch count. Choice decisions are never skipped, since a document must
/// still pick some branch regardless of `include_optional`.
fn candidate_wanted(ground_set: &GroundSet, constraints: &ConstraintSet, include_optional: bool, choice_index: usize) -> BTreeSet<Path> {
    let mut wanted = BTreeSet::new();
    if include_optional {
        for path in ground_set.iter() {
            if !constraints.is_required(path) {
                wanted.insert(path.clone());
            }
        }
    }
    for group in constraints.choice_groups() {
        let branches: Vec<&Path> = group.iter().collect();
        if branches.is_empty() {
            continue;
        }
        let chosen = branches[choice_index % branches.len()];
        for branch in &branches {
            if *branch == chosen {
                wanted.insert((*branch).clone());
            } else {
                wanted.remove(*branch);
            }
        }
    }
    wanted
}

/// One candidate in the snippet family: its generating parameters, the
/// document it materializes to, and the ground-set paths it actually
/// covers (re-derived from the materialized XML rather than assumed, since
/// a choice's default-branch fallback can differ from what was requested).
struct Candidate {
    id: usize,
    wanted: BTreeSet<Path>,
    xml: String,
    covered: BTreeSet<Path>,
    warnings: Vec<Warning>,
}

fn build_candidates(
    model: &SchemaModel,
    ground_set: &GroundSet,
    constraints: &ConstraintSet,
    config: &GreedyConfig,
) -> Result<Vec<Candidate>> {
    let max_branch_count = constraints.choice_groups().iter().map(|g| g.len()).max().unwrap_or(1).max(1);
    let mut candidates = Vec::new();
    let mut id = 0usize;

    for target_depth in 0..=config.max_gen_depth {
        for include_optional in [true, false] {
            for choice_index in 0..max_branch_count {
                let wanted = candidate_wanted(ground_set, constraints, include_optional, choice_index);
                let (xml, warnings) =
                    materialize_with_namespaces(model, None, &wanted, target_depth, &config.coverage.namespaces)?;
                let achieved = paths_in_bytes(xml.as_bytes()).map_err(|reason| XcoverError::XmlParse {
                    path: format!("<greedy candidate {id}>").into(),
                    reason,
                })?;
                let covered: BTreeSet<Path> = achieved.into_iter().filter(|p| ground_set.contains(p)).collect();
                candidates.push(Candidate { id, wanted, xml, covered, warnings });
                id += 1;
            }
        }
    }

    Ok(candidates)
}

/// Runs the set-cover optimizer: repeatedly picks the candidate maximizing
/// `|covered ∩ uncovered|`, ties broken by fewest total paths then by
/// deterministic id, stopping at `target_coverage`, `max_files`, or zero
/// further gain.
pub fn generate_greedy(
    model: &SchemaModel,
    ground_set: &GroundSet,
    constraints: &ConstraintSet,
    config: &GreedyConfig,
) -> Result<SnippetPlan> {
    let candidates = build_candidates(model, ground_set, constraints, config)?;

    let mut total_covered: BTreeSet<Path> = BTreeSet::new();
    let mut snippets = Vec::new();
    let mut warnings = Vec::new();
    let ground_total = ground_set.len().max(1);

    loop {
        if snippets.len() >= config.max_files {
            break;
        }
        if total_covered.len() as f64 / ground_total as f64 >= config.target_coverage {
            break;
        }

        let best = candidates
            .iter()
            .map(|c| (c, c.covered.iter().filter(|p| !total_covered.contains(*p)).count()))
            .filter(|(_, gain)| *gain > 0)
            .min_by_key(|(c, gain)| (std::cmp::Reverse(*gain), c.covered.len(), c.id));

        let Some((chosen, gain)) = best else {
            break;
        };

        total_covered.extend(chosen.covered.iter().cloned());
        warnings.extend(chosen.warnings.clone());
        snippets.push(Snippet {
            label: format!("greedy_generated_{:03}", snippets.len() + 1),
            included: chosen.wanted.clone(),
            xml: chosen.xml.clone(),
        });
        info!(gain, total_covered = total_covered.len(), files = snippets.len(), "greedy selection");
    }

    Ok(SnippetPlan {
        snippets,
        covered: total_covered,
        total: ground_set.len(),
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CoverageConfig;
    use crate::model::{AttrUse, AttributeDecl, ContentModel, ElementParticle, MaxOccurs, ParticleModel, TypeDef};
    use std::collections::BTreeMap;

    fn model_with_choice() -> SchemaModel {
        let mut types = BTreeMap::new();
        types.insert(
            "RootType".to_string(),
            TypeDef {
                name: Some("RootType".to_string()),
                attributes: vec![AttributeDecl {
                    name: "id".to_string(),
                    type_name: "string".to_string(),
                    use_: AttrUse::Required,
                }],
                content: ContentModel::ElementOnly(ParticleModel::Choice(vec![
                    ParticleModel::Element(ElementParticle {
                        name: "A".to_string(),
                        type_name: "string".to_string(),
                        min_occurs: 1,
                        max_occurs: MaxOccurs::Bounded(1),
                    }),
                    ParticleModel::Element(ElementParticle {
                        name: "B".to_string(),
                        type_name: "string".to_string(),
                        min_occurs: 1,
                        max_occurs: MaxOccurs::Bounded(1),
                    }),
                ])),
            },
        );
        SchemaModel {
            target_namespace: String::new(),
            xs_prefix: "xs".to_string(),
            root_elements: vec![ElementParticle {
                name: "Root".to_string(),
                type_name: "RootType".to_string(),
                min_occurs: 1,
                max_occurs: MaxOccurs::Bounded(1),
            }],
            types,
            simple_types: BTreeMap::new(),
            opaque_namespaces: std::collections::BTreeSet::new(),
        }
    }

    #[test]
    fn greedy_needs_two_rounds_for_a_mutually_exclusive_choice() {
        let model = model_with_choice();
        let config = CoverageConfig::new("unused.xsd");
        let (ground_set, constraints) = crate::enumerate::enumerate(&model, &config);
        let greedy_config = GreedyConfig::new(config);

        let plan = generate_greedy(&model, &ground_set, &constraints, &greedy_config).unwrap();
        assert_eq!(plan.covered, ground_set.paths);
        assert_eq!(plan.snippets.len(), 2);
        assert!(plan.snippets[0].label.starts_with("greedy_generated_"));
    }

    #[test]
    fn greedy_stops_at_max_files() {
        let model = model_with_choice();
        let config = CoverageConfig::new("unused.xsd");
        let (ground_set, constraints) = crate::enumerate::enumerate(&model, &config);
        let mut greedy_config = GreedyConfig::new(config);
        greedy_config.max_files = 1;

        let plan = generate_greedy(&model, &ground_set, &constraints, &greedy_config).unwrap();
        assert_eq!(plan.snippets.len(), 1);
        assert!(plan.ratio() < 1.0);
    }
}
