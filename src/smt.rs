//! Coverage-optimizing generator, SMT strategy (component F): encodes the
//! whole ground set as one boolean variable per path in a single document,
//! asserts hierarchy/required/choice hard clauses once, then approximates
//! maximizing `Σv_p` by ratcheting a `Σv_p ≥ k` threshold upward and
//! re-checking, since `easy-smt`'s SMT-LIB core has no native `maximize`
//! directive.
//!
//! Where the greedy strategy ([`crate::snippet`]) builds several small
//! documents, this strategy searches for the single richest document the
//! solver can find within its time budget.
use std::collections::{BTreeMap, BTreeSet};
use std::time::Instant;

use easy_smt::{ContextBuilder, Response, SExpr};
use tracing::{debug, info};

use crate::config::{GreedyConfig, SmtConfig};
use crate::coverage::paths_in_bytes;
use crate::enumerate::{ConstraintSet, GroundSet};
use crate::error::{Result, XcoverError};
use crate::materialize::materialize_with_namespaces;
use crate::model::SchemaModel;
use crate::path::Path;
use crate::snippet::{Snippet, SnippetPlan};

/// Declares one boolean variable per ground-set path and asserts the hard
/// clauses: hierarchy (`v_p → v_q` for parent q), required (`v_q → v_r`),
/// choice exclusivity, and root presence. Depth is not separately asserted:
/// every ground-set path already satisfies the configured depth bound by
/// construction, so `¬v_p` for over-depth paths would be vacuous.
fn assert_hard_clauses(
    ctx: &mut easy_smt::Context,
    model: &SchemaModel,
    ground_set: &GroundSet,
    constraints: &ConstraintSet,
) -> Result<BTreeMap<Path, SExpr>> {
    let bool_sort = ctx.bool_sort();
    let mut vars: BTreeMap<Path, SExpr> = BTreeMap::new();
    for path in ground_set.iter() {
        let var = ctx.declare_const(path.to_smt_var(), bool_sort)?;
        vars.insert(path.clone(), var);
    }

    for path in ground_set.iter() {
        if let Some(parent) = constraints.parent(path) {
            if let Some(&parent_var) = vars.get(parent) {
                let child_var = vars[path];
                ctx.assert(ctx.imp(child_var, parent_var))?;
            }
        }
    }

    for required in constraints.required_paths() {
        if let Some(parent) = constraints.parent(required) {
            if let Some(&parent_var) = vars.get(parent) {
                let required_var = vars[required];
                ctx.assert(ctx.imp(parent_var, required_var))?;
            }
        }
    }

    for group in constraints.choice_groups() {
        let members: Vec<&Path> = group.iter().filter(|p| vars.contains_key(*p)).collect();
        if members.is_empty() {
            continue;
        }
        if let Some(parent) = constraints.parent(members[0]) {
            if let Some(&parent_var) = vars.get(parent) {
                let disjuncts: Vec<SExpr> = members.iter().map(|p| vars[*p]).collect();
                if let Some(any) = disjuncts.into_iter().reduce(|a, b| ctx.or(a, b)) {
                    ctx.assert(ctx.imp(parent_var, any))?;
                }
            }
        }
        for i in 0..members.len() {
            for j in (i + 1)..members.len() {
                let a = vars[members[i]];
                let b = vars[members[j]];
                ctx.assert(ctx.not(ctx.and(a, b)))?;
            }
        }
    }

    if let Some(root) = model.root_elements.first() {
        if let Some(&root_var) = vars.get(&Path::root(&root.name)) {
            ctx.assert(root_var)?;
        }
    }

    Ok(vars)
}

/// Searches for a single document maximizing ground-set coverage via
/// threshold ratcheting, bounded by `config.timeout_ms`. Falls back to a
/// greedy plan (reporting its ratio in the timeout error) if the budget
/// runs out before any satisfying assignment is found.
pub fn generate(
    model: &SchemaModel,
    ground_set: &GroundSet,
    constraints: &ConstraintSet,
    config: &SmtConfig,
) -> Result<SnippetPlan> {
    let total = ground_set.len();
    if total == 0 {
        return materialize_plan(model, ground_set, config, BTreeSet::new());
    }

    let mut ctx = ContextBuilder::new()
        .with_z3()
        .build()
        .map_err(|e| XcoverError::Infeasible {
            reason: format!("could not start SMT solver {}: {e}", config.solver_path),
        })?;

    let vars = assert_hard_clauses(&mut ctx, model, ground_set, constraints)?;

    if ctx.check()? == Response::Unsat {
        return Err(XcoverError::Infeasible {
            reason: "hard clauses derived from the schema are contradictory".to_string(),
        });
    }

    let target_count = (config.target_coverage * total as f64).ceil() as usize;
    let start = Instant::now();
    let mut best: Option<BTreeSet<Path>> = None;

    let zero = ctx.numeral(0);
    let one = ctx.numeral(1);

    for k in 1..=total {
        let elapsed_ms = start.elapsed().as_millis() as u64;
        if elapsed_ms > config.timeout_ms {
            break;
        }

        ctx.push()?;
        let terms: Vec<SExpr> = ground_set.iter().map(|p| ctx.ite(vars[p], one, zero)).collect();
        let sum = terms.into_iter().reduce(|a, b| ctx.plus(a, b)).unwrap_or(zero);
        let threshold = ctx.numeral(k as i32);
        ctx.assert(ctx.gte(sum, threshold))?;

        let response = ctx.check()?;
        if response == Response::Sat {
            let keys: Vec<Path> = vars.keys().cloned().collect();
            let exprs: Vec<SExpr> = keys.iter().map(|p| vars[p]).collect();
            let values = ctx.get_value(exprs)?;
            let true_atom = ctx.true_();
            let included: BTreeSet<Path> = keys
                .into_iter()
                .zip(values)
                .filter(|(_, (_, value))| *value == true_atom)
                .map(|(path, _)| path)
                .collect();
            ctx.pop()?;
            debug!(k, covered = included.len(), "smt ratchet step satisfiable");
            let reached_target = k >= target_count;
            best = Some(included);
            if reached_target {
                break;
            }
        } else {
            ctx.pop()?;
            break;
        }
    }

    match best {
        Some(included) => {
            info!(covered = included.len(), total, "smt search complete");
            materialize_plan(model, ground_set, config, included)
        }
        None => timeout_fallback(model, ground_set, constraints, config, start.elapsed().as_millis() as u64),
    }
}

fn materialize_plan(
    model: &SchemaModel,
    ground_set: &GroundSet,
    config: &SmtConfig,
    included: BTreeSet<Path>,
) -> Result<SnippetPlan> {
    let (xml, warnings) = materialize_with_namespaces(
        model,
        None,
        &included,
        config.coverage.max_depth,
        &config.coverage.namespaces,
    )?;
    let achieved = paths_in_bytes(xml.as_bytes()).map_err(|reason| XcoverError::XmlParse {
        path: "<smt document>".into(),
        reason,
    })?;
    let covered: BTreeSet<Path> = achieved.into_iter().filter(|p| ground_set.contains(p)).collect();

    Ok(SnippetPlan {
        snippets: vec![Snippet {
            label: "smt_generated_001".to_string(),
            included,
            xml,
        }],
        covered,
        total: ground_set.len(),
        warnings,
    })
}

fn timeout_fallback(
    model: &SchemaModel,
    ground_set: &GroundSet,
    constraints: &ConstraintSet,
    config: &SmtConfig,
    elapsed_ms: u64,
) -> Result<SnippetPlan> {
    let greedy_config = GreedyConfig::new(config.coverage.clone());
    let plan = crate::snippet::generate_greedy(model, ground_set, constraints, &greedy_config)?;
    Err(XcoverError::Timeout {
        elapsed_ms,
        best_coverage: plan.ratio(),
    })
}
