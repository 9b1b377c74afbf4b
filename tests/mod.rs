use std::path::PathBuf;

use xcover::config::{CoverageConfig, GreedyConfig, PairwiseConfig, ValidateConfig};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data").join(name)
}

fn write_instance(dir: &tempfile::TempDir, name: &str, xml: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, xml).unwrap();
    path
}

#[test]
fn enumerate_finds_required_optional_and_choice_paths() {
    let config = CoverageConfig::new(fixture("order.xsd"));
    let (_, ground_set, constraints) = xcover::load_and_enumerate(&config).unwrap();

    assert!(ground_set.contains(&xcover::Path::from("/Order")));
    assert!(ground_set.contains(&xcover::Path::from("/Order@id")));
    assert!(ground_set.contains(&xcover::Path::from("/Order@status")));
    assert!(ground_set.contains(&xcover::Path::from("/Order/Express")));
    assert!(ground_set.contains(&xcover::Path::from("/Order/Standard")));
    assert!(ground_set.contains(&xcover::Path::from("/Order/Note")));

    assert!(constraints.is_required(&xcover::Path::from("/Order@id")));
    assert!(!constraints.is_required(&xcover::Path::from("/Order@status")));
    assert!(!constraints.is_required(&xcover::Path::from("/Order/Note")));
    assert_eq!(constraints.choice_groups().len(), 1);
    // Express/Standard are mutually exclusive choice branches, so neither is
    // unconditionally required even though they default to minOccurs=1.
    assert!(!constraints.is_required(&xcover::Path::from("/Order/Express")));
    assert!(!constraints.is_required(&xcover::Path::from("/Order/Standard")));
}

#[test]
fn recursive_schema_is_bounded_by_max_depth() {
    let mut config = CoverageConfig::new(fixture("tree.xsd"));
    config.max_depth = 4;
    let (_, ground_set, _) = xcover::load_and_enumerate(&config).unwrap();

    let deepest = ground_set.iter().map(xcover::Path::depth).max().unwrap_or(0);
    assert!(deepest <= config.max_depth + 1, "depth {deepest} exceeded bound {}", config.max_depth);
    assert!(ground_set.contains(&xcover::Path::from("/Tree")));
    assert!(ground_set.contains(&xcover::Path::from("/Tree@label")));
}

#[test]
fn coverage_measures_partial_instance_and_flags_undefined_paths() {
    let config = CoverageConfig::new(fixture("order.xsd"));
    let dir = tempfile::tempdir().unwrap();
    let instance = write_instance(
        &dir,
        "partial.xml",
        r#"<Order id="o-1"><Express>overnight</Express><Bogus/></Order>"#,
    );

    let report = xcover::measure_coverage(&config, &[instance]).unwrap();
    assert!(report.covered_elements.contains(&xcover::Path::from("/Order/Express")));
    assert!(!report.covered_elements.contains(&xcover::Path::from("/Order/Standard")));
    assert!(!report.covered_elements.contains(&xcover::Path::from("/Order/Note")));
    assert!(!report.is_complete());
    assert!(!report.warnings.is_empty(), "expected a warning for the undefined /Order/Bogus path");
}

#[test]
fn greedy_generation_achieves_full_coverage_for_a_choice_schema() {
    let coverage = CoverageConfig::new(fixture("order.xsd"));
    let config = GreedyConfig::new(coverage);
    let plan = xcover::generate_greedy(&config).unwrap();

    assert!(plan.ratio() >= 0.999, "greedy plan only covered {:.1}%", plan.ratio() * 100.0);
    // A mutually exclusive choice needs at least two snippets to demonstrate
    // both branches.
    assert!(plan.snippets.len() >= 2);
    for snippet in &plan.snippets {
        assert!(snippet.xml.contains("<Order"));
    }
}

#[test]
fn greedy_generation_stamps_requested_namespace_overrides() {
    let mut coverage = CoverageConfig::new(fixture("order.xsd"));
    coverage.namespaces = vec![("ex".to_string(), "urn:example:order".to_string())];
    let config = GreedyConfig::new(coverage);
    let plan = xcover::generate_greedy(&config).unwrap();

    assert!(!plan.snippets.is_empty());
    assert!(plan.snippets[0].xml.contains(r#"xmlns:ex="urn:example:order""#));
}

#[test]
fn pairwise_generation_produces_rows_for_a_choice_schema() {
    let coverage = CoverageConfig::new(fixture("order.xsd"));
    let mut config = PairwiseConfig::new(coverage);
    config.seed = 42;
    let array = xcover::generate_pairwise(&config).unwrap();

    assert!(!array.rows.is_empty());
    assert!(array.is_complete(), "pairwise array left {} of {} pairs uncovered", array.total_pairs - array.covered_pairs, array.total_pairs);
}

mod properties {
    use proptest::prelude::*;
    use xcover::config::CoverageConfig;

    use super::fixture;

    proptest! {
        /// Every enumerated path's depth stays within the configured bound,
        /// for any bound applied to a recursive schema.
        #[test]
        fn depth_bound_is_never_exceeded(max_depth in 0usize..8) {
            let mut config = CoverageConfig::new(fixture("tree.xsd"));
            config.max_depth = max_depth;
            let (_, ground_set, _) = xcover::load_and_enumerate(&config).unwrap();
            for path in ground_set.iter() {
                prop_assert!(path.depth() <= max_depth + 1);
            }
        }

        /// Measuring the union of two instances never covers less than
        /// measuring either instance alone.
        #[test]
        fn coverage_is_monotonic_in_added_documents(include_note in any::<bool>()) {
            let config = CoverageConfig::new(fixture("order.xsd"));
            let dir = tempfile::tempdir().unwrap();
            let first = super::write_instance(
                &dir,
                "first.xml",
                r#"<Order id="o-1"><Express>e</Express></Order>"#,
            );
            let note = if include_note { "<Note>n</Note>" } else { "" };
            let second = super::write_instance(
                &dir,
                "second.xml",
                &format!(r#"<Order id="o-2"><Standard>s</Standard>{note}</Order>"#),
            );

            let solo = xcover::measure_coverage(&config, &[first.clone()]).unwrap();
            let combined = xcover::measure_coverage(&config, &[first, second]).unwrap();
            let solo_used: std::collections::BTreeSet<_> = solo.used().cloned().collect();
            let combined_used: std::collections::BTreeSet<_> = combined.used().cloned().collect();
            prop_assert!(combined.covered() >= solo.covered());
            prop_assert!(combined_used.is_superset(&solo_used));
        }
    }
}

#[test]
fn validate_reports_undefined_paths_without_aborting() {
    let coverage = CoverageConfig::new(fixture("order.xsd"));
    let dir = tempfile::tempdir().unwrap();
    let good = write_instance(&dir, "good.xml", r#"<Order id="o-1"><Standard>s</Standard></Order>"#);
    let bad = write_instance(&dir, "bad.xml", r#"<Order id="o-2"><Standard>s</Standard><Unknown/></Order>"#);

    let config = ValidateConfig::new(coverage, vec![good, bad]);
    let report = xcover::validate(&config).unwrap();
    assert!(!report.warnings.is_empty());
    assert!(report.all_valid(), "an undefined path is a warning, not a structural failure");
}

#[test]
fn validate_flags_a_structurally_invalid_file_without_aborting_the_batch() {
    let coverage = CoverageConfig::new(fixture("order.xsd"));
    let dir = tempfile::tempdir().unwrap();
    let valid = write_instance(&dir, "valid.xml", r#"<Order id="o-1"><Standard>s</Standard></Order>"#);
    // Missing the required @id attribute.
    let invalid = write_instance(&dir, "invalid.xml", r#"<Order><Standard>s</Standard></Order>"#);

    let config = ValidateConfig::new(coverage, vec![valid, invalid]);
    let report = xcover::validate(&config).unwrap();

    assert_eq!(report.valid_count(), 1);
    assert_eq!(report.invalid_count(), 1);
    assert!(!report.all_valid());
    let failing = report.files.iter().find(|f| !f.valid).unwrap();
    assert!(failing.first_error.as_deref().unwrap().contains("@id"));
}
