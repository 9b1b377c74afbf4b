use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use xcover::config::{CoverageConfig, GreedyConfig, PairwiseConfig, SmtConfig, ValidateConfig};
use xcover::error::XcoverError;

#[derive(Parser)]
#[command(name = "xcover")]
#[command(about = "Path-coverage measurement and generation for XML Schema Definitions")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Measure how much of a schema's ground set a batch of documents exercises
    Coverage {
        /// Path to the root .xsd file
        #[arg(long)]
        schema: PathBuf,
        /// Maximum recursion depth while enumerating the ground set
        #[arg(long, default_value_t = xcover::config::DEFAULT_MAX_DEPTH)]
        max_depth: usize,
        /// XML instance documents to measure
        #[arg(required = true)]
        instances: Vec<PathBuf>,
    },

    /// Generate a minimal snippet set with a greedy set-cover heuristic
    Greedy {
        #[arg(long)]
        schema: PathBuf,
        #[arg(long, default_value_t = xcover::config::DEFAULT_MAX_DEPTH)]
        max_depth: usize,
        /// Depth bound applied per candidate snippet
        #[arg(long, default_value_t = 10)]
        max_gen_depth: usize,
        /// Stop once covered/total reaches this fraction
        #[arg(long, default_value_t = 0.90)]
        target_coverage: f64,
        /// Upper bound on the number of snippet files to emit
        #[arg(long, default_value_t = 10)]
        max_files: usize,
        /// Directory to write the generated snippets into
        #[arg(long)]
        out_dir: PathBuf,
        /// Extra `prefix=uri` namespace declaration on the generated root,
        /// repeatable
        #[arg(long = "namespace")]
        namespaces: Vec<String>,
    },

    /// Generate a minimal snippet set using an SMT solver
    Smt {
        #[arg(long)]
        schema: PathBuf,
        #[arg(long, default_value_t = xcover::config::DEFAULT_MAX_DEPTH)]
        max_depth: usize,
        /// Search budget in milliseconds before falling back to the greedy plan
        #[arg(long, default_value_t = 60_000)]
        timeout_ms: u64,
        /// Stop ratcheting the soft-objective threshold once covered/total
        /// reaches this fraction
        #[arg(long, default_value_t = 0.95)]
        target_coverage: f64,
        #[arg(long)]
        out_dir: PathBuf,
        /// Extra `prefix=uri` namespace declaration on the generated root,
        /// repeatable
        #[arg(long = "namespace")]
        namespaces: Vec<String>,
    },

    /// Generate a pairwise covering array over a schema's optional items
    Pairwise {
        #[arg(long)]
        schema: PathBuf,
        #[arg(long, default_value_t = xcover::config::DEFAULT_MAX_DEPTH)]
        max_depth: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Upper bound on the number of covering-array rows to emit
        #[arg(long, default_value_t = 50)]
        max_patterns: usize,
        #[arg(long)]
        out_dir: PathBuf,
        /// Extra `prefix=uri` namespace declaration on the generated root,
        /// repeatable
        #[arg(long = "namespace")]
        namespaces: Vec<String>,
    },

    /// Validate a batch of XML instance documents against a schema, structurally
    Validate {
        #[arg(long)]
        schema: PathBuf,
        #[arg(long, default_value_t = xcover::config::DEFAULT_MAX_DEPTH)]
        max_depth: usize,
        /// Optional path to write the validation report to, in addition to stdout
        #[arg(long)]
        report: Option<PathBuf>,
        #[arg(required = true)]
        instances: Vec<PathBuf>,
    },
}

fn parse_namespaces(raw: &[String]) -> xcover::Result<Vec<(String, String)>> {
    raw.iter()
        .map(|entry| {
            entry
                .split_once('=')
                .map(|(prefix, uri)| (prefix.to_string(), uri.to_string()))
                .ok_or_else(|| XcoverError::Enumeration(format!("invalid --namespace '{entry}', expected prefix=uri")))
        })
        .collect()
}

fn write_snippets(out_dir: &std::path::Path, snippets: &[xcover::snippet::Snippet]) -> xcover::Result<()> {
    std::fs::create_dir_all(out_dir).map_err(XcoverError::Io)?;
    for snippet in snippets {
        let path = out_dir.join(format!("{}.xml", snippet.label));
        std::fs::write(&path, &snippet.xml).map_err(XcoverError::Io)?;
    }
    Ok(())
}

/// Renders the §6-mandated sectioned coverage report: element coverage,
/// attribute coverage, overall coverage, unused paths, undefined-path
/// warnings, then used paths. Percentages at two decimal places.
fn render_coverage_report(report: &xcover::coverage::CoverageReport) -> String {
    use std::fmt::Write as _;
    let mut out = String::new();
    writeln!(
        out,
        "Element coverage: {}/{} ({:.2}%)",
        report.covered_elements.len(),
        report.total_elements,
        report.element_ratio() * 100.0
    )
    .unwrap();
    writeln!(
        out,
        "Attribute coverage: {}/{} ({:.2}%)",
        report.covered_attributes.len(),
        report.total_attributes,
        report.attribute_ratio() * 100.0
    )
    .unwrap();
    writeln!(
        out,
        "Overall coverage: {}/{} ({:.2}%)",
        report.covered(),
        report.total(),
        report.ratio() * 100.0
    )
    .unwrap();
    writeln!(out, "Unused paths:").unwrap();
    for path in report.missing() {
        writeln!(out, "  {path}").unwrap();
    }
    writeln!(out, "Warning: undefined paths:").unwrap();
    for warning in &report.warnings {
        writeln!(out, "  {warning}").unwrap();
    }
    writeln!(out, "Used paths:").unwrap();
    for path in report.used() {
        writeln!(out, "  {path}").unwrap();
    }
    out
}

fn run(cli: Cli) -> xcover::Result<ExitCode> {
    match cli.command {
        Commands::Coverage { schema, max_depth, instances } => {
            let mut config = CoverageConfig::new(schema);
            config.max_depth = max_depth;
            let report = xcover::measure_coverage(&config, &instances)?;
            print!("{}", render_coverage_report(&report));
            Ok(ExitCode::from(0))
        }

        Commands::Greedy {
            schema,
            max_depth,
            max_gen_depth,
            target_coverage,
            max_files,
            out_dir,
            namespaces,
        } => {
            let mut coverage = CoverageConfig::new(schema);
            coverage.max_depth = max_depth;
            coverage.namespaces = parse_namespaces(&namespaces)?;
            let mut config = GreedyConfig::new(coverage);
            config.max_gen_depth = max_gen_depth;
            config.target_coverage = target_coverage;
            config.max_files = max_files;
            let plan = xcover::generate_greedy(&config)?;
            write_snippets(&out_dir, &plan.snippets)?;
            println!(
                "generated {} snippets covering {}/{} paths ({:.2}%)",
                plan.snippets.len(),
                plan.covered.len(),
                plan.total,
                plan.ratio() * 100.0
            );
            for warning in &plan.warnings {
                eprintln!("warning: {warning}");
            }
            Ok(ExitCode::from(0))
        }

        Commands::Smt {
            schema,
            max_depth,
            timeout_ms,
            target_coverage,
            out_dir,
            namespaces,
        } => {
            let mut coverage = CoverageConfig::new(schema);
            coverage.max_depth = max_depth;
            coverage.namespaces = parse_namespaces(&namespaces)?;
            let mut config = SmtConfig::new(coverage);
            config.timeout_ms = timeout_ms;
            config.target_coverage = target_coverage;
            let plan = xcover::generate_smt(&config)?;
            write_snippets(&out_dir, &plan.snippets)?;
            println!(
                "generated {} via SMT search covering {}/{} paths ({:.2}%)",
                plan.snippets.len(),
                plan.covered.len(),
                plan.total,
                plan.ratio() * 100.0
            );
            for warning in &plan.warnings {
                eprintln!("warning: {warning}");
            }
            Ok(ExitCode::from(0))
        }

        Commands::Pairwise {
            schema,
            max_depth,
            seed,
            max_patterns,
            out_dir,
            namespaces,
        } => {
            let mut coverage = CoverageConfig::new(schema);
            coverage.max_depth = max_depth;
            coverage.namespaces = parse_namespaces(&namespaces)?;
            let mut config = PairwiseConfig::new(coverage);
            config.seed = seed;
            config.max_patterns = max_patterns;
            let array = xcover::generate_pairwise(&config)?;
            write_snippets(&out_dir, &array.rows)?;
            println!(
                "generated {} patterns covering {}/{} pairs",
                array.rows.len(),
                array.covered_pairs,
                array.total_pairs
            );
            for warning in &array.warnings {
                eprintln!("warning: {warning}");
            }
            Ok(ExitCode::from(0))
        }

        Commands::Validate { schema, max_depth, report: report_path, instances } => {
            let mut coverage = CoverageConfig::new(schema);
            coverage.max_depth = max_depth;
            let config = ValidateConfig::new(coverage, instances);
            let report = xcover::validate(&config)?;

            let mut rendered = String::new();
            for file in &report.files {
                use std::fmt::Write as _;
                if file.valid {
                    writeln!(rendered, "{}: valid", file.path.display()).unwrap();
                } else {
                    writeln!(
                        rendered,
                        "{}: invalid (first error: {})",
                        file.path.display(),
                        file.first_error.as_deref().unwrap_or("unknown")
                    )
                    .unwrap();
                }
            }
            writeln!(
                &mut rendered,
                "summary: {} valid / {} invalid",
                report.valid_count(),
                report.invalid_count()
            )
            .unwrap();

            print!("{rendered}");
            for warning in &report.warnings {
                eprintln!("warning: {warning}");
            }
            if let Some(report_path) = report_path {
                std::fs::write(&report_path, &rendered).map_err(XcoverError::Io)?;
            }

            Ok(if report.all_valid() { ExitCode::from(0) } else { ExitCode::from(4) })
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(XcoverError::SchemaParse { reason, location }) => {
            eprintln!("schema error at {location}: {reason}");
            ExitCode::from(2)
        }
        Err(XcoverError::Infeasible { reason }) => {
            eprintln!("infeasible: {reason}");
            ExitCode::from(3)
        }
        Err(XcoverError::Timeout { elapsed_ms, best_coverage }) => {
            eprintln!("timed out after {elapsed_ms}ms, best coverage so far {:.2}%", best_coverage * 100.0);
            ExitCode::from(3)
        }
        Err(XcoverError::ValidationFailure { path, reason, location }) => {
            eprintln!("{}: {reason} (first error at {location})", path.display());
            ExitCode::from(4)
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(1)
        }
    }
}
