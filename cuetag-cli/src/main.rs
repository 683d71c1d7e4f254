//! cuetag: rule-based tagging of discourse type, polarity, tense and certainty
//!
//! # Subcommands
//! - `eval [--csv PATH] [--variant NAME] [--limit N] [--json]`: score a variant
//!   against a gold corpus
//! - `predict [--csv PATH] [--variant NAME] [--limit N] [--korean] [--trace]`: print
//!   numbered prediction lines, with the rules that fired on stderr when tracing
//! - `validate <FILE>`: check a prediction file's line grammar and numbering
//! - `variants`: list the registered variants
//! - `lexicons`: dump the trigger lexicons as JSON
//!
//! Exit codes: 0 success, 1 validation failures, 2 usage or file errors.

use clap::{Parser, Subcommand};
use cuetag_core::config::EvalConfig;
use cuetag_core::corpus::{self, labeled_rows};
use cuetag_core::validate::{self, ValidationIssue};
use cuetag_core::classify::trace;
use cuetag_core::{classify, evaluate, lexicon, variant, CuetagConfig, Script};
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_CONFIG: &str = "cuetag.toml";

const EXIT_OK: i32 = 0;
const EXIT_VALIDATION_FAILED: i32 = 1;
const EXIT_USAGE: i32 = 2;

// ============================================================================
// CLI Definition
// ============================================================================

#[derive(Debug, Parser)]
#[command(
    name = "cuetag",
    version,
    about = "Keyword-rule tagger for type, polarity, tense and certainty"
)]
struct Cli {
    /// Config file (TOML, optional; also read from CUETAG_CONFIG)
    #[arg(long, env = "CUETAG_CONFIG", default_value = DEFAULT_CONFIG)]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Evaluate a variant against a gold-labeled corpus
    Eval {
        #[command(flatten)]
        run: RunArgs,

        /// Print metrics as JSON instead of the summary line
        #[arg(long)]
        json: bool,
    },

    /// Print one numbered prediction line per valid corpus row
    Predict {
        #[command(flatten)]
        run: RunArgs,

        /// Use the corpus' Korean label spelling
        #[arg(long)]
        korean: bool,

        /// Report the rule that decided each attribute on stderr
        #[arg(long)]
        trace: bool,
    },

    /// Validate a prediction file
    Validate {
        /// Prediction file to check
        file: String,
    },

    /// List the registered variants
    Variants,

    /// Dump the trigger lexicons as JSON, in declaration order
    Lexicons,
}

#[derive(Debug, clap::Args)]
struct RunArgs {
    /// Corpus CSV with `user_prompt` and `output` columns
    #[arg(long)]
    csv: Option<String>,

    /// Variant name (see `cuetag variants`)
    #[arg(long)]
    variant: Option<String>,

    /// Stop after this many valid rows
    #[arg(long)]
    limit: Option<usize>,
}

impl RunArgs {
    /// Command-line flags win over config values.
    fn resolve(self, defaults: &EvalConfig) -> EvalConfig {
        EvalConfig {
            corpus_path: self.csv.unwrap_or_else(|| defaults.corpus_path.clone()),
            variant: self.variant.unwrap_or_else(|| defaults.variant.clone()),
            limit: self.limit.or(defaults.limit),
        }
    }
}

// ============================================================================
// Commands
// ============================================================================

fn do_eval(settings: &EvalConfig, json_output: bool) -> anyhow::Result<i32> {
    // fail on an unknown variant before touching the corpus
    let cfg = variant::lookup(&settings.variant)?;
    let records = corpus::load(&settings.corpus_path)?;
    let metrics = evaluate(&records, cfg, settings.limit);

    if json_output {
        let body = serde_json::json!({
            "variant": cfg.name,
            "metrics": metrics,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        println!("{}", metrics.summary_line(cfg.name));
    }
    Ok(EXIT_OK)
}

fn do_predict(settings: &EvalConfig, script: Script, show_trace: bool) -> anyhow::Result<i32> {
    let cfg = variant::lookup(&settings.variant)?;
    let records = corpus::load(&settings.corpus_path)?;

    let rows = labeled_rows(&records).take(settings.limit.unwrap_or(usize::MAX));
    let mut written = 0;
    for (idx, row) in rows.enumerate() {
        let prediction = classify(row.text, cfg);
        println!("{}", prediction.to_line(idx + 1, script));
        // stderr keeps stdout a valid prediction file
        if show_trace {
            eprintln!("{}. {}", idx + 1, trace(row.text, cfg));
        }
        written += 1;
    }
    tracing::info!("Wrote {} predictions with variant {}", written, cfg.name);
    Ok(EXIT_OK)
}

/// Render a validation outcome as printed output plus exit code.
fn validation_report(issues: &[ValidationIssue]) -> (String, i32) {
    if issues.is_empty() {
        return (
            "validation passed: format ok, numbering contiguous".to_string(),
            EXIT_OK,
        );
    }
    let mut out = String::from("validation failed:");
    for issue in issues {
        out.push_str("\n- ");
        out.push_str(&issue.to_string());
    }
    (out, EXIT_VALIDATION_FAILED)
}

fn do_validate(file: &str) -> anyhow::Result<i32> {
    let issues = match validate::validate_file(file) {
        Ok(issues) => issues,
        Err(e) => {
            eprintln!("cuetag: cannot read {}: {}", file, e);
            return Ok(EXIT_USAGE);
        }
    };
    let (report, code) = validation_report(&issues);
    println!("{}", report);
    Ok(code)
}

fn do_variants() -> anyhow::Result<i32> {
    for v in variant::VARIANTS {
        let marker = if v.name == cuetag_core::DEFAULT_VARIANT { " (default)" } else { "" };
        println!("{}{}", v.describe(), marker);
    }
    Ok(EXIT_OK)
}

fn do_lexicons() -> anyhow::Result<i32> {
    println!("{}", serde_json::to_string_pretty(lexicon::ALL)?);
    Ok(EXIT_OK)
}

// ============================================================================
// Main
// ============================================================================

fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match CuetagConfig::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("cuetag: failed to load config from {}: {}", cli.config, e);
            std::process::exit(EXIT_USAGE);
        }
    };

    // Init logging on stderr; stdout carries command output only
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let result = match cli.command {
        Commands::Eval { run, json } => do_eval(&run.resolve(&config.eval), json),
        Commands::Predict { run, korean, trace } => {
            let script = if korean { Script::Korean } else { Script::English };
            do_predict(&run.resolve(&config.eval), script, trace)
        }
        Commands::Validate { file } => do_validate(&file),
        Commands::Variants => do_variants(),
        Commands::Lexicons => do_lexicons(),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("cuetag: {}", e);
            std::process::exit(EXIT_USAGE);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
