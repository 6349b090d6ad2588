//! `thales` — solve Euclidean construction problems and emit proofs.

use std::collections::BTreeMap;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::info;
use tracing_subscriber::EnvFilter;

use thales_construct::{build_problem, DEFAULT_MAX_ATTEMPTS};
use thales_core::RunProvenance;
use thales_engine::{dump_hypergraph, run_loop, write_proof_steps, Matcher, RunInfos};
use thales_lang::{Problem, Rule, DEFAULT_RULES};

#[derive(Parser, Debug)]
#[command(name = "thales", about = "Euclidean geometry theorem prover")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a problem, run deduction to success or exhaustion, and write
    /// the proof artifacts.
    Solve(SolveArgs),
}

#[derive(Args, Debug)]
struct SolveArgs {
    /// Problem text, e.g. "a b c = triangle a b c ? perp a b a c".
    #[arg(long, conflicts_with = "problem_file")]
    problem: Option<String>,
    /// File containing the problem text.
    #[arg(long)]
    problem_file: Option<PathBuf>,
    /// Rule file; the embedded default rule set when omitted.
    #[arg(long)]
    rules: Option<PathBuf>,
    /// Master seed for diagram sampling.
    #[arg(long, default_value_t = 998_244_353)]
    seed: u64,
    /// Attempt budget for the construction dependency checks.
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: u32,
    /// Step budget for the saturation loop.
    #[arg(long)]
    max_steps: Option<u64>,
    /// Output directory; artifacts print to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Also write the machine-readable hypergraph dump.
    #[arg(long)]
    dump_graph: bool,
    /// On-disk matcher cache path.
    #[arg(long)]
    matcher_cache: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct SolveReport {
    #[serde(flatten)]
    infos: RunInfos,
    provenance: RunProvenance,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let cli = Cli::parse();
    match cli.command {
        Command::Solve(args) => solve(args),
    }
}

fn solve(args: SolveArgs) -> Result<(), Box<dyn Error>> {
    let problem_text = match (&args.problem, &args.problem_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => return Err("either --problem or --problem-file is required".into()),
    };
    let rules_text = match &args.rules {
        Some(path) => fs::read_to_string(path)?,
        None => DEFAULT_RULES.to_string(),
    };

    let problem = Problem::from_text(&problem_text)?;
    let rules = Rule::parse_text(&rules_text)?;
    info!(clauses = problem.clauses.len(), rules = rules.len(), "loaded problem");

    let mut proof = build_problem(&problem, args.seed, args.max_attempts)?;
    let mut matcher = Matcher::new(args.matcher_cache.clone());
    let infos = run_loop(&mut proof, &mut matcher, &rules, args.max_steps)?;

    let report = SolveReport {
        infos,
        provenance: RunProvenance {
            problem_hash: hex_digest(&problem_text),
            rules_hash: hex_digest(&rules_text),
            seed: args.seed,
            created_at: chrono::Utc::now().to_rfc3339(),
            tool_versions: BTreeMap::from([(
                "thales".to_string(),
                env!("CARGO_PKG_VERSION").to_string(),
            )]),
        },
    };
    let proof_text = write_proof_steps(&mut proof)?;

    match &args.out {
        Some(out) => {
            fs::create_dir_all(out)?;
            fs::write(out.join("proof_steps.txt"), &proof_text)?;
            fs::write(
                out.join("run_infos.json"),
                serde_json::to_string_pretty(&report)?,
            )?;
            if args.dump_graph {
                fs::write(
                    out.join("hypergraph.json"),
                    serde_json::to_string_pretty(&dump_hypergraph(&proof))?,
                )?;
            }
            info!(out = %out.display(), "artifacts written");
        }
        None => {
            println!("{proof_text}");
            println!("{}", serde_json::to_string_pretty(&report)?);
            if args.dump_graph {
                println!("{}", serde_json::to_string_pretty(&dump_hypergraph(&proof))?);
            }
        }
    }
    Ok(())
}

fn hex_digest(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}
