use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use indexmap::IndexSet;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use refute::counter::Counter;
use refute::gen::{InstanceShape, random_instance};
use refute::logic::text::{parse_clause, parse_clauses_reader, write_clauses};
use refute::oracle::OracleBackend;
use refute::resolution::{Cancellation, ProofReport, ResolutionConfig, prove};
use refute::sweep::{SweepConfig, run_sweep, write_csv};
use refute::{Clause, Label};

#[derive(Debug, Parser)]
#[command(name = "refute")]
#[command(about = "Set-of-support refutation resolution over grid literals")]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    Prove {
        path: String,
        #[arg(long)]
        goal: String,
        #[arg(long, default_value_t = refute::resolution::DEFAULT_MAX_ITERATIONS)]
        max_iterations: usize,
        #[arg(long, default_value_t = refute::resolution::DEFAULT_MAX_SUPPORT)]
        max_support: usize,
        #[arg(long, default_value_t = false)]
        single: bool,
        #[arg(long, default_value_t = false)]
        trace: bool,
    },
    Check {
        path: String,
        #[arg(long)]
        goal: String,
        #[arg(long, default_value = "varisat")]
        backend: String,
        #[arg(long, default_value_t = false)]
        single: bool,
    },
    Stats {
        path: String,
    },
    Gen {
        #[arg(long, default_value_t = 6)]
        atoms: usize,
        #[arg(long, default_value_t = 8)]
        clauses: usize,
        #[arg(long, default_value_t = 3)]
        width: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        emit: String,
    },
    Sweep {
        #[arg(long, default_value_t = 100)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 6)]
        atoms: usize,
        #[arg(long, default_value_t = 8)]
        clauses: usize,
        #[arg(long, default_value_t = 3)]
        width: usize,
        #[arg(long, default_value = "varisat")]
        backend: String,
        #[arg(long, default_value_t = false)]
        single: bool,
        #[arg(long)]
        csv: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Cmd::Prove {
            path,
            goal,
            max_iterations,
            max_support,
            single,
            trace,
        } => {
            let cfg = ResolutionConfig::default()
                .with_max_iterations(max_iterations)
                .with_max_support(max_support)
                .with_cancellation(rule(single))
                .with_trace(trace);
            prove_cmd(&path, &goal, &cfg)?
        }
        Cmd::Check {
            path,
            goal,
            backend,
            single,
        } => check_cmd(&path, &goal, &backend, single)?,
        Cmd::Stats { path } => stats_cmd(&path)?,
        Cmd::Gen {
            atoms,
            clauses,
            width,
            seed,
            emit,
        } => gen_cmd(
            InstanceShape {
                atoms,
                clauses,
                width,
            },
            seed,
            &emit,
        )?,
        Cmd::Sweep {
            count,
            seed,
            atoms,
            clauses,
            width,
            backend,
            single,
            csv,
        } => sweep_cmd(
            SweepConfig {
                count,
                seed,
                shape: InstanceShape {
                    atoms,
                    clauses,
                    width,
                },
                backend: OracleBackend::parse(&backend)?,
                resolution: ResolutionConfig::default().with_cancellation(rule(single)),
            },
            csv.as_deref(),
        )?,
    }
    Ok(())
}

fn rule(single: bool) -> Cancellation {
    if single {
        Cancellation::Single
    } else {
        Cancellation::All
    }
}

fn load_kb(path: &str) -> Result<IndexSet<Clause>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path))?;
    let kb = parse_clauses_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse {}", path))?;
    Ok(kb)
}

fn prove_cmd(path: &str, goal: &str, cfg: &ResolutionConfig) -> Result<()> {
    cfg.validate()?;
    let kb = load_kb(path)?;
    let goal = parse_clause(goal).context("invalid goal")?;
    let report = prove(&kb, &goal, cfg);
    print_report(&report);
    for (idx, step) in report.trace.iter().enumerate() {
        println!(
            "step {}: ({}) + ({}) => ({})",
            idx + 1,
            step.first,
            step.second,
            step.resolvent
        );
    }
    Ok(())
}

fn print_report(report: &ProofReport) {
    let s = &report.stats;
    println!(
        "result={} outcome={} iterations={} resolvents={} pruned={}",
        report.is_refuted(),
        report.outcome.name(),
        s.iterations,
        s.resolvents,
        s.pruned
    );
    println!(
        "tried_pairs={} peak_support={} final_support={} cancelled={}",
        s.tried_pairs,
        s.peak_support,
        s.final_support,
        s.cancelled.total()
    );
}

fn check_cmd(path: &str, goal: &str, backend: &str, single: bool) -> Result<()> {
    let kb = load_kb(path)?;
    let goal = parse_clause(goal).context("invalid goal")?;
    let mut oracle = OracleBackend::parse(backend)?.build();
    let cfg = ResolutionConfig::default().with_cancellation(rule(single));
    let report = prove(&kb, &goal, &cfg);
    let entailed = oracle.entails(&kb, &goal)?;
    let verdict = match (report.is_refuted(), entailed) {
        (true, false) => "UNSOUND",
        (false, true) => "MISSED",
        _ => "AGREE",
    };
    println!(
        "prover={} outcome={} {}={} verdict={}",
        report.is_refuted(),
        report.outcome.name(),
        oracle.backend_name(),
        entailed,
        verdict
    );
    Ok(())
}

fn stats_cmd(path: &str) -> Result<()> {
    let kb = load_kb(path)?;
    let labels = kb
        .iter()
        .flat_map(|c| c.literals())
        .map(|lit| lit.label().clone())
        .collect::<Counter<Label>>();
    let units = kb.iter().filter(|c| c.is_unit()).count();
    let max_width = kb.iter().map(Clause::len).max().unwrap_or(0);
    println!(
        "clauses={} units={} literals={} max_width={}",
        kb.len(),
        units,
        labels.total(),
        max_width
    );
    for (label, count) in labels.most_common() {
        println!("label {}={}", label, count);
    }
    Ok(())
}

fn gen_cmd(shape: InstanceShape, seed: u64, emit: &str) -> Result<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let (kb, goal) = random_instance(&mut rng, &shape)?;
    std::fs::write(emit, write_clauses(&kb)).with_context(|| format!("failed to write {}", emit))?;
    println!("GEN: wrote {} | clauses={} seed={}", emit, kb.len(), seed);
    println!("goal={}", goal);
    Ok(())
}

fn sweep_cmd(cfg: SweepConfig, csv: Option<&str>) -> Result<()> {
    if cfg.count == 0 {
        bail!("count must be >= 1");
    }
    let report = run_sweep(&cfg)?;
    for (outcome, count) in report.outcomes.iter() {
        println!("outcome {}={}", outcome, count);
    }
    println!(
        "SWEEP SUMMARY: instances={} unsound={} missed={} backend={:?} rule={:?}",
        report.rows.len(),
        report.unsound(),
        report.missed(),
        cfg.backend,
        cfg.resolution.cancellation
    );
    if let Some(path) = csv {
        write_csv(Path::new(path), &report.rows)?;
        println!("wrote {}", path);
    }
    Ok(())
}
