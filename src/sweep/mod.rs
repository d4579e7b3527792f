use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::counter::Counter;
use crate::gen::{InstanceShape, random_instance};
use crate::oracle::OracleBackend;
use crate::resolution::{ResolutionConfig, prove};

#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub count: usize,
    pub seed: u64,
    pub shape: InstanceShape,
    pub backend: OracleBackend,
    pub resolution: ResolutionConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepRow {
    pub index: usize,
    pub seed: u64,
    pub status: String,
    pub outcome: String,
    pub entailed: Option<bool>,
    pub iterations: usize,
    pub peak_support: usize,
    pub kb_clauses: usize,
    pub goal: String,
    pub wall_us: u128,
}

impl SweepRow {
    pub fn csv_header() -> &'static str {
        "index,seed,status,outcome,entailed,iterations,peak_support,kb_clauses,goal,wall_us"
    }

    pub fn to_csv_line(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},{},{},{}",
            self.index,
            self.seed,
            self.status,
            self.outcome,
            self.entailed.map(|x| x.to_string()).unwrap_or_default(),
            self.iterations,
            self.peak_support,
            self.kb_clauses,
            esc_csv(&self.goal),
            self.wall_us,
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct SweepReport {
    pub rows: Vec<SweepRow>,
    pub statuses: Counter<String>,
    pub outcomes: Counter<String>,
}

impl SweepReport {
    /// Refutations the oracle says are not entailments.
    pub fn unsound(&self) -> usize {
        self.statuses.get(&"unsound".to_string())
    }

    /// Entailments the prover did not refute.
    pub fn missed(&self) -> usize {
        self.statuses.get(&"missed".to_string())
    }
}

pub fn run_sweep(cfg: &SweepConfig) -> Result<SweepReport> {
    cfg.shape.validate()?;
    cfg.resolution.validate()?;
    let mut oracle = cfg.backend.build();
    let mut report = SweepReport::default();

    for index in 0..cfg.count {
        let seed = cfg.seed.wrapping_add(index as u64);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let (kb, goal) = random_instance(&mut rng, &cfg.shape)?;

        let start = Instant::now();
        let proof = prove(&kb, &goal, &cfg.resolution);
        let wall_us = start.elapsed().as_micros();

        let entailed = oracle.entails(&kb, &goal).ok();
        let status = match (proof.is_refuted(), entailed) {
            (_, None) => "oracle_error",
            (true, Some(false)) => "unsound",
            (false, Some(true)) => "missed",
            _ => "ok",
        };

        let row = SweepRow {
            index,
            seed,
            status: status.to_string(),
            outcome: proof.outcome.name().to_string(),
            entailed,
            iterations: proof.stats.iterations,
            peak_support: proof.stats.peak_support,
            kb_clauses: kb.len(),
            goal: goal.to_string(),
            wall_us,
        };
        log::debug!(
            "sweep {}: status={} outcome={}",
            index,
            row.status,
            row.outcome
        );
        report.statuses.increment(row.status.clone());
        report.outcomes.increment(row.outcome.clone());
        report.rows.push(row);
    }

    Ok(report)
}

pub fn write_csv(path: &Path, rows: &[SweepRow]) -> Result<()> {
    let mut csv =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    writeln!(csv, "{}", SweepRow::csv_header())?;
    for row in rows {
        writeln!(csv, "{}", row.to_csv_line())?;
    }
    csv.flush()?;
    Ok(())
}

fn esc_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
