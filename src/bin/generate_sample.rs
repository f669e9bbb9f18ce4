use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

/// Write a demo jobs CSV for the dashboard.
#[derive(Parser)]
#[command(about = "Generate a sample jobs.csv", long_about = None)]
struct Args {
    /// Output path
    #[arg(long, default_value = "jobs.csv")]
    out: PathBuf,

    /// Number of jobs
    #[arg(long, default_value_t = 40)]
    jobs: usize,

    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

const STATUSES: &[&str] = &["on_time", "delayed", "at_risk", "blocked"];
const SITES: &[&str] = &["Plant North", "Plant South", "Warehouse"];

/// Risk cell text. A few cells are blank or unparsable on purpose so the
/// dashboard's missing-value handling shows up in the demo.
fn risk_cell(rng: &mut SimpleRng, status: &str) -> String {
    let roll = rng.next_f64();
    if roll < 0.05 {
        return String::new();
    }
    if roll < 0.08 {
        return "n/a?".to_string();
    }
    let base = match status {
        "on_time" => 0.15,
        "delayed" => 0.45,
        "at_risk" => 0.65,
        _ => 0.55,
    };
    let risk = (base + rng.next_f64() * 0.35).min(1.0);
    format!("{risk:.2}")
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = SimpleRng::new(args.seed);

    let mut writer = csv::Writer::from_path(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;
    writer.write_record(["job_id", "status", "risk_score", "site"])?;

    let mut high_risk = 0;
    for i in 0..args.jobs {
        let job_id = format!("JOB-{:04}", i + 1);
        // ~1 in 15 jobs has no recorded status
        let status = if rng.next_f64() < 0.067 {
            ""
        } else {
            rng.pick(STATUSES)
        };
        let risk = risk_cell(&mut rng, status);
        if risk.parse::<f64>().is_ok_and(|r| r > 0.7) {
            high_risk += 1;
        }
        let site = rng.pick(SITES);
        writer.write_record([job_id.as_str(), status, risk.as_str(), site])?;
    }
    writer.flush().context("flushing CSV")?;

    println!(
        "Wrote {} jobs ({high_risk} above 0.7 risk) to {}",
        args.jobs,
        args.out.display()
    );
    Ok(())
}
