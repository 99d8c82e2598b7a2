use anyhow::{Result, anyhow, bail};
use clap::Parser;
use rand::Rng;
use ringfifo::ring::{Addressed, Indexed, Representation, RingBuffer};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stress")]
#[command(about = "Random insert/remove mix against both ring representations")]
struct Args {
    /// Seconds to run each representation for
    #[arg(short, long, default_value_t = 5)]
    seconds: u64,

    /// Ring capacity
    #[arg(short, long, default_value_t = 1024)]
    capacity: usize,

    /// Probability that a step inserts rather than removes
    #[arg(short, long, default_value_t = 0.6)]
    insert_ratio: f64,
}

#[derive(Debug, Default)]
struct Report {
    inserts: u64,
    removes: u64,
    empty_removes: u64,
    order_violations: u64,
}

impl Report {
    fn ops(&self) -> u64 {
        self.inserts + self.removes + self.empty_removes
    }

    /// Millions of operations per second, or `None` if nothing ran.
    fn mops_per_sec(&self, elapsed: Duration) -> Option<f64> {
        let secs = elapsed.as_secs_f64();
        if self.ops() == 0 || secs == 0.0 {
            return None;
        }
        Some(self.ops() as f64 / secs / 1_000_000.0)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    if !(0.0..=1.0).contains(&args.insert_ratio) {
        bail!("insert ratio must lie in [0, 1], got {}", args.insert_ratio);
    }

    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })
    .map_err(|e| anyhow!("Failed to set Ctrl+C handler: {}", e))?;

    let period = Duration::from_secs(args.seconds);
    let mut violations = 0;
    for report in [
        hammer::<Indexed>(&args, period, &running)?,
        hammer::<Addressed>(&args, period, &running)?,
    ] {
        violations += report.order_violations;
    }

    if violations > 0 {
        bail!("{} values came out of order", violations);
    }
    Ok(())
}

fn hammer<R: Representation>(
    args: &Args,
    period: Duration,
    running: &AtomicBool,
) -> Result<Report> {
    let mut ring = RingBuffer::<u64, R>::new(args.capacity)?;
    let mut rng = rand::rng();
    let mut report = Report::default();
    let mut next = 0u64;
    let mut last_out: Option<u64> = None;

    info!(representation = R::NAME, capacity = args.capacity, "running");
    let start = Instant::now();

    while running.load(Ordering::Relaxed) && start.elapsed() < period {
        for _ in 0..4096 {
            if rng.random_bool(args.insert_ratio) {
                ring.insert(next);
                next += 1;
                report.inserts += 1;
                continue;
            }

            match ring.remove() {
                Ok(value) => {
                    if last_out.is_some_and(|last| value <= last) {
                        report.order_violations += 1;
                    }
                    last_out = Some(value);
                    report.removes += 1;
                }
                Err(_) => report.empty_removes += 1,
            }
        }
    }

    match report.mops_per_sec(start.elapsed()) {
        Some(mops) => info!(
            representation = R::NAME,
            inserts = report.inserts,
            removes = report.removes,
            empty_removes = report.empty_removes,
            "throughput {:.2}M ops/sec",
            mops
        ),
        None => info!(representation = R::NAME, "stopped before any operation ran"),
    }
    if report.order_violations > 0 {
        warn!(
            representation = R::NAME,
            violations = report.order_violations,
            "FIFO order violated"
        );
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_throughput_when_nothing_ran() {
        let report = Report::default();
        assert_eq!(report.mops_per_sec(Duration::ZERO), None);
        assert_eq!(report.mops_per_sec(Duration::from_secs(1)), None);
    }

    #[test]
    fn throughput_in_millions() {
        let report = Report {
            inserts: 3_000_000,
            removes: 1_000_000,
            ..Report::default()
        };
        let mops = report.mops_per_sec(Duration::from_secs(2)).unwrap();
        assert!((mops - 2.0).abs() < 1e-9);
    }
}
