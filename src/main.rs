use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use ringfifo::harness::{TestContext, Walkthrough};
use ringfifo::ring::{Addressed, Indexed, Representation};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ringfifo")]
#[command(about = "Walk an overwrite-on-full ring buffer through insert/remove/eviction")]
#[command(version)]
struct Cli {
    /// Ring capacity
    #[arg(short, long, default_value_t = 4)]
    capacity: usize,

    /// Elements inserted per batch
    #[arg(short, long, default_value_t = 10)]
    batch: usize,

    /// Position representation to exercise
    #[arg(short, long, value_enum, default_value = "both")]
    representation: Choice,

    /// Only print failures and the summary
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Choice {
    Indexed,
    Addressed,
    Both,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let plan = Walkthrough {
        capacity: cli.capacity,
        batch: cli.batch,
    };

    let mut ctx = TestContext::new();
    ctx.set_verbose(!cli.quiet);

    if matches!(cli.representation, Choice::Indexed | Choice::Both) {
        walk::<Indexed>(&plan, &mut ctx)?;
    }
    if matches!(cli.representation, Choice::Addressed | Choice::Both) {
        walk::<Addressed>(&plan, &mut ctx)?;
    }

    let summary = ctx.summary();
    info!("{}", summary);
    if !summary.passed() {
        bail!("{} of {} checks failed", summary.failures, summary.checks);
    }
    Ok(())
}

fn walk<R: Representation>(plan: &Walkthrough, ctx: &mut TestContext) -> Result<()> {
    plan.run::<R>(ctx)
        .with_context(|| format!("{} walkthrough could not start", R::NAME))
}
