mod cli;
mod report;
mod runner;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use parprime_compute::{EngineConfig, PrimeEngine, TracingHook};
use parprime_core::{load_dotenv, sequential_primes};

use crate::cli::CliArgs;
use crate::report::{compare, render_text};
use crate::runner::perform_test;

fn main() -> Result<()> {
    load_dotenv();

    // Logs go to stderr so `--json` output stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    let config = args.engine_config(EngineConfig::from_env());
    let engine = PrimeEngine::from_config(&config)
        .context("invalid engine configuration")?
        .with_hook(std::sync::Arc::new(TracingHook));
    info!(
        max = args.max,
        iterations = args.iterations,
        workers = engine.workers(),
        oversubscription = config.oversubscription,
        cost_model = %config.cost_model,
        "starting test"
    );

    // Reference test: sequential.
    let reference = perform_test("sequential", args.max, args.iterations, |max| {
        Ok(sequential_primes(max)?)
    })?;

    // Actual test: parallel.
    let computed = perform_test("parallel", args.max, args.iterations, |max| {
        Ok(engine.compute(max)?.into_vec())
    })?;

    let processors = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    let report = compare(&reference, &computed, args.max, args.iterations, processors);

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("failed to serialize report")?
        );
    } else {
        print!("{}", render_text(&report));
    }

    Ok(())
}
