use clap::Parser;
use parprime_compute::{CostModel, EngineConfig};

/// Correctness and performance tester for the parallel prime engine.
///
/// Runs the sequential baseline and the parallel engine on the same bound,
/// then reports precision, recall, ordering, speedup and an estimated grade.
/// Engine flags can also be set through their `PARPRIME_*` env vars.
#[derive(Parser, Debug)]
#[command(name = "primes-tester", version, about)]
pub struct CliArgs {
    /// Upper bound of primes (excluded)
    #[arg(default_value_t = 10_000_000, value_parser = clap::value_parser!(i64).range(0..))]
    pub max: i64,

    /// Number of timed iterations per method
    #[arg(default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    pub iterations: u32,

    /// Worker threads (0 = one per available core)
    #[arg(long, env = "PARPRIME_WORKERS")]
    pub workers: Option<usize>,

    /// Chunks cut per worker
    #[arg(
        long,
        env = "PARPRIME_OVERSUBSCRIPTION",
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub oversubscription: Option<usize>,

    /// Partition cost model: uniform, linear or square_root
    #[arg(long, env = "PARPRIME_COST_MODEL")]
    pub cost_model: Option<CostModel>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl CliArgs {
    /// Flags override `base`, which is normally `EngineConfig::from_env()`.
    pub fn engine_config(&self, base: EngineConfig) -> EngineConfig {
        EngineConfig {
            worker_threads: self.workers.unwrap_or(base.worker_threads),
            oversubscription: self.oversubscription.unwrap_or(base.oversubscription),
            cost_model: self.cost_model.unwrap_or(base.cost_model),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn defaults() {
        let args = CliArgs::try_parse_from(["primes-tester"]).unwrap();
        assert_eq!(args.max, 10_000_000);
        assert_eq!(args.iterations, 10);
        assert!(!args.json);
        assert_eq!(args.engine_config(EngineConfig::default()), EngineConfig::default());
    }

    #[test]
    fn positional_and_flags() {
        let args = CliArgs::try_parse_from([
            "primes-tester",
            "5000",
            "3",
            "--workers",
            "2",
            "--cost-model",
            "linear",
            "--json",
        ])
        .unwrap();
        assert_eq!(args.max, 5000);
        assert_eq!(args.iterations, 3);
        assert!(args.json);

        let base = EngineConfig {
            worker_threads: 9,
            oversubscription: 7,
            cost_model: CostModel::Uniform,
        };
        let config = args.engine_config(base);
        assert_eq!(config.worker_threads, 2);
        assert_eq!(config.oversubscription, 7);
        assert_eq!(config.cost_model, CostModel::Linear);
    }

    // Checked on the command definition; the process env is shared across test threads.
    #[test]
    fn engine_flags_read_env() {
        let command = CliArgs::command();
        let env_of = |id: &str| {
            command
                .get_arguments()
                .find(|arg| arg.get_id() == id)
                .and_then(|arg| arg.get_env())
                .map(|env| env.to_string_lossy().into_owned())
        };
        assert_eq!(env_of("workers").as_deref(), Some("PARPRIME_WORKERS"));
        assert_eq!(
            env_of("oversubscription").as_deref(),
            Some("PARPRIME_OVERSUBSCRIPTION")
        );
        assert_eq!(env_of("cost_model").as_deref(), Some("PARPRIME_COST_MODEL"));
        assert_eq!(env_of("max"), None);
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(CliArgs::try_parse_from(["primes-tester", "-5"]).is_err());
        assert!(CliArgs::try_parse_from(["primes-tester", "10", "0"]).is_err());
        assert!(CliArgs::try_parse_from(["primes-tester", "10", "1", "2"]).is_err());
        assert!(CliArgs::try_parse_from(["primes-tester", "--cost-model", "cubic"]).is_err());
        assert!(CliArgs::try_parse_from(["primes-tester", "--oversubscription", "0"]).is_err());
    }
}
