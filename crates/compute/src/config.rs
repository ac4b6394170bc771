use parprime_core::config::{env_opt, env_parse};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::partition::CostModel;

pub const DEFAULT_OVERSUBSCRIPTION: usize = 4;

/// Engine configuration, typically built from env vars or CLI flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Number of worker threads. 0 = available parallelism.
    #[serde(default = "default_worker_threads")]
    pub worker_threads: usize,
    /// Chunks cut per worker.
    #[serde(default = "default_oversubscription")]
    pub oversubscription: usize,
    /// Per-candidate cost estimate used by the partitioner.
    #[serde(default)]
    pub cost_model: CostModel,
}

fn default_worker_threads() -> usize { 0 }
fn default_oversubscription() -> usize { DEFAULT_OVERSUBSCRIPTION }

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            worker_threads: default_worker_threads(),
            oversubscription: default_oversubscription(),
            cost_model: CostModel::default(),
        }
    }
}

impl EngineConfig {
    /// Build config from `PARPRIME_*` env vars (call `load_dotenv()` first).
    pub fn from_env() -> Self {
        let cost_model = match env_opt("PARPRIME_COST_MODEL") {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                warn!(error = %e, "ignoring PARPRIME_COST_MODEL");
                CostModel::default()
            }),
            None => CostModel::default(),
        };
        Self {
            worker_threads: env_parse("PARPRIME_WORKERS", default_worker_threads()),
            oversubscription: env_parse("PARPRIME_OVERSUBSCRIPTION", default_oversubscription()),
            cost_model,
        }
    }

    /// Resolve worker thread count (0 means use available parallelism).
    pub fn resolved_worker_threads(&self) -> usize {
        if self.worker_threads == 0 {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4)
        } else {
            self.worker_threads
        }
    }
}
