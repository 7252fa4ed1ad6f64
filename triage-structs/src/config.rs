use crate::serializable_struct_with_getters;
use serde::{Deserialize, Serialize};
use triage_knapsack::Track;
use triage_utils::seed_from_str_and_index;

pub const DEFAULT_NUM_TRIALS: u32 = 5;
pub const DEFAULT_SEED: &str = "triage";

fn default_num_trials() -> u32 {
    DEFAULT_NUM_TRIALS
}

fn default_seed() -> String {
    DEFAULT_SEED.to_string()
}

serializable_struct_with_getters! {
    TrialsConfig {
        #[serde(default)]
        track: Track,
        #[serde(default = "default_num_trials")]
        num_trials: u32,
        #[serde(default = "default_seed")]
        seed: String,
    }
}

impl Default for TrialsConfig {
    fn default() -> Self {
        Self {
            track: Track::default(),
            num_trials: DEFAULT_NUM_TRIALS,
            seed: default_seed(),
        }
    }
}

impl TrialsConfig {
    /// Seed of the `trial`-th instance. Stable for a given `seed` string.
    pub fn calc_seed(&self, trial: u32) -> [u8; 32] {
        seed_from_str_and_index(&self.seed, trial as u64)
    }
}
