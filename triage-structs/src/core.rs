use crate::serializable_struct_with_getters;
use serde::{Deserialize, Serialize};
use triage_knapsack::{Instance, Report, Selection, Strategy};

serializable_struct_with_getters! {
    SolveOutput {
        strategy: Strategy,
        capacity: u32,
        num_items: usize,
        selection: Selection,
    }
}

impl SolveOutput {
    pub fn new(instance: &Instance, strategy: Strategy, selection: Selection) -> Self {
        Self {
            strategy,
            capacity: instance.capacity(),
            num_items: instance.num_items(),
            selection,
        }
    }
}

serializable_struct_with_getters! {
    TrialOutput {
        trial: u32,
        instance: Instance,
        report: Report,
    }
}

serializable_struct_with_getters! {
    TrialsSummary {
        seed: String,
        num_trials: u32,
        num_consistent: u32,
        trials: Vec<TrialOutput>,
        failure: Option<String>,
    }
}

impl TrialsSummary {
    pub fn all_consistent(&self) -> bool {
        self.failure.is_none() && self.num_consistent == self.num_trials
    }
}
