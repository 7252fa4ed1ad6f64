use anyhow::{anyhow, Result};
use log::{error, info};
use triage_knapsack::{compare, solve, Instance, Report, Strategy};
use triage_structs::{
    config::TrialsConfig,
    core::{SolveOutput, TrialOutput, TrialsSummary},
};
use triage_utils::{jsonify, load_json_arg};

/// Loads an instance from inline json, a `.json` file or `-` for stdin.
pub fn load_instance(arg: &str) -> Result<Instance> {
    load_json_arg::<Instance>(arg)
}

pub fn load_selection(arg: &str) -> Result<Vec<usize>> {
    load_json_arg::<Vec<usize>>(arg)
}

pub fn load_config(arg: Option<&str>) -> Result<TrialsConfig> {
    match arg {
        Some(arg) => load_json_arg::<TrialsConfig>(arg),
        None => Ok(TrialsConfig::default()),
    }
}

pub fn solve_instance(instance: &Instance, strategy: Strategy) -> Result<SolveOutput> {
    let selection = solve(instance, strategy)?;
    info!(
        "{} strategy: optimal value {} using items {:?}",
        strategy, selection.optimal_value, selection.items
    );
    Ok(SolveOutput::new(instance, strategy, selection))
}

/// Human readable listing of an instance and its comparison report.
pub fn render_comparison(instance: &Instance, report: &Report) -> String {
    let mut lines = vec!["Samples:".to_string()];
    for (i, item) in instance.items().iter().enumerate() {
        lines.push(format!(
            "  {}. cost: {:3} min | value: {}",
            i, item.cost, item.value
        ));
    }
    lines.push(format!("Capacity: {} min", instance.capacity()));
    lines.push(format!("Optimal value: {}", report.optimal_value));
    lines.push(format!("Selection (memoized): {:?}", report.memo_selection));
    lines.push(format!("Selection (tabulated): {:?}", report.table_selection));
    lines.push(match &report.details {
        Some(details) => format!("Status: {} ({})", report.status, details),
        None => format!("Status: {}", report.status),
    });
    lines.join("\n")
}

/// What `triage compare` prints. `quiet` suppresses the output of a consistent report.
pub fn compare_output(
    instance: &Instance,
    report: &Report,
    json: bool,
    quiet: bool,
) -> Option<String> {
    if quiet && report.is_consistent() {
        return None;
    }
    Some(match json {
        true => jsonify(report),
        false => render_comparison(instance, report),
    })
}

pub fn verify_selection(instance: &Instance, selection: &[usize]) -> Result<u32> {
    instance
        .verify_selection(selection)
        .map_err(|e| anyhow!("Invalid selection: {}", e))
}

/// Compares the evaluators on `config.num_trials` seeded random instances.
///
/// Stops at the first inconsistent trial and records it in `failure`.
pub fn run_trials(config: &TrialsConfig) -> Result<TrialsSummary> {
    config.track.validate()?;
    let mut trials = Vec::new();
    let mut num_consistent = 0;
    let mut failure = None;
    for trial in 0..config.num_trials {
        let instance = Instance::generate_instance(&config.calc_seed(trial), &config.track)?;
        let report = compare(&instance)?;
        info!(
            "trial {}/{}: {} items, capacity {}, optimal value {}, {}",
            trial + 1,
            config.num_trials,
            instance.num_items(),
            instance.capacity(),
            report.optimal_value,
            report.status
        );
        match report.ensure_consistent() {
            Ok(()) => num_consistent += 1,
            Err(e) => {
                error!("trial {} failed: {}", trial, e);
                failure = Some(format!("Trial {}: {}", trial, e));
            }
        }
        trials.push(TrialOutput {
            trial,
            instance,
            report,
        });
        if failure.is_some() {
            break;
        }
    }
    Ok(TrialsSummary {
        seed: config.seed.clone(),
        num_trials: config.num_trials,
        num_consistent,
        trials,
        failure,
    })
}
