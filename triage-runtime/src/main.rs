use anyhow::{anyhow, Result};
use clap::{arg, ArgAction, Command};
use std::{fs, path::PathBuf};
use triage_knapsack::{compare, Instance, Strategy};
use triage_runtime::*;
use triage_utils::{jsonify, jsonify_pretty};

fn cli() -> Command {
    Command::new("triage")
        .about("Selects samples to analyse within a time budget")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("solve")
                .about("Computes an optimal selection")
                .arg(
                    arg!(<INSTANCE> "Instance json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--strategy [STRATEGY] "Evaluator used to compute the selection")
                        .default_value("tabulated")
                        .value_parser(["recursive", "memoized", "tabulated"]),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the output will be saved to this file path")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new("compare")
                .about("Cross-validates the memoized and tabulated evaluators")
                .arg(
                    arg!([INSTANCE] "Instance json string, path to json file, or '-' for stdin. Defaults to the built-in example")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(arg!(--json "Print the report as json").action(ArgAction::SetTrue))
                .arg(
                    arg!(--quiet "Print nothing when the evaluators agree")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("verify")
                .about("Verifies a selection and prints its total value")
                .arg(
                    arg!(<INSTANCE> "Instance json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<SELECTION> "Json array of item indices, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("trials")
                .about("Checks the evaluators agree on random instances")
                .arg(
                    arg!(--config [CONFIG] "Trials config json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--seed [SEED] "Overrides the seed from the config")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--"num-trials" [NUM_TRIALS] "Overrides the number of trials from the config")
                        .value_parser(clap::value_parser!(u32)),
                )
                .arg(arg!(--json "Print the summary as json").action(ArgAction::SetTrue)),
        )
}

fn main() {
    if std::env::var("TRIAGE_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("TRIAGE_LOG")
            .write_style("TRIAGE_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("solve", sub_m)) => solve_cmd(
            sub_m.get_one::<String>("INSTANCE").unwrap(),
            sub_m.get_one::<String>("strategy").unwrap(),
            sub_m.get_one::<PathBuf>("output").cloned(),
        ),
        Some(("compare", sub_m)) => compare_cmd(
            sub_m.get_one::<String>("INSTANCE").map(String::as_str),
            sub_m.get_flag("json"),
            sub_m.get_flag("quiet"),
        ),
        Some(("verify", sub_m)) => verify_cmd(
            sub_m.get_one::<String>("INSTANCE").unwrap(),
            sub_m.get_one::<String>("SELECTION").unwrap(),
        ),
        Some(("trials", sub_m)) => trials_cmd(
            sub_m.get_one::<String>("config").map(String::as_str),
            sub_m.get_one::<String>("seed").cloned(),
            sub_m.get_one::<u32>("num-trials").cloned(),
            sub_m.get_flag("json"),
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn solve_cmd(instance: &str, strategy: &str, output_file: Option<PathBuf>) -> Result<()> {
    let instance = load_instance(instance)?;
    let strategy = strategy.parse::<Strategy>()?;
    let output = solve_instance(&instance, strategy)?;
    match output_file {
        Some(path) => {
            fs::write(&path, jsonify(&output))
                .map_err(|e| anyhow!("Failed to write {:?}: {}", path, e))?;
            println!("output written to: {:?}", path);
        }
        None => println!("{}", jsonify(&output)),
    }
    Ok(())
}

fn compare_cmd(instance: Option<&str>, json: bool, quiet: bool) -> Result<()> {
    let instance = match instance {
        Some(arg) => load_instance(arg)?,
        None => Instance::example(),
    };
    let report = compare(&instance)?;
    if let Some(output) = compare_output(&instance, &report, json, quiet) {
        println!("{}", output);
    }
    report.ensure_consistent()
}

fn verify_cmd(instance: &str, selection: &str) -> Result<()> {
    let instance = load_instance(instance)?;
    let selection = load_selection(selection)?;
    let total_value = verify_selection(&instance, &selection)?;
    println!("Selection is valid. Total value: {}", total_value);
    Ok(())
}

fn trials_cmd(
    config: Option<&str>,
    seed: Option<String>,
    num_trials: Option<u32>,
    json: bool,
) -> Result<()> {
    let mut config = load_config(config)?;
    if let Some(seed) = seed {
        config.seed = seed;
    }
    if let Some(num_trials) = num_trials {
        config.num_trials = num_trials;
    }

    let summary = run_trials(&config)?;
    if json {
        println!("{}", jsonify_pretty(&summary));
    } else {
        for trial in &summary.trials {
            println!(
                "Trial {}: capacity {} | optimal value {} | memoized {:?} | tabulated {:?} | {}",
                trial.trial,
                trial.instance.capacity(),
                trial.report.optimal_value,
                trial.report.memo_selection,
                trial.report.table_selection,
                trial.report.status
            );
        }
        println!(
            "{}/{} trials consistent",
            summary.num_consistent, summary.num_trials
        );
    }
    match summary.failure {
        Some(failure) => Err(anyhow!(failure)),
        None => Ok(()),
    }
}
