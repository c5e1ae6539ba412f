/*!
 * schedsim - Main Entry Point
 *
 * Thin console glue over the library:
 * - loads a JSON workload from a file argument or stdin
 * - runs all seven policies (or one, with --policy)
 * - prints text tables or JSON
 */

use log::info;
use miette::{miette, IntoDiagnostic, WrapErr};
use schedsim::{Policy, Simulator, Workload};
use std::io::Read;

const USAGE: &str = "Usage: schedsim [--json] [--policy <name>] [workload.json]

Reads the workload from stdin when no file is given.
Policies: fcfs, sjf, priority, round_robin, srtf, multilevel_queue, multilevel_feedback";

fn main() -> miette::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut json = false;
    let mut policy_name: Option<String> = None;
    let mut path: Option<String> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--policy" => {
                policy_name = Some(args.next().ok_or_else(|| miette!("--policy needs a value"))?)
            }
            "--help" | "-h" => {
                println!("{USAGE}");
                return Ok(());
            }
            _ if arg.starts_with('-') => return Err(miette!("Unknown flag: {arg}\n\n{USAGE}")),
            _ => path = Some(arg),
        }
    }

    let input = match &path {
        Some(p) => std::fs::read_to_string(p)
            .into_diagnostic()
            .wrap_err_with(|| format!("reading workload file {p}"))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .into_diagnostic()
                .wrap_err("reading workload from stdin")?;
            buf
        }
    };

    let simulator = Simulator::new(Workload::from_json(&input)?)?;
    let quantum = simulator.workload().time_quantum;
    info!(
        "Simulating {} processes with quantum {}",
        simulator.workload().processes.len(),
        quantum
    );

    let reports = match policy_name {
        Some(name) => vec![simulator.run(Policy::parse(&name, quantum).map_err(|e| miette!(e))?)],
        None => simulator.run_all(),
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&reports).into_diagnostic()?
        );
    } else {
        for report in &reports {
            println!("\n{report}");
        }
    }

    Ok(())
}
