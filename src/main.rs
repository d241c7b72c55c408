/*!
 * FCFS Simulator - Command Line Entry Point
 *
 * Usage: fcfs-sim [FILE] [--json]
 *
 * Reads a JSON array of process rows from FILE (or stdin), runs one FCFS
 * simulation and prints a text report, or the full response with --json.
 */

use std::io::Read;
use tracing::info;

use fcfs_sim::core::limits::DEFAULT_GANTT_WIDTH;
use fcfs_sim::{
    init_tracing, render_report, RawProcessRow, SimulationSession, SimulatorConfig, SimulatorError,
};

#[derive(Debug, PartialEq, Eq)]
struct Args {
    path: Option<String>,
    json: bool,
}

fn parse_args<I>(argv: I) -> fcfs_sim::Result<Args>
where
    I: IntoIterator<Item = String>,
{
    let mut args = Args {
        path: None,
        json: false,
    };
    for arg in argv {
        match arg.as_str() {
            "--json" => args.json = true,
            "-" => args.path = None,
            flag if flag.starts_with("--") => {
                return Err(SimulatorError::Configuration(format!(
                    "unknown option '{}' (usage: fcfs-sim [FILE] [--json])",
                    flag
                )));
            }
            _ if args.path.is_some() => {
                return Err(SimulatorError::Configuration(format!(
                    "unexpected extra argument '{}' (usage: fcfs-sim [FILE] [--json])",
                    arg
                )));
            }
            _ => args.path = Some(arg),
        }
    }
    Ok(args)
}

fn read_rows(path: Option<&str>) -> fcfs_sim::Result<Vec<RawProcessRow>> {
    let raw = match path {
        Some(path) => {
            info!(path = %path, "Reading process rows");
            std::fs::read_to_string(path)?
        }
        None => {
            info!("Reading process rows from stdin");
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(serde_json::from_str(&raw)?)
}

fn run() -> fcfs_sim::Result<()> {
    let args = parse_args(std::env::args().skip(1))?;
    let config = SimulatorConfig::from_env()?;
    info!(max_time_unit = config.max_time_unit, "Simulator configured");

    let rows = read_rows(args.path.as_deref())?;
    let mut session = SimulationSession::with_rows(config, rows);
    let response = session.run()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(response)?);
    } else {
        print!("{}", render_report(response, DEFAULT_GANTT_WIDTH));
    }

    Ok(())
}

fn main() -> miette::Result<()> {
    init_tracing();
    run().map_err(miette::Report::new)
}
