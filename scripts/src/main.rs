use std::env;
use std::fs;

use anyhow::{Context, Result};
use bracket_engine::{plan, plan_request, validate_topology, BracketSummary};
use bracket_interface::{PlanRequest, Schedule};
use command::{parse_args, Command, USAGE};
use log::{error, info};
use settings::Settings;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    dotenv::dotenv().ok(); // Used to load the `.env` file if any
    pretty_env_logger::init();

    let result = Settings::from_env().and_then(|settings| run(&args, &settings));
    match result {
        Ok(output) => println!("{}", output),
        Err(err) => {
            error!("{}", failure_message(&err));
            std::process::exit(1);
        }
    }
}

pub(crate) fn run(args: &[String], settings: &Settings) -> Result<String> {
    let (schedule, labels) = match parse_args(args, settings)? {
        Command::Help => return Ok(USAGE.to_string()),
        Command::Plan {
            format,
            participants,
            labels,
        } => {
            info!("planning {} for {} participants", format, participants.len());
            (plan(format, &participants), labels)
        }
        Command::File { path, labels } => {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            let request: PlanRequest<String> = serde_json::from_str(&contents)
                .with_context(|| format!("parsing plan request {}", path.display()))?;
            info!(
                "planning {} for {} participants from {}",
                request.format,
                request.participants.len(),
                path.display()
            );
            (plan_request(&request), labels)
        }
    };

    check(&schedule)?;

    if labels {
        Ok(output::render_labels(&schedule))
    } else {
        output::render_json(&schedule, settings.pretty)
    }
}

/// The whole context chain on one line, outermost first.
pub(crate) fn failure_message(err: &anyhow::Error) -> String {
    format!("{:#}", err)
}

fn check(schedule: &Schedule<String>) -> Result<()> {
    validate_topology(&schedule.matches).context("generated plan is malformed")?;
    info!("{}", BracketSummary::of(&schedule.matches));

    Ok(())
}

mod command;
mod output;
mod settings;
