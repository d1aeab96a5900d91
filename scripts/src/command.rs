use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use bracket_interface::Format;

use crate::settings::{Settings, FORMAT_VAR};

pub const USAGE: &str = "\
usage:
  scripts plan [<format>] [--rounds <n>] [--groups <n>] [--labels] <participant>...
  scripts file <request.json> [--labels]

formats: single_elimination, double_elimination, round_robin, swiss, group_stage";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Plan the participants given on the command line
    Plan {
        format: Format,
        participants: Vec<String>,
        labels: bool,
    },
    /// Plan a stored `PlanRequest`
    File { path: PathBuf, labels: bool },
    Help,
}

pub fn parse_args(args: &[String], settings: &Settings) -> Result<Command> {
    let mut args = args.iter();

    match args.next().map(String::as_str) {
        Some("plan") => parse_plan(args, settings),
        Some("file") => {
            let mut path = None;
            let mut labels = false;
            for arg in args {
                match arg.as_str() {
                    "--labels" => labels = true,
                    _ if path.is_none() => path = Some(PathBuf::from(arg)),
                    _ => bail!("unexpected argument {:?}", arg),
                }
            }

            Ok(Command::File {
                path: path.ok_or_else(|| anyhow!("file: missing request path"))?,
                labels,
            })
        }
        Some("help") | Some("--help") | Some("-h") | None => Ok(Command::Help),
        Some(other) => bail!("unknown command {:?}", other),
    }
}

fn parse_plan<'a>(
    mut args: impl Iterator<Item = &'a String>,
    settings: &Settings,
) -> Result<Command> {
    let mut format = None;
    let mut rounds = None;
    let mut groups = None;
    let mut labels = false;
    let mut participants = vec![];

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--rounds" => rounds = Some(parse_count(args.next(), "--rounds")?),
            "--groups" => groups = Some(parse_count(args.next(), "--groups")?),
            "--labels" => labels = true,
            _ if format.is_none() && participants.is_empty() => match Format::from_str(arg) {
                Ok(parsed) => format = Some(parsed),
                Err(_) => participants.push(arg.clone()),
            },
            _ => participants.push(arg.clone()),
        }
    }

    let format = format
        .or(settings.default_format)
        .ok_or_else(|| anyhow!("plan: no format given and {} is not set", FORMAT_VAR))?
        .with_rounds(rounds)
        .with_groups(groups);

    Ok(Command::Plan {
        format,
        participants,
        labels,
    })
}

fn parse_count(value: Option<&String>, flag: &str) -> Result<u32> {
    let value = value.ok_or_else(|| anyhow!("{} needs a value", flag))?;
    value
        .parse()
        .with_context(|| format!("{} expects a non-negative integer, got {:?}", flag, value))
}
