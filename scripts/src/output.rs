use std::fmt::Display;

use anyhow::{Context, Result};
use bracket_interface::{MatchSeed, Schedule};
use itertools::Itertools;
use serde::Serialize;

pub fn render_json<T: Serialize>(schedule: &Schedule<T>, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(schedule)
    } else {
        serde_json::to_string(schedule)
    };

    json.context("serializing schedule")
}

/// One line per match: number, label, players and where the winner and
/// loser go next (as match numbers).
pub fn render_labels<T: Display>(schedule: &Schedule<T>) -> String {
    let mut lines = vec![];

    for (index, group) in schedule.groups.iter().enumerate() {
        lines.push(format!(
            "group_{}: {}",
            index,
            group.iter().map(ToString::to_string).join(", ")
        ));
    }

    lines.extend(schedule.matches.iter().map(render_match));

    lines.join("\n")
}

fn render_match<T: Display>(match_: &MatchSeed<T>) -> String {
    let player = |player: &Option<T>| match player {
        Some(player) => player.to_string(),
        None => "-".to_string(),
    };

    let mut line = format!(
        "#{} {} {} vs {}",
        match_.match_number,
        match_.label(),
        player(&match_.player_1),
        player(&match_.player_2)
    );
    if let Some(next) = match_.next_match_winner {
        line.push_str(&format!(" | winner -> #{}", next + 1));
    }
    if let Some(next) = match_.next_match_loser {
        line.push_str(&format!(" | loser -> #{}", next + 1));
    }

    line
}
