use rigsmith_core::profiles::{derive_badges, Badge};
use serde::Serialize;

use crate::commands::input::{self, BuildInput};
use crate::commands::CommandResult;

const COMMAND: &str = "badges";

#[derive(Debug, Serialize)]
struct BadgeView {
    badge: Badge,
    label: &'static str,
}

#[derive(Debug, Serialize)]
struct BadgesOutput<'a> {
    parts: Vec<&'a str>,
    badges: Vec<BadgeView>,
}

pub fn run(input: BuildInput) -> CommandResult {
    let loaded = match input::load_build(&input) {
        Ok(loaded) => loaded,
        Err(error) => return CommandResult::from_error(COMMAND, &error),
    };

    let badges = derive_badges(&loaded.build)
        .into_iter()
        .map(|badge| BadgeView { badge, label: badge.label() })
        .collect();

    CommandResult::report(COMMAND, &BadgesOutput { parts: input::part_ids(&loaded.build), badges })
}
