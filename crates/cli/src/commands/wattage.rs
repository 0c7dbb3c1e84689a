use rigsmith_core::power::{estimate, PowerEstimate};
use serde::Serialize;

use crate::commands::input::{self, BuildInput};
use crate::commands::CommandResult;

const COMMAND: &str = "wattage";

#[derive(Debug, Serialize)]
struct WattageOutput<'a> {
    parts: Vec<&'a str>,
    #[serde(flatten)]
    estimate: PowerEstimate,
}

pub fn run(input: BuildInput) -> CommandResult {
    let loaded = match input::load_build(&input) {
        Ok(loaded) => loaded,
        Err(error) => return CommandResult::from_error(COMMAND, &error),
    };

    let estimate = estimate(loaded.build.power_parts());
    CommandResult::report(
        COMMAND,
        &WattageOutput { parts: input::part_ids(&loaded.build), estimate },
    )
}
