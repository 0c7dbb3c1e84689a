use rigsmith_core::{CompatibilityChecker, CompatibilityReport, RuleBasedChecker};
use serde::Serialize;

use crate::commands::input::{self, BuildInput};
use crate::commands::CommandResult;

const COMMAND: &str = "check";

#[derive(Debug, Serialize)]
struct CheckOutput<'a> {
    parts: Vec<&'a str>,
    #[serde(flatten)]
    report: &'a CompatibilityReport,
}

pub fn run(input: BuildInput) -> CommandResult {
    run_with(&RuleBasedChecker, input)
}

pub fn run_with(checker: &dyn CompatibilityChecker, input: BuildInput) -> CommandResult {
    let loaded = match input::load_build(&input) {
        Ok(loaded) => loaded,
        Err(error) => return CommandResult::from_error(COMMAND, &error),
    };

    let report = checker.check(&loaded.build);
    if !report.compatible {
        tracing::info!(
            event_name = "cli.check.incompatible",
            issue_count = report.issues.len(),
            "build has compatibility errors"
        );
    }

    CommandResult::report(
        COMMAND,
        &CheckOutput { parts: input::part_ids(&loaded.build), report: &report },
    )
}
