use rigsmith_core::profiles::{criteria, Profile, RecommendationCriteria};
use serde::Serialize;

use crate::commands::CommandResult;

const COMMAND: &str = "profile";

#[derive(Debug, Serialize)]
struct ProfileOutput<'a> {
    label: &'a str,
    display_name: &'static str,
    #[serde(flatten)]
    criteria: RecommendationCriteria,
}

pub fn run(label: &str) -> CommandResult {
    let profile = Profile::from_label(label);
    if profile == Profile::Other {
        tracing::debug!(
            event_name = "cli.profile.fallback",
            label,
            "label matched no known profile; using balanced criteria"
        );
    }

    CommandResult::report(
        COMMAND,
        &ProfileOutput { label, display_name: profile.label(), criteria: criteria(profile) },
    )
}
