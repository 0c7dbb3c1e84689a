use std::collections::HashMap;
use std::path::PathBuf;

use rigsmith_core::profiles::{criteria, Profile};
use rigsmith_core::suggestions::{CoOccurrence, NoCoOccurrence, SuggestionEngine, SuggestionSet};
use rigsmith_core::{Part, PartId};
use serde::Serialize;

use crate::commands::input::{self, BuildInput};
use crate::commands::CommandResult;

const COMMAND: &str = "suggest";

#[derive(Clone, Debug, Default)]
pub struct SuggestRequest {
    pub input: BuildInput,
    pub weights: Option<PathBuf>,
    pub profile: Option<String>,
}

#[derive(Debug, Serialize)]
struct SuggestOutput<'a> {
    base: Vec<&'a str>,
    profile: Option<Profile>,
    suggestions: &'a SuggestionSet,
}

pub fn run(request: SuggestRequest) -> CommandResult {
    let loaded = match input::load_build(&request.input) {
        Ok(loaded) => loaded,
        Err(error) => return CommandResult::from_error(COMMAND, &error),
    };

    let weights: HashMap<PartId, f64> = match request.weights.as_deref() {
        Some(path) => match input::read_weights(path) {
            Ok(weights) => weights,
            Err(error) => {
                return CommandResult::from_error(COMMAND, &input::catalog_error(error));
            }
        },
        None => HashMap::new(),
    };
    let co_occurrence: &dyn CoOccurrence =
        if weights.is_empty() { &NoCoOccurrence } else { &weights };

    let profile = request.profile.as_deref().map(Profile::from_label);
    let budget = profile.map(criteria);
    let keep = |part: &Part| budget.as_ref().map_or(true, |budget| budget.within_budget(part));

    let catalog = &loaded.catalog;
    let engine = SuggestionEngine::new().with_limits(loaded.config.suggestions.limits());
    let suggestions = match request.input.parts.as_slice() {
        [single] => match catalog.find(&PartId::new(single.trim())) {
            Some(base) => engine.suggestions_for_part_where(base, catalog, co_occurrence, &keep),
            None => engine.build_suggestions_where(&loaded.build, catalog, co_occurrence, &keep),
        },
        _ => engine.build_suggestions_where(&loaded.build, catalog, co_occurrence, &keep),
    };

    tracing::info!(
        event_name = "cli.suggest.completed",
        flat_count = suggestions.flat.len(),
        bucket_count = suggestions.by_bucket.len(),
        "suggestions computed"
    );

    CommandResult::report(
        COMMAND,
        &SuggestOutput { base: input::part_ids(&loaded.build), profile, suggestions: &suggestions },
    )
}
