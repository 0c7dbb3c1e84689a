//! Suggestion engine implementation

use std::collections::BTreeMap;

use super::scoring::{self, PerformanceModel, PriceProxy, ScoreCalculator};
use super::types::*;
use crate::catalog::Catalog;
use crate::compat::rules;
use crate::domain::build::Build;
use crate::domain::part::{Category, Part, PartId};
use crate::power::estimate_required_wattage;

/// Parts from the build or the catalog that candidates are checked against.
#[derive(Debug, Clone, Copy)]
struct Anchors<'a> {
    motherboard: Option<&'a Part>,
    case: Option<&'a Part>,
    required_wattage: u32,
}

/// A board fits when it takes the build's CPU and memory. Either one alone is
/// enough to open the motherboard bucket; a build with neither gives nothing
/// to match against.
fn board_fits_build(board: &Part, build: &Build) -> bool {
    if build.cpu.is_none() && build.ram.is_none() {
        return false;
    }

    build.cpu.as_ref().map_or(true, |cpu| rules::is_cpu_motherboard_compatible(cpu, board))
        && build.ram.as_ref().map_or(true, |ram| rules::is_ram_motherboard_compatible(ram, board))
}

fn case_fits_build(case: &Part, build: &Build) -> bool {
    build.gpu.as_ref().map_or(true, |gpu| rules::is_gpu_case_compatible(gpu, case))
        && build
            .cooler
            .as_ref()
            .map_or(true, |cooler| rules::is_cooler_case_compatible(cooler, case))
}

fn resolve_anchors<'a>(build: &'a Build, catalog: &'a Catalog) -> Anchors<'a> {
    let motherboard = build.motherboard.as_ref().or_else(|| {
        catalog.in_category(Category::Motherboard).find(|board| board_fits_build(board, build))
    });
    let case = build
        .case
        .as_ref()
        .or_else(|| catalog.in_category(Category::Case).find(|case| case_fits_build(case, build)));

    if motherboard.is_none() {
        tracing::debug!(
            event_name = "core.suggestions.anchor_missing",
            anchor = "motherboard",
            "no motherboard anchor; ram and storage buckets are skipped"
        );
    }
    if case.is_none() {
        tracing::debug!(
            event_name = "core.suggestions.anchor_missing",
            anchor = "case",
            "no case anchor; gpu and cooler buckets are skipped"
        );
    }

    Anchors { motherboard, case, required_wattage: estimate_required_wattage(build.power_parts()) }
}

/// Produces ranked, compatible suggestions for a base build.
#[derive(Debug, Clone, Default)]
pub struct SuggestionEngine<P = PriceProxy> {
    calculator: ScoreCalculator<P>,
    limits: SuggestionLimits,
}

impl SuggestionEngine<PriceProxy> {
    /// Create an engine that scores with the price proxy
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: PerformanceModel> SuggestionEngine<P> {
    /// Create with a custom performance model
    pub fn with_performance_model(performance: P) -> Self {
        Self {
            calculator: ScoreCalculator::with_performance_model(performance),
            limits: SuggestionLimits::default(),
        }
    }

    /// Override the result caps
    pub fn with_limits(mut self, limits: SuggestionLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn limits(&self) -> SuggestionLimits {
        self.limits
    }

    /// Suggestions for a single base part.
    ///
    /// A part without a build slot still anchors nothing and is still never
    /// suggested back.
    pub fn suggestions_for_part(
        &self,
        base: &Part,
        catalog: &Catalog,
        weights: &dyn CoOccurrence,
    ) -> SuggestionSet {
        self.suggestions_for_part_where(base, catalog, weights, &|_| true)
    }

    /// [`Self::suggestions_for_part`] restricted to candidates `keep` accepts.
    /// Anchors are still looked up in the whole catalog.
    pub fn suggestions_for_part_where(
        &self,
        base: &Part,
        catalog: &Catalog,
        weights: &dyn CoOccurrence,
        keep: &dyn Fn(&Part) -> bool,
    ) -> SuggestionSet {
        let build = Build::from_part(base.clone()).unwrap_or_default();
        self.suggest(&build, Some(&base.id), catalog, weights, keep)
    }

    /// Suggestions for everything the build does not already contain.
    pub fn build_suggestions(
        &self,
        base: &Build,
        catalog: &Catalog,
        weights: &dyn CoOccurrence,
    ) -> SuggestionSet {
        self.build_suggestions_where(base, catalog, weights, &|_| true)
    }

    /// [`Self::build_suggestions`] restricted to candidates `keep` accepts.
    /// Anchors are still looked up in the whole catalog.
    pub fn build_suggestions_where(
        &self,
        base: &Build,
        catalog: &Catalog,
        weights: &dyn CoOccurrence,
        keep: &dyn Fn(&Part) -> bool,
    ) -> SuggestionSet {
        self.suggest(base, None, catalog, weights, keep)
    }

    fn suggest(
        &self,
        build: &Build,
        base_id: Option<&PartId>,
        catalog: &Catalog,
        weights: &dyn CoOccurrence,
        keep: &dyn Fn(&Part) -> bool,
    ) -> SuggestionSet {
        let anchors = resolve_anchors(build, catalog);

        let candidates = catalog.iter().filter(|part| {
            part.stock_available
                && Some(&part.id) != base_id
                && !build.contains(&part.id)
                && keep(part)
        });

        let mut all = Vec::new();
        for part in candidates {
            if let Some(suggestion) = self.evaluate(part, build, &anchors, weights) {
                all.push(suggestion);
            }
        }

        let mut by_bucket: BTreeMap<Category, Vec<Suggestion>> = BTreeMap::new();
        for suggestion in &all {
            by_bucket.entry(suggestion.bucket).or_default().push(suggestion.clone());
        }
        for bucket in by_bucket.values_mut() {
            rank(bucket, self.limits.per_bucket);
        }

        let candidate_count = all.len();
        rank(&mut all, self.limits.flat);

        tracing::debug!(
            event_name = "core.suggestions.built",
            catalog_size = catalog.len(),
            candidate_count,
            flat_count = all.len(),
            bucket_count = by_bucket.len(),
            required_wattage = anchors.required_wattage,
            "suggestions built"
        );

        SuggestionSet { flat: all, by_bucket }
    }

    /// Routes a candidate to its bucket and scores it if it fits.
    fn evaluate(
        &self,
        part: &Part,
        build: &Build,
        anchors: &Anchors<'_>,
        weights: &dyn CoOccurrence,
    ) -> Option<Suggestion> {
        let fits = match part.category {
            Category::Cpu => match (anchors.motherboard, &build.cpu) {
                (Some(board), _) => rules::is_cpu_motherboard_compatible(part, board),
                (None, Some(cpu)) => rules::sockets_match(part, cpu).is_compatible(),
                (None, None) => false,
            },
            Category::Motherboard => board_fits_build(part, build),
            Category::Ram => anchors
                .motherboard
                .is_some_and(|board| rules::is_ram_motherboard_compatible(part, board)),
            Category::Gpu => {
                anchors.case.is_some_and(|case| rules::is_gpu_case_compatible(part, case))
            }
            Category::Cooler => {
                anchors.case.is_some_and(|case| rules::is_cooler_case_compatible(part, case))
            }
            Category::Case => case_fits_build(part, build),
            Category::Psu => rules::is_psu_sufficient(part, anchors.required_wattage),
            Category::Storage => anchors
                .motherboard
                .is_some_and(|board| rules::is_storage_motherboard_compatible(part, board)),
            // Not routed yet; add an arm above to start suggesting them.
            Category::Peripheral | Category::Unknown => return None,
        };

        if !fits {
            return None;
        }

        let board = match part.category {
            Category::Motherboard => Some(part),
            _ => anchors.motherboard,
        };
        Some(Suggestion {
            part: part.clone(),
            bucket: part.category,
            score: self.calculator.score(part, board, weights.weight(&part.id)),
            reason: scoring::reason(part),
        })
    }
}

/// Stable descending sort by score, then truncate. Ties keep catalog order.
pub(crate) fn rank(suggestions: &mut Vec<Suggestion>, limit: usize) {
    suggestions.sort_by(|a, b| b.score.total_cmp(&a.score));
    suggestions.truncate(limit);
}

/// [`SuggestionEngine::suggestions_for_part`] with the default engine.
pub fn build_suggestions(
    base: &Part,
    catalog: &Catalog,
    weights: Option<&dyn CoOccurrence>,
) -> SuggestionSet {
    SuggestionEngine::new().suggestions_for_part(base, catalog, weights.unwrap_or(&NoCoOccurrence))
}
