pub mod catalog;
pub mod compat;
pub mod config;
pub mod domain;
pub mod errors;
pub mod power;
pub mod profiles;
pub mod suggestions;

pub use catalog::Catalog;
pub use compat::{
    check_build, CompatibilityChecker, CompatibilityIssue, CompatibilityReport, IssueSeverity,
    RuleBasedChecker, Verdict,
};
pub use domain::build::Build;
pub use domain::part::{Category, Part, PartId, PartSpec};
pub use errors::{ApplicationError, DomainError};
pub use power::{estimate, estimate_required_wattage, PowerEstimate};
pub use profiles::{criteria, derive_badges, Badge, Profile, RecommendationCriteria};
pub use suggestions::{build_suggestions, Suggestion, SuggestionEngine, SuggestionSet};
