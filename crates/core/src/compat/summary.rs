use serde::{Deserialize, Serialize};

use crate::compat::rules::{self, Verdict};
use crate::domain::build::Build;
use crate::domain::part::Part;
use crate::power::estimate_required_wattage;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueSeverity {
    Error,
    Warning,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityIssue {
    pub code: String,
    pub severity: IssueSeverity,
    pub message: String,
    pub parts: Vec<String>,
    pub suggestion: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityReport {
    pub compatible: bool,
    pub required_wattage: u32,
    pub issues: Vec<CompatibilityIssue>,
}

pub trait CompatibilityChecker: Send + Sync {
    fn check(&self, build: &Build) -> CompatibilityReport;
}

#[derive(Default)]
pub struct RuleBasedChecker;

impl CompatibilityChecker for RuleBasedChecker {
    fn check(&self, build: &Build) -> CompatibilityReport {
        check_build(build)
    }
}

/// Runs every pairwise rule whose parts are both present in `build`.
pub fn check_build(build: &Build) -> CompatibilityReport {
    let required_wattage = estimate_required_wattage(build.power_parts());
    let mut issues = Vec::new();

    if let (Some(cpu), Some(board)) = (&build.cpu, &build.motherboard) {
        match rules::cpu_motherboard(cpu, board) {
            Verdict::Compatible { .. } => {}
            Verdict::Incompatible { reason } => issues.push(issue(
                "SOCKET_MISMATCH",
                IssueSeverity::Error,
                reason,
                [cpu, board],
                "Pick a motherboard with the processor's socket",
            )),
            Verdict::Unknown { reason } => issues.push(issue(
                "SOCKET_UNKNOWN",
                IssueSeverity::Warning,
                reason,
                [cpu, board],
                "Confirm the socket with the manufacturer before ordering",
            )),
        }
    }

    if let (Some(ram), Some(board)) = (&build.ram, &build.motherboard) {
        if let Verdict::Incompatible { reason } = rules::ram_motherboard(ram, board) {
            issues.push(issue(
                "MEMORY_MISMATCH",
                IssueSeverity::Error,
                reason,
                [ram, board],
                "Choose a kit of the board's memory type at or below its rated speed",
            ));
        }
    }

    if let (Some(gpu), Some(case)) = (&build.gpu, &build.case) {
        if let Verdict::Incompatible { reason } = rules::gpu_case(gpu, case) {
            issues.push(issue(
                "GPU_CLEARANCE",
                IssueSeverity::Error,
                reason,
                [gpu, case],
                "Choose a shorter card or a case with more GPU clearance",
            ));
        }
    }

    if let (Some(cooler), Some(case)) = (&build.cooler, &build.case) {
        if let Verdict::Incompatible { reason } = rules::cooler_case(cooler, case) {
            issues.push(issue(
                "COOLER_CLEARANCE",
                IssueSeverity::Error,
                reason,
                [cooler, case],
                "Choose a cooler that fits the case's height limit or radiator mounts",
            ));
        }
    }

    if let Some(board) = &build.motherboard {
        for drive in &build.storage {
            if let Verdict::Incompatible { reason } = rules::storage_motherboard(drive, board) {
                issues.push(issue(
                    "STORAGE_UNSUPPORTED",
                    IssueSeverity::Error,
                    reason,
                    [drive, board],
                    "Check the board's M.2 slots and drive bays",
                ));
            }
        }
    }

    if let Some(psu) = &build.psu {
        if let Verdict::Incompatible { reason } = rules::psu_sufficiency(psu, required_wattage) {
            issues.push(CompatibilityIssue {
                code: "PSU_INSUFFICIENT".to_string(),
                severity: IssueSeverity::Error,
                message: reason,
                parts: vec![psu.id.to_string()],
                suggestion: Some(format!("Use a power supply of at least {required_wattage} W")),
            });
        }
    }

    let compatible = !issues.iter().any(|issue| issue.severity == IssueSeverity::Error);
    tracing::debug!(
        event_name = "core.compat.build_checked",
        compatible,
        required_wattage,
        issue_count = issues.len(),
        "build compatibility checked"
    );

    CompatibilityReport { compatible, required_wattage, issues }
}

fn issue(
    code: &str,
    severity: IssueSeverity,
    message: String,
    parts: [&Part; 2],
    suggestion: &str,
) -> CompatibilityIssue {
    CompatibilityIssue {
        code: code.to_string(),
        severity,
        message,
        parts: parts.iter().map(|part| part.id.to_string()).collect(),
        suggestion: Some(suggestion.to_string()),
    }
}
