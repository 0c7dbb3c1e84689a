//! Pairwise compatibility predicates.
//!
//! Every rule takes only the parts it relates and returns a [`Verdict`] whose
//! reason is a pure function of those inputs. Missing catalog data is
//! permissive, with two exceptions: a missing socket yields
//! [`Verdict::Unknown`], and a PSU without a wattage rating is insufficient.

use serde::{Deserialize, Serialize};

use crate::domain::part::{CoolerType, Part};

/// Vendor memory profiles (XMP/EXPO) routinely run above the board's JEDEC
/// rating; kits up to this far over the listed maximum are accepted.
pub const MEMORY_OVERCLOCK_MARGIN_MHZ: u32 = 200;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Verdict {
    Compatible { reason: String },
    Incompatible { reason: String },
    Unknown { reason: String },
}

impl Verdict {
    pub fn is_compatible(&self) -> bool {
        matches!(self, Verdict::Compatible { .. })
    }

    pub fn reason(&self) -> &str {
        match self {
            Verdict::Compatible { reason }
            | Verdict::Incompatible { reason }
            | Verdict::Unknown { reason } => reason,
        }
    }

    fn compatible(reason: impl Into<String>) -> Self {
        Verdict::Compatible { reason: reason.into() }
    }

    fn incompatible(reason: impl Into<String>) -> Self {
        Verdict::Incompatible { reason: reason.into() }
    }
}

/// Socket comparison shared by CPU↔board and CPU↔CPU checks.
pub fn sockets_match(a: &Part, b: &Part) -> Verdict {
    match (a.socket(), b.socket()) {
        (Some(left), Some(right)) if left.eq_ignore_ascii_case(right) => {
            Verdict::compatible(format!("Socket {left} matches."))
        }
        (Some(left), Some(right)) => {
            Verdict::incompatible(format!("Socket {left} does not fit socket {right}."))
        }
        _ => Verdict::Unknown {
            reason: format!("Socket not listed for {} or {}.", a.id, b.id),
        },
    }
}

pub fn cpu_motherboard(cpu: &Part, motherboard: &Part) -> Verdict {
    sockets_match(cpu, motherboard)
}

pub fn is_cpu_motherboard_compatible(cpu: &Part, motherboard: &Part) -> bool {
    cpu_motherboard(cpu, motherboard).is_compatible()
}

pub fn ram_motherboard(ram: &Part, motherboard: &Part) -> Verdict {
    if let (Some(kit), Some(board)) = (ram.memory_type(), motherboard.memory_type()) {
        if !kit.eq_ignore_ascii_case(board) {
            return Verdict::incompatible(format!("{kit} memory in a {board} board."));
        }
    }

    let speed = ram.ram().and_then(|spec| spec.speed_mhz);
    let max = motherboard.motherboard().and_then(|spec| spec.max_memory_mhz);
    match (speed, max) {
        (Some(speed), Some(max)) if speed > max.saturating_add(MEMORY_OVERCLOCK_MARGIN_MHZ) => {
            Verdict::incompatible(format!(
                "{speed} MT/s exceeds the board's {max} MT/s limit (+{MEMORY_OVERCLOCK_MARGIN_MHZ} profile margin)."
            ))
        }
        (Some(speed), Some(max)) => {
            Verdict::compatible(format!("{speed} MT/s within the board's {max} MT/s limit."))
        }
        _ => Verdict::compatible("Memory type supported."),
    }
}

pub fn is_ram_motherboard_compatible(ram: &Part, motherboard: &Part) -> bool {
    ram_motherboard(ram, motherboard).is_compatible()
}

pub fn gpu_case(gpu: &Part, case: &Part) -> Verdict {
    let length = gpu.gpu().and_then(|spec| spec.length_mm);
    let max = case.case().and_then(|spec| spec.max_gpu_len_mm);
    match (length, max) {
        (Some(length), Some(max)) if length > max => {
            Verdict::incompatible(format!("{length} mm card, case fits {max} mm."))
        }
        (Some(length), Some(max)) => {
            Verdict::compatible(format!("{length} mm card fits the {max} mm bay."))
        }
        _ => Verdict::compatible("GPU clearance not constrained."),
    }
}

pub fn is_gpu_case_compatible(gpu: &Part, case: &Part) -> bool {
    gpu_case(gpu, case).is_compatible()
}

pub fn cooler_case(cooler: &Part, case: &Part) -> Verdict {
    let case_spec = case.case();
    match cooler.cooler().and_then(|spec| spec.cooler_type) {
        Some(CoolerType::Air { height_mm }) => {
            let max = case_spec.and_then(|spec| spec.max_cooler_height_mm);
            match (height_mm, max) {
                (Some(height), Some(max)) if height > max => {
                    Verdict::incompatible(format!("{height} mm tower, case clears {max} mm."))
                }
                (Some(height), Some(max)) => {
                    Verdict::compatible(format!("{height} mm tower clears {max} mm."))
                }
                _ => Verdict::compatible("Air cooler clearance not constrained."),
            }
        }
        Some(CoolerType::Aio { radiator_mm: Some(size) }) => {
            let mounts: &[u32] = &[];
            let (top, front) = case_spec
                .map(|spec| (spec.radiator_top_mm.as_slice(), spec.radiator_front_mm.as_slice()))
                .unwrap_or((mounts, mounts));
            if top.contains(&size) || front.contains(&size) {
                Verdict::compatible(format!("{size} mm radiator has a mount."))
            } else {
                Verdict::incompatible(format!("No {size} mm radiator mount in the case."))
            }
        }
        Some(CoolerType::Aio { radiator_mm: None }) | None => {
            Verdict::compatible("Cooler fit not constrained.")
        }
    }
}

pub fn is_cooler_case_compatible(cooler: &Part, case: &Part) -> bool {
    cooler_case(cooler, case).is_compatible()
}

/// Drive bays and M.2 slot counts are not enforced yet; this is where they go.
pub fn storage_motherboard(_storage: &Part, _motherboard: &Part) -> Verdict {
    Verdict::compatible("Storage fits.")
}

pub fn is_storage_motherboard_compatible(storage: &Part, motherboard: &Part) -> bool {
    storage_motherboard(storage, motherboard).is_compatible()
}

pub fn psu_sufficiency(psu: &Part, required_w: u32) -> Verdict {
    match psu.psu().and_then(|spec| spec.watts) {
        Some(watts) if watts >= required_w => {
            Verdict::compatible(format!("{watts} W covers the estimated {required_w} W."))
        }
        Some(watts) => {
            Verdict::incompatible(format!("{watts} W is below the estimated {required_w} W."))
        }
        None => Verdict::incompatible("PSU wattage not listed."),
    }
}

pub fn is_psu_sufficient(psu: &Part, required_w: u32) -> bool {
    psu_sufficiency(psu, required_w).is_compatible()
}
