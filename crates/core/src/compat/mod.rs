pub mod rules;
pub mod summary;

pub use rules::{Verdict, MEMORY_OVERCLOCK_MARGIN_MHZ};
pub use summary::{
    check_build, CompatibilityChecker, CompatibilityIssue, CompatibilityReport, IssueSeverity,
    RuleBasedChecker,
};

use crate::domain::part::{Category, Part};
use crate::power::estimate_required_wattage;

/// Applies the rule that relates the two parts' categories, in either order.
///
/// Returns `None` when no rule relates them (two GPUs, a case and a PSU, …).
/// A PSU paired with a power-drawing part is checked against the wattage
/// estimated for that part alone.
pub fn verdict(base: &Part, candidate: &Part) -> Option<Verdict> {
    use Category::*;

    let verdict = match (base.category, candidate.category) {
        (Cpu, Motherboard) => rules::cpu_motherboard(base, candidate),
        (Motherboard, Cpu) => rules::cpu_motherboard(candidate, base),
        (Ram, Motherboard) => rules::ram_motherboard(base, candidate),
        (Motherboard, Ram) => rules::ram_motherboard(candidate, base),
        (Gpu, Case) => rules::gpu_case(base, candidate),
        (Case, Gpu) => rules::gpu_case(candidate, base),
        (Cooler, Case) => rules::cooler_case(base, candidate),
        (Case, Cooler) => rules::cooler_case(candidate, base),
        (Storage, Motherboard) => rules::storage_motherboard(base, candidate),
        (Motherboard, Storage) => rules::storage_motherboard(candidate, base),
        (Psu, Cpu | Gpu | Cooler) => {
            rules::psu_sufficiency(base, estimate_required_wattage([candidate]))
        }
        (Cpu | Gpu | Cooler, Psu) => {
            rules::psu_sufficiency(candidate, estimate_required_wattage([base]))
        }
        _ => return None,
    };

    Some(verdict)
}

/// `true` unless a rule relating the two parts says otherwise.
pub fn compatible(base: &Part, candidate: &Part) -> bool {
    verdict(base, candidate).map_or(true, |verdict| verdict.is_compatible())
}

#[cfg(test)]
mod tests {
    use super::{compatible, verdict};
    use crate::domain::part::{Category, CpuSpec, GpuSpec, MotherboardSpec, Part, PartSpec, PsuSpec};

    fn cpu(socket: &str, tdp_w: u32) -> Part {
        Part::new("cpu", Category::Cpu).with_spec(PartSpec::Cpu(CpuSpec {
            socket: Some(socket.to_owned()),
            tdp_w: Some(tdp_w),
            has_3d_cache: false,
        }))
    }

    #[test]
    fn dispatch_is_order_independent() {
        let board = Part::new("board", Category::Motherboard).with_spec(PartSpec::Motherboard(
            MotherboardSpec { socket: Some("LGA1700".to_owned()), ..MotherboardSpec::default() },
        ));
        let processor = cpu("AM5", 120);

        assert!(!compatible(&processor, &board));
        assert!(!compatible(&board, &processor));
    }

    #[test]
    fn unrelated_categories_have_no_rule() {
        let gpu = Part::new("gpu", Category::Gpu).with_spec(PartSpec::Gpu(GpuSpec::default()));
        let other = Part::new("gpu-2", Category::Gpu);

        assert!(verdict(&gpu, &other).is_none());
        assert!(compatible(&gpu, &other));
    }

    #[test]
    fn psu_pair_uses_the_other_parts_estimate() {
        // 120 + 50 = 170, with headroom 230, bracket 550
        let small = Part::new("psu-500", Category::Psu)
            .with_spec(PartSpec::Psu(PsuSpec { watts: Some(500), efficiency: None }));
        let enough = Part::new("psu-550", Category::Psu)
            .with_spec(PartSpec::Psu(PsuSpec { watts: Some(550), efficiency: None }));

        assert!(!compatible(&small, &cpu("AM5", 120)));
        assert!(compatible(&cpu("AM5", 120), &enough));
    }
}
