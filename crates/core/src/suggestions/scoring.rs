//! Scoring and reason text for suggestion candidates

use rust_decimal::prelude::ToPrimitive;

use crate::compat::MEMORY_OVERCLOCK_MARGIN_MHZ;
use crate::domain::part::{Category, CoolerType, EfficiencyTier, Part};

/// Performance signal added to every candidate's score.
pub trait PerformanceModel {
    fn performance_score(&self, part: &Part) -> f64;
}

/// Uses price as a stand-in for performance.
///
/// This is a placeholder heuristic, not a performance model: a pricier part is
/// assumed to be faster. Swap in a benchmark-backed [`PerformanceModel`] when
/// one is available.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceProxy {
    /// Score points per currency unit (default: 0.01)
    pub rate: f64,
}

impl Default for PriceProxy {
    fn default() -> Self {
        Self { rate: super::PRICE_PROXY_RATE }
    }
}

impl PerformanceModel for PriceProxy {
    fn performance_score(&self, part: &Part) -> f64 {
        let price = part.price.to_f64().unwrap_or(0.0).max(0.0);
        price * self.rate
    }
}

/// Suggestion priority per bucket. CPU and GPU upgrades lead.
pub fn base_score(category: Category) -> f64 {
    match category {
        Category::Cpu | Category::Gpu => 40.0,
        Category::Motherboard => 30.0,
        Category::Ram => 25.0,
        Category::Psu | Category::Cooler => 20.0,
        Category::Storage | Category::Case => 15.0,
        Category::Peripheral => 5.0,
        Category::Unknown => 0.0,
    }
}

/// Score calculator for suggestion candidates
#[derive(Debug, Clone, Default)]
pub struct ScoreCalculator<P = PriceProxy> {
    performance: P,
}

impl ScoreCalculator<PriceProxy> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: PerformanceModel> ScoreCalculator<P> {
    pub fn with_performance_model(performance: P) -> Self {
        Self { performance }
    }

    /// Base priority + category bonus + performance signal + co-occurrence.
    ///
    /// `motherboard` is the board the candidate was checked against, if any.
    pub fn score(&self, part: &Part, motherboard: Option<&Part>, co_occurrence: f64) -> f64 {
        base_score(part.category)
            + category_bonus(part, motherboard)
            + self.performance.performance_score(part)
            + co_occurrence
    }
}

fn category_bonus(part: &Part, motherboard: Option<&Part>) -> f64 {
    match part.category {
        Category::Ram => {
            let Some(ram) = part.ram() else { return 0.0 };
            let mut bonus = 0.0;
            if ram.capacity_gb.is_some_and(|capacity| capacity >= 32) {
                bonus += 10.0;
            }
            let board_max =
                motherboard.and_then(Part::motherboard).and_then(|board| board.max_memory_mhz);
            if let (Some(speed), Some(max)) = (ram.speed_mhz, board_max) {
                if speed.abs_diff(max) <= MEMORY_OVERCLOCK_MARGIN_MHZ {
                    bonus += 5.0;
                }
            }
            bonus
        }
        Category::Psu => {
            let tier = part.psu().and_then(|psu| psu.efficiency);
            5.0 * f64::from(EfficiencyTier::rank(tier))
        }
        Category::Cpu => flag(part.cpu().is_some_and(|cpu| cpu.has_3d_cache)),
        Category::Gpu => {
            flag(part.gpu().and_then(|gpu| gpu.vram_gb).is_some_and(|vram| vram >= 16))
        }
        Category::Motherboard => {
            let slots = part.motherboard().and_then(|board| board.m2_slots);
            flag(slots.is_some_and(|slots| slots >= 2))
        }
        Category::Cooler => flag(matches!(
            part.cooler().and_then(|cooler| cooler.cooler_type),
            Some(CoolerType::Aio { .. })
        )),
        Category::Storage => flag(
            part.storage()
                .and_then(|storage| storage.interface.as_deref())
                .is_some_and(|interface| interface.to_ascii_lowercase().contains("nvme")),
        ),
        Category::Case | Category::Peripheral | Category::Unknown => 0.0,
    }
}

fn flag(condition: bool) -> f64 {
    if condition {
        5.0
    } else {
        0.0
    }
}

/// Human-readable reason built from the part's own attributes.
pub fn reason(part: &Part) -> String {
    let mut fragments: Vec<String> = Vec::new();

    match part.category {
        Category::Cpu => {
            if let Some(socket) = part.socket() {
                fragments.push(format!("Same socket {socket}."));
            }
            if part.cpu().is_some_and(|cpu| cpu.has_3d_cache) {
                fragments.push("3D V-Cache.".to_string());
            }
            fragments.push("CPU upgrade.".to_string());
        }
        Category::Motherboard => {
            if let Some(socket) = part.socket() {
                fragments.push(format!("Socket {socket}."));
            }
            if let Some(memory_type) = part.memory_type() {
                fragments.push(format!("{memory_type} memory."));
            }
            if let Some(slots) = part.motherboard().and_then(|board| board.m2_slots) {
                fragments.push(format!("{slots}x M.2."));
            }
            fragments.push("Matches your build.".to_string());
        }
        Category::Ram => {
            let ram = part.ram();
            let described = [
                ram.and_then(|ram| ram.capacity_gb).map(|capacity| format!("{capacity} GB")),
                part.memory_type().map(str::to_owned),
                ram.and_then(|ram| ram.speed_mhz).map(|speed| format!("{speed} MT/s")),
            ];
            push_joined(&mut fragments, &described);
            fragments.push("Supported by the board.".to_string());
        }
        Category::Gpu => {
            let gpu = part.gpu();
            let described = [
                gpu.and_then(|gpu| gpu.vram_gb).map(|vram| format!("{vram} GB VRAM")),
                gpu.and_then(|gpu| gpu.length_mm).map(|length| format!("{length} mm")),
            ];
            push_joined(&mut fragments, &described);
            fragments.push("Fits the case.".to_string());
        }
        Category::Cooler => {
            match part.cooler().and_then(|cooler| cooler.cooler_type) {
                Some(CoolerType::Air { height_mm: Some(height) }) => {
                    fragments.push(format!("Air cooler, {height} mm tall."))
                }
                Some(CoolerType::Air { height_mm: None }) => {
                    fragments.push("Air cooler.".to_string())
                }
                Some(CoolerType::Aio { radiator_mm: Some(size) }) => {
                    fragments.push(format!("{size} mm AIO."))
                }
                Some(CoolerType::Aio { radiator_mm: None }) => fragments.push("AIO.".to_string()),
                None => {}
            }
            fragments.push("Fits the case.".to_string());
        }
        Category::Psu => {
            let psu = part.psu();
            let described = [
                psu.and_then(|psu| psu.watts).map(|watts| format!("{watts} W")),
                psu.and_then(|psu| psu.efficiency).map(|tier| format!("80+ {tier:?}")),
            ];
            push_joined(&mut fragments, &described);
            fragments.push("Covers the estimated load.".to_string());
        }
        Category::Storage => {
            let storage = part.storage();
            let described = [
                storage
                    .and_then(|storage| storage.capacity_gb)
                    .map(|capacity| format!("{capacity} GB")),
                storage.and_then(|storage| storage.form_factor.clone()),
                storage.and_then(|storage| storage.interface.clone()),
            ];
            push_joined(&mut fragments, &described);
            fragments.push("Storage for your board.".to_string());
        }
        Category::Case => {
            if let Some(length) = part.case().and_then(|case| case.max_gpu_len_mm) {
                fragments.push(format!("GPUs up to {length} mm."));
            }
            fragments.push("Fits your parts.".to_string());
        }
        Category::Peripheral | Category::Unknown => fragments.push("Accessory.".to_string()),
    }

    fragments.join(" ")
}

fn push_joined(fragments: &mut Vec<String>, described: &[Option<String>]) {
    let present: Vec<&str> = described.iter().flatten().map(String::as_str).collect();
    if !present.is_empty() {
        fragments.push(format!("{}.", present.join(" ")));
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::part::{MotherboardSpec, PartSpec, PsuSpec, RamSpec};

    fn psu(efficiency: Option<EfficiencyTier>) -> Part {
        Part::new("psu", Category::Psu)
            .with_spec(PartSpec::Psu(PsuSpec { watts: Some(850), efficiency }))
    }

    #[test]
    fn psu_bonus_follows_tier_order() {
        let calculator = ScoreCalculator::with_performance_model(PriceProxy { rate: 0.0 });
        let scores: Vec<f64> = [
            None,
            Some(EfficiencyTier::Bronze),
            Some(EfficiencyTier::Gold),
            Some(EfficiencyTier::Platinum),
            Some(EfficiencyTier::Titanium),
        ]
        .into_iter()
        .map(|tier| calculator.score(&psu(tier), None, 0.0))
        .collect();

        assert_eq!(scores, vec![20.0, 25.0, 30.0, 35.0, 40.0]);
    }

    #[test]
    fn ram_bonus_for_capacity_and_speed_near_board_max() {
        let board = Part::new("board", Category::Motherboard).with_spec(PartSpec::Motherboard(
            MotherboardSpec { max_memory_mhz: Some(6000), ..MotherboardSpec::default() },
        ));
        let kit = |capacity_gb, speed_mhz| {
            Part::new("ram", Category::Ram).with_spec(PartSpec::Ram(RamSpec {
                memory_type: Some("DDR5".to_owned()),
                speed_mhz: Some(speed_mhz),
                capacity_gb: Some(capacity_gb),
            }))
        };
        let calculator = ScoreCalculator::with_performance_model(PriceProxy { rate: 0.0 });

        assert_eq!(calculator.score(&kit(32, 6000), Some(&board), 0.0), 40.0);
        assert_eq!(calculator.score(&kit(16, 5800), Some(&board), 0.0), 30.0);
        assert_eq!(calculator.score(&kit(16, 4800), Some(&board), 0.0), 25.0);
        assert_eq!(calculator.score(&kit(16, 6000), None, 0.0), 25.0);
    }

    #[test]
    fn price_proxy_adds_one_percent_and_co_occurrence_adds_directly() {
        let calculator = ScoreCalculator::new();
        let case = Part::new("case", Category::Case).with_price(Decimal::new(200, 0));

        assert!((calculator.score(&case, None, 0.0) - 17.0).abs() < 1e-9);
        assert!((calculator.score(&case, None, 3.5) - 20.5).abs() < 1e-9);
    }

    #[test]
    fn reason_uses_only_part_attributes() {
        let cpu = Part::new("cpu", Category::Cpu).with_spec(PartSpec::Cpu(
            crate::domain::part::CpuSpec {
                socket: Some("AM5".to_owned()),
                tdp_w: Some(120),
                has_3d_cache: false,
            },
        ));
        assert_eq!(reason(&cpu), "Same socket AM5. CPU upgrade.");

        assert_eq!(
            reason(&psu(Some(EfficiencyTier::Gold))),
            "850 W 80+ Gold. Covers the estimated load."
        );
        assert_eq!(reason(&Part::new("bare-gpu", Category::Gpu)), "Fits the case.");
    }
}
