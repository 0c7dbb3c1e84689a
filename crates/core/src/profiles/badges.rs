use serde::{Deserialize, Serialize};

use crate::domain::build::Build;
use crate::domain::part::{CoolerType, EfficiencyTier};
use crate::power::estimate_required_wattage;

/// AIO radiators at or above this size run quietly under load.
const QUIET_RADIATOR_MM: u32 = 240;

const TOP_GAMING_VRAM_GB: u32 = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    HighRefresh,
    LowLatency,
    Ultra4k,
    TopGaming,
    CreatorReady,
    AiReady,
    Quiet,
    Efficient,
    Balanced,
    Stable,
    ThreeYearWarranty,
}

impl Badge {
    pub fn label(self) -> &'static str {
        match self {
            Badge::HighRefresh => "High refresh",
            Badge::LowLatency => "Low latency",
            Badge::Ultra4k => "4K ready",
            Badge::TopGaming => "Top Gaming",
            Badge::CreatorReady => "Creator ready",
            Badge::AiReady => "AI ready",
            Badge::Quiet => "Quiet",
            Badge::Efficient => "Efficient",
            Badge::Balanced => "Balanced",
            Badge::Stable => "Stable",
            Badge::ThreeYearWarranty => "3-year warranty",
        }
    }
}

/// Presentation badges for a finished (or partial) build.
pub fn derive_badges(build: &Build) -> Vec<Badge> {
    let mut badges = Vec::new();

    let cooler_type =
        build.cooler.as_ref().and_then(|cooler| cooler.cooler()).and_then(|spec| spec.cooler_type);
    if let Some(CoolerType::Aio { radiator_mm: Some(size) }) = cooler_type {
        if size >= QUIET_RADIATOR_MM {
            badges.push(Badge::Quiet);
        }
    }

    if let Some(psu) = build.psu.as_ref().and_then(|psu| psu.psu()) {
        let required = estimate_required_wattage(build.power_parts());
        let efficient = psu.efficiency.is_some_and(|tier| tier >= EfficiencyTier::Gold);
        if efficient && psu.watts.is_some_and(|watts| watts >= required) {
            badges.push(Badge::Stable);
        }
    }

    let big_vram = build
        .gpu
        .as_ref()
        .and_then(|gpu| gpu.gpu())
        .and_then(|gpu| gpu.vram_gb)
        .is_some_and(|vram| vram >= TOP_GAMING_VRAM_GB);
    let stacked_cache =
        build.cpu.as_ref().and_then(|cpu| cpu.cpu()).is_some_and(|cpu| cpu.has_3d_cache);
    if big_vram && stacked_cache {
        badges.push(Badge::TopGaming);
    }

    badges.push(Badge::ThreeYearWarranty);
    badges
}
