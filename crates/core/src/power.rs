//! Required PSU wattage from the power draw of a build's parts.

use serde::{Deserialize, Serialize};

use crate::domain::part::Part;

/// Motherboard, fans, drives and other draw that no part reports.
pub const BASELINE_OVERHEAD_W: u32 = 50;

/// Headroom applied to the raw sum, in percent (x1.35).
pub const HEADROOM_PERCENT: u32 = 135;

/// Common PSU sizes. Estimates above the last entry are capped to it.
pub const WATTAGE_BRACKETS: [u32; 7] = [550, 650, 750, 850, 1000, 1200, 1500];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerEstimate {
    pub raw_w: u32,
    pub with_headroom_w: u32,
    pub recommended_w: u32,
}

pub fn estimate<'a, I>(parts: I) -> PowerEstimate
where
    I: IntoIterator<Item = &'a Part>,
{
    let raw_w = parts
        .into_iter()
        .map(|part| part.tdp_w().unwrap_or(0))
        .fold(BASELINE_OVERHEAD_W, u32::saturating_add);
    let with_headroom_w = with_headroom(raw_w);

    PowerEstimate { raw_w, with_headroom_w, recommended_w: bracket_for(with_headroom_w) }
}

pub fn estimate_required_wattage<'a, I>(parts: I) -> u32
where
    I: IntoIterator<Item = &'a Part>,
{
    estimate(parts).recommended_w
}

/// `ceil(raw * 1.35)` without going through floats.
fn with_headroom(raw_w: u32) -> u32 {
    let scaled = u64::from(raw_w) * u64::from(HEADROOM_PERCENT);
    u32::try_from(scaled.div_ceil(100)).unwrap_or(u32::MAX)
}

fn bracket_for(watts: u32) -> u32 {
    WATTAGE_BRACKETS
        .iter()
        .copied()
        .find(|bracket| *bracket >= watts)
        .unwrap_or(WATTAGE_BRACKETS[WATTAGE_BRACKETS.len() - 1])
}
