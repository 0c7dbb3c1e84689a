//! Use-case profiles: budget bands, priorities and badges.

mod badges;

pub use badges::{derive_badges, Badge};

use std::collections::BTreeMap;
use std::convert::Infallible;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::part::{Category, Part};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    CompetitiveEsports,
    Ultra4k,
    VideoEditing,
    AiLlm,
    QuietOffice,
    Other,
}

impl Profile {
    pub const ALL: [Profile; 6] = [
        Profile::CompetitiveEsports,
        Profile::Ultra4k,
        Profile::VideoEditing,
        Profile::AiLlm,
        Profile::QuietOffice,
        Profile::Other,
    ];

    /// Maps free-form intent text to a profile, falling back to `Other`.
    pub fn from_label(label: &str) -> Self {
        let normalized: String = label
            .to_ascii_lowercase()
            .chars()
            .map(|ch| if ch.is_ascii_alphanumeric() { ch } else { ' ' })
            .collect();
        let words: Vec<&str> = normalized.split_whitespace().collect();
        let has = |word: &str| words.contains(&word);

        if has("esports") || has("competitive") || has("1080p") {
            Profile::CompetitiveEsports
        } else if has("4k") || has("ultra") {
            Profile::Ultra4k
        } else if has("video") || has("editing") || has("creator") {
            Profile::VideoEditing
        } else if has("ai") || has("llm") || has("ml") {
            Profile::AiLlm
        } else if has("quiet") || has("office") {
            Profile::QuietOffice
        } else {
            Profile::Other
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Profile::CompetitiveEsports => "Competitive 1080p",
            Profile::Ultra4k => "4K Ultra",
            Profile::VideoEditing => "Video editing",
            Profile::AiLlm => "AI / LLM",
            Profile::QuietOffice => "Quiet office",
            Profile::Other => "General use",
        }
    }
}

impl FromStr for Profile {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(value))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBand {
    pub min: Decimal,
    pub max: Decimal,
}

impl PriceBand {
    fn new(min: i64, max: i64) -> Self {
        Self { min: Decimal::from(min), max: Decimal::from(max) }
    }

    pub fn contains(&self, price: Decimal) -> bool {
        price >= self.min && price <= self.max
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationCriteria {
    pub profile: Profile,
    pub budget_per_category: BTreeMap<Category, PriceBand>,
    pub priorities: Vec<String>,
    pub badges: Vec<Badge>,
}

impl RecommendationCriteria {
    pub fn band(&self, category: Category) -> Option<&PriceBand> {
        self.budget_per_category.get(&category)
    }

    /// A part is within budget when its category has no band or its price
    /// falls inside the band.
    pub fn within_budget(&self, part: &Part) -> bool {
        self.band(part.category).map_or(true, |band| band.contains(part.price))
    }
}

/// Bands in CPU, GPU, motherboard, RAM, storage, cooler, PSU, case order.
fn bands(ranges: [(i64, i64); 8]) -> BTreeMap<Category, PriceBand> {
    const ORDER: [Category; 8] = [
        Category::Cpu,
        Category::Gpu,
        Category::Motherboard,
        Category::Ram,
        Category::Storage,
        Category::Cooler,
        Category::Psu,
        Category::Case,
    ];

    ORDER
        .into_iter()
        .zip(ranges)
        .map(|(category, (min, max))| (category, PriceBand::new(min, max)))
        .collect()
}

fn notes(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

pub fn criteria(profile: Profile) -> RecommendationCriteria {
    let (budget_per_category, priorities, badges) = match profile {
        Profile::CompetitiveEsports => (
            bands([
                (250, 450),
                (400, 800),
                (150, 250),
                (80, 150),
                (70, 150),
                (40, 100),
                (80, 140),
                (70, 150),
            ]),
            notes(&[
                "High single-thread CPU performance for 240 Hz and up",
                "Fast low-latency memory",
                "Mid-range GPU is enough at 1080p",
            ]),
            vec![Badge::HighRefresh, Badge::LowLatency],
        ),
        Profile::Ultra4k => (
            bands([
                (350, 600),
                (1000, 2000),
                (200, 400),
                (120, 250),
                (120, 300),
                (100, 200),
                (150, 300),
                (100, 250),
            ]),
            notes(&[
                "Flagship GPU with 16 GB VRAM or more",
                "PSU with headroom for transient spikes",
                "Case with long-GPU clearance and strong airflow",
            ]),
            vec![Badge::Ultra4k, Badge::TopGaming],
        ),
        Profile::VideoEditing => (
            bands([
                (450, 700),
                (500, 1200),
                (200, 400),
                (200, 450),
                (200, 500),
                (100, 200),
                (130, 250),
                (100, 200),
            ]),
            notes(&[
                "High core count for exports",
                "64 GB memory for timelines",
                "Fast NVMe scratch and media drives",
            ]),
            vec![Badge::CreatorReady],
        ),
        Profile::AiLlm => (
            bands([
                (350, 650),
                (1500, 2500),
                (250, 450),
                (250, 500),
                (150, 400),
                (100, 200),
                (200, 350),
                (120, 250),
            ]),
            notes(&[
                "Maximum GPU VRAM for local models",
                "Large memory pool for offloading",
                "Efficient PSU for sustained load",
            ]),
            vec![Badge::AiReady, Badge::Efficient],
        ),
        Profile::QuietOffice => (
            bands([
                (120, 250),
                (0, 200),
                (90, 160),
                (50, 100),
                (50, 120),
                (30, 80),
                (60, 110),
                (60, 120),
            ]),
            notes(&[
                "Low-TDP CPU with integrated graphics",
                "Large slow fans or a 240 mm AIO",
                "Efficient PSU that rarely spins its fan",
            ]),
            vec![Badge::Quiet, Badge::Efficient],
        ),
        Profile::Other => (
            bands([
                (200, 400),
                (300, 700),
                (120, 250),
                (70, 150),
                (60, 150),
                (40, 120),
                (80, 150),
                (70, 150),
            ]),
            notes(&["Balanced CPU and GPU spend", "Room to upgrade later"]),
            vec![Badge::Balanced],
        ),
    };

    RecommendationCriteria { profile, budget_per_category, priorities, badges }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{criteria, Profile};
    use crate::domain::part::{Category, Part};

    #[test]
    fn labels_map_to_profiles() {
        assert_eq!(Profile::from_label("4K Ultra"), Profile::Ultra4k);
        assert_eq!(Profile::from_label("quiet office"), Profile::QuietOffice);
        assert_eq!(Profile::from_label("Competitive 1080p"), Profile::CompetitiveEsports);
        assert_eq!(Profile::from_label("esports"), Profile::CompetitiveEsports);
        assert_eq!(Profile::from_label("AI/LLM"), Profile::AiLlm);
        assert_eq!(Profile::from_label("Video-Editing"), Profile::VideoEditing);
        assert_eq!(Profile::from_label("spreadsheet farm"), Profile::Other);
        assert_eq!("".parse::<Profile>(), Ok(Profile::Other));
    }

    #[test]
    fn four_k_gpu_floor_exceeds_quiet_office_floor() {
        let ultra = criteria(Profile::from_label("4K Ultra"));
        let office = criteria(Profile::from_label("quiet office"));

        let ultra_gpu = ultra.band(Category::Gpu).expect("gpu band");
        let office_gpu = office.band(Category::Gpu).expect("gpu band");
        assert!(ultra_gpu.min > office_gpu.min);
    }

    #[test]
    fn every_profile_has_well_formed_bands_priorities_and_badges() {
        for profile in Profile::ALL {
            let criteria = criteria(profile);
            assert_eq!(criteria.profile, profile);
            assert_eq!(criteria.budget_per_category.len(), 8, "{profile:?}");
            assert!(!criteria.priorities.is_empty());
            assert!(!criteria.badges.is_empty());
            for band in criteria.budget_per_category.values() {
                assert!(band.min <= band.max, "{profile:?}");
            }
        }
    }

    #[test]
    fn within_budget_checks_the_parts_band() {
        let office = criteria(Profile::QuietOffice);
        let gpu = |price| Part::new("gpu", Category::Gpu).with_price(Decimal::new(price, 0));

        assert!(office.within_budget(&gpu(150)));
        assert!(!office.within_budget(&gpu(900)));
        assert!(office.within_budget(&Part::new("mouse", Category::Peripheral)));
    }
}
