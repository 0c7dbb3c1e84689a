use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PartId(pub String);

impl PartId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hardware category a part is sold under.
///
/// Any label the catalog carries that is not listed here deserializes to
/// [`Category::Unknown`] so that one odd entry never fails a whole snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Cpu,
    Motherboard,
    Ram,
    Gpu,
    Cooler,
    Psu,
    Storage,
    Case,
    Peripheral,
    #[serde(other)]
    Unknown,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Cpu,
        Category::Motherboard,
        Category::Ram,
        Category::Gpu,
        Category::Cooler,
        Category::Psu,
        Category::Storage,
        Category::Case,
        Category::Peripheral,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Cpu => "cpu",
            Category::Motherboard => "motherboard",
            Category::Ram => "ram",
            Category::Gpu => "gpu",
            Category::Cooler => "cooler",
            Category::Psu => "psu",
            Category::Storage => "storage",
            Category::Case => "case",
            Category::Peripheral => "peripheral",
            Category::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| DomainError::UnsupportedCategory(value.trim().to_owned()))
    }
}

/// 80 PLUS certification, ordered from least to most efficient.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EfficiencyTier {
    Bronze,
    Gold,
    Platinum,
    Titanium,
}

impl EfficiencyTier {
    /// Ordinal rank used for scoring. An uncertified unit ranks 0.
    pub fn rank(tier: Option<EfficiencyTier>) -> u8 {
        match tier {
            None => 0,
            Some(EfficiencyTier::Bronze) => 1,
            Some(EfficiencyTier::Gold) => 2,
            Some(EfficiencyTier::Platinum) => 3,
            Some(EfficiencyTier::Titanium) => 4,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum CoolerType {
    Air { height_mm: Option<u32> },
    Aio { radiator_mm: Option<u32> },
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuSpec {
    pub socket: Option<String>,
    pub tdp_w: Option<u32>,
    #[serde(default)]
    pub has_3d_cache: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotherboardSpec {
    pub socket: Option<String>,
    pub chipset: Option<String>,
    pub memory_type: Option<String>,
    pub max_memory_mhz: Option<u32>,
    pub m2_slots: Option<u8>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RamSpec {
    pub memory_type: Option<String>,
    pub speed_mhz: Option<u32>,
    pub capacity_gb: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GpuSpec {
    pub length_mm: Option<u32>,
    pub tdp_w: Option<u32>,
    pub vram_gb: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoolerSpec {
    pub cooler_type: Option<CoolerType>,
    /// Power the cooler itself draws (pump, fans), not its cooling capacity.
    pub tdp_w: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PsuSpec {
    pub watts: Option<u32>,
    pub efficiency: Option<EfficiencyTier>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSpec {
    pub form_factor: Option<String>,
    pub interface: Option<String>,
    pub capacity_gb: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseSpec {
    pub max_gpu_len_mm: Option<u32>,
    pub max_cooler_height_mm: Option<u32>,
    #[serde(default)]
    pub radiator_top_mm: Vec<u32>,
    #[serde(default)]
    pub radiator_front_mm: Vec<u32>,
}

/// Category-specific technical fields.
///
/// Every field is optional: catalog data is often incomplete and the rules
/// read a missing value as "unconstrained". A variant that does not match the
/// part's category simply exposes nothing through the accessors on [`Part`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PartSpec {
    Cpu(CpuSpec),
    Motherboard(MotherboardSpec),
    Ram(RamSpec),
    Gpu(GpuSpec),
    Cooler(CoolerSpec),
    Psu(PsuSpec),
    Storage(StorageSpec),
    Case(CaseSpec),
    #[default]
    Generic,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub id: PartId,
    #[serde(default)]
    pub name: String,
    pub category: Category,
    /// Extra category tags. The primary `category` drives bucketing.
    #[serde(default)]
    pub also_listed_as: Vec<Category>,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default = "default_stock_available")]
    pub stock_available: bool,
    #[serde(default)]
    pub spec: PartSpec,
}

fn default_stock_available() -> bool {
    true
}

impl Part {
    pub fn new(id: impl Into<String>, category: Category) -> Self {
        Self {
            id: PartId::new(id),
            name: String::new(),
            category,
            also_listed_as: Vec::new(),
            price: Decimal::ZERO,
            stock_available: true,
            spec: PartSpec::Generic,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = price;
        self
    }

    pub fn with_spec(mut self, spec: PartSpec) -> Self {
        self.spec = spec;
        self
    }

    pub fn out_of_stock(mut self) -> Self {
        self.stock_available = false;
        self
    }

    pub fn belongs_to(&self, category: Category) -> bool {
        self.category == category || self.also_listed_as.contains(&category)
    }

    pub fn socket(&self) -> Option<&str> {
        let socket = match &self.spec {
            PartSpec::Cpu(cpu) => cpu.socket.as_deref(),
            PartSpec::Motherboard(board) => board.socket.as_deref(),
            _ => None,
        };
        socket.map(str::trim).filter(|value| !value.is_empty())
    }

    /// Thermal design power for CPUs and GPUs, own draw for coolers.
    pub fn tdp_w(&self) -> Option<u32> {
        match &self.spec {
            PartSpec::Cpu(cpu) => cpu.tdp_w,
            PartSpec::Gpu(gpu) => gpu.tdp_w,
            PartSpec::Cooler(cooler) => cooler.tdp_w,
            _ => None,
        }
    }

    pub fn memory_type(&self) -> Option<&str> {
        let memory_type = match &self.spec {
            PartSpec::Motherboard(board) => board.memory_type.as_deref(),
            PartSpec::Ram(ram) => ram.memory_type.as_deref(),
            _ => None,
        };
        memory_type.map(str::trim).filter(|value| !value.is_empty())
    }

    pub fn cpu(&self) -> Option<&CpuSpec> {
        match &self.spec {
            PartSpec::Cpu(spec) => Some(spec),
            _ => None,
        }
    }

    pub fn motherboard(&self) -> Option<&MotherboardSpec> {
        match &self.spec {
            PartSpec::Motherboard(spec) => Some(spec),
            _ => None,
        }
    }

    pub fn ram(&self) -> Option<&RamSpec> {
        match &self.spec {
            PartSpec::Ram(spec) => Some(spec),
            _ => None,
        }
    }

    pub fn gpu(&self) -> Option<&GpuSpec> {
        match &self.spec {
            PartSpec::Gpu(spec) => Some(spec),
            _ => None,
        }
    }

    pub fn cooler(&self) -> Option<&CoolerSpec> {
        match &self.spec {
            PartSpec::Cooler(spec) => Some(spec),
            _ => None,
        }
    }

    pub fn psu(&self) -> Option<&PsuSpec> {
        match &self.spec {
            PartSpec::Psu(spec) => Some(spec),
            _ => None,
        }
    }

    pub fn storage(&self) -> Option<&StorageSpec> {
        match &self.spec {
            PartSpec::Storage(spec) => Some(spec),
            _ => None,
        }
    }

    pub fn case(&self) -> Option<&CaseSpec> {
        match &self.spec {
            PartSpec::Case(spec) => Some(spec),
            _ => None,
        }
    }
}
