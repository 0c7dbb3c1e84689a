use serde::{Deserialize, Serialize};

use crate::domain::part::{Category, Part, PartId};
use crate::errors::DomainError;

/// An in-progress selection of parts.
///
/// Singular categories hold at most one part; inserting a second one replaces
/// the first. Storage and peripherals accumulate.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Build {
    pub cpu: Option<Part>,
    pub motherboard: Option<Part>,
    pub ram: Option<Part>,
    pub gpu: Option<Part>,
    pub cooler: Option<Part>,
    pub psu: Option<Part>,
    pub case: Option<Part>,
    #[serde(default)]
    pub storage: Vec<Part>,
    #[serde(default)]
    pub peripherals: Vec<Part>,
}

impl Build {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_part(part: Part) -> Result<Self, DomainError> {
        Self::new().with(part)
    }

    pub fn with(mut self, part: Part) -> Result<Self, DomainError> {
        self.insert(part)?;
        Ok(self)
    }

    /// Places `part` in the slot of its primary category and returns the part
    /// it displaced, if any.
    pub fn insert(&mut self, part: Part) -> Result<Option<Part>, DomainError> {
        let slot = match part.category {
            Category::Cpu => &mut self.cpu,
            Category::Motherboard => &mut self.motherboard,
            Category::Ram => &mut self.ram,
            Category::Gpu => &mut self.gpu,
            Category::Cooler => &mut self.cooler,
            Category::Psu => &mut self.psu,
            Category::Case => &mut self.case,
            Category::Storage => {
                self.storage.push(part);
                return Ok(None);
            }
            Category::Peripheral => {
                self.peripherals.push(part);
                return Ok(None);
            }
            Category::Unknown => {
                return Err(DomainError::UnsupportedCategory(format!(
                    "part `{}` has no build slot",
                    part.id
                )))
            }
        };

        Ok(slot.replace(part))
    }

    pub fn remove(&mut self, id: &PartId) -> Option<Part> {
        for slot in self.singular_slots_mut() {
            if slot.as_ref().is_some_and(|part| &part.id == id) {
                return slot.take();
            }
        }

        for list in [&mut self.storage, &mut self.peripherals] {
            if let Some(index) = list.iter().position(|part| &part.id == id) {
                return Some(list.remove(index));
            }
        }

        None
    }

    pub fn contains(&self, id: &PartId) -> bool {
        self.parts().any(|part| &part.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.parts().next().is_none()
    }

    /// All parts in slot order, singular slots first.
    pub fn parts(&self) -> impl Iterator<Item = &Part> {
        [&self.cpu, &self.motherboard, &self.ram, &self.gpu, &self.cooler, &self.psu, &self.case]
            .into_iter()
            .flatten()
            .chain(self.storage.iter())
            .chain(self.peripherals.iter())
    }

    /// Parts that carry a power figure for the wattage estimate.
    pub fn power_parts(&self) -> impl Iterator<Item = &Part> {
        [&self.cpu, &self.gpu, &self.cooler].into_iter().flatten()
    }

    fn singular_slots_mut(&mut self) -> [&mut Option<Part>; 7] {
        [
            &mut self.cpu,
            &mut self.motherboard,
            &mut self.ram,
            &mut self.gpu,
            &mut self.cooler,
            &mut self.psu,
            &mut self.case,
        ]
    }
}
