use serde::{Deserialize, Serialize};

use crate::domain::part::{Category, Part, PartId};

/// Read-only, ordered snapshot of catalog parts.
///
/// Iteration order is the caller's order and is what breaks score ties.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    parts: Vec<Part>,
}

impl Catalog {
    pub fn new(parts: Vec<Part>) -> Self {
        Self { parts }
    }

    pub fn find(&self, part_id: &PartId) -> Option<&Part> {
        self.parts.iter().find(|part| &part.id == part_id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Part> {
        self.parts.iter()
    }

    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Part> {
        self.parts.iter().filter(move |part| part.belongs_to(category))
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl From<Vec<Part>> for Catalog {
    fn from(parts: Vec<Part>) -> Self {
        Self::new(parts)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Part;
    type IntoIter = std::slice::Iter<'a, Part>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
