use log::trace;

use super::objects::{Family, FamilyIndex};
use crate::pedigree::common::errors::{HeredityError, Result};

/// Trait observations that constrain which worlds are consistent.
///
/// Observations are kept as given. Two contradicting observations of the same
/// person are allowed here and leave no consistent world at inference time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evidence {
    observations: Vec<(String, bool)>,
}

impl Evidence {
    pub fn new() -> Self {
        Evidence::default()
    }

    /// Observations recorded in the family itself.
    pub fn from_family(family: &Family) -> Self {
        let observations = family
            .people()
            .filter_map(|p| p.has_trait.map(|t| (p.name.clone(), t)))
            .collect();
        Evidence { observations }
    }

    pub fn observe(&mut self, name: &str, has_trait: bool) {
        self.observations.push((name.to_string(), has_trait));
    }

    pub fn extend(&mut self, other: &Evidence) {
        self.observations.extend(other.observations.iter().cloned());
    }

    /// Parses `NAME=1` or `NAME=0`.
    pub fn parse_observation(text: &str) -> Result<(String, bool)> {
        let (name, value) = text.split_once('=').ok_or_else(|| {
            HeredityError::MalformedFamilyData(format!(
                "observation '{}' is not of the form NAME=0|1",
                text
            ))
        })?;
        let has_trait = match value.trim() {
            "1" => true,
            "0" => false,
            other => {
                return Err(HeredityError::MalformedFamilyData(format!(
                    "observation value '{}' for '{}' must be 0 or 1",
                    other,
                    name.trim()
                )));
            }
        };
        Ok((name.trim().to_string(), has_trait))
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Maps names to positions in `index`.
    pub fn resolve(&self, index: &FamilyIndex) -> Result<Vec<(usize, bool)>> {
        self.observations
            .iter()
            .map(|(name, has_trait)| {
                let position = index.position(name)?;
                trace!("observation {} -> #{} = {}", name, position, has_trait);
                Ok((position, *has_trait))
            })
            .collect()
    }
}
