//! CSV loading of family records.
//!
//! The file has the header `name,mother,father,trait`. Mother and father are either both
//! blank (a founder) or both names of other rows. Trait is `1`, `0`, or blank for unknown.

use log::{debug, info};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

use super::objects::{Family, Person};
use crate::pedigree::common::errors::{HeredityError, Result};

#[derive(Debug, Deserialize)]
struct FamilyRecord {
    name: String,
    mother: Option<String>,
    father: Option<String>,
    #[serde(rename = "trait")]
    has_trait: Option<String>,
}

fn non_blank(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.trim().is_empty())
}

fn parse_trait(name: &str, cell: Option<String>) -> Result<Option<bool>> {
    match non_blank(cell).as_deref() {
        None => Ok(None),
        Some("1") => Ok(Some(true)),
        Some("0") => Ok(Some(false)),
        Some(other) => Err(HeredityError::MalformedFamilyData(format!(
            "trait for '{}' must be 0, 1 or blank, found '{}'",
            name, other
        ))),
    }
}

impl FamilyRecord {
    fn into_person(self) -> Result<Person> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(HeredityError::MalformedFamilyData(
                "row with an empty name".to_string(),
            ));
        }
        let has_trait = parse_trait(&name, self.has_trait)?;
        match (non_blank(self.mother), non_blank(self.father)) {
            (None, None) => Ok(Person::founder(&name, has_trait)),
            (Some(mother), Some(father)) => Ok(Person::child(&name, &mother, &father, has_trait)),
            _ => Err(HeredityError::MalformedFamilyData(format!(
                "'{}' must list both parents or neither",
                name
            ))),
        }
    }
}

/// Reads family records from any CSV source.
pub fn load_family_from_reader<R: Read>(reader: R) -> Result<Family> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut family = Family::new();
    for result in rdr.deserialize::<FamilyRecord>() {
        let record = result?;
        let person = record.into_person()?;
        debug!("loaded person {:?}", person);
        family.insert(person)?;
    }
    family.validate()?;
    Ok(family)
}

pub fn load_family<P: AsRef<Path>>(path: P) -> Result<Family> {
    let path = path.as_ref();
    info!("Loading family from {}", path.display());
    let file = std::fs::File::open(path)?;
    let family = load_family_from_reader(file)?;
    info!("Loaded {} people", family.len());
    Ok(family)
}
