use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::pedigree::common::errors::{HeredityError, Result};

/// Number of copies of the modelled variant an individual carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GeneCount {
    Zero,
    One,
    Two,
}

impl GeneCount {
    /// All gene counts, in index order.
    pub const ALL: [GeneCount; 3] = [GeneCount::Zero, GeneCount::One, GeneCount::Two];

    /// Position of this count in per-count arrays.
    pub fn index(self) -> usize {
        match self {
            GeneCount::Zero => 0,
            GeneCount::One => 1,
            GeneCount::Two => 2,
        }
    }

    pub fn copies(self) -> u8 {
        self.index() as u8
    }

    pub fn from_index(index: usize) -> Option<GeneCount> {
        GeneCount::ALL.get(index).copied()
    }
}

impl fmt::Display for GeneCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.copies())
    }
}

/// Both parents of a non-founder. Partial parentage is not representable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parents {
    pub mother: String,
    pub father: String,
}

/// One member of a family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub parents: Option<Parents>,
    /// Observed trait status, `None` when unknown.
    pub has_trait: Option<bool>,
}

impl Person {
    /// A person with no recorded parents.
    pub fn founder(name: &str, has_trait: Option<bool>) -> Self {
        Person {
            name: name.to_string(),
            parents: None,
            has_trait,
        }
    }

    pub fn child(name: &str, mother: &str, father: &str, has_trait: Option<bool>) -> Self {
        Person {
            name: name.to_string(),
            parents: Some(Parents {
                mother: mother.to_string(),
                father: father.to_string(),
            }),
            has_trait,
        }
    }

    pub fn is_founder(&self) -> bool {
        self.parents.is_none()
    }
}

/// People keyed by name. Iteration order is the name order, which fixes the
/// order of individuals in every world.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Family {
    people: BTreeMap<String, Person>,
}

impl Family {
    pub fn new() -> Self {
        Family::default()
    }

    /// Builds a family and checks that every parent reference resolves.
    pub fn from_people(people: Vec<Person>) -> Result<Self> {
        let mut family = Family::new();
        for person in people {
            family.insert(person)?;
        }
        family.validate()?;
        Ok(family)
    }

    /// Adds a person. Parent references are not checked until `validate` or `index`.
    pub fn insert(&mut self, person: Person) -> Result<()> {
        if self.people.contains_key(&person.name) {
            return Err(HeredityError::MalformedFamilyData(format!(
                "duplicate person '{}'",
                person.name
            )));
        }
        self.people.insert(person.name.clone(), person);
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        for person in self.people.values() {
            if let Some(parents) = &person.parents {
                for parent in [&parents.mother, &parents.father] {
                    if !self.people.contains_key(parent) {
                        return Err(HeredityError::MalformedFamilyData(format!(
                            "'{}' references missing parent '{}'",
                            person.name, parent
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Person> {
        self.people.get(name)
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.people.keys().map(String::as_str)
    }

    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.people.values()
    }

    /// Resolves names to positions. Fails on the first missing parent.
    pub fn index(&self) -> Result<FamilyIndex> {
        let names: Vec<String> = self.people.keys().cloned().collect();
        let position = |name: &str, child: &str| -> Result<usize> {
            names.binary_search_by(|n| n.as_str().cmp(name)).map_err(|_| {
                HeredityError::MalformedFamilyData(format!(
                    "'{}' references missing parent '{}'",
                    child, name
                ))
            })
        };

        let mut parents = Vec::with_capacity(names.len());
        let mut known_traits = Vec::with_capacity(names.len());
        for person in self.people.values() {
            let resolved = match &person.parents {
                Some(p) => Some(ParentIndex {
                    father: position(&p.father, &person.name)?,
                    mother: position(&p.mother, &person.name)?,
                }),
                None => None,
            };
            parents.push(resolved);
            known_traits.push(person.has_trait);
        }

        Ok(FamilyIndex {
            names,
            parents,
            known_traits,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentIndex {
    pub father: usize,
    pub mother: usize,
}

/// Position-based view of a family used by the enumerator and evaluator.
#[derive(Debug, Clone)]
pub struct FamilyIndex {
    pub names: Vec<String>,
    pub parents: Vec<Option<ParentIndex>>,
    pub known_traits: Vec<Option<bool>>,
}

impl FamilyIndex {
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn position(&self, name: &str) -> Result<usize> {
        self.names
            .binary_search_by(|n| n.as_str().cmp(name))
            .map_err(|_| HeredityError::UnknownPerson(name.to_string()))
    }
}

/// Set form of a world's gene dimension. Everyone not listed carries zero copies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenePartition {
    pub one_gene: BTreeSet<String>,
    pub two_genes: BTreeSet<String>,
}

/// A complete assignment of gene count and trait to every individual, by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct World {
    pub genes: Vec<GeneCount>,
    pub traits: Vec<bool>,
}

impl World {
    pub fn gene(&self, person: usize) -> GeneCount {
        self.genes[person]
    }

    pub fn has_trait(&self, person: usize) -> bool {
        self.traits[person]
    }

    /// Builds a world from name sets. A name in both gene sets counts as two copies.
    pub fn from_sets(
        index: &FamilyIndex,
        one_gene: &BTreeSet<String>,
        two_genes: &BTreeSet<String>,
        have_trait: &BTreeSet<String>,
    ) -> Result<World> {
        let mut genes = vec![GeneCount::Zero; index.len()];
        let mut traits = vec![false; index.len()];
        for name in one_gene {
            genes[index.position(name)?] = GeneCount::One;
        }
        for name in two_genes {
            genes[index.position(name)?] = GeneCount::Two;
        }
        for name in have_trait {
            traits[index.position(name)?] = true;
        }
        Ok(World { genes, traits })
    }

    pub fn gene_partition(&self, index: &FamilyIndex) -> GenePartition {
        let mut partition = GenePartition::default();
        for (name, gene) in index.names.iter().zip(&self.genes) {
            match gene {
                GeneCount::One => {
                    partition.one_gene.insert(name.clone());
                }
                GeneCount::Two => {
                    partition.two_genes.insert(name.clone());
                }
                GeneCount::Zero => {}
            }
        }
        partition
    }

    pub fn trait_partition(&self, index: &FamilyIndex) -> BTreeSet<String> {
        index
            .names
            .iter()
            .zip(&self.traits)
            .filter(|(_, has)| **has)
            .map(|(name, _)| name.clone())
            .collect()
    }
}
