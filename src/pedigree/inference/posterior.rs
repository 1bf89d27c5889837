use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write;

use crate::pedigree::common::errors::{HeredityError, Result};
use crate::pedigree::model::objects::{FamilyIndex, GeneCount, World};

/// Mass (or probability, once normalized) per gene count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneDistribution {
    #[serde(rename = "0")]
    pub zero: f64,
    #[serde(rename = "1")]
    pub one: f64,
    #[serde(rename = "2")]
    pub two: f64,
}

impl GeneDistribution {
    pub fn get(&self, gene: GeneCount) -> f64 {
        match gene {
            GeneCount::Zero => self.zero,
            GeneCount::One => self.one,
            GeneCount::Two => self.two,
        }
    }

    fn slot(&mut self, gene: GeneCount) -> &mut f64 {
        match gene {
            GeneCount::Zero => &mut self.zero,
            GeneCount::One => &mut self.one,
            GeneCount::Two => &mut self.two,
        }
    }

    pub fn sum(&self) -> f64 {
        self.zero + self.one + self.two
    }
}

/// Mass (or probability) of having and not having the trait.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TraitDistribution {
    pub present: f64,
    pub absent: f64,
}

impl TraitDistribution {
    pub fn get(&self, has_trait: bool) -> f64 {
        if has_trait { self.present } else { self.absent }
    }

    fn slot(&mut self, has_trait: bool) -> &mut f64 {
        if has_trait { &mut self.present } else { &mut self.absent }
    }

    pub fn sum(&self) -> f64 {
        self.present + self.absent
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonPosterior {
    pub gene: GeneDistribution,
    #[serde(rename = "trait")]
    pub has_trait: TraitDistribution,
}

/// Unnormalized running totals, one entry per person position.
///
/// Created empty before enumeration, fed once per consistent world, and consumed by
/// `normalize`.
#[derive(Debug, Clone)]
pub struct PosteriorAccumulator {
    names: Vec<String>,
    entries: Vec<PersonPosterior>,
    worlds: u64,
}

impl PosteriorAccumulator {
    pub fn new(index: &FamilyIndex) -> Self {
        PosteriorAccumulator {
            names: index.names.clone(),
            entries: vec![PersonPosterior::default(); index.len()],
            worlds: 0,
        }
    }

    /// Adds `p` to every person's bucket for the gene count and trait they hold in `world`.
    pub fn accumulate(&mut self, world: &World, p: f64) {
        for (position, entry) in self.entries.iter_mut().enumerate() {
            *entry.gene.slot(world.gene(position)) += p;
            *entry.has_trait.slot(world.has_trait(position)) += p;
        }
        self.worlds += 1;
    }

    /// Consistent worlds accumulated so far.
    pub fn worlds(&self) -> u64 {
        self.worlds
    }

    /// Rescales each distribution to sum to one.
    ///
    /// A zero total means no consistent world put mass on that person, which only
    /// happens when the evidence cannot be satisfied.
    pub fn normalize(self) -> Result<PosteriorTable> {
        let mut people = BTreeMap::new();
        for (name, mut entry) in self.names.into_iter().zip(self.entries) {
            let gene_total = entry.gene.sum();
            let trait_total = entry.has_trait.sum();
            trace!("{}: gene mass {} trait mass {}", name, gene_total, trait_total);
            if !(gene_total > 0.0 && gene_total.is_finite())
                || !(trait_total > 0.0 && trait_total.is_finite())
            {
                return Err(HeredityError::UnsatisfiableEvidence { person: name });
            }
            for gene in GeneCount::ALL {
                *entry.gene.slot(gene) /= gene_total;
            }
            for has_trait in [true, false] {
                *entry.has_trait.slot(has_trait) /= trait_total;
            }
            people.insert(name, entry);
        }
        debug!("normalized posteriors for {} people", people.len());
        Ok(PosteriorTable { people })
    }
}

/// Final per-person posteriors, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PosteriorTable {
    people: BTreeMap<String, PersonPosterior>,
}

impl PosteriorTable {
    pub fn get(&self, name: &str) -> Option<&PersonPosterior> {
        self.people.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PersonPosterior)> {
        self.people.iter()
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Human-readable table, gene counts from 2 down to 0, probabilities at `precision` decimals.
    pub fn render_marginal_table(&self, precision: usize) -> String {
        let mut out = String::new();
        for (name, posterior) in &self.people {
            let _ = writeln!(out, "{}:", name);
            let _ = writeln!(out, "  Gene:");
            for gene in GeneCount::ALL.iter().rev() {
                let _ = writeln!(out, "    {}: {:.*}", gene, precision, posterior.gene.get(*gene));
            }
            let _ = writeln!(out, "  Trait:");
            let _ = writeln!(out, "    True: {:.*}", precision, posterior.has_trait.present);
            let _ = writeln!(out, "    False: {:.*}", precision, posterior.has_trait.absent);
        }
        out
    }
}
