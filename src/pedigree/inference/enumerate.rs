use log::{debug, trace};

use crate::pedigree::common::errors::{HeredityError, Result};
use crate::pedigree::model::objects::{GeneCount, World};

/// Largest family any enumerator accepts, whatever the configured limit.
pub const MAX_ENUMERABLE: usize = 20;

/// Default family size limit for a single inference run.
pub const DEFAULT_MAX_INDIVIDUALS: usize = 15;

/// Lazily yields every world consistent with a set of trait observations.
///
/// The outer loop walks all `2^n` trait subsets as a bit mask and drops the ones
/// that contradict an observation. For each surviving subset the inner loop walks
/// all `3^n` gene assignments as a base-3 odometer.
pub struct WorldEnumerator {
    size: usize,
    constraints: Vec<(usize, bool)>,
    next_trait_mask: u64,
    trait_mask_limit: u64,
    current_traits: Option<Vec<bool>>,
    genes: Vec<GeneCount>,
    fresh_subset: bool,
    consistent_trait_subsets: u64,
}

impl WorldEnumerator {
    pub fn new(size: usize, constraints: Vec<(usize, bool)>, limit: usize) -> Result<Self> {
        let limit = limit.min(MAX_ENUMERABLE);
        if size > limit {
            return Err(HeredityError::FamilyTooLarge { size, limit });
        }
        if let Some((position, _)) = constraints.iter().find(|(p, _)| *p >= size) {
            return Err(HeredityError::UnknownPerson(format!("#{}", position)));
        }
        debug!(
            "enumerating {} candidate worlds for {} people under {} observations",
            Self::candidate_worlds(size),
            size,
            constraints.len()
        );
        Ok(WorldEnumerator {
            size,
            constraints,
            next_trait_mask: 0,
            trait_mask_limit: 1u64 << size,
            current_traits: None,
            genes: vec![GeneCount::Zero; size],
            fresh_subset: false,
            consistent_trait_subsets: 0,
        })
    }

    /// Size of the full cross product, `3^n * 2^n`, before filtering.
    pub fn candidate_worlds(size: usize) -> u64 {
        6u64.pow(size as u32)
    }

    /// Trait subsets that passed the evidence filter so far.
    pub fn consistent_trait_subsets(&self) -> u64 {
        self.consistent_trait_subsets
    }

    fn traits_from_mask(&self, mask: u64) -> Vec<bool> {
        (0..self.size).map(|i| mask & (1u64 << i) != 0).collect()
    }

    fn is_consistent(&self, traits: &[bool]) -> bool {
        self.constraints
            .iter()
            .all(|(position, observed)| traits[*position] == *observed)
    }

    /// Moves to the next trait subset that agrees with every observation.
    fn advance_trait_subset(&mut self) -> bool {
        while self.next_trait_mask < self.trait_mask_limit {
            let mask = self.next_trait_mask;
            self.next_trait_mask += 1;
            let traits = self.traits_from_mask(mask);
            if self.is_consistent(&traits) {
                trace!("trait subset {:#b} is consistent", mask);
                self.consistent_trait_subsets += 1;
                self.current_traits = Some(traits);
                self.genes.iter_mut().for_each(|g| *g = GeneCount::Zero);
                self.fresh_subset = true;
                return true;
            }
            trace!("trait subset {:#b} contradicts evidence, skipped", mask);
        }
        false
    }

    /// Steps the gene odometer. Returns false once it wraps back to all zeros.
    fn advance_genes(&mut self) -> bool {
        for gene in self.genes.iter_mut() {
            match gene {
                GeneCount::Zero => {
                    *gene = GeneCount::One;
                    return true;
                }
                GeneCount::One => {
                    *gene = GeneCount::Two;
                    return true;
                }
                GeneCount::Two => *gene = GeneCount::Zero,
            }
        }
        false
    }
}

impl Iterator for WorldEnumerator {
    type Item = World;

    fn next(&mut self) -> Option<World> {
        loop {
            if self.current_traits.is_none() && !self.advance_trait_subset() {
                return None;
            }

            if self.fresh_subset {
                self.fresh_subset = false;
            } else if !self.advance_genes() {
                self.current_traits = None;
                continue;
            }

            if let Some(traits) = &self.current_traits {
                return Some(World {
                    genes: self.genes.clone(),
                    traits: traits.clone(),
                });
            }
        }
    }
}
