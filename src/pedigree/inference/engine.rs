use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::enumerate::{DEFAULT_MAX_INDIVIDUALS, WorldEnumerator};
use super::joint::joint_probability;
use super::posterior::{PosteriorAccumulator, PosteriorTable};
use crate::pedigree::common::errors::Result;
use crate::pedigree::model::evidence::Evidence;
use crate::pedigree::model::objects::Family;
use crate::pedigree::model::tables::ProbabilityTables;

/// Counters from one inference run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceStats {
    pub people: usize,
    pub candidate_worlds: u64,
    pub consistent_trait_subsets: u64,
    pub consistent_worlds: u64,
    pub elapsed_ms: u64,
}

/// Exact inference by enumerating every world, scoring it, and summing.
pub struct Inferencer<'a> {
    tables: &'a ProbabilityTables,
    max_individuals: usize,
}

impl<'a> Inferencer<'a> {
    pub fn new(tables: &'a ProbabilityTables) -> Self {
        Inferencer {
            tables,
            max_individuals: DEFAULT_MAX_INDIVIDUALS,
        }
    }

    pub fn with_max_individuals(mut self, max_individuals: usize) -> Self {
        self.max_individuals = max_individuals;
        self
    }

    /// Posteriors given only the trait values recorded in the family.
    pub fn run(&self, family: &Family) -> Result<PosteriorTable> {
        self.run_with_evidence(family, &Evidence::new())
            .map(|(table, _)| table)
    }

    /// Posteriors given the family's recorded traits plus `extra` observations.
    pub fn run_with_evidence(
        &self,
        family: &Family,
        extra: &Evidence,
    ) -> Result<(PosteriorTable, InferenceStats)> {
        let start = Instant::now();
        let index = family.index()?;

        let mut evidence = Evidence::from_family(family);
        evidence.extend(extra);
        let constraints = evidence.resolve(&index)?;

        let mut enumerator = WorldEnumerator::new(index.len(), constraints, self.max_individuals)?;
        let mut accumulator = PosteriorAccumulator::new(&index);
        for world in enumerator.by_ref() {
            let p = joint_probability(&index, &world, self.tables);
            accumulator.accumulate(&world, p);
        }

        let stats = InferenceStats {
            people: index.len(),
            candidate_worlds: WorldEnumerator::candidate_worlds(index.len()),
            consistent_trait_subsets: enumerator.consistent_trait_subsets(),
            consistent_worlds: accumulator.worlds(),
            elapsed_ms: start.elapsed().as_millis() as u64,
        };
        debug!("inference stats: {:?}", stats);

        let table = accumulator.normalize()?;
        info!(
            "Inference over {} people finished: {} of {} worlds consistent with {} observations",
            stats.people,
            stats.consistent_worlds,
            stats.candidate_worlds,
            evidence.len()
        );
        Ok((table, stats))
    }
}

/// Runs inference with default settings.
pub fn infer(family: &Family, tables: &ProbabilityTables) -> Result<PosteriorTable> {
    Inferencer::new(tables).run(family)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pedigree::common::errors::HeredityError;
    use crate::pedigree::model::objects::Person;

    #[test]
    fn test_single_founder_recovers_prior() {
        let family = Family::from_people(vec![Person::founder("A", None)]).unwrap();
        let tables = ProbabilityTables::default();
        let table = infer(&family, &tables).unwrap();
        let a = table.get("A").unwrap();
        assert!((a.gene.two - 0.01).abs() < 1e-12);
        assert!((a.gene.one - 0.03).abs() < 1e-12);
        assert!((a.gene.zero - 0.96).abs() < 1e-12);
        assert!((a.has_trait.present - 0.0329).abs() < 1e-12);
        assert!((a.has_trait.absent - 0.9671).abs() < 1e-12);
    }

    #[test]
    fn test_stats_count_consistent_worlds() {
        let family = Family::from_people(vec![
            Person::founder("A", Some(true)),
            Person::founder("B", None),
        ])
        .unwrap();
        let tables = ProbabilityTables::default();
        let (_, stats) = Inferencer::new(&tables)
            .run_with_evidence(&family, &Evidence::new())
            .unwrap();
        assert_eq!(stats.people, 2);
        assert_eq!(stats.candidate_worlds, 36);
        assert_eq!(stats.consistent_trait_subsets, 2);
        assert_eq!(stats.consistent_worlds, 18);
    }

    #[test]
    fn test_family_size_limit_applies() {
        let people = (0..4).map(|i| Person::founder(&format!("P{}", i), None)).collect();
        let family = Family::from_people(people).unwrap();
        let tables = ProbabilityTables::default();
        let result = Inferencer::new(&tables).with_max_individuals(3).run(&family);
        assert!(matches!(result, Err(HeredityError::FamilyTooLarge { size: 4, limit: 3 })));
    }
}
