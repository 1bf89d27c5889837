use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;

use super::objects::GeneCount;
use crate::pedigree::common::errors::{HeredityError, Result};

const SUM_TOLERANCE: f64 = 1e-9;

/// Probability of showing or not showing the trait for one gene count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraitRow {
    pub present: f64,
    pub absent: f64,
}

impl TraitRow {
    pub fn probability(&self, has_trait: bool) -> f64 {
        if has_trait { self.present } else { self.absent }
    }
}

/// Conditional probability tables of the network. Constructed once and only read afterwards.
///
/// Arrays are indexed by `GeneCount::index()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityTables {
    gene_prior: [f64; 3],
    trait_given_gene: [TraitRow; 3],
    mutation_rate: f64,
}

impl Default for ProbabilityTables {
    fn default() -> Self {
        ProbabilityTables {
            gene_prior: [0.96, 0.03, 0.01],
            trait_given_gene: [
                TraitRow { present: 0.01, absent: 0.99 },
                TraitRow { present: 0.56, absent: 0.44 },
                TraitRow { present: 0.65, absent: 0.35 },
            ],
            mutation_rate: 0.01,
        }
    }
}

impl ProbabilityTables {
    pub fn new(
        gene_prior: [f64; 3],
        trait_given_gene: [TraitRow; 3],
        mutation_rate: f64,
    ) -> Result<Self> {
        let tables = ProbabilityTables {
            gene_prior,
            trait_given_gene,
            mutation_rate,
        };
        tables.validate()?;
        Ok(tables)
    }

    /// Founder probability of carrying `gene` copies.
    pub fn gene_prior(&self, gene: GeneCount) -> f64 {
        self.gene_prior[gene.index()]
    }

    pub fn trait_given_gene(&self, gene: GeneCount, has_trait: bool) -> f64 {
        self.trait_given_gene[gene.index()].probability(has_trait)
    }

    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn validate(&self) -> Result<()> {
        let in_unit_range = |value: f64| value.is_finite() && (0.0..=1.0).contains(&value);

        if !in_unit_range(self.mutation_rate) {
            return Err(HeredityError::InvalidTables(format!(
                "mutation rate {} is outside [0, 1]",
                self.mutation_rate
            )));
        }

        for (gene, p) in GeneCount::ALL.iter().zip(self.gene_prior) {
            if !in_unit_range(p) {
                return Err(HeredityError::InvalidTables(format!(
                    "prior for {} copies is {}",
                    gene, p
                )));
            }
        }
        let prior_sum: f64 = self.gene_prior.iter().sum();
        if (prior_sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(HeredityError::InvalidTables(format!(
                "gene prior sums to {}",
                prior_sum
            )));
        }

        for (gene, row) in GeneCount::ALL.iter().zip(&self.trait_given_gene) {
            if !in_unit_range(row.present) || !in_unit_range(row.absent) {
                return Err(HeredityError::InvalidTables(format!(
                    "trait row for {} copies has an entry outside [0, 1]",
                    gene
                )));
            }
            let row_sum = row.present + row.absent;
            if (row_sum - 1.0).abs() > SUM_TOLERANCE {
                return Err(HeredityError::InvalidTables(format!(
                    "trait row for {} copies sums to {}",
                    gene, row_sum
                )));
            }
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let tables: ProbabilityTables = serde_json::from_str(json)?;
        tables.validate()?;
        debug!("parsed probability tables: {:?}", tables);
        Ok(tables)
    }

    pub fn load_from_file(path: &str) -> Result<Self> {
        info!("Loading probability tables from {}", path);
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn save_to_file(&self, path: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables_are_valid() {
        let tables = ProbabilityTables::default();
        tables.validate().unwrap();
        assert_eq!(tables.gene_prior(GeneCount::Two), 0.01);
        assert_eq!(tables.gene_prior(GeneCount::One), 0.03);
        assert_eq!(tables.gene_prior(GeneCount::Zero), 0.96);
        assert_eq!(tables.trait_given_gene(GeneCount::Two, true), 0.65);
        assert_eq!(tables.trait_given_gene(GeneCount::One, false), 0.44);
        assert_eq!(tables.mutation_rate(), 0.01);
    }

    #[test]
    fn test_prior_must_sum_to_one() {
        let result = ProbabilityTables::new(
            [0.9, 0.03, 0.01],
            ProbabilityTables::default().trait_given_gene,
            0.01,
        );
        assert!(matches!(result, Err(HeredityError::InvalidTables(msg)) if msg.contains("prior")));
    }

    #[test]
    fn test_trait_rows_must_sum_to_one() {
        let mut rows = ProbabilityTables::default().trait_given_gene;
        rows[1] = TraitRow { present: 0.5, absent: 0.6 };
        let result = ProbabilityTables::new([0.96, 0.03, 0.01], rows, 0.01);
        assert!(matches!(result, Err(HeredityError::InvalidTables(_))));
    }

    #[test]
    fn test_mutation_rate_range() {
        let rows = ProbabilityTables::default().trait_given_gene;
        assert!(ProbabilityTables::new([0.96, 0.03, 0.01], rows, 1.5).is_err());
        assert!(ProbabilityTables::new([0.96, 0.03, 0.01], rows, f64::NAN).is_err());
        assert!(ProbabilityTables::new([0.96, 0.03, 0.01], rows, 0.0).is_ok());
    }

    #[test]
    fn test_json_layout() {
        let json = r#"{
            "gene_prior": [0.5, 0.25, 0.25],
            "trait_given_gene": [
                {"present": 0.0, "absent": 1.0},
                {"present": 0.5, "absent": 0.5},
                {"present": 1.0, "absent": 0.0}
            ],
            "mutation_rate": 0.02
        }"#;
        let tables = ProbabilityTables::from_json_str(json).unwrap();
        assert_eq!(tables.gene_prior(GeneCount::Zero), 0.5);
        assert_eq!(tables.trait_given_gene(GeneCount::Two, false), 0.0);
        assert_eq!(tables.mutation_rate(), 0.02);

        let broken = json.replace("0.02", "-0.1");
        assert!(ProbabilityTables::from_json_str(&broken).is_err());
    }
}
