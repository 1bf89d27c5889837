use log::trace;
use std::collections::BTreeSet;

use crate::pedigree::common::errors::Result;
use crate::pedigree::model::objects::{FamilyIndex, GeneCount, ParentIndex, World};
use crate::pedigree::model::tables::ProbabilityTables;

/// Probability that a parent with `gene` copies hands one copy to a child.
///
/// A one-copy parent passes the variant half the time, subject to mutation. The
/// complementary case (passing the plain copy, which then mutates) is not added.
pub fn transmission_probability(gene: GeneCount, tables: &ProbabilityTables) -> f64 {
    let mutation = tables.mutation_rate();
    match gene {
        GeneCount::Two => 1.0 - mutation,
        GeneCount::One => 0.5 * (1.0 - mutation),
        GeneCount::Zero => mutation,
    }
}

/// Probability that a child ends up with `gene` copies given the parents' assignments.
pub fn inherited_gene_probability(
    gene: GeneCount,
    father: GeneCount,
    mother: GeneCount,
    tables: &ProbabilityTables,
) -> f64 {
    let pf = transmission_probability(father, tables);
    let pm = transmission_probability(mother, tables);
    match gene {
        GeneCount::Two => pf * pm,
        GeneCount::One => pf * (1.0 - pm) + pm * (1.0 - pf),
        GeneCount::Zero => (1.0 - pf) * (1.0 - pm),
    }
}

fn gene_factor(
    person: usize,
    parents: Option<ParentIndex>,
    world: &World,
    tables: &ProbabilityTables,
) -> f64 {
    let gene = world.gene(person);
    match parents {
        None => tables.gene_prior(gene),
        Some(p) => inherited_gene_probability(gene, world.gene(p.father), world.gene(p.mother), tables),
    }
}

/// Probability of one fully specified world: the product over every person of the
/// gene factor and the trait emission factor.
pub fn joint_probability(index: &FamilyIndex, world: &World, tables: &ProbabilityTables) -> f64 {
    let mut product = 1.0;
    for (person, parents) in index.parents.iter().enumerate() {
        let gene = world.gene(person);
        let has_trait = world.has_trait(person);
        let factor = gene_factor(person, *parents, world, tables)
            * tables.trait_given_gene(gene, has_trait);
        trace!(
            "{}: genes={} trait={} factor={}",
            index.names[person], gene, has_trait, factor
        );
        product *= factor;
    }
    product
}

/// Set-form entry point: everyone outside `one_gene` and `two_genes` has zero copies,
/// everyone outside `have_trait` lacks the trait.
pub fn joint_probability_of_sets(
    index: &FamilyIndex,
    one_gene: &BTreeSet<String>,
    two_genes: &BTreeSet<String>,
    have_trait: &BTreeSet<String>,
    tables: &ProbabilityTables,
) -> Result<f64> {
    let world = World::from_sets(index, one_gene, two_genes, have_trait)?;
    Ok(joint_probability(index, &world, tables))
}
