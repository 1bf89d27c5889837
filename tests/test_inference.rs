#[cfg(test)]
mod test_inference {
    use heredity::pedigree::{
        common::{errors::HeredityError, interface::ScenarioMaker},
        inference::{Inferencer, infer, joint::inherited_gene_probability},
        model::{Evidence, Family, GeneCount, Person, ProbabilityTables, TraitRow},
        scenarios::{ScenarioMakerFactory, random_family::RandomPedigree},
    };

    const TOLERANCE: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    /// Only two copies can show the trait, so an affected person must carry two.
    fn strict_tables() -> ProbabilityTables {
        ProbabilityTables::new(
            [0.96, 0.03, 0.01],
            [
                TraitRow { present: 0.0, absent: 1.0 },
                TraitRow { present: 0.0, absent: 1.0 },
                TraitRow { present: 1.0, absent: 0.0 },
            ],
            0.01,
        )
        .unwrap()
    }

    fn assert_distributions_sum_to_one(family: &Family, tables: &ProbabilityTables) {
        let table = infer(family, tables).unwrap();
        assert_eq!(table.len(), family.len());
        for (name, posterior) in table.iter() {
            assert!(
                (posterior.gene.sum() - 1.0).abs() < TOLERANCE,
                "gene distribution of {} sums to {}",
                name,
                posterior.gene.sum()
            );
            assert!((posterior.has_trait.sum() - 1.0).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_distributions_sum_to_one_for_builtin_families() {
        let tables = ProbabilityTables::default();
        for name in ["family0", "family1", "family2"] {
            let family = ScenarioMakerFactory::new_shared(name, 0)
                .unwrap()
                .build_family()
                .unwrap();
            assert_distributions_sum_to_one(&family, &tables);
        }
    }

    #[test]
    fn test_distributions_sum_to_one_for_random_families() {
        let tables = ProbabilityTables::default();
        for seed in 0..5 {
            let family = RandomPedigree::new(5, seed).build_family().unwrap();
            assert_distributions_sum_to_one(&family, &tables);
        }
    }

    #[test]
    fn test_single_founder_without_evidence() {
        let family = Family::from_people(vec![Person::founder("A", None)]).unwrap();
        let table = infer(&family, &ProbabilityTables::default()).unwrap();
        let a = table.get("A").unwrap();
        assert_close(a.gene.get(GeneCount::Two), 0.01);
        assert_close(a.gene.get(GeneCount::One), 0.03);
        assert_close(a.gene.get(GeneCount::Zero), 0.96);
        assert_close(a.has_trait.present, 0.01 * 0.65 + 0.03 * 0.56 + 0.96 * 0.01);
        assert_close(a.has_trait.absent, 1.0 - (0.01 * 0.65 + 0.03 * 0.56 + 0.96 * 0.01));
    }

    #[test]
    fn test_single_founder_with_trait_follows_bayes_rule() {
        let family = Family::from_people(vec![Person::founder("A", Some(true))]).unwrap();
        let tables = ProbabilityTables::default();
        let table = infer(&family, &tables).unwrap();
        let a = table.get("A").unwrap();

        let evidence: f64 = GeneCount::ALL
            .iter()
            .map(|g| tables.gene_prior(*g) * tables.trait_given_gene(*g, true))
            .sum();
        for gene in GeneCount::ALL {
            let expected = tables.gene_prior(gene) * tables.trait_given_gene(gene, true) / evidence;
            assert_close(a.gene.get(gene), expected);
        }
        assert_close(a.has_trait.present, 1.0);
        assert_close(a.has_trait.absent, 0.0);
    }

    #[test]
    fn test_child_posterior_matches_direct_marginal() {
        let family = ScenarioMakerFactory::new_shared("family0", 0)
            .unwrap()
            .build_family()
            .unwrap();
        let tables = ProbabilityTables::default();
        let table = infer(&family, &tables).unwrap();

        // James is affected, Lily is not, Harry's own trait sums out.
        let mut mass = [0.0; 3];
        for james in GeneCount::ALL {
            for lily in GeneCount::ALL {
                let parents = tables.gene_prior(james)
                    * tables.trait_given_gene(james, true)
                    * tables.gene_prior(lily)
                    * tables.trait_given_gene(lily, false);
                for harry in GeneCount::ALL {
                    mass[harry.index()] +=
                        parents * inherited_gene_probability(harry, james, lily, &tables);
                }
            }
        }
        let total: f64 = mass.iter().sum();
        let harry = table.get("Harry").unwrap();
        for gene in GeneCount::ALL {
            assert_close(harry.gene.get(gene), mass[gene.index()] / total);
        }
    }

    #[test]
    fn test_observed_traits_are_certain() {
        let family = ScenarioMakerFactory::new_shared("family1", 0)
            .unwrap()
            .build_family()
            .unwrap();
        let table = infer(&family, &ProbabilityTables::default()).unwrap();
        assert_close(table.get("Fred").unwrap().has_trait.present, 1.0);
        assert_close(table.get("Arthur").unwrap().has_trait.absent, 1.0);
        assert_close(table.get("Charlie").unwrap().has_trait.absent, 1.0);
        let ginny = table.get("Ginny").unwrap();
        assert!(ginny.has_trait.present > 0.0 && ginny.has_trait.present < 1.0);
    }

    #[test]
    fn test_affected_grandchild_raises_carrier_probability() {
        let family = ScenarioMakerFactory::new_shared("family2", 0)
            .unwrap()
            .build_family()
            .unwrap();
        let table = infer(&family, &ProbabilityTables::default()).unwrap();
        let rose = table.get("Rose").unwrap();
        assert!(rose.gene.one + rose.gene.two > 0.04);
        let molly = table.get("Molly").unwrap();
        assert!(molly.gene.zero < 0.96);
    }

    #[test]
    fn test_inference_is_deterministic() {
        let family = RandomPedigree::new(6, 9).build_family().unwrap();
        let tables = ProbabilityTables::default();
        let first = infer(&family, &tables).unwrap();
        let second = infer(&family, &tables).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_child_of_two_carriers() {
        let family = Family::from_people(vec![
            Person::founder("Father", Some(true)),
            Person::founder("Mother", Some(true)),
            Person::child("Child", "Mother", "Father", None),
        ])
        .unwrap();
        let tables = strict_tables();
        let table = infer(&family, &tables).unwrap();

        assert_close(table.get("Father").unwrap().gene.two, 1.0);
        assert_close(table.get("Mother").unwrap().gene.two, 1.0);
        let floor = (1.0 - tables.mutation_rate()).powi(2);
        let child = table.get("Child").unwrap();
        assert!(child.gene.two >= floor - TOLERANCE);
        assert_close(child.gene.two, floor);
    }

    #[test]
    fn test_impossible_trait_is_unsatisfiable() {
        let tables = ProbabilityTables::new(
            [0.96, 0.03, 0.01],
            [TraitRow { present: 0.0, absent: 1.0 }; 3],
            0.01,
        )
        .unwrap();
        let family = Family::from_people(vec![Person::founder("A", Some(true))]).unwrap();
        let result = infer(&family, &tables);
        assert!(matches!(
            result,
            Err(HeredityError::UnsatisfiableEvidence { person }) if person == "A"
        ));
    }

    #[test]
    fn test_conflicting_observation_is_unsatisfiable() {
        let family = Family::from_people(vec![
            Person::founder("A", Some(true)),
            Person::founder("B", Some(false)),
        ])
        .unwrap();
        let mut extra = Evidence::new();
        extra.observe("A", false);

        let tables = ProbabilityTables::default();
        let result = Inferencer::new(&tables).run_with_evidence(&family, &extra);
        assert!(matches!(
            result,
            Err(HeredityError::UnsatisfiableEvidence { .. })
        ));
    }

    #[test]
    fn test_extra_observation_matches_recorded_one() {
        let recorded = Family::from_people(vec![
            Person::founder("A", Some(true)),
            Person::founder("B", None),
        ])
        .unwrap();
        let unrecorded = Family::from_people(vec![
            Person::founder("A", None),
            Person::founder("B", None),
        ])
        .unwrap();
        let mut extra = Evidence::new();
        extra.observe("A", true);

        let tables = ProbabilityTables::default();
        let inferencer = Inferencer::new(&tables);
        let (from_file, _) = inferencer
            .run_with_evidence(&recorded, &Evidence::new())
            .unwrap();
        let (from_cli, _) = inferencer.run_with_evidence(&unrecorded, &extra).unwrap();
        for name in ["A", "B"] {
            let (x, y) = (from_file.get(name).unwrap(), from_cli.get(name).unwrap());
            assert_close(x.gene.two, y.gene.two);
            assert_close(x.has_trait.present, y.has_trait.present);
        }
    }

    #[test]
    fn test_unknown_observation_name() {
        let family = Family::from_people(vec![Person::founder("A", None)]).unwrap();
        let mut extra = Evidence::new();
        extra.observe("Z", true);
        let tables = ProbabilityTables::default();
        let result = Inferencer::new(&tables).run_with_evidence(&family, &extra);
        assert!(matches!(result, Err(HeredityError::UnknownPerson(name)) if name == "Z"));
    }
}
