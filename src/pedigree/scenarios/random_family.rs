use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::pedigree::common::errors::Result;
use crate::pedigree::common::interface::ScenarioMaker;
use crate::pedigree::model::objects::{Family, Person};

/// Seeded synthetic pedigree: a pool of founders, then children whose parents are
/// drawn from everyone created before them.
pub struct RandomPedigree {
    pub founders: usize,
    pub children: usize,
    /// Chance that any one person's trait is recorded
    pub observed_fraction: f64,
    pub seed: u64,
}

impl RandomPedigree {
    pub fn new(size: usize, seed: u64) -> Self {
        let founders = size.min(2.max(size / 2));
        RandomPedigree {
            founders,
            children: size - founders,
            observed_fraction: 0.5,
            seed,
        }
    }

    fn observation(rng: &mut StdRng, observed_fraction: f64) -> Option<bool> {
        if rng.gen_bool(observed_fraction) {
            Some(rng.gen_bool(0.1))
        } else {
            None
        }
    }
}

impl ScenarioMaker for RandomPedigree {
    fn build_family(&self) -> Result<Family> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let observed_fraction = self.observed_fraction.clamp(0.0, 1.0);
        let mut people: Vec<Person> = Vec::with_capacity(self.founders + self.children);

        for i in 0..self.founders {
            let has_trait = Self::observation(&mut rng, observed_fraction);
            people.push(Person::founder(&format!("F{:02}", i), has_trait));
        }

        for i in 0..self.children {
            let has_trait = Self::observation(&mut rng, observed_fraction);
            let name = format!("C{:02}", i);
            if people.len() < 2 {
                people.push(Person::founder(&name, has_trait));
                continue;
            }
            let mother = rng.gen_range(0..people.len());
            let mut father = rng.gen_range(0..people.len() - 1);
            if father >= mother {
                father += 1;
            }
            let (mother, father) = (people[mother].name.clone(), people[father].name.clone());
            people.push(Person::child(&name, &mother, &father, has_trait));
        }

        debug!(
            "generated random pedigree with {} founders and {} children (seed {})",
            self.founders, self.children, self.seed
        );
        Family::from_people(people)
    }

    fn description(&self) -> String {
        format!(
            "random: {} founders, {} children, seed {}",
            self.founders, self.children, self.seed
        )
    }
}
