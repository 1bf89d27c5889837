use std::rc::Rc;

use super::families::{FourSiblings, SingleChild, ThreeGenerations};
use super::random_family::RandomPedigree;
use crate::pedigree::common::errors::{HeredityError, Result};
use crate::pedigree::common::interface::ScenarioMaker;

/// Size of the pedigree built by the `random` scenario.
pub const RANDOM_SCENARIO_SIZE: usize = 8;

pub struct ScenarioMakerFactory;

impl ScenarioMakerFactory {
    pub fn new_shared(name: &str, seed: u64) -> Result<Rc<dyn ScenarioMaker>> {
        match name {
            "family0" => Ok(Rc::new(SingleChild {})),
            "family1" => Ok(Rc::new(FourSiblings {})),
            "family2" => Ok(Rc::new(ThreeGenerations {})),
            "random" => Ok(Rc::new(RandomPedigree::new(RANDOM_SCENARIO_SIZE, seed))),
            _ => Err(HeredityError::UnknownScenario(name.to_string())),
        }
    }

    pub fn names() -> &'static [&'static str] {
        &["family0", "family1", "family2", "random"]
    }
}
