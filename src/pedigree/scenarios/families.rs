use crate::pedigree::common::errors::Result;
use crate::pedigree::common::interface::ScenarioMaker;
use crate::pedigree::model::objects::{Family, Person};

/// Two parents with known traits and a child of unknown status.
pub struct SingleChild {}

impl ScenarioMaker for SingleChild {
    fn build_family(&self) -> Result<Family> {
        Family::from_people(vec![
            Person::child("Harry", "Lily", "James", None),
            Person::founder("James", Some(true)),
            Person::founder("Lily", Some(false)),
        ])
    }

    fn description(&self) -> String {
        "family0: trio with both parents observed".to_string()
    }
}

/// Two founders and four children, two of them observed.
pub struct FourSiblings {}

impl ScenarioMaker for FourSiblings {
    fn build_family(&self) -> Result<Family> {
        Family::from_people(vec![
            Person::founder("Arthur", Some(false)),
            Person::child("Charlie", "Molly", "Arthur", Some(false)),
            Person::child("Fred", "Molly", "Arthur", Some(true)),
            Person::child("Ginny", "Molly", "Arthur", None),
            Person::founder("Molly", None),
            Person::child("Ron", "Molly", "Arthur", None),
        ])
    }

    fn description(&self) -> String {
        "family1: four siblings, one affected".to_string()
    }
}

/// Three generations: grandparents, a married-in parent, and an affected grandchild.
pub struct ThreeGenerations {}

impl ScenarioMaker for ThreeGenerations {
    fn build_family(&self) -> Result<Family> {
        Family::from_people(vec![
            Person::founder("Arthur", Some(false)),
            Person::founder("Hermione", Some(false)),
            Person::founder("Molly", None),
            Person::child("Ron", "Molly", "Arthur", Some(false)),
            Person::child("Rose", "Hermione", "Ron", Some(true)),
        ])
    }

    fn description(&self) -> String {
        "family2: three generations, affected grandchild".to_string()
    }
}
