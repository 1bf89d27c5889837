use crate::pedigree::common::errors::Result;
use crate::pedigree::model::objects::Family;

/// Something that can produce a family to run inference on.
pub trait ScenarioMaker {
    fn build_family(&self) -> Result<Family>;

    fn description(&self) -> String {
        "unnamed scenario".to_string()
    }
}
