pub mod errors;
pub mod interface;
#[macro_use]
pub mod logging;
pub mod setup;

pub use errors::{HeredityError, Result};
pub use interface::ScenarioMaker;
