pub mod factory;
pub mod families;
pub mod random_family;

pub use factory::ScenarioMakerFactory;
