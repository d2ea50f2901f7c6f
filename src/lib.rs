pub mod config;
pub mod constants;
pub mod cosmology_funcs;
pub mod curvature_funcs;
pub mod distances;
pub mod errors;
pub mod integration_funcs;
pub mod report;

pub use cosmology_funcs::Cosmology;
pub use distances::{compute, DistanceResult};
pub use errors::{ConfigError, CosmoError, CosmoResult};
