//! Background cosmologies.
//!
//! A [`CosmologyProvider`] answers two questions about a homogeneous universe at
//! redshift `z`: how fast it expands (the Hubble parameter) and how dense it
//! would have to be to be spatially flat (the critical density). Halo code only
//! ever asks those two questions, so any model that can answer them can back it.

pub mod config;
pub mod error;
pub mod lambda_cdm;
pub mod provider;

#[cfg(test)]
mod lambda_cdm_test;

pub use config::CosmologyConfig;
pub use error::CosmologyError;
pub use lambda_cdm::LambdaCdm;
pub use provider::CosmologyProvider;
