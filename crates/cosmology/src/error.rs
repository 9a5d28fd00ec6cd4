use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CosmologyError {
    #[error("invalid cosmological parameter {name} = {value}")]
    InvalidParameter { name: &'static str, value: f64 },
    #[error("redshift {0} is not physical (must be > -1)")]
    InvalidRedshift(f64),
}
