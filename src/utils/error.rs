use crate::domain::model::Tier;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LotError {
    #[error("{tier} vehicle does not fit, no suitable spot available")]
    DoesNotFit { tier: Tier },

    #[error("vehicle not found in lot, cannot release")]
    NotFound,

    #[error("vehicle is already parked in a {occupied} spot")]
    AlreadyParked { occupied: Tier },

    #[error("invalid capacity for {field}: {value} (must be non-negative)")]
    InvalidCapacity { field: String, value: i32 },

    #[error("unknown vehicle class: {value}")]
    InvalidVehicleClass { value: String },

    #[error("invalid config value for {field}: {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, LotError>;
