use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::utils::error::Result;
use crate::utils::validation::{validate_capacity, validate_vehicle_classes, Validate};

/// File-based lot configuration:
///
/// ```toml
/// [lot]
/// small = 2
/// medium = 4
/// large = 2
///
/// [simulation]
/// arrivals = ["small", "large", "medium"]
/// departures = [1]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LotConfig {
    pub lot: LotCapacities,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LotCapacities {
    pub small: i32,
    pub medium: i32,
    pub large: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default)]
    pub arrivals: Vec<String>,
    #[serde(default)]
    pub departures: Vec<usize>,
}

impl LotConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: LotConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

impl Validate for LotConfig {
    fn validate(&self) -> Result<()> {
        validate_capacity("lot.small", self.lot.small)?;
        validate_capacity("lot.medium", self.lot.medium)?;
        validate_capacity("lot.large", self.lot.large)?;
        validate_vehicle_classes("simulation.arrivals", &self.simulation.arrivals)?;
        Ok(())
    }
}
