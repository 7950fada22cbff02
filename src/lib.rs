pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::LotConfig;

pub use core::lot::{LotStatus, ParkingLot, TierCounts};
pub use domain::model::{Tier, Vehicle, VehicleId};
pub use utils::error::{LotError, Result};
