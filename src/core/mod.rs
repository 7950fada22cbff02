pub mod lot;

pub use crate::domain::model::{Tier, Vehicle, VehicleId};
pub use crate::utils::error::Result;
pub use lot::{LotStatus, ParkingLot, TierCounts};
