use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::utils::error::LotError;

/// Size class of a parking spot and of the vehicle that requests one.
/// Ordered smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Small,
    Medium,
    Large,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Small, Tier::Medium, Tier::Large];

    pub fn name(&self) -> &'static str {
        match self {
            Tier::Small => "small",
            Tier::Medium => "medium",
            Tier::Large => "large",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tier {
    type Err = LotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" | "motorcycle" => Ok(Tier::Small),
            "medium" | "car" => Ok(Tier::Medium),
            "large" | "van" => Ok(Tier::Large),
            other => Err(LotError::InvalidVehicleClass {
                value: other.to_string(),
            }),
        }
    }
}

static NEXT_VEHICLE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a vehicle. Lot membership is decided by this
/// id, never by comparing tiers, so two equal-looking vehicles stay distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VehicleId(u64);

/// A request for a parking spot. The base tier is fixed at construction; the
/// occupied tier is owned by the lot and set only while the vehicle is parked.
#[derive(Debug)]
pub struct Vehicle {
    id: VehicleId,
    base: Tier,
    occupied: Option<Tier>,
}

impl Vehicle {
    pub fn new(base: Tier) -> Self {
        Self {
            id: VehicleId(NEXT_VEHICLE_ID.fetch_add(1, Ordering::Relaxed)),
            base,
            occupied: None,
        }
    }

    pub fn small() -> Self {
        Self::new(Tier::Small)
    }

    pub fn medium() -> Self {
        Self::new(Tier::Medium)
    }

    pub fn large() -> Self {
        Self::new(Tier::Large)
    }

    pub fn id(&self) -> VehicleId {
        self.id
    }

    pub fn base(&self) -> Tier {
        self.base
    }

    /// Tier of the spot(s) currently charged to this vehicle, `None` when not
    /// parked. May differ from `base()` under overflow placement.
    pub fn occupied(&self) -> Option<Tier> {
        self.occupied
    }

    pub(crate) fn set_occupied(&mut self, tier: Option<Tier>) {
        self.occupied = tier;
    }
}
