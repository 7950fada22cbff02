use serde::Serialize;
use std::fmt::Write as _;
use tracing::{info, warn};

use crate::domain::model::{Tier, Vehicle, VehicleId};
use crate::utils::error::{LotError, Result};
use crate::utils::validation::validate_capacity;

/// One counter per tier. Counts are signed: under correct use Small and
/// Large never drop below zero, but Medium is allowed to as an accounting
/// artifact of packing a Large vehicle into Medium spots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierCounts {
    pub small: i32,
    pub medium: i32,
    pub large: i32,
}

impl TierCounts {
    pub fn get(&self, tier: Tier) -> i32 {
        match tier {
            Tier::Small => self.small,
            Tier::Medium => self.medium,
            Tier::Large => self.large,
        }
    }

    fn get_mut(&mut self, tier: Tier) -> &mut i32 {
        match tier {
            Tier::Small => &mut self.small,
            Tier::Medium => &mut self.medium,
            Tier::Large => &mut self.large,
        }
    }

    pub fn sum(&self) -> i32 {
        self.small + self.medium + self.large
    }
}

/// Snapshot of lot occupancy, serializable for machine-readable status output.
#[derive(Debug, Clone, Serialize)]
pub struct LotStatus {
    pub total_spots: i32,
    pub available_spots: i32,
    pub total: TierCounts,
    pub available: TierCounts,
    pub vehicles_parked: usize,
}

#[derive(Debug, Clone, Copy)]
struct ParkedRecord {
    id: VehicleId,
    base: Tier,
    occupied: Tier,
}

/// Spot-and-units refund for a parked vehicle, keyed jointly on the occupied
/// and base tiers. Kept as one table so it reads as the exact inverse of the
/// admission charge: the only multi-unit case is a Large vehicle packed into
/// three Medium spots. A vehicle in a Large spot refunds one Large unit
/// whatever its base tier (Small and Medium vehicles both cascade there).
fn refund_for(occupied: Tier, base: Tier) -> (Tier, i32) {
    match (occupied, base) {
        (Tier::Small, _) => (Tier::Small, 1),
        (Tier::Medium, Tier::Large) => (Tier::Medium, 3),
        (Tier::Medium, _) => (Tier::Medium, 1),
        (Tier::Large, _) => (Tier::Large, 1),
    }
}

/// A finite multi-tier parking facility. Tracks per-tier capacity counts and
/// the identity set of parked vehicles; it does not assign spot numbers.
///
/// Admission prefers the vehicle's own tier and cascades upward on
/// exhaustion; a Large vehicle with no Large spot left is packed into three
/// Medium spots. Release reverses the exact charge made at admission.
///
/// Single-writer: callers needing concurrent access must wrap each
/// `admit`/`release` call in one mutual-exclusion boundary; every operation
/// is a single check-then-mutate unit with no partial-failure window.
#[derive(Debug)]
pub struct ParkingLot {
    total: TierCounts,
    available: TierCounts,
    parked: Vec<ParkedRecord>,
}

impl ParkingLot {
    /// Creates a lot with the given per-tier capacities. Negative capacities
    /// are rejected, not clamped.
    pub fn new(small: i32, medium: i32, large: i32) -> Result<Self> {
        validate_capacity("small", small)?;
        validate_capacity("medium", medium)?;
        validate_capacity("large", large)?;
        let total = TierCounts {
            small,
            medium,
            large,
        };
        Ok(Self {
            total,
            available: total,
            parked: Vec::new(),
        })
    }

    /// Whether the vehicle's base tier can currently be accommodated.
    /// Pure predicate, no side effects.
    ///
    /// Medium may borrow a Large spot, but a Large vehicle never borrows
    /// from Small; that asymmetry is deliberate.
    pub fn can_admit(&self, vehicle: &Vehicle) -> bool {
        match vehicle.base() {
            Tier::Small => self.available.sum() > 0,
            Tier::Medium => self.available.medium + self.available.large > 0,
            Tier::Large => self.available.medium >= 3 || self.available.large > 0,
        }
    }

    /// Parks the vehicle, charging the cheapest admissible tier, and returns
    /// the tier granted. Does-not-fit and already-parked are reported as
    /// errors with no state change.
    pub fn admit(&mut self, vehicle: &mut Vehicle) -> Result<Tier> {
        if let Some(occupied) = vehicle.occupied() {
            warn!(base = %vehicle.base(), occupied = %occupied, "admit refused, vehicle already parked");
            return Err(LotError::AlreadyParked { occupied });
        }
        if !self.can_admit(vehicle) {
            warn!(base = %vehicle.base(), "vehicle does not fit");
            return Err(LotError::DoesNotFit {
                tier: vehicle.base(),
            });
        }

        let granted = match vehicle.base() {
            Tier::Small => self.place_small(),
            Tier::Medium => self.place_medium(),
            Tier::Large => self.place_large(),
        };

        vehicle.set_occupied(Some(granted));
        self.parked.push(ParkedRecord {
            id: vehicle.id(),
            base: vehicle.base(),
            occupied: granted,
        });
        info!(requested = %vehicle.base(), granted = %granted, "vehicle admitted");
        Ok(granted)
    }

    fn place_small(&mut self) -> Tier {
        if self.available.small > 0 {
            self.available.small -= 1;
            Tier::Small
        } else {
            // Small cascades through the Medium placement rule.
            self.place_medium()
        }
    }

    fn place_medium(&mut self) -> Tier {
        if self.available.medium > 0 {
            self.available.medium -= 1;
            Tier::Medium
        } else {
            self.available.large -= 1;
            Tier::Large
        }
    }

    fn place_large(&mut self) -> Tier {
        if self.available.large > 0 {
            self.available.large -= 1;
            Tier::Large
        } else {
            // can_admit already verified available.medium >= 3.
            self.available.medium -= 3;
            Tier::Medium
        }
    }

    /// Releases a parked vehicle, refunding the exact units charged at
    /// admission, and returns the refunded tier. An unknown vehicle is
    /// reported as `NotFound` with no state change.
    ///
    /// The refund is taken from the lot's own parked record, not the
    /// caller's copy of the vehicle fields.
    pub fn release(&mut self, vehicle: &mut Vehicle) -> Result<Tier> {
        let Some(pos) = self.parked.iter().position(|r| r.id == vehicle.id()) else {
            warn!(base = %vehicle.base(), "vehicle not found, cannot release");
            return Err(LotError::NotFound);
        };
        let record = self.parked.swap_remove(pos);
        let (tier, units) = refund_for(record.occupied, record.base);
        *self.available.get_mut(tier) += units;
        vehicle.set_occupied(None);
        info!(base = %record.base, refunded = %tier, units, "vehicle released");
        Ok(tier)
    }

    /// Admits each vehicle in order. One vehicle failing to fit does not
    /// block the rest; per-vehicle outcomes are returned in input order.
    pub fn admit_all<'a, I>(&mut self, vehicles: I) -> Vec<Result<Tier>>
    where
        I: IntoIterator<Item = &'a mut Vehicle>,
    {
        vehicles.into_iter().map(|v| self.admit(v)).collect()
    }

    /// Releases each vehicle in order; not-found entries do not block the rest.
    pub fn release_all<'a, I>(&mut self, vehicles: I) -> Vec<Result<Tier>>
    where
        I: IntoIterator<Item = &'a mut Vehicle>,
    {
        vehicles.into_iter().map(|v| self.release(v)).collect()
    }

    pub fn available_spots(&self) -> i32 {
        self.available.sum()
    }

    pub fn available_spots_in(&self, tier: Tier) -> i32 {
        self.available.get(tier)
    }

    pub fn total_spots(&self) -> i32 {
        self.total.sum()
    }

    pub fn total_spots_in(&self, tier: Tier) -> i32 {
        self.total.get(tier)
    }

    pub fn is_full(&self) -> bool {
        self.available_spots() == 0
    }

    pub fn is_empty(&self) -> bool {
        self.available_spots() == self.total_spots()
    }

    /// Identity-based membership test.
    pub fn is_present(&self, vehicle: &Vehicle) -> bool {
        self.parked.iter().any(|r| r.id == vehicle.id())
    }

    pub fn status(&self) -> LotStatus {
        LotStatus {
            total_spots: self.total_spots(),
            available_spots: self.available_spots(),
            total: self.total,
            available: self.available,
            vehicles_parked: self.parked.len(),
        }
    }

    /// Multi-line human-readable summary of the lot. The format is a
    /// convenience, not a contract.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        let rule = "----------------------------------";
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "**PARKING LOT**");
        let _ = writeln!(out, "Total spots: {}", self.total_spots());
        let _ = writeln!(out, "Available spots: {}", self.available_spots());
        let _ = writeln!(out, "{rule}");
        for tier in Tier::ALL {
            let _ = writeln!(
                out,
                "{tier}: {} of {} available",
                self.available.get(tier),
                self.total.get(tier)
            );
        }
        let _ = writeln!(out, "{rule}");
        out
    }
}
