//! Slot allocation and release.

use std::collections::BTreeMap;

use tracing::{debug, info};

use super::{Departure, LotError, Occupancy, Tariff, Vehicle};

/// A single parking lot with a fixed number of slots.
///
/// Only occupied slots are stored, keyed by slot number, so iteration is
/// always in ascending slot order and a large capacity costs nothing up front.
#[derive(Debug, Clone)]
pub struct ParkingLot {
    capacity: usize,
    slots: BTreeMap<usize, Vehicle>,
    tariff: Tariff,
}

impl ParkingLot {
    /// Create an empty lot with `capacity` slots numbered `1..=capacity`.
    ///
    /// A zero or negative capacity gives a lot with no slots, which is always full.
    #[must_use]
    pub fn new(capacity: i64, tariff: Tariff) -> Self {
        info!(capacity, "created parking lot");
        Self {
            capacity: slot_count(capacity),
            slots: BTreeMap::new(),
            tariff,
        }
    }

    /// Reset the lot to `capacity` empty slots, discarding every parked vehicle.
    pub fn create(&mut self, capacity: i64) {
        info!(
            capacity,
            discarded = self.slots.len(),
            "recreated parking lot"
        );
        self.capacity = slot_count(capacity);
        self.slots.clear();
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    #[must_use]
    pub const fn tariff(&self) -> &Tariff {
        &self.tariff
    }

    /// Lowest-numbered free slot, or `None` when every slot is taken.
    #[must_use]
    pub fn next_available_slot(&self) -> Option<usize> {
        let mut candidate = 1;
        for &slot in self.slots.keys() {
            if slot != candidate {
                break;
            }
            candidate += 1;
        }
        (candidate <= self.capacity).then_some(candidate)
    }

    /// Park a vehicle in the nearest free slot and return its number.
    ///
    /// # Errors
    ///
    /// Returns [`LotError::Full`] if no slot is free.
    pub fn park(&mut self, registration: &str) -> Result<usize, LotError> {
        if self.is_full() {
            debug!(registration, "lot full");
            return Err(LotError::Full);
        }
        let slot = self.next_available_slot().ok_or(LotError::Full)?;
        self.slots.insert(slot, Vehicle::new(registration));
        debug!(registration, slot, "allocated slot");
        Ok(slot)
    }

    /// Release the slot held by `registration` and bill the stay.
    ///
    /// If the same registration is parked twice, the lower slot is released.
    ///
    /// # Errors
    ///
    /// Returns [`LotError::NotFound`] if no parked vehicle has that registration.
    pub fn leave(&mut self, registration: &str, hours: i64) -> Result<Departure, LotError> {
        let slot = self
            .slots
            .iter()
            .find(|(_, vehicle)| vehicle.registration == registration)
            .map(|(&slot, _)| slot)
            .ok_or_else(|| LotError::NotFound(registration.to_string()))?;

        self.slots.remove(&slot);
        let charge = self.tariff.charge(hours);
        debug!(registration, slot, hours, charge, "released slot");

        Ok(Departure {
            registration: registration.to_string(),
            slot,
            hours,
            charge,
        })
    }

    /// Occupied slots in ascending slot order.
    #[must_use]
    pub fn status(&self) -> Vec<Occupancy> {
        self.slots
            .iter()
            .map(|(&slot, vehicle)| Occupancy {
                slot,
                registration: vehicle.registration.clone(),
            })
            .collect()
    }
}

fn slot_count(capacity: i64) -> usize {
    usize::try_from(capacity).unwrap_or(0)
}
