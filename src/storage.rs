//! The storage accountant: a fixed overall capacity carved on demand into
//! fixed-size containers, one per cereal kind.
//!
//! All quantities use [`Decimal`] so that whole-number arithmetic in the
//! accounting (and in tests) is exact, with no float rounding tolerance.
//! The used-container count is derived from the container map rather than
//! tracked separately, so it cannot drift from the entries it counts.

use rust_decimal::Decimal;
use std::collections::HashMap;
use std::fmt;

use crate::{Cereal, Error};

#[derive(Debug)]
pub struct CerealStorage {
    container_capacity: Decimal,
    storage_capacity: Decimal,
    /// A kind has an entry iff it currently occupies a container slot.
    /// A drained container keeps its zero-quantity entry until it is
    /// explicitly removed.
    containers: HashMap<Cereal, Decimal>,
}

impl CerealStorage {
    /// Creates an empty storage with the given per-container and overall
    /// capacities. The storage must be able to fit at least one container.
    pub fn new(container_capacity: Decimal, storage_capacity: Decimal) -> Result<Self, Error> {
        if container_capacity < Decimal::ZERO {
            return Err(Error::InvalidCapacity(
                "container capacity must not be negative",
            ));
        }
        if storage_capacity < container_capacity {
            return Err(Error::InvalidCapacity(
                "storage capacity must not be less than the capacity of one container",
            ));
        }
        Ok(Self {
            container_capacity,
            storage_capacity,
            containers: HashMap::new(),
        })
    }

    pub fn container_capacity(&self) -> Decimal {
        self.container_capacity
    }

    pub fn storage_capacity(&self) -> Decimal {
        self.storage_capacity
    }

    /// Number of container slots currently allocated.
    pub fn containers_used(&self) -> usize {
        self.containers.len()
    }

    /// Overall capacity not yet committed to a container slot.
    pub fn free_space(&self) -> Decimal {
        self.storage_capacity - Decimal::from(self.containers.len()) * self.container_capacity
    }

    /// Adds `amount` of a cereal to its container, capped at the container
    /// capacity. Returns the overflow that did not fit (zero if all of it
    /// fit). A kind with no container slot gets one allocated the first
    /// time it receives a positive quantity, provided the storage budget
    /// has room for one more container.
    pub fn add_cereal(&mut self, cereal: Cereal, amount: Decimal) -> Result<Decimal, Error> {
        if amount < Decimal::ZERO {
            return Err(Error::NegativeAmount);
        }

        // A kind with no slot needs room for one more container before
        // anything moves. Checks precede every mutation.
        if !self.containers.contains_key(&cereal) && self.container_capacity > self.free_space() {
            return Err(Error::CapacityExceeded);
        }

        let current = self.get_amount(cereal);
        let space_left = self.container_capacity - current;
        let (stored, leftover) = if amount > space_left {
            (self.container_capacity, amount - space_left)
        } else {
            (current + amount, Decimal::ZERO)
        };

        // Adding zero to an absent kind allocates nothing.
        if stored > Decimal::ZERO || self.containers.contains_key(&cereal) {
            self.containers.insert(cereal, stored);
        }
        Ok(leftover)
    }

    /// Takes up to `amount` of a cereal out of its container and returns
    /// how much was actually retrieved. An absent or empty container
    /// yields zero; absence is not an error here.
    pub fn get_cereal(&mut self, cereal: Cereal, amount: Decimal) -> Result<Decimal, Error> {
        if amount < Decimal::ZERO {
            return Err(Error::NegativeAmount);
        }
        match self.containers.get_mut(&cereal) {
            Some(current) if *current > Decimal::ZERO => {
                let taken = amount.min(*current);
                *current -= taken;
                Ok(taken)
            }
            _ => Ok(Decimal::ZERO),
        }
    }

    /// Frees the kind's container slot. Only an existing container with
    /// exactly zero quantity can be removed; anything else (including a
    /// kind that was never stored) returns `false` with no state change.
    pub fn remove_container(&mut self, cereal: Cereal) -> bool {
        match self.containers.get(&cereal) {
            Some(&quantity) if quantity == Decimal::ZERO => {
                self.containers.remove(&cereal);
                true
            }
            _ => false,
        }
    }

    /// Current quantity of a cereal, zero if it has no container.
    pub fn get_amount(&self, cereal: Cereal) -> Decimal {
        self.containers
            .get(&cereal)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Free space left in the kind's container. The container must hold
    /// stock to be queried; an absent or drained container is an error.
    pub fn get_space(&self, cereal: Cereal) -> Result<Decimal, Error> {
        let current = self.get_amount(cereal);
        if current == Decimal::ZERO {
            return Err(Error::ContainerNotFound(cereal));
        }
        Ok(self.container_capacity - current)
    }
}

impl fmt::Display for CerealStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Sort entries by kind for deterministic output
        let mut entries: Vec<_> = self.containers.iter().collect();
        entries.sort_by_key(|(cereal, _)| **cereal);

        let containers_info = entries
            .iter()
            .map(|(cereal, amount)| format!("{}: {}/{}", cereal, amount, self.container_capacity))
            .collect::<Vec<_>>()
            .join(", ");

        write!(
            f,
            "Cereal storage ({} containers): {} | Free: {}/{}",
            self.containers.len(),
            containers_info,
            self.free_space(),
            self.storage_capacity
        )
    }
}
