use crate::airport::error::AirportError;
use crate::airport::error::AirportError::{
    CapacityBelowOccupancy, DuplicateLanding, HangarFull, InvalidCapacity, PlaneNotPresent,
    StormyLanding, StormyTakeoff,
};
use crate::plane::{Plane, PlaneId};
use crate::weather::{RandomWeather, Weather};

pub mod error;
#[cfg(test)]
mod tests;

pub const DEFAULT_CAPACITY: usize = 5;

/// A bounded hangar guarded by the weather.
///
/// The hangar keeps planes in landing order, holds at most `capacity` of them and
/// never two with the same id. Every rejected operation leaves both the airport and
/// the plane exactly as they were. The weather is consulted only once the hangar
/// checks have passed.
pub struct Airport<W: Weather = RandomWeather> {
    hangar: Vec<Plane>,
    capacity: usize,
    weather: W,
}

impl Default for Airport<RandomWeather> {
    fn default() -> Self {
        Airport::new(RandomWeather::default())
    }
}

impl<W: Weather> Airport<W> {
    pub fn new(weather: W) -> Airport<W> {
        Airport {
            hangar: Vec::new(),
            capacity: DEFAULT_CAPACITY,
            weather,
        }
    }

    pub fn with_capacity(weather: W, capacity: usize) -> Result<Airport<W>, AirportError> {
        if capacity == 0 {
            return Err(InvalidCapacity(capacity));
        }
        Ok(Airport {
            hangar: Vec::with_capacity(capacity),
            capacity,
            weather,
        })
    }

    pub fn land(&mut self, plane: &mut Plane) -> Result<(), AirportError> {
        if self.is_full() {
            return Err(HangarFull);
        }
        if self.contains(&plane.id) {
            return Err(DuplicateLanding(plane.id.clone()));
        }
        if self.weather.is_stormy() {
            return Err(StormyLanding);
        }

        plane.landed();
        self.hangar.push(plane.clone());
        self.assert_invariants();
        Ok(())
    }

    pub fn take_off(&mut self, plane: &mut Plane) -> Result<(), AirportError> {
        let idx = self
            .position(&plane.id)
            .ok_or_else(|| PlaneNotPresent(Some(plane.id.clone())))?;
        if self.weather.is_stormy() {
            return Err(StormyTakeoff);
        }

        plane.in_the_air();
        self.hangar.remove(idx);
        self.assert_invariants();
        Ok(())
    }

    /// Takes off whichever plane landed first and hands it back airborne.
    pub fn take_off_first(&mut self) -> Result<Plane, AirportError> {
        if self.hangar.is_empty() {
            return Err(PlaneNotPresent(None));
        }
        if self.weather.is_stormy() {
            return Err(StormyTakeoff);
        }

        let mut plane = self.hangar.remove(0);
        plane.in_the_air();
        self.assert_invariants();
        Ok(plane)
    }

    pub fn set_capacity(&mut self, capacity: usize) -> Result<(), AirportError> {
        if capacity == 0 {
            return Err(InvalidCapacity(capacity));
        }
        if capacity < self.hangar.len() {
            return Err(CapacityBelowOccupancy {
                capacity,
                occupied: self.hangar.len(),
            });
        }
        self.capacity = capacity;
        Ok(())
    }

    pub fn hangar(&self) -> &[Plane] {
        &self.hangar
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.hangar.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hangar.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.hangar.len() >= self.capacity
    }

    pub fn contains(&self, id: &PlaneId) -> bool {
        self.position(id).is_some()
    }

    pub fn weather_mut(&mut self) -> &mut W {
        &mut self.weather
    }

    fn position(&self, id: &PlaneId) -> Option<usize> {
        self.hangar.iter().position(|p| p.id == *id)
    }

    fn assert_invariants(&self) {
        debug_assert!(self.hangar.len() <= self.capacity);
        debug_assert!(self.hangar.iter().all(|p| !p.is_airborne()));
        debug_assert!(
            self.hangar
                .iter()
                .enumerate()
                .all(|(i, p)| self.hangar[i + 1..].iter().all(|q| q.id != p.id))
        );
    }
}
