use crate::plane::PlaneId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AirportError {
    #[error("Hangar full, abort landing!")]
    HangarFull,

    #[error("That plane is already here")]
    DuplicateLanding(PlaneId),

    #[error("Stormy weather, cannot land the plane!")]
    StormyLanding,

    /// `None` when no particular plane was asked for and the hangar is empty.
    #[error("{}", not_present_message(.0))]
    PlaneNotPresent(Option<PlaneId>),

    #[error("Stormy weather, unable to take off!")]
    StormyTakeoff,

    #[error("Please enter a valid positive number for capacity.")]
    InvalidCapacity(usize),

    #[error("Cannot shrink capacity to {capacity}, {occupied} planes are in the hangar.")]
    CapacityBelowOccupancy { capacity: usize, occupied: usize },

    #[error("Invalid plane ID. Please enter a valid ID.")]
    InvalidPlaneId(String),
}

fn not_present_message(id: &Option<PlaneId>) -> &'static str {
    match id {
        Some(_) => "That plane isn't here",
        None => "No planes available for takeoff.",
    }
}
