use crate::airport::error::AirportError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Formatter;
use std::sync::Arc;
use tabled::Tabled;

pub type PlaneId = Arc<str>;

#[derive(Clone, Debug, Serialize, Deserialize, Tabled)]
pub struct Plane {
    #[tabled(rename = "plane")]
    pub id: PlaneId,
    #[tabled(rename = "airborne")]
    airborne: bool,
}

impl Plane {
    /// A grounded plane.
    pub fn new(id: impl Into<PlaneId>) -> Plane {
        Plane {
            id: id.into(),
            airborne: false,
        }
    }

    /// A plane currently in flight, e.g. one approaching to land.
    pub fn airborne(id: impl Into<PlaneId>) -> Plane {
        Plane {
            id: id.into(),
            airborne: true,
        }
    }

    /// Builds an airborne plane from operator input, rejecting ids that are blank
    /// or contain whitespace.
    pub fn named(id: &str) -> Result<Plane, AirportError> {
        let id = id.trim();
        if id.is_empty() || id.chars().any(char::is_whitespace) {
            return Err(AirportError::InvalidPlaneId(id.to_string()));
        }
        Ok(Plane::airborne(id))
    }

    pub fn is_airborne(&self) -> bool {
        self.airborne
    }

    pub fn landed(&mut self) {
        self.airborne = false;
    }

    pub fn in_the_air(&mut self) {
        self.airborne = true;
    }
}

// identity is the id alone, the flag is transient
impl PartialEq for Plane {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Plane {}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
