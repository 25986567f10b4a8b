use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Formatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Forecast {
    Sunny,
    Stormy,
}

impl fmt::Display for Forecast {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Forecast::Sunny => write!(f, "sunny"),
            Forecast::Stormy => write!(f, "stormy"),
        }
    }
}

/// One storm in four.
pub const DEFAULT_FORECASTS: [Forecast; 4] = [
    Forecast::Stormy,
    Forecast::Sunny,
    Forecast::Sunny,
    Forecast::Sunny,
];

/// Source of the current weather. Queried once per operation that needs it.
pub trait Weather {
    fn is_stormy(&mut self) -> bool;
}

impl<W: Weather + ?Sized> Weather for Box<W> {
    fn is_stormy(&mut self) -> bool {
        (**self).is_stormy()
    }
}

/// Adapts a closure into a weather source.
pub struct FnWeather<F>(pub F);

impl<F: FnMut() -> bool> Weather for FnWeather<F> {
    fn is_stormy(&mut self) -> bool {
        (self.0)()
    }
}

/// Draws each forecast uniformly from a list, so repeated entries act as weights.
pub struct RandomWeather {
    forecasts: Vec<Forecast>,
    rng: StdRng,
}

impl RandomWeather {
    pub fn new(forecasts: Vec<Forecast>) -> RandomWeather {
        RandomWeather {
            forecasts,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(forecasts: Vec<Forecast>, seed: u64) -> RandomWeather {
        RandomWeather {
            forecasts,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn forecast(&mut self) -> Forecast {
        if self.forecasts.is_empty() {
            return Forecast::Sunny;
        }
        let idx = self.rng.random_range(0..self.forecasts.len());
        self.forecasts[idx]
    }
}

impl Default for RandomWeather {
    fn default() -> Self {
        RandomWeather::new(DEFAULT_FORECASTS.to_vec())
    }
}

impl Weather for RandomWeather {
    fn is_stormy(&mut self) -> bool {
        self.forecast() == Forecast::Stormy
    }
}

/// Weather that never changes unless told to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWeather {
    pub stormy: bool,
}

impl FixedWeather {
    pub fn clear() -> FixedWeather {
        FixedWeather { stormy: false }
    }

    pub fn stormy() -> FixedWeather {
        FixedWeather { stormy: true }
    }
}

impl Weather for FixedWeather {
    fn is_stormy(&mut self) -> bool {
        self.stormy
    }
}
