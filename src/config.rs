use crate::airport::DEFAULT_CAPACITY;
use crate::weather::{DEFAULT_FORECASTS, Forecast, RandomWeather};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub capacity: usize,
    /// Sampled uniformly, list a forecast twice to double its odds.
    pub forecasts: Vec<Forecast>,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            capacity: DEFAULT_CAPACITY,
            forecasts: DEFAULT_FORECASTS.to_vec(),
            seed: None,
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> io::Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::parse(&data)
    }

    pub fn parse(data: &str) -> io::Result<Self> {
        let config: Config = serde_json::from_str(data)?;
        config.validate()?;
        Ok(config)
    }

    /// Command-line values win over the file.
    pub fn with_overrides(mut self, capacity: Option<usize>, seed: Option<u64>) -> io::Result<Self> {
        if let Some(capacity) = capacity {
            self.capacity = capacity;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn weather(&self) -> RandomWeather {
        match self.seed {
            Some(seed) => RandomWeather::seeded(self.forecasts.clone(), seed),
            None => RandomWeather::new(self.forecasts.clone()),
        }
    }

    fn validate(&self) -> io::Result<()> {
        if self.capacity == 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "capacity must be a positive number",
            ));
        }
        if self.forecasts.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "forecasts must list at least one outcome",
            ));
        }
        Ok(())
    }
}
