use crate::airport::Airport;
use crate::airport::error::AirportError;
use crate::config::Config;
use crate::plane::Plane;
use crate::weather::{FixedWeather, Weather};
use std::fmt;
use std::fmt::Formatter;
use tabled::settings::Style;
use tracing::{debug, info, warn};

pub const COMMANDS: [&str; 8] = [
    "land", "takeoff", "ls", "status", "capacity", "weather", "help", "exit",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherMode {
    Clear,
    Stormy,
    Random,
}

impl fmt::Display for WeatherMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            WeatherMode::Clear => write!(f, "clear (forced)"),
            WeatherMode::Stormy => write!(f, "stormy (forced)"),
            WeatherMode::Random => write!(f, "random"),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Done(String),
    Rejected(String),
    Info(String),
    Exit,
}

/// Operator console over a single airport. Generates plane ids, turns commands into
/// airport calls and reports what happened.
pub struct Console {
    airport: Airport<Box<dyn Weather>>,
    config: Config,
    weather_mode: WeatherMode,
    next_plane: u32,
}

impl Console {
    pub fn new(config: Config) -> Result<Console, AirportError> {
        let weather: Box<dyn Weather> = Box::new(config.weather());
        let airport = Airport::with_capacity(weather, config.capacity)?;
        Ok(Console {
            airport,
            config,
            weather_mode: WeatherMode::Random,
            next_plane: 1,
        })
    }

    pub fn airport(&self) -> &Airport<Box<dyn Weather>> {
        &self.airport
    }

    pub fn execute(&mut self, line: &str) -> Outcome {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(command) = parts.first() else {
            return Outcome::Info(String::new());
        };
        debug!(command, args = ?&parts[1..], "executing");

        match *command {
            "land" => self.land(parts.get(1).copied()),
            "takeoff" | "take-off" => self.take_off(parts.get(1).copied()),
            "ls" => self.list(),
            "status" => Outcome::Info(format!(
                "Capacity: {}\nPlanes in hangar: {}\nWeather: {}",
                self.airport.capacity(),
                self.airport.len(),
                self.weather_mode
            )),
            "capacity" => match parts.get(1).map(|s| s.parse::<usize>()) {
                Some(Ok(capacity)) => self.resize(capacity),
                Some(Err(_)) => Outcome::Rejected(AirportError::InvalidCapacity(0).to_string()),
                None => Outcome::Info("Usage: capacity <planes>".to_string()),
            },
            "weather" => match parts.get(1).copied() {
                Some("clear") => self.force_weather(WeatherMode::Clear),
                Some("stormy") => self.force_weather(WeatherMode::Stormy),
                Some("random") => self.force_weather(WeatherMode::Random),
                _ => Outcome::Info("Usage: weather <clear|stormy|random>".to_string()),
            },
            "help" | "?" => Outcome::Info(help()),
            "exit" | "quit" => Outcome::Exit,
            other => Outcome::Rejected(format!("Unknown command: {}", other)),
        }
    }

    fn land(&mut self, id: Option<&str>) -> Outcome {
        let mut plane = match id {
            Some(id) => match Plane::named(id) {
                Ok(plane) => plane,
                Err(err) => return self.rejected("land", err),
            },
            None => self.generate_plane(),
        };

        match self.airport.land(&mut plane) {
            Ok(()) => {
                info!(plane = %plane, occupied = self.airport.len(), "plane landed");
                Outcome::Done(format!("Plane {} landed successfully.", plane))
            }
            Err(err) => self.rejected("land", err),
        }
    }

    fn take_off(&mut self, id: Option<&str>) -> Outcome {
        let result = match id {
            Some(id) => Plane::named(id).and_then(|mut plane| {
                self.airport.take_off(&mut plane).map(|_| plane)
            }),
            None => self.airport.take_off_first(),
        };

        match result {
            Ok(plane) => {
                info!(plane = %plane, occupied = self.airport.len(), "plane took off");
                Outcome::Done(format!("Plane {} took off successfully.", plane))
            }
            Err(err) => self.rejected("takeoff", err),
        }
    }

    fn list(&self) -> Outcome {
        if self.airport.is_empty() {
            return Outcome::Info("Hangar is empty.".to_string());
        }
        let mut table = tabled::Table::new(self.airport.hangar());
        table.with(Style::rounded());
        table.with(tabled::settings::Alignment::left());
        Outcome::Info(table.to_string())
    }

    fn resize(&mut self, capacity: usize) -> Outcome {
        match self.airport.set_capacity(capacity) {
            Ok(()) => {
                info!(capacity, "capacity changed");
                Outcome::Done(format!("Capacity set to {}.", capacity))
            }
            Err(err) => self.rejected("capacity", err),
        }
    }

    fn force_weather(&mut self, mode: WeatherMode) -> Outcome {
        let weather: Box<dyn Weather> = match mode {
            WeatherMode::Clear => Box::new(FixedWeather::clear()),
            WeatherMode::Stormy => Box::new(FixedWeather::stormy()),
            WeatherMode::Random => Box::new(self.config.weather()),
        };
        *self.airport.weather_mut() = weather;
        self.weather_mode = mode;
        info!(%mode, "weather changed");
        Outcome::Done(format!("Weather is now {}.", mode))
    }

    fn generate_plane(&mut self) -> Plane {
        loop {
            let plane = Plane::airborne(format!("PL-{:03}", self.next_plane));
            self.next_plane += 1;
            if !self.airport.contains(&plane.id) {
                return plane;
            }
        }
    }

    fn rejected(&self, command: &str, err: AirportError) -> Outcome {
        warn!(command, error = ?err, "operation rejected");
        Outcome::Rejected(err.to_string())
    }
}

fn help() -> String {
    [
        "Available Commands:",
        "  land [id]           - Land plane <id>, or a new plane when no id is given",
        "  takeoff [id]        - Take off plane <id>, or the plane waiting longest",
        "  ls                  - List the hangar in landing order",
        "  status              - Show capacity, occupancy and weather",
        "  capacity <n>        - Resize the hangar to <n> planes",
        "  weather <mode>      - Force the weather: clear, stormy or random",
        "  help / ?            - Show this help menu",
        "  exit / quit         - Exit the console",
    ]
    .join("\n")
}
