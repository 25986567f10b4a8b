pub mod airport;
pub mod config;
pub mod console;
pub mod plane;
pub mod weather;
