mod land;
mod utils;
