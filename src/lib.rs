pub mod clients;
pub mod config;
pub mod models;
pub mod utils;
