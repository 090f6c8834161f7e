pub mod env;
pub mod error;
pub mod networks;
pub mod services;
pub mod utils;

pub use {
    env::{Config, Stage},
    error::{ConfigError, ConfigResult},
    networks::{ChainDescriptor, NetworkDescriptor, Registry},
    services::{base_services, BaseServices},
};
