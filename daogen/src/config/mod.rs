//! Configuration loading for daogen

pub mod defaults;
mod settings;

pub use settings::ConnectionConfig;
