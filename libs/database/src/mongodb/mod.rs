//! MongoDB connector and utilities
//!
//! Provides connection settings and a one-shot connect with ping.

mod config;
mod connector;

pub use config::MongoConfig;
pub use connector::{MongoError, connect_from_config};

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Collection, Database};
