//! Configuration for the Cosmetics API

use core_config::{AppInfo, FromEnv, app_info, env_optional, server::ServerConfig};
use database::mongodb::MongoConfig;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    /// `None` when `DATABASE_URL` or `DATABASE_NAME` is missing
    pub mongodb: Option<MongoConfig>,
    pub server: ServerConfig,
    pub environment: Environment,
    pub database_url_set: bool,
    pub database_name_set: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env_optional()?;
        let server = ServerConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            mongodb,
            server,
            environment,
            database_url_set: env_optional("DATABASE_URL").is_some(),
            database_name_set: env_optional("DATABASE_NAME").is_some(),
        })
    }
}
