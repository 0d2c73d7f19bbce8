use core_config::{AppInfo, FromEnv, app_info, env_or_default, server::ServerConfig};
use database::mongodb::MongoConfig;
use eyre::WrapErr;
use std::path::PathBuf;

// Re-export Environment for use in other modules
pub use core_config::Environment;

pub const DEFAULT_STATIC_DIR: &str = "public";

/// Application configuration
/// Composes shared config components from the `core_config` and `database` libraries
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub mongo: MongoConfig,
    /// Root of the static front-end (`STATIC_DIR`)
    pub static_dir: PathBuf,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let app = app_info!();
        let environment = Environment::from_env();
        let server = ServerConfig::from_env().wrap_err("Invalid HOST/PORT configuration")?;

        let mut mongo = MongoConfig::from_env().wrap_err("Invalid MongoDB configuration")?;
        if mongo.app_name.is_none() {
            mongo = mongo.with_app_name(app.name);
        }

        let static_dir = PathBuf::from(env_or_default("STATIC_DIR", DEFAULT_STATIC_DIR));

        Ok(Self {
            app,
            server,
            mongo,
            static_dir,
            environment,
        })
    }
}
