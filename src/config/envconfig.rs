use std::path::{Path, PathBuf};

use ::config as config_rs;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// Settings loaded from an optional `<FILE_STEM>.toml` in the working
/// directory, overridden by `APP_<SECTION>__<KEY>` environment variables.
pub trait EnvConfig: Sized + DeserializeOwned {
    const PREFIX: &'static str = "APP";
    const SEPARATOR: &'static str = "__";
    const FILE_STEM: &'static str = "todo_board";

    fn load_dotenv() {
        // Load .env from crate root (falls back to current dir if missing)
        let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        let _ = dotenvy::from_filename(manifest_dir.join(".env")).or_else(|_| dotenvy::dotenv());
    }

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn environment() -> config_rs::Environment {
        config_rs::Environment::with_prefix(Self::PREFIX)
            .prefix_separator("_")
            .separator(Self::SEPARATOR)
            .try_parsing(true)
    }

    /// `<FILE_STEM>.*` in the process's working directory.
    fn config_file() -> PathBuf {
        PathBuf::from(Self::FILE_STEM)
    }

    fn from_env() -> Result<Self> {
        Self::load_dotenv();
        let file = config_rs::File::with_name(&Self::config_file().to_string_lossy())
            .required(false);
        Self::from_sources(Some(file), Self::environment())
    }

    fn from_sources(
        file: Option<config_rs::File<config_rs::FileSourceFile, config_rs::FileFormat>>,
        environment: config_rs::Environment,
    ) -> Result<Self> {
        let mut builder = config_rs::Config::builder();
        if let Some(file) = file {
            builder = builder.add_source(file);
        }

        let settings = builder
            .add_source(environment)
            .build()
            .context("failed to read configuration sources")?;

        let cfg = settings
            .try_deserialize::<Self>()
            .context("failed to deserialize configuration")?;

        cfg.validate()?;
        Ok(cfg)
    }
}
