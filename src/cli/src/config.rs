use anyhow::{Context, Result};
use std::{env, path::PathBuf, sync::OnceLock};

/// Application configuration loaded and validated at startup
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Persistent storage configuration
    pub storage: StorageConfig,
}

#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub file: PathBuf,
}

impl AppConfig {
    /// Get or load the application configuration
    ///
    /// Returns a reference to the cached configuration. On first call, it loads
    /// and validates all configuration from environment variables. Subsequent
    /// calls return the cached instance.
    ///
    /// # Panics
    /// Panics if configuration loading fails. The shell cannot persist the
    /// device address without a usable data directory.
    pub fn get() -> &'static Self {
        static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();
        APP_CONFIG.get_or_init(|| {
            Self::load_internal().expect("failed to load application configuration")
        })
    }

    fn load_internal() -> Result<Self> {
        let storage = StorageConfig::load()?;

        Ok(Self { storage })
    }
}

impl StorageConfig {
    const DEFAULT_FILE_NAME: &'static str = "storage.ini";

    fn load() -> Result<Self> {
        let data_dir = env::var("LED_REMOTE_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| Self::default_data_dir());

        let file_name = env::var("LED_REMOTE_STORAGE_FILE")
            .unwrap_or_else(|_| Self::DEFAULT_FILE_NAME.to_string());
        anyhow::ensure!(
            !file_name.trim().is_empty(),
            "failed to parse LED_REMOTE_STORAGE_FILE: empty file name"
        );

        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("failed to create data directory {data_dir:?}"))?;

        let file = data_dir.join(file_name);

        Ok(Self { data_dir, file })
    }

    fn default_data_dir() -> PathBuf {
        match env::var("HOME") {
            Ok(home) => PathBuf::from(home)
                .join(".local/share")
                .join(env!("CARGO_PKG_NAME")),
            Err(_) => env::temp_dir().join(env!("CARGO_PKG_NAME")),
        }
    }
}
