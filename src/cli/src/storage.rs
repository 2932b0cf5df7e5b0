use anyhow::{Context, Result};
use ini::Ini;
use log::{debug, info};
#[cfg(any(test, feature = "mock"))]
use mockall::automock;
use std::path::PathBuf;

/// Persistent key-value store backing the core's storage effect
#[cfg_attr(any(test, feature = "mock"), automock)]
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// Key-value store kept in a single INI file
///
/// All keys live in the `[storage]` section. A missing file reads as an
/// empty store and is created on the first write.
#[derive(Clone, Debug)]
pub struct IniStore {
    path: PathBuf,
}

impl IniStore {
    const SECTION: &'static str = "storage";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<Ini> {
        if !self
            .path
            .try_exists()
            .context("failed to check if storage file exists")?
        {
            debug!("storage file {:?} missing, starting empty", self.path);
            return Ok(Ini::new());
        }

        Ini::load_from_file(&self.path)
            .with_context(|| format!("failed to load storage file: {:?}", self.path))
    }
}

impl KeyValueStore for IniStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let ini = self.load()?;
        Ok(ini.get_from(Some(Self::SECTION), key).map(str::to_string))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut ini = self.load()?;

        ini.with_section(Some(Self::SECTION)).set(key, value);

        info!("write {key} to {:?}", self.path);

        ini.write_to_file(&self.path)
            .with_context(|| format!("failed to write storage file: {:?}", self.path))
    }
}
