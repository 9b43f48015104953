//! Configuration for the endpoint driver.
//!
//! This module handles loading and saving configuration from disk,
//! currently just the retry budget applied to device transactions.

use std::{
   env, fs,
   path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
   error::{DriverError, Result},
   retry::RetryPolicy,
};

/// Main configuration structure for the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
   #[serde(default)]
   pub retry: RetryPolicy,
}

impl Config {
   /// Loads configuration from disk or creates default if not exists.
   pub fn load() -> Result<Self> {
      let config_path = Self::config_path()?;

      if config_path.exists() {
         Self::load_from(&config_path)
      } else {
         // Create default config
         let config = Self::default();
         config.save()?;
         Ok(config)
      }
   }

   /// Loads configuration from an explicit path.
   pub fn load_from(path: &Path) -> Result<Self> {
      let contents = fs::read_to_string(path)?;
      Ok(toml::from_str(&contents)?)
   }

   /// Saves the current configuration to disk.
   pub fn save(&self) -> Result<()> {
      let config_path = Self::config_path()?;

      // Ensure directory exists
      if let Some(parent) = config_path.parent() {
         fs::create_dir_all(parent)?;
      }

      let contents = toml::to_string_pretty(self)?;
      fs::write(&config_path, contents)?;

      Ok(())
   }

   fn config_path() -> Result<PathBuf> {
      let config_dir = if let Ok(driver_home) = env::var("ATTERO_BT_HOME") {
         PathBuf::from(driver_home)
      } else if let Ok(config_home) = env::var("XDG_CONFIG_HOME") {
         PathBuf::from(config_home)
      } else if let Ok(home) = env::var("HOME") {
         PathBuf::from(home).join(".config")
      } else {
         return Err(DriverError::ConfigDirNotFound);
      };

      Ok(config_dir.join("attero-bt").join("config.toml"))
   }
}

#[cfg(test)]
mod tests {
   use std::io::Write;

   use super::*;

   #[test]
   fn defaults_match_the_documented_budget() {
      let config = Config::default();
      assert_eq!(config.retry.attempts, 3);
      assert_eq!(config.retry.delay_ms, 1000);
   }

   #[test]
   fn partial_toml_falls_back_to_defaults() {
      let config: Config = toml::from_str("[retry]\nattempts = 5\n").unwrap();
      assert_eq!(config.retry.attempts, 5);
      assert_eq!(config.retry.delay_ms, 1000);

      let config: Config = toml::from_str("").unwrap();
      assert_eq!(config.retry, RetryPolicy::default());
   }

   #[test]
   fn load_from_reads_a_file() {
      let mut file = tempfile::NamedTempFile::new().unwrap();
      write!(file, "[retry]\nattempts = 2\ndelay_ms = 250\n").unwrap();

      let config = Config::load_from(file.path()).unwrap();
      assert_eq!(config.retry.attempts, 2);
      assert_eq!(config.retry.delay_ms, 250);
   }

   #[test]
   fn round_trips_through_toml() {
      let config = Config {
         retry: RetryPolicy {
            attempts: 4,
            delay_ms: 500,
         },
      };
      let contents = toml::to_string_pretty(&config).unwrap();
      let parsed: Config = toml::from_str(&contents).unwrap();
      assert_eq!(parsed, config);
   }
}
