use super::{evolution::EvolutionConfig, problem::ProblemConfig, traits::ConfigSection};
use crate::error::ShiftgaError;
use ::config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix of environment overrides, e.g. `SHIFTGA__EVOLUTION__POPULATION_SIZE=500`
pub const ENV_PREFIX: &str = "SHIFTGA";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub problem: ProblemConfig,
    pub evolution: EvolutionConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ShiftgaError> {
        validate_section(&self.problem)?;
        validate_section(&self.evolution)?;
        Ok(())
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ShiftgaError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }
}

fn validate_section<S: ConfigSection>(section: &S) -> Result<(), ShiftgaError> {
    section.validate().map_err(|e| {
        log::warn!("Invalid [{}] section: {}", S::section_name(), e);
        e
    })
}

pub struct ConfigManager {
    config: AppConfig,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    pub fn with_config(config: AppConfig) -> Result<Self, ShiftgaError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Load a TOML file, then apply `SHIFTGA__<SECTION>__<FIELD>` environment overrides.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ShiftgaError> {
        let path = path.as_ref();
        let config: AppConfig = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        log::info!(
            "Loaded configuration from {} ({} workers, {} generations)",
            path.display(),
            config.problem.workers.len(),
            config.evolution.num_generations
        );

        self.config = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ShiftgaError> {
        let toml_str = toml::to_string_pretty(&self.config)?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }

    pub fn get(&self) -> &AppConfig {
        &self.config
    }

    /// Apply `f` to a copy; the change is kept only if the result validates.
    pub fn update<F>(&mut self, f: F) -> Result<(), ShiftgaError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.config.clone();
        f(&mut candidate);
        candidate.validate()?;
        self.config = candidate;
        Ok(())
    }

    pub fn into_inner(self) -> AppConfig {
        self.config
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
