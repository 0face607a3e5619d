//! Configuration layering, fallback logic, and environment overrides

use std::collections::HashMap;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

use prereq_core::error::PrereqError;
use prereq_core::types::CyclePolicy;

use crate::catalog::Catalog;
use crate::ConfigResult;

/// Project catalog file name
pub const CATALOG_TOML: &str = "prereq.toml";

/// Fallback catalog file name
pub const CATALOG_JSON: &str = "courses.json";

/// Environment variable overriding the cycle policy
pub const POLICY_ENV: &str = "PREREQ_POLICY";

/// Main configuration loading interface
pub struct ConfigLoader {
    /// Current working directory
    cwd: Utf8PathBuf,
}

/// Configuration source tracking
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    /// Global config file
    Global(Utf8PathBuf),
    /// Project prereq.toml file
    ProjectToml(Utf8PathBuf),
    /// Project courses.json file (fallback)
    ProjectJson(Utf8PathBuf),
}

impl ConfigSource {
    /// Path of the file this configuration came from
    pub fn path(&self) -> &Utf8Path {
        match self {
            ConfigSource::Global(path)
            | ConfigSource::ProjectToml(path)
            | ConfigSource::ProjectJson(path) => path,
        }
    }
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new(cwd: Utf8PathBuf) -> Self {
        Self { cwd }
    }

    /// Load project catalog with fallbacks
    pub async fn load_project_config(&self) -> ConfigResult<(Catalog, ConfigSource)> {
        let toml_path = self.resolve_config_path(CATALOG_TOML);
        if toml_path.exists() {
            let catalog = crate::catalog::load_from_file(&toml_path).await?;
            return Ok((catalog, ConfigSource::ProjectToml(toml_path)));
        }

        // Fall back to courses.json if no prereq.toml
        let json_path = self.resolve_config_path(CATALOG_JSON);
        if json_path.exists() {
            let catalog = crate::json::load_from_file(&json_path).await?;
            return Ok((catalog, ConfigSource::ProjectJson(json_path)));
        }

        Err(PrereqError::ConfigValidation {
            field: "catalog".to_string(),
            reason: format!(
                "No {} or {} found in current directory or parent directories",
                CATALOG_TOML, CATALOG_JSON
            ),
        })
    }

    /// Load an explicitly named catalog file, picking the format by extension
    pub async fn load_catalog_file(path: &Utf8Path) -> ConfigResult<(Catalog, ConfigSource)> {
        if path.extension() == Some("json") {
            let catalog = crate::json::load_from_file(path).await?;
            Ok((catalog, ConfigSource::ProjectJson(path.to_path_buf())))
        } else {
            let catalog = crate::catalog::load_from_file(path).await?;
            Ok((catalog, ConfigSource::ProjectToml(path.to_path_buf())))
        }
    }

    /// Find configuration file in project (walks up directory tree)
    ///
    /// Returns the path in the working directory when no ancestor has the file.
    pub fn resolve_config_path(&self, filename: &str) -> Utf8PathBuf {
        let mut current = Some(self.cwd.as_path());

        while let Some(dir) = current {
            let config_path = dir.join(filename);
            if config_path.exists() {
                return config_path;
            }
            current = dir.parent();
        }

        self.cwd.join(filename)
    }

    /// Path of the global configuration file
    pub fn global_config_path() -> ConfigResult<Utf8PathBuf> {
        let home_dir = dirs::home_dir().ok_or_else(|| PrereqError::ConfigValidation {
            field: "home_dir".to_string(),
            reason: "Could not determine home directory".to_string(),
        })?;

        let path = Utf8PathBuf::try_from(home_dir)
            .map_err(|e| PrereqError::ConfigValidation {
                field: "home_dir".to_string(),
                reason: format!("Invalid home directory path: {}", e),
            })?
            .join(".prereq")
            .join("config.toml");

        Ok(path)
    }

    /// Load global configuration
    pub async fn load_global_config(&self) -> ConfigResult<Option<(Catalog, ConfigSource)>> {
        let path = Self::global_config_path()?;

        if path.exists() {
            debug!("Loading global config from {}", path);
            let catalog = crate::catalog::load_from_file(&path).await?;
            Ok(Some((catalog, ConfigSource::Global(path))))
        } else {
            Ok(None)
        }
    }
}

/// Configuration layering and merging
pub struct ConfigLayering;

impl ConfigLayering {
    /// Merge multiple configuration layers
    ///
    /// Precedence, lowest first: global, project, environment, CLI flags.
    pub fn merge_configs(
        global_config: Option<Catalog>,
        project_config: Catalog,
        env_overrides: HashMap<String, String>,
        cli_overrides: HashMap<String, String>,
    ) -> ConfigResult<Catalog> {
        let mut merged = project_config;

        if let Some(global) = global_config {
            if merged.resolver.policy.is_none() {
                merged.resolver.policy = global.resolver.policy;
            }

            // Shared courses the project does not declare itself
            for (name, spec) in global.courses {
                merged.courses.entry(name).or_insert(spec);
            }
        }

        Self::apply_env_overrides(&mut merged, &env_overrides)?;

        // CLI flags have the highest priority
        Self::apply_cli_overrides(&mut merged, &cli_overrides)?;

        Ok(merged)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(
        config: &mut Catalog,
        overrides: &HashMap<String, String>,
    ) -> ConfigResult<()> {
        for (key, value) in overrides {
            match key.as_str() {
                POLICY_ENV => {
                    config.resolver.policy = Some(parse_policy(POLICY_ENV, value)?);
                }
                _ => {
                    // Unknown environment variable, ignore
                }
            }
        }

        Ok(())
    }

    /// Apply CLI flag overrides
    fn apply_cli_overrides(
        config: &mut Catalog,
        overrides: &HashMap<String, String>,
    ) -> ConfigResult<()> {
        for (key, value) in overrides {
            match key.as_str() {
                "policy" => {
                    config.resolver.policy = Some(parse_policy("--policy", value)?);
                }
                _ => {
                    // Unknown CLI override, ignore
                }
            }
        }

        Ok(())
    }

    /// Collect environment variable overrides
    pub fn collect_env_overrides() -> HashMap<String, String> {
        std::env::vars()
            .filter(|(key, _)| key.starts_with("PREREQ_"))
            .collect()
    }
}

fn parse_policy(field: &str, value: &str) -> ConfigResult<CyclePolicy> {
    value.parse().map_err(|reason| PrereqError::ConfigValidation {
        field: field.to_string(),
        reason,
    })
}
