use crate::error::{IrriCalcError, Result};
use crate::models::{Climate, Crop, InputDefaults, ReferenceTables, Soil, DEFAULT_MONTH};
use dialoguer::Input;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default, skip_serializing_if = "ReferenceTables::is_builtin")]
    pub tables: ReferenceTables,
}

/// Values used when a request leaves a field out.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_crop")]
    pub crop: String,
    #[serde(default = "default_soil")]
    pub soil: String,
    #[serde(default = "default_climate")]
    pub climate: String,
    #[serde(default = "default_month")]
    pub month: i64,
    #[serde(default = "default_system_efficiency")]
    pub system_efficiency: f64,
}

fn default_crop() -> String {
    Crop::default().as_str().to_string()
}

fn default_soil() -> String {
    Soil::default().as_str().to_string()
}

fn default_climate() -> String {
    Climate::default().as_str().to_string()
}

fn default_month() -> i64 {
    DEFAULT_MONTH
}

fn default_system_efficiency() -> f64 {
    0.9
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            crop: default_crop(),
            soil: default_soil(),
            climate: default_climate(),
            month: default_month(),
            system_efficiency: default_system_efficiency(),
        }
    }
}

impl DefaultsConfig {
    /// Unknown names fall back the same way request identifiers do.
    pub fn to_input_defaults(&self) -> InputDefaults {
        InputDefaults {
            crop: Crop::resolve(&self.crop),
            soil: Soil::resolve(&self.soil),
            climate: Climate::resolve(&self.climate),
            month: self.month,
            system_efficiency: self.system_efficiency,
        }
    }
}

impl Config {
    /// Load configuration. A missing file at the default locations is not
    /// an error: the built-in tables and defaults are used instead.
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => {
                if !p.exists() {
                    return Err(IrriCalcError::Config(format!(
                        "Config file not found at {:?}",
                        p
                    )));
                }
                p
            }
            None => match Self::find_config_path() {
                Some(p) => p,
                None => {
                    tracing::debug!("No config file found, using built-in defaults");
                    return Ok(Self::default());
                }
            },
        };

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| IrriCalcError::Config(format!("Failed to read config: {}", e)))?;

        let config = Self::from_yaml(&config_str)?;
        tracing::info!("Loaded configuration from {}", config_path.display());
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // Substitute environment variables
        let content = Self::substitute_env_vars(content);

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| IrriCalcError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let eff = self.defaults.system_efficiency;
        if !eff.is_finite() || eff <= 0.0 || eff > 1.0 {
            return Err(IrriCalcError::Config(format!(
                "defaults.system_efficiency must be in (0, 1], got {}",
                eff
            )));
        }
        self.tables.validate()
    }

    /// Search for config.yaml in standard locations.
    fn find_config_path() -> Option<PathBuf> {
        // Try current directory first
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Some(local_config);
        }

        // Then the XDG config directory
        dirs::config_dir()
            .map(|dir| dir.join("irricalc").join("config.yaml"))
            .filter(|p| p.exists())
    }

    /// Default path for writing new config files (~/.config/irricalc/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| IrriCalcError::Config("Cannot determine config directory".into()))?
            .join("irricalc");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("Irrigation defaults (used when a request omits a field)");

        let crop: String = Input::new()
            .with_prompt("  Crop (lettuce, tomato, corn, soy, bean, other)")
            .default(default_crop())
            .interact_text()
            .map_err(|e| IrriCalcError::Config(format!("Input error: {}", e)))?;

        let soil: String = Input::new()
            .with_prompt("  Soil (sandy, loamy, clayey)")
            .default(default_soil())
            .interact_text()
            .map_err(|e| IrriCalcError::Config(format!("Input error: {}", e)))?;

        let climate: String = Input::new()
            .with_prompt("  Climate (cold, mild, hot-humid, hot-dry)")
            .default(default_climate())
            .interact_text()
            .map_err(|e| IrriCalcError::Config(format!("Input error: {}", e)))?;

        let month: i64 = Input::new()
            .with_prompt("  Month (1-12)")
            .default(default_month())
            .interact_text()
            .map_err(|e| IrriCalcError::Config(format!("Input error: {}", e)))?;

        let system_efficiency: f64 = Input::new()
            .with_prompt("  System efficiency (0-1)")
            .default(default_system_efficiency())
            .interact_text()
            .map_err(|e| IrriCalcError::Config(format!("Input error: {}", e)))?;

        println!();

        let config = Config {
            defaults: DefaultsConfig {
                crop: Crop::resolve(&crop).as_str().to_string(),
                soil: Soil::resolve(&soil).as_str().to_string(),
                climate: Climate::resolve(&climate).as_str().to_string(),
                month,
                system_efficiency,
            },
            tables: ReferenceTables::default(),
        };
        config.validate()?;

        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)?;
        let content = format!(
            "# irricalc configuration\n# Generated by `irricalc init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    fn substitute_env_vars(content: &str) -> String {
        let mut result = content.to_string();

        // Find all ${VAR_NAME} patterns and substitute
        let re = match regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}") {
            Ok(re) => re,
            Err(_) => return result,
        };

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }
}
