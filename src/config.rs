use figment::{providers::{Env, Format, Toml}, Figment};
use serde::Deserialize;
use std::path::Path;

use crate::domain::{PhysicalConstants, Selection};
use crate::error::Result;
use crate::report::OutputFormat;

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
pub const ENV_PREFIX: &str = "SUP__";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub selection: Selection,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub constants: PhysicalConstants,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Print every (tier, season) pair instead of only the selected one
    #[serde(default)]
    pub all_combinations: bool,
}

impl Config {
    /// Load `config/default.toml` (if present) overlaid with `SUP__*` environment variables
    pub fn load() -> Result<Self> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let figment = Figment::new()
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));
        Ok(figment.extract()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{HardwareTier, Language, Season};
    use figment::Jail;

    #[test]
    fn test_missing_file_uses_defaults() {
        Jail::expect_with(|_jail| {
            let cfg = Config::load_from("does/not/exist.toml").expect("defaults");
            assert_eq!(cfg.selection, Selection::default());
            assert_eq!(cfg.output.format, OutputFormat::Text);
            assert!(!cfg.output.all_combinations);
            assert_eq!(cfg.constants, PhysicalConstants::default());
            Ok(())
        });
    }

    #[test]
    fn test_file_and_env_layering() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "sup.toml",
                r#"
                [selection]
                tier = "premium"
                season = "summer"

                [output]
                format = "json"

                [constants]
                full_power_consumption_w = 500.0
                "#,
            )?;
            jail.set_env("SUP__SELECTION__LANGUAGE", "russian");

            let cfg = Config::load_from("sup.toml").expect("config");
            assert_eq!(cfg.selection.tier, HardwareTier::Premium);
            assert_eq!(cfg.selection.season, Season::Summer);
            assert_eq!(cfg.selection.language, Language::Russian);
            assert_eq!(cfg.output.format, OutputFormat::Json);
            assert_eq!(cfg.constants.full_power_consumption_w, 500.0);
            // untouched constants keep their defaults
            assert_eq!(cfg.constants.sup_length_ft, 11.6);
            Ok(())
        });
    }

    #[test]
    fn test_unknown_tier_is_an_error() {
        Jail::expect_with(|jail| {
            jail.set_env("SUP__SELECTION__TIER", "deluxe");
            assert!(Config::load_from("missing.toml").is_err());
            Ok(())
        });
    }
}
