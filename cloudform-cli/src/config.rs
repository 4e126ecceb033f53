//! `cloudform.toml` settings

use std::fs;
use std::path::Path;

use cloudform_core::RenderConfig;
use serde::Deserialize;

/// File looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "cloudform.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Output settings for `fmt` and `convert`
    pub render: RenderConfig,

    pub check: CheckConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckConfig {
    /// Accept resource types that have no catalog module
    pub allow_unknown_types: bool,
}

impl CliConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, String> {
        toml::from_str(source).map_err(|e| format!("Invalid configuration: {}", e))
    }

    /// Load `path`, or `cloudform.toml` from the working directory when no
    /// path is given. Only an explicit path is required to exist.
    pub fn load(path: Option<&Path>) -> Result<Self, String> {
        let (path, explicit) = match path {
            Some(path) => (path, true),
            None => (Path::new(DEFAULT_CONFIG_FILE), false),
        };
        if !explicit && !path.exists() {
            log::debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
            return Ok(Self::default());
        }
        let source = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        log::debug!("loaded configuration from {}", path.display());
        Self::from_toml_str(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudform_core::SourceFormat;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = CliConfig::from_toml_str("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.render.indent_size, 2);
        assert!(!config.check.allow_unknown_types);
    }

    #[test]
    fn test_full_config() {
        let config = CliConfig::from_toml_str(
            r#"
[render]
indent_size = 4
format = "yaml"

[check]
allow_unknown_types = true
"#,
        )
        .unwrap();
        assert_eq!(config.render.indent_size, 4);
        assert!(!config.render.use_tabs);
        assert_eq!(config.render.format, SourceFormat::Yaml);
        assert!(config.check.allow_unknown_types);
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        let err = CliConfig::from_toml_str("[lint]\nstrict = true\n").unwrap_err();
        assert!(err.starts_with("Invalid configuration"));
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[render]\nuse_tabs = true\n").unwrap();

        let config = CliConfig::load(Some(&path)).unwrap();
        assert!(config.render.use_tabs);
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CliConfig::load(Some(&dir.path().join("missing.toml"))).unwrap_err();
        assert!(err.contains("Failed to read"));
    }
}
