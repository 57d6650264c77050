use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Optional overrides stored as TOML. Every field may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Where `app-icon` writes, instead of `electron/assets/icon.png`.
    #[serde(default)]
    pub app_icon_path: Option<PathBuf>,
    /// Extra tracing directive, e.g. `usage_icons=debug`.
    #[serde(default)]
    pub log_filter: Option<String>,
}

impl AppConfig {
    /// Config file path: ~/.config/usage-icons/config.toml
    pub fn path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("usage-icons");
        config_dir.join("config.toml")
    }

    /// Load config from `path` (or the default location), or return defaults.
    ///
    /// Read and parse failures fall back to defaults and come back as warning
    /// messages, since logging is configured from the result.
    pub fn load(path: Option<&Path>) -> (Self, Vec<String>) {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::path);
        if !path.exists() {
            return (Self::default(), Vec::new());
        }
        let warning = match std::fs::read_to_string(&path) {
            Ok(contents) => match Self::parse(&contents) {
                Ok(config) => return (config, Vec::new()),
                Err(e) => format!("Failed to parse config {}: {}", path.display(), e),
            },
            Err(e) => format!("Failed to read config {}: {}", path.display(), e),
        };
        (Self::default(), vec![warning])
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(AppConfig::parse("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config = AppConfig::parse("app_icon_path = \"build/icon.png\"\n").unwrap();
        assert_eq!(config.app_icon_path, Some(PathBuf::from("build/icon.png")));
        assert_eq!(config.log_filter, None);
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(AppConfig::parse("app_icon_path = 42").is_err());
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let missing = std::env::temp_dir().join("usage-icons-no-such-config.toml");
        let (config, warnings) = AppConfig::load(Some(&missing));
        assert_eq!(config, AppConfig::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_load_unparsable_file_gives_defaults() {
        let path = std::env::temp_dir().join(format!(
            "usage-icons-bad-config-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "log_filter = [").unwrap();
        let (config, warnings) = AppConfig::load(Some(&path));
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("Failed to parse config"), "{:?}", warnings);
    }

    #[test]
    fn test_load_directory_reports_read_failure() {
        let dir = std::env::temp_dir().join(format!(
            "usage-icons-config-dir-{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        let (config, warnings) = AppConfig::load(Some(&dir));
        std::fs::remove_dir_all(&dir).unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("Failed to read config"), "{:?}", warnings);
    }
}
