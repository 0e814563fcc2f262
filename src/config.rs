use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the inventory document
    pub data_path: PathBuf,
    /// Phone number for the WhatsApp share link; without it the link opens
    /// the contact picker
    pub whatsapp_phone: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            data_path: data_dir.join("stocklist").join("inventory.json"),
            whatsapp_phone: None,
        }
    }
}

impl Config {
    /// Load configuration with priority: env vars > config file > defaults
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let path = config_path.unwrap_or_else(Self::default_config_path);
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::ReadError(path.clone(), e))?;
            config = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::ParseError(path.clone(), e))?;
        }

        if let Ok(data_path) = std::env::var("STOCKLIST_DATA_PATH") {
            config.data_path = PathBuf::from(data_path);
        }
        if let Ok(phone) = std::env::var("STOCKLIST_WHATSAPP_PHONE") {
            config.whatsapp_phone = Some(phone);
        }

        Ok(config)
    }

    /// Default config file path: ~/.config/stocklist/config.yaml
    pub fn default_config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("stocklist").join("config.yaml")
    }
}

#[derive(Debug)]
pub enum ConfigError {
    ReadError(PathBuf, std::io::Error),
    ParseError(PathBuf, serde_yaml::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError(path, e) => {
                write!(f, "Failed to read config file '{}': {}", path.display(), e)
            }
            ConfigError::ParseError(path, e) => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    e
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config
            .data_path
            .to_string_lossy()
            .contains("inventory.json"));
        assert!(config.whatsapp_phone.is_none());
    }

    #[test]
    fn test_load_no_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nonexistent.yaml");

        let config = Config::load(Some(config_path)).unwrap();
        assert!(config.whatsapp_phone.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "data_path: /custom/path/inventory.json").unwrap();
        writeln!(file, "whatsapp_phone: \"972501234567\"").unwrap();

        let config = Config::load(Some(config_path)).unwrap();
        assert_eq!(
            config.data_path,
            PathBuf::from("/custom/path/inventory.json")
        );
        assert_eq!(config.whatsapp_phone.as_deref(), Some("972501234567"));
    }

    #[test]
    fn test_env_var_overrides_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "whatsapp_phone: \"111\"").unwrap();

        std::env::set_var("STOCKLIST_WHATSAPP_PHONE", "222");

        let config = Config::load(Some(config_path)).unwrap();
        assert_eq!(config.whatsapp_phone.as_deref(), Some("222"));

        std::env::remove_var("STOCKLIST_WHATSAPP_PHONE");
    }

    #[test]
    fn test_invalid_yaml_error() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "invalid: yaml: content: [").unwrap();

        let result = Config::load(Some(config_path));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
