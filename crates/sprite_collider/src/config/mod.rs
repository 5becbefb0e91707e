//! Configuration files
//!
//! Settings structs derive serde and pick up file I/O from [`Config`]. The
//! format follows the file extension: `.toml` or `.ron`.

use std::path::Path;

pub use serde::{Serialize, Deserialize};

/// Supported config file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML document
    Toml,
    /// Rusty Object Notation
    Ron,
}

impl ConfigFormat {
    /// Pick the format from a path's extension
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Parse a document in this format
    pub fn parse<T: for<'de> Deserialize<'de>>(self, contents: &str) -> Result<T, ConfigError> {
        match self {
            Self::Toml => toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string())),
            Self::Ron => ron::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string())),
        }
    }

    /// Render a value as a document in this format
    pub fn render<T: Serialize>(self, value: &T) -> Result<String, ConfigError> {
        match self {
            Self::Toml => toml::to_string_pretty(value).map_err(|e| ConfigError::Serialize(e.to_string())),
            Self::Ron => ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string())),
        }
    }
}

/// File-backed settings
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load settings from a `.toml` or `.ron` file
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let contents = std::fs::read_to_string(path)?;

        log::debug!("Loading {:?} config from {}", format, path.display());
        format.parse(&contents)
    }

    /// Write settings to a `.toml` or `.ron` file
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = ConfigFormat::from_path(path)?.render(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// A value is outside its accepted range
    #[error("Invalid value for {field}: {reason}")]
    Invalid {
        /// Offending field
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_follows_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("course.toml")).unwrap(), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("a/b/course.ron")).unwrap(), ConfigFormat::Ron);
        assert!(matches!(
            ConfigFormat::from_path(Path::new("course")),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        #[derive(Serialize, Deserialize, Default)]
        struct Empty {}
        impl Config for Empty {}

        assert!(matches!(
            Empty::load_from_file("no/such/settings.toml"),
            Err(ConfigError::Io(_))
        ));
    }
}
