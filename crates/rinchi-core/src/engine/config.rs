use crate::core::constants::{
    INCHI_AUXINFO_HEADER, INCHI_STD_HEADER, RINCHI_AUXINFO_HEADER, RINCHI_STD_HEADER,
};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Header '{0}' must not be empty")]
    EmptyHeader(&'static str),
}

/// Header literals of the reaction and molecule formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    pub rinchi_header: String,
    pub rauxinfo_header: String,
    pub inchi_header: String,
    pub auxinfo_header: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            rinchi_header: RINCHI_STD_HEADER.to_string(),
            rauxinfo_header: RINCHI_AUXINFO_HEADER.to_string(),
            inchi_header: INCHI_STD_HEADER.to_string(),
            auxinfo_header: INCHI_AUXINFO_HEADER.to_string(),
        }
    }
}

#[derive(Default)]
pub struct FormatConfigBuilder {
    rinchi_header: Option<String>,
    rauxinfo_header: Option<String>,
    inchi_header: Option<String>,
    auxinfo_header: Option<String>,
}

impl FormatConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rinchi_header(mut self, header: impl Into<String>) -> Self {
        self.rinchi_header = Some(header.into());
        self
    }
    pub fn rauxinfo_header(mut self, header: impl Into<String>) -> Self {
        self.rauxinfo_header = Some(header.into());
        self
    }
    pub fn inchi_header(mut self, header: impl Into<String>) -> Self {
        self.inchi_header = Some(header.into());
        self
    }
    pub fn auxinfo_header(mut self, header: impl Into<String>) -> Self {
        self.auxinfo_header = Some(header.into());
        self
    }

    /// Builds the configuration, falling back to the RInChI 1.00 literals for any header
    /// that was not set.
    pub fn build(self) -> Result<FormatConfig, ConfigError> {
        let defaults = FormatConfig::default();
        let config = FormatConfig {
            rinchi_header: self.rinchi_header.unwrap_or(defaults.rinchi_header),
            rauxinfo_header: self.rauxinfo_header.unwrap_or(defaults.rauxinfo_header),
            inchi_header: self.inchi_header.unwrap_or(defaults.inchi_header),
            auxinfo_header: self.auxinfo_header.unwrap_or(defaults.auxinfo_header),
        };
        for (name, value) in [
            ("rinchi_header", &config.rinchi_header),
            ("rauxinfo_header", &config.rauxinfo_header),
            ("inchi_header", &config.inchi_header),
            ("auxinfo_header", &config.auxinfo_header),
        ] {
            if value.is_empty() {
                return Err(ConfigError::EmptyHeader(name));
            }
        }
        Ok(config)
    }
}
