//! Configuration structures for a conversion run.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, StmtError};

/// Main configuration for stmtx.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StmtConfig {
    /// PDF reading configuration.
    pub pdf: PdfConfig,

    /// Output table configuration.
    pub output: OutputConfig,
}

/// PDF reading configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Password tried on encrypted documents. Banks commonly encrypt
    /// statements with an empty one.
    pub password: String,
}

/// Output table configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Extension of the file written beside the input.
    pub extension: String,

    /// Field delimiter. Must be a single ASCII character.
    pub delimiter: char,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            extension: "csv".to_string(),
            delimiter: ',',
        }
    }
}

impl OutputConfig {
    /// Delimiter as the byte the CSV writer expects.
    pub fn delimiter_byte(&self) -> Result<u8> {
        u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| {
                StmtError::Config(format!("delimiter must be ASCII, got {:?}", self.delimiter))
            })
    }
}

impl StmtConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| StmtError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| StmtError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
