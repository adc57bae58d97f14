//! File-backed converter configuration
//!
//! ```yaml
//! case_insensitive: true
//! list_separator: ";"
//! date_layout: "%d/%m/%Y"
//! aliases:
//!   int32: [interage, integer]
//!   int64_list: [longs]
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::converter::{Converter, ParseConfig};
use crate::logical_type::LogicalType;
use crate::registry::TypeRegistry;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Fall back to case-folded alias lookup
    pub case_insensitive: bool,
    /// Start from an empty alias table instead of the defaults
    pub replace_default_aliases: bool,
    /// Extra aliases per type; these win over default aliases of the same name
    pub aliases: BTreeMap<LogicalType, Vec<String>>,
    #[serde(flatten)]
    pub parse: ParseConfig,
}

impl ConverterConfig {
    /// Load a configuration file. The format is picked from the extension:
    /// `.yaml`/`.yml`, `.json` or `.toml`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read converter config: {:?}", path))?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        let config = match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml_str(&content),
            "json" => Self::from_json_str(&content),
            "toml" => Self::from_toml_str(&content),
            other => Err(anyhow!("Unsupported converter config format '{}'", other)),
        }
        .with_context(|| format!("Failed to load converter config: {:?}", path))?;

        debug!("Loaded converter config from {:?}", path);
        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Invalid YAML converter config")
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Invalid JSON converter config")
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid TOML converter config")
    }

    /// Build the registry this configuration describes
    pub fn build_registry(&self) -> TypeRegistry {
        let registry = if self.replace_default_aliases {
            TypeRegistry::new()
        } else {
            TypeRegistry::with_defaults()
        };
        registry.set_case_insensitive(self.case_insensitive);
        registry.reserve(self.aliases.values().map(Vec::len).sum());
        for (logical_type, names) in &self.aliases {
            registry.add_alias(*logical_type, names.as_slice());
        }
        registry
    }

    /// Build a converter with its own registry; the process-wide default
    /// registry is not touched.
    pub fn build(&self) -> Converter {
        Converter::new()
            .with_registry(Arc::new(self.build_registry()))
            .with_parse_config(self.parse.clone())
    }
}
