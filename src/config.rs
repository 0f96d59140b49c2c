//! Pagination defaults configuration
//!
//! Defaults are usually set per endpoint and loaded from YAML (JSON works
//! too, being a subset of YAML):
//!
//! ```yaml
//! count: 20
//! order: updated_at
//! direction: desc
//! prefetch: true
//! ```

use crate::cursor::Defaults;
use crate::error::{Error, Result};
use crate::types::Direction;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// Defaults Config
// ============================================================================

/// Serialized form of [`Defaults`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    /// Default ordering token
    #[serde(default)]
    pub value: Option<String>,

    /// Default tie-break offset
    #[serde(default)]
    pub offset: Option<usize>,

    /// Default page size
    #[serde(default)]
    pub count: Option<usize>,

    /// Default ordering key
    #[serde(default)]
    pub order: Option<String>,

    /// Default direction (`asc`, `desc`, `1` or `-1`)
    #[serde(default)]
    pub direction: Option<DirectionDef>,

    /// Fetch one lookahead record past the page size
    #[serde(default = "default_prefetch")]
    pub prefetch: bool,
}

fn default_prefetch() -> bool {
    true
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            value: None,
            offset: None,
            count: None,
            order: None,
            direction: None,
            prefetch: default_prefetch(),
        }
    }
}

/// Direction as written in a config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DirectionDef {
    /// `1` or `-1`
    Number(i64),
    /// `asc` or `desc`, any case
    Name(String),
}

impl DirectionDef {
    /// Resolve to a [`Direction`]
    pub fn resolve(&self) -> Result<Direction> {
        let direction = match self {
            Self::Number(n) => Direction::from_i64(*n),
            Self::Name(name) => match name.to_lowercase().as_str() {
                "asc" => Some(Direction::Asc),
                "desc" => Some(Direction::Desc),
                _ => None,
            },
        };
        direction.ok_or_else(|| {
            let raw = match self {
                Self::Number(n) => n.to_string(),
                Self::Name(name) => name.clone(),
            };
            Error::invalid_value("direction", format!("'{raw}' is not one of asc, desc, 1, -1"))
        })
    }
}

impl DefaultsConfig {
    /// Validate and convert into [`Defaults`]
    pub fn into_defaults(self) -> Result<Defaults> {
        if self.count == Some(0) {
            return Err(Error::invalid_value("count", "must be greater than 0"));
        }
        let direction = self.direction.as_ref().map(DirectionDef::resolve).transpose()?;

        Ok(Defaults {
            value: self.value,
            offset: self.offset,
            count: self.count,
            order: self.order,
            direction,
            prefetch: self.prefetch,
        })
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Load defaults from a YAML or JSON file
pub fn load_defaults(path: impl AsRef<Path>) -> Result<Defaults> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::Io(e)
        }
    })?;
    load_defaults_from_str(&content)
}

/// Load defaults from a YAML string
///
/// An empty document yields the built-in defaults.
pub fn load_defaults_from_str(yaml: &str) -> Result<Defaults> {
    if yaml.trim().is_empty() {
        return DefaultsConfig::default().into_defaults();
    }
    let config: DefaultsConfig = serde_yaml::from_str(yaml)?;
    config.into_defaults()
}
