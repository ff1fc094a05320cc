//! Definition catalogs loaded from YAML or JSON.
//!
//! A catalog maps command names to their input definitions so a host can
//! declare commands in a file instead of in code.
//!
//! # Example YAML
//!
//! ```yaml
//! commands:
//!   greet:
//!     arguments:
//!       - name: who
//!         type: string
//!     options:
//!       - name: times
//!         type: int
//!     flags:
//!       - loud
//!   version: {}
//! ```

use std::collections::BTreeMap;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use command_input_core::CommandInputDefinition;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{CatalogError, Result};

/// Command definitions keyed by command name.
///
/// # Examples
///
/// ```
/// use command_input_runner::DefinitionCatalog;
///
/// let catalog = DefinitionCatalog::from_yaml_str(
///     r#"
/// commands:
///   greet:
///     arguments:
///       - name: who
///         type: string
///     flags: [loud]
/// "#,
/// )
/// .unwrap();
///
/// let greet = catalog.get("greet").unwrap();
/// assert_eq!(greet.argument_count(), 1);
/// assert!(greet.is_flag_defined("loud"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionCatalog {
    /// Definitions by command name.
    #[serde(default)]
    pub commands: BTreeMap<String, CommandInputDefinition>,
}

impl DefinitionCatalog {
    /// Loads a catalog from a file.
    ///
    /// Files ending in `.json` are read as JSON, anything else as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](CatalogError::IoError) if the file cannot be read,
    /// [`JsonError`](CatalogError::JsonError) or
    /// [`YamlError`](CatalogError::YamlError) if parsing fails (including
    /// invalid definitions), or
    /// [`EmptyCommandName`](CatalogError::EmptyCommandName).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(std::fs::File::open(path)?);
        let catalog: Self = if is_json(path) {
            serde_json::from_reader(reader)?
        } else {
            serde_yaml::from_reader(reader)?
        };
        catalog.check()?;

        info!(path = %path.display(), commands = catalog.len(), "Loaded definition catalog");
        Ok(catalog)
    }

    /// Saves the catalog, as JSON for `.json` paths and YAML otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](CatalogError::IoError) if the file cannot be
    /// written, or a serialization error.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let writer = BufWriter::new(std::fs::File::create(path)?);
        if is_json(path) {
            serde_json::to_writer_pretty(writer, self)?;
        } else {
            serde_yaml::to_writer(writer, self)?;
        }
        Ok(())
    }

    /// Parses a catalog from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let catalog: Self = serde_yaml::from_str(yaml)?;
        catalog.check()?;
        Ok(catalog)
    }

    /// Parses a catalog from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.check()?;
        Ok(catalog)
    }

    /// Adds or replaces the definition for `command`.
    pub fn insert(&mut self, command: impl Into<String>, definition: CommandInputDefinition) {
        self.commands.insert(command.into(), definition);
    }

    /// Returns the definition for `command`.
    pub fn get(&self, command: &str) -> Option<&CommandInputDefinition> {
        self.commands.get(command)
    }

    /// Returns the command names in order.
    pub fn names(&self) -> Vec<&str> {
        self.commands.keys().map(String::as_str).collect()
    }

    /// Returns the number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if the catalog has no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    fn check(&self) -> Result<()> {
        if self.commands.keys().any(|name| name.trim().is_empty()) {
            return Err(CatalogError::EmptyCommandName);
        }
        Ok(())
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
