//! Command input definitions and their builder.
//!
//! A [`CommandInputDefinition`] is the schema a command declares: ordered
//! positional arguments, named options and boolean flags. It is produced by a
//! [`DefinitionBuilder`] and is immutable afterwards, so one definition can be
//! shared by any number of parses.
//!
//! # Example
//!
//! ```
//! use command_input_core::{CommandInputDefinition, DefinitionError, ValueType};
//!
//! let definition = CommandInputDefinition::builder()
//!     .argument("path", ValueType::String)
//!     .option("depth", ValueType::Int)
//!     .flag("verbose")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(definition.argument_count(), 1);
//! assert!(definition.option_definition("depth").is_some());
//! assert!(definition.is_flag_defined("verbose"));
//!
//! // Re-declaring a name is a configuration bug
//! let err = CommandInputDefinition::builder()
//!     .flag("verbose")
//!     .flag("verbose")
//!     .build()
//!     .unwrap_err();
//! assert_eq!(err, DefinitionError::DuplicateFlag("verbose".into()));
//! ```

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{DefinitionError, InputError};
use crate::{ArgumentDefinition, EntryDefinition, OptionDefinition, ValueType};

/// The declared input of a command.
///
/// Argument indices are dense and follow declaration order, so
/// [`argument_count`](Self::argument_count) is both the number of arguments
/// and the highest index plus one.
///
/// Serializes as a document with `arguments`, `options` and `flags` lists.
/// Deserialization runs through [`DefinitionBuilder`], so duplicate or
/// invalid names are rejected at load time.
///
/// # Examples
///
/// ```
/// use command_input_core::{CommandInputDefinition, ValueType};
///
/// let yaml_like = serde_json::json!({
///     "arguments": [{"name": "who", "type": "string"}],
///     "flags": ["loud"]
/// });
/// let definition: CommandInputDefinition = serde_json::from_value(yaml_like).unwrap();
/// assert_eq!(definition.argument_count(), 1);
/// assert!(definition.is_flag_defined("loud"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DefinitionDocument", into = "DefinitionDocument")]
pub struct CommandInputDefinition {
    arguments: Vec<ArgumentDefinition>,
    options: BTreeMap<String, OptionDefinition>,
    flags: BTreeSet<String>,
}

impl CommandInputDefinition {
    /// Starts building a definition.
    pub fn builder() -> DefinitionBuilder {
        DefinitionBuilder::default()
    }

    /// Returns the number of declared arguments.
    pub fn argument_count(&self) -> usize {
        self.arguments.len()
    }

    /// Returns the declared arguments in index order.
    pub fn arguments(&self) -> &[ArgumentDefinition] {
        &self.arguments
    }

    /// Returns the argument declared at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::ArgumentIndexOutOfRange`] when `index` is not in
    /// `[0, argument_count)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_input_core::{CommandInputDefinition, InputError, ValueType};
    ///
    /// let definition = CommandInputDefinition::builder()
    ///     .argument("a", ValueType::String)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(definition.argument_definition(0).unwrap().name(), "a");
    /// assert_eq!(
    ///     definition.argument_definition(1).unwrap_err().to_string(),
    ///     "Argument at index 1 does not exist"
    /// );
    /// ```
    pub fn argument_definition(&self, index: usize) -> Result<&ArgumentDefinition, InputError> {
        self.arguments
            .get(index)
            .ok_or(InputError::ArgumentIndexOutOfRange(index))
    }

    /// Finds an argument by name.
    pub fn argument_definition_by_name(&self, name: &str) -> Option<&ArgumentDefinition> {
        self.arguments.iter().find(|arg| arg.name() == name)
    }

    /// Finds an option by key.
    pub fn option_definition(&self, name: &str) -> Option<&OptionDefinition> {
        self.options.get(name)
    }

    /// Returns the declared options ordered by key.
    pub fn options(&self) -> impl Iterator<Item = &OptionDefinition> {
        self.options.values()
    }

    /// Returns `true` if `name` is a declared flag.
    pub fn is_flag_defined(&self, name: &str) -> bool {
        self.flags.contains(name)
    }

    /// Returns the declared flags in name order.
    pub fn flags(&self) -> impl Iterator<Item = &str> {
        self.flags.iter().map(String::as_str)
    }

    pub(crate) fn flag_name(&self, name: &str) -> Option<&str> {
        self.flags.get(name).map(String::as_str)
    }
}

/// Builder for [`CommandInputDefinition`].
///
/// Two styles are supported. The `add_*` methods fail immediately on an
/// invalid declaration. The chaining methods ([`argument`](Self::argument),
/// [`option`](Self::option), [`flag`](Self::flag)) keep the first error and
/// report it from [`build`](Self::build).
///
/// # Examples
///
/// ```
/// use command_input_core::{DefinitionBuilder, DefinitionError, ValueType};
///
/// let mut builder = DefinitionBuilder::default();
/// builder.add_argument("src", ValueType::String).unwrap();
/// builder.add_argument("dst", ValueType::String).unwrap();
/// assert_eq!(
///     builder.add_argument("src", ValueType::Int).unwrap_err(),
///     DefinitionError::DuplicateArgument("src".into())
/// );
///
/// let definition = builder.build().unwrap();
/// assert_eq!(definition.argument_definition(1).unwrap().name(), "dst");
/// ```
#[derive(Debug, Default)]
pub struct DefinitionBuilder {
    definition: CommandInputDefinition,
    error: Option<DefinitionError>,
}

impl DefinitionBuilder {
    /// Appends an argument at the next free index.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError::EmptyName`] or
    /// [`DefinitionError::DuplicateArgument`].
    pub fn add_argument(
        &mut self,
        name: impl Into<String>,
        value_type: ValueType,
    ) -> Result<&mut Self, DefinitionError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DefinitionError::EmptyName);
        }
        if self.definition.argument_definition_by_name(&name).is_some() {
            return Err(DefinitionError::DuplicateArgument(name));
        }

        let index = self.definition.arguments.len();
        self.definition.arguments.push(ArgumentDefinition::new(
            EntryDefinition::new(name, value_type),
            index,
        ));
        Ok(self)
    }

    /// Declares a `--name=value` option.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError::EmptyName`], [`DefinitionError::InvalidName`]
    /// or [`DefinitionError::DuplicateOption`].
    pub fn add_option(
        &mut self,
        name: impl Into<String>,
        value_type: ValueType,
    ) -> Result<&mut Self, DefinitionError> {
        let name = check_switch_name(name.into())?;
        if self.definition.options.contains_key(&name) {
            return Err(DefinitionError::DuplicateOption(name));
        }

        self.definition.options.insert(
            name.clone(),
            OptionDefinition::new(EntryDefinition::new(name, value_type)),
        );
        Ok(self)
    }

    /// Declares a `--name` flag.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError::EmptyName`], [`DefinitionError::InvalidName`]
    /// or [`DefinitionError::DuplicateFlag`].
    pub fn add_flag(&mut self, name: impl Into<String>) -> Result<&mut Self, DefinitionError> {
        let name = check_switch_name(name.into())?;
        if self.definition.flags.contains(&name) {
            return Err(DefinitionError::DuplicateFlag(name));
        }

        self.definition.flags.insert(name);
        Ok(self)
    }

    /// Chaining form of [`add_argument`](Self::add_argument).
    pub fn argument(mut self, name: impl Into<String>, value_type: ValueType) -> Self {
        if self.error.is_none() {
            if let Err(err) = self.add_argument(name, value_type) {
                self.error = Some(err);
            }
        }
        self
    }

    /// Chaining form of [`add_option`](Self::add_option).
    pub fn option(mut self, name: impl Into<String>, value_type: ValueType) -> Self {
        if self.error.is_none() {
            if let Err(err) = self.add_option(name, value_type) {
                self.error = Some(err);
            }
        }
        self
    }

    /// Chaining form of [`add_flag`](Self::add_flag).
    pub fn flag(mut self, name: impl Into<String>) -> Self {
        if self.error.is_none() {
            if let Err(err) = self.add_flag(name) {
                self.error = Some(err);
            }
        }
        self
    }

    /// Finishes the definition.
    ///
    /// # Errors
    ///
    /// Returns the first error recorded by a chaining method.
    pub fn build(self) -> Result<CommandInputDefinition, DefinitionError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.definition),
        }
    }
}

// Option keys end at the first '=' of a token, so a key containing one can
// never be matched.
fn check_switch_name(name: String) -> Result<String, DefinitionError> {
    if name.trim().is_empty() {
        return Err(DefinitionError::EmptyName);
    }
    if name.contains('=') {
        return Err(DefinitionError::InvalidName(name));
    }
    Ok(name)
}

#[derive(Serialize, Deserialize)]
struct DefinitionDocument {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    arguments: Vec<EntryDefinition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    options: Vec<EntryDefinition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    flags: Vec<String>,
}

impl TryFrom<DefinitionDocument> for CommandInputDefinition {
    type Error = DefinitionError;

    fn try_from(document: DefinitionDocument) -> Result<Self, Self::Error> {
        let mut builder = DefinitionBuilder::default();
        for arg in document.arguments {
            builder.add_argument(arg.name, arg.value_type)?;
        }
        for opt in document.options {
            builder.add_option(opt.name, opt.value_type)?;
        }
        for flag in document.flags {
            builder.add_flag(flag)?;
        }
        builder.build()
    }
}

impl From<CommandInputDefinition> for DefinitionDocument {
    fn from(definition: CommandInputDefinition) -> Self {
        Self {
            arguments: definition
                .arguments
                .into_iter()
                .map(|arg| arg.entry().clone())
                .collect(),
            options: definition
                .options
                .into_values()
                .map(|opt| opt.entry().clone())
                .collect(),
            flags: definition.flags.into_iter().collect(),
        }
    }
}
