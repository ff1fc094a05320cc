//! Entry type definitions for command input modeling.
//!
//! This module defines the declared side of a command's input: the value
//! kinds an entry may hold and the argument/option slots a command exposes.
//! The types serialize with [`serde`] so definitions can be kept in YAML or
//! JSON catalogs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Value kind of an argument or option.
///
/// Each variant has a canonical display name used in user-facing error
/// messages.
///
/// # Examples
///
/// ```
/// use command_input_core::ValueType;
///
/// assert_eq!(ValueType::Int.name(), "Int");
/// assert_eq!(ValueType::String.to_string(), "String");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// Base-10 signed 32-bit integer.
    Int,
    /// Any string, including empty strings and embedded whitespace.
    String,
}

impl ValueType {
    /// Returns the canonical display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Int => "Int",
            Self::String => "String",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Name and value type shared by every declared entry.
///
/// Arguments and options both wrap one of these; validated values keep a
/// reference to it so error messages and typed accessors can name the entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDefinition {
    /// Entry name (argument name or `--name=value` option key)
    pub name: String,
    /// Declared value type
    #[serde(rename = "type")]
    pub value_type: ValueType,
}

impl EntryDefinition {
    /// Creates an entry definition.
    pub fn new(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            value_type,
        }
    }
}

/// A required positional argument.
///
/// The index is the 0-based position among the command's arguments and is
/// assigned by [`DefinitionBuilder`](crate::DefinitionBuilder) in
/// declaration order.
///
/// # Examples
///
/// ```
/// use command_input_core::{CommandInputDefinition, ValueType};
///
/// let definition = CommandInputDefinition::builder()
///     .argument("source", ValueType::String)
///     .argument("count", ValueType::Int)
///     .build()
///     .unwrap();
///
/// let count = definition.argument_definition(1).unwrap();
/// assert_eq!(count.name(), "count");
/// assert_eq!(count.index(), 1);
/// assert_eq!(count.value_type(), ValueType::Int);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentDefinition {
    entry: EntryDefinition,
    index: usize,
}

impl ArgumentDefinition {
    pub(crate) fn new(entry: EntryDefinition, index: usize) -> Self {
        Self { entry, index }
    }

    /// Returns the argument name.
    pub fn name(&self) -> &str {
        &self.entry.name
    }

    /// Returns the 0-based position among the command's arguments.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the declared value type.
    pub fn value_type(&self) -> ValueType {
        self.entry.value_type
    }

    /// Returns the shared name/type pair.
    pub fn entry(&self) -> &EntryDefinition {
        &self.entry
    }
}

/// An optional named `--name=value` input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDefinition {
    entry: EntryDefinition,
}

impl OptionDefinition {
    pub(crate) fn new(entry: EntryDefinition) -> Self {
        Self { entry }
    }

    /// Returns the option key.
    pub fn name(&self) -> &str {
        &self.entry.name
    }

    /// Returns the declared value type.
    pub fn value_type(&self) -> ValueType {
        self.entry.value_type
    }

    /// Returns the shared name/type pair.
    pub fn entry(&self) -> &EntryDefinition {
        &self.entry
    }
}
