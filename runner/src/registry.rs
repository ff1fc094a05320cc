//! Commands and the registry that maps names to them.

use std::collections::BTreeMap;
use std::fmt;

use command_input_core::{CommandInputDefinition, DefinitionError, InputData};

use crate::error::{CommandError, RegistryError};
use crate::output::Output;

/// A runnable command.
///
/// The runner asks for the command's input definition, validates the raw
/// tokens against it and only then calls [`execute`](Self::execute).
///
/// # Examples
///
/// ```
/// use command_input_core::{CommandInputDefinition, DefinitionError, InputData, ValueType};
/// use command_input_runner::{Command, CommandError, Output};
///
/// struct Greet;
///
/// impl Command for Greet {
///     fn input_definition(&self) -> Result<CommandInputDefinition, DefinitionError> {
///         CommandInputDefinition::builder()
///             .argument("who", ValueType::String)
///             .flag("loud")
///             .build()
///     }
///
///     fn execute(&self, input: &InputData<'_>, output: &mut dyn Output) -> Result<i32, CommandError> {
///         let mut line = format!("hello {}", input.string_argument("who")?);
///         if input.is_flag_set("loud") {
///             line = line.to_uppercase();
///         }
///         output.write_out(&line)?;
///         Ok(0)
///     }
/// }
/// ```
pub trait Command: Send + Sync {
    /// Declares the arguments, options and flags this command accepts.
    ///
    /// Defaults to a definition that accepts nothing but the command name.
    fn input_definition(&self) -> Result<CommandInputDefinition, DefinitionError> {
        Ok(CommandInputDefinition::default())
    }

    /// Runs the command on validated input and returns its exit code.
    fn execute(&self, input: &InputData<'_>, output: &mut dyn Output) -> Result<i32, CommandError>;
}

/// Name-to-command lookup table.
///
/// # Examples
///
/// ```
/// use command_input_core::InputData;
/// use command_input_runner::{Command, CommandError, CommandRegistry, Output, RegistryError};
///
/// struct Noop;
///
/// impl Command for Noop {
///     fn execute(&self, _: &InputData<'_>, _: &mut dyn Output) -> Result<i32, CommandError> {
///         Ok(0)
///     }
/// }
///
/// let mut registry = CommandRegistry::new();
/// registry.register("noop", Noop).unwrap();
/// assert!(registry.get("noop").is_some());
/// assert_eq!(
///     registry.register("noop", Noop).unwrap_err(),
///     RegistryError::DuplicateCommand("noop".into())
/// );
/// ```
#[derive(Default)]
pub struct CommandRegistry {
    commands: BTreeMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `command` under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::EmptyName`] or
    /// [`RegistryError::DuplicateCommand`].
    pub fn register(
        &mut self,
        name: impl Into<String>,
        command: impl Command + 'static,
    ) -> Result<&mut Self, RegistryError> {
        self.register_boxed(name, Box::new(command))
    }

    /// Registers an already boxed command.
    pub fn register_boxed(
        &mut self,
        name: impl Into<String>,
        command: Box<dyn Command>,
    ) -> Result<&mut Self, RegistryError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if self.commands.contains_key(&name) {
            return Err(RegistryError::DuplicateCommand(name));
        }
        self.commands.insert(name, command);
        Ok(self)
    }

    /// Finds a command by name.
    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(Box::as_ref)
    }

    /// Returns `true` if a command is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Returns the registered command names in order.
    pub fn names(&self) -> Vec<&str> {
        self.commands.keys().map(String::as_str).collect()
    }

    /// Returns the number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if no commands are registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.names())
            .finish()
    }
}
