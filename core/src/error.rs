//! Error types for command input definition and parsing.
//!
//! Two audiences are kept apart:
//!
//! - [`InputError`] is user-facing. It describes a malformed or mismatched
//!   command line and its `Display` output is meant to be printed verbatim.
//! - [`DefinitionError`], [`TypeMismatchError`] and [`UsageError`] are
//!   programmer-facing. They point at a bug in how a command declares or reads
//!   its input and should not be turned into user-facing text.

use thiserror::Error;

use crate::ValueType;

/// Invalid command-line input.
///
/// Every variant carries a complete, ready-to-display message. Parsing stops
/// at the first violated rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The token sequence is empty.
    #[error("Command name not given")]
    MissingCommandName,
    /// Fewer argument tokens than declared arguments.
    #[error("Too few arguments given")]
    TooFewArguments,
    /// More argument tokens than declared arguments.
    #[error("Too many arguments given")]
    TooManyArguments,
    /// An argument index outside `[0, argument_count)` was requested.
    #[error("Argument at index {0} does not exist")]
    ArgumentIndexOutOfRange(usize),
    /// `--key=value` with a key the definition does not declare.
    #[error("Option '{0}' is not defined")]
    UndefinedOption(String),
    /// `--name` with a name the definition does not declare.
    #[error("Flag '{0}' is not defined")]
    UndefinedFlag(String),
    /// An argument-shaped token after options or flags began.
    #[error("Argument '{0}' is not given at the beginning of the input")]
    MisplacedArgument(String),
    /// A raw value that does not satisfy the entry's declared type.
    #[error("Entry '{name}' with value '{value}' does not match expected type '{expected}'")]
    TypeMismatch {
        /// Entry name
        name: String,
        /// Raw value as given
        value: String,
        /// Declared type
        expected: ValueType,
    },
    /// The same option key given twice on one command line.
    #[error("Option '{0}' is given more than once")]
    DuplicateOption(String),
    /// A token that is neither an argument, an option nor a flag (`-`, `--`, `--=x`, ...).
    #[error("Entry '{0}' is not a valid argument, option or flag")]
    MalformedEntry(String),
}

/// Invalid input definition.
///
/// Raised while a command declares its input; indicates a bug in the
/// command, not in user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    /// An entry was declared with an empty or whitespace-only name.
    #[error("entry name cannot be empty")]
    EmptyName,
    /// Two arguments share a name.
    #[error("duplicate argument: {0}")]
    DuplicateArgument(String),
    /// Two options share a key.
    #[error("duplicate option: {0}")]
    DuplicateOption(String),
    /// Two flags share a name.
    #[error("duplicate flag: {0}")]
    DuplicateFlag(String),
    /// An option or flag name that no `--name` token could ever match.
    #[error("invalid option or flag name '{0}': must not contain '='")]
    InvalidName(String),
}

/// A value requested as a different type than the entry declares.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Entry '{name}' is of type '{declared}', not '{requested}'")]
pub struct TypeMismatchError {
    /// Entry name
    pub name: String,
    /// Type the entry was declared with
    pub declared: ValueType,
    /// Type the caller asked for
    pub requested: ValueType,
}

/// Misuse of a parsed [`InputData`](crate::InputData) by command code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    /// Lookup of an argument the definition does not declare.
    #[error("argument '{0}' is not declared")]
    UndeclaredArgument(String),
    /// Lookup of an option the definition does not declare.
    #[error("option '{0}' is not declared")]
    UndeclaredOption(String),
    /// Typed extraction with the wrong type.
    #[error(transparent)]
    TypeMismatch(#[from] TypeMismatchError),
}
