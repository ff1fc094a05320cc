//! Tokenization and validation of one command invocation.
//!
//! [`InputData::parse`] walks the raw tokens once, left to right, and
//! validates each entry as it is classified. The first violated rule aborts
//! the parse; no partially built [`InputData`] is ever observable.
//!
//! Token grammar:
//!
//! ```text
//! <command-name> <arg>... [--<option>=<value> | --<flag>]...
//! ```

use std::collections::{BTreeMap, BTreeSet};

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{InputError, UsageError};
use crate::{CommandInputDefinition, EntryData};

/// Shape of a single raw token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'t> {
    Argument(&'t str),
    Option { key: &'t str, value: &'t str },
    Flag(&'t str),
    Malformed(&'t str),
}

fn classify(token: &str) -> Token<'_> {
    match token.strip_prefix("--") {
        Some(rest) => match rest.find('=') {
            Some(0) => Token::Malformed(token),
            Some(eq) => Token::Option {
                key: &rest[..eq],
                value: &rest[eq + 1..],
            },
            None if rest.is_empty() => Token::Malformed(token),
            None => Token::Flag(rest),
        },
        None if token.is_empty() || token == "-" => Token::Malformed(token),
        None => Token::Argument(token),
    }
}

fn is_argument<S: AsRef<str>>(token: &S) -> bool {
    matches!(classify(token.as_ref()), Token::Argument(_))
}

/// The validated input of one command invocation.
///
/// Holds the command name, one value per declared argument, the supplied
/// options and the set flags. Every key refers to an entry declared in the
/// originating [`CommandInputDefinition`].
///
/// # Examples
///
/// ```
/// use command_input_core::{CommandInputDefinition, InputData, ValueType};
///
/// let definition = CommandInputDefinition::builder()
///     .argument("count", ValueType::Int)
///     .option("name", ValueType::String)
///     .flag("force")
///     .build()
///     .unwrap();
///
/// let input = InputData::parse(&definition, &["cmd", "3", "--name=x y", "--force"]).unwrap();
/// assert_eq!(input.command_name(), "cmd");
/// assert_eq!(input.int_argument("count").unwrap(), 3);
/// assert_eq!(input.string_option("name").unwrap(), Some("x y"));
/// assert!(input.is_flag_set("force"));
///
/// let err = InputData::parse(&definition, &["cmd", "3", "--force", "4"]).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "Argument '4' is not given at the beginning of the input"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputData<'d> {
    definition: &'d CommandInputDefinition,
    command_name: String,
    arguments: Vec<EntryData<'d>>,
    options: BTreeMap<&'d str, EntryData<'d>>,
    flags: BTreeSet<&'d str>,
}

impl<'d> InputData<'d> {
    /// Tokenizes and validates `tokens` against `definition`.
    ///
    /// `tokens[0]` is the command name. Exactly
    /// [`argument_count`](CommandInputDefinition::argument_count) positional
    /// arguments must follow it, then any number of options and flags in any
    /// order.
    ///
    /// # Errors
    ///
    /// Returns the [`InputError`] for the first token that violates the
    /// definition or the token grammar.
    pub fn parse<S: AsRef<str>>(
        definition: &'d CommandInputDefinition,
        tokens: &[S],
    ) -> Result<Self, InputError> {
        let result = Self::tokenize(definition, tokens);
        match &result {
            Ok(input) => debug!(
                command = %input.command_name,
                arguments = input.arguments.len(),
                options = input.options.len(),
                flags = input.flags.len(),
                "Parsed command input"
            ),
            Err(err) => debug!(error = %err, "Rejected command input"),
        }
        result
    }

    fn tokenize<S: AsRef<str>>(
        definition: &'d CommandInputDefinition,
        tokens: &[S],
    ) -> Result<Self, InputError> {
        let (command_name, rest) = tokens.split_first().ok_or(InputError::MissingCommandName)?;

        // Counts are settled on token shapes alone, before any value is converted.
        let argument_count = definition.argument_count();
        let (raw_arguments, rest) = rest.split_at(rest.len().min(argument_count));
        if raw_arguments.len() < argument_count || !raw_arguments.iter().all(is_argument) {
            return Err(InputError::TooFewArguments);
        }
        if rest.first().is_some_and(is_argument) {
            return Err(InputError::TooManyArguments);
        }

        let mut arguments = Vec::with_capacity(argument_count);
        for (argument, raw) in definition.arguments().iter().zip(raw_arguments) {
            let raw = raw.as_ref();
            trace!(index = argument.index(), raw, "Argument token");
            arguments.push(EntryData::parse(argument.entry(), raw)?);
        }

        let mut options = BTreeMap::new();
        let mut flags = BTreeSet::new();
        for token in rest {
            let shape = classify(token.as_ref());
            trace!(?shape, "Option/flag token");
            match shape {
                Token::Option { key, value } => {
                    let option = definition
                        .option_definition(key)
                        .ok_or_else(|| InputError::UndefinedOption(key.to_string()))?;
                    if options.contains_key(key) {
                        return Err(InputError::DuplicateOption(key.to_string()));
                    }
                    options.insert(option.name(), EntryData::parse(option.entry(), value)?);
                }
                Token::Flag(name) => {
                    let flag = definition
                        .flag_name(name)
                        .ok_or_else(|| InputError::UndefinedFlag(name.to_string()))?;
                    flags.insert(flag);
                }
                Token::Argument(raw) => {
                    return Err(InputError::MisplacedArgument(raw.to_string()));
                }
                Token::Malformed(raw) => return Err(InputError::MalformedEntry(raw.to_string())),
            }
        }

        Ok(Self {
            definition,
            command_name: command_name.as_ref().to_string(),
            arguments,
            options,
            flags,
        })
    }

    /// Returns the command name (the first token, verbatim).
    pub fn command_name(&self) -> &str {
        &self.command_name
    }

    /// Returns the definition this input was validated against.
    pub fn definition(&self) -> &'d CommandInputDefinition {
        self.definition
    }

    /// Returns the value of a declared argument.
    ///
    /// Arguments are always present after a successful parse.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::UndeclaredArgument`] if `name` is not declared.
    pub fn argument(&self, name: &str) -> Result<&EntryData<'d>, UsageError> {
        self.definition
            .argument_definition_by_name(name)
            .and_then(|argument| self.arguments.get(argument.index()))
            .ok_or_else(|| UsageError::UndeclaredArgument(name.to_string()))
    }

    /// Returns the argument value at a 0-based position.
    pub fn argument_at(&self, index: usize) -> Option<&EntryData<'d>> {
        self.arguments.get(index)
    }

    /// Returns the argument values in index order.
    pub fn arguments(&self) -> impl Iterator<Item = &EntryData<'d>> {
        self.arguments.iter()
    }

    /// Returns the value of a declared option, or `None` if it was not given.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::UndeclaredOption`] if `name` is not declared.
    pub fn option(&self, name: &str) -> Result<Option<&EntryData<'d>>, UsageError> {
        if self.definition.option_definition(name).is_none() {
            return Err(UsageError::UndeclaredOption(name.to_string()));
        }
        Ok(self.options.get(name))
    }

    /// Returns the supplied option values ordered by key.
    pub fn options(&self) -> impl Iterator<Item = &EntryData<'d>> {
        self.options.values()
    }

    /// Returns `true` if the option was given on the command line.
    pub fn is_option_provided(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    /// Returns `true` if the flag was given on the command line.
    pub fn is_flag_set(&self, name: &str) -> bool {
        self.flags.contains(name)
    }

    /// Returns the set flags in name order.
    pub fn flags(&self) -> impl Iterator<Item = &'d str> + '_ {
        self.flags.iter().copied()
    }

    /// Returns an `Int` argument.
    pub fn int_argument(&self, name: &str) -> Result<i32, UsageError> {
        Ok(self.argument(name)?.as_int()?)
    }

    /// Returns a `String` argument.
    pub fn string_argument(&self, name: &str) -> Result<&str, UsageError> {
        Ok(self.argument(name)?.as_str()?)
    }

    /// Returns an `Int` option if it was given.
    pub fn int_option(&self, name: &str) -> Result<Option<i32>, UsageError> {
        match self.option(name)? {
            Some(entry) => Ok(Some(entry.as_int()?)),
            None => Ok(None),
        }
    }

    /// Returns a `String` option if it was given.
    pub fn string_option(&self, name: &str) -> Result<Option<&str>, UsageError> {
        match self.option(name)? {
            Some(entry) => Ok(Some(entry.as_str()?)),
            None => Ok(None),
        }
    }
}

struct ArgumentMap<'a, 'd>(&'a [EntryData<'d>]);

impl Serialize for ArgumentMap<'_, '_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|entry| (entry.name(), entry)))
    }
}

impl Serialize for InputData<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("InputData", 4)?;
        state.serialize_field("command", &self.command_name)?;
        state.serialize_field("arguments", &ArgumentMap(&self.arguments))?;
        state.serialize_field("options", &self.options)?;
        state.serialize_field("flags", &self.flags)?;
        state.end()
    }
}
