//! The top-level run loop.
//!
//! [`CommandRunner::run`] resolves the command named by the first token,
//! validates the rest against the command's definition and executes it.
//! Input problems end with a message on the error stream and
//! [`FAILURE_EXIT_CODE`]; defects in the command itself propagate as
//! [`RunnerError`].

use command_input_core::{InputData, InputError, split_command_line};
use tracing::{debug, warn};

use crate::error::RunnerError;
use crate::output::Output;
use crate::registry::CommandRegistry;

/// Exit code returned when the command line is rejected.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Dispatches command lines to registered commands.
///
/// # Examples
///
/// ```
/// use command_input_core::{CommandInputDefinition, DefinitionError, InputData, ValueType};
/// use command_input_runner::*;
///
/// struct Double;
///
/// impl Command for Double {
///     fn input_definition(&self) -> Result<CommandInputDefinition, DefinitionError> {
///         CommandInputDefinition::builder().argument("n", ValueType::Int).build()
///     }
///
///     fn execute(&self, input: &InputData<'_>, output: &mut dyn Output) -> Result<i32, CommandError> {
///         output.write_out(&(input.int_argument("n")? * 2).to_string())?;
///         Ok(0)
///     }
/// }
///
/// let mut registry = CommandRegistry::new();
/// registry.register("double", Double).unwrap();
/// let runner = CommandRunner::new(registry);
///
/// let mut output = BufferedOutput::default();
/// assert_eq!(runner.run_line("double 21", &mut output).unwrap(), 0);
/// assert_eq!(output.out_lines(), ["42"]);
///
/// let mut output = BufferedOutput::default();
/// assert_eq!(runner.run_line("double x", &mut output).unwrap(), FAILURE_EXIT_CODE);
/// assert_eq!(
///     output.err_lines(),
///     ["Entry 'n' with value 'x' does not match expected type 'Int'"]
/// );
/// ```
#[derive(Debug, Default)]
pub struct CommandRunner {
    registry: CommandRegistry,
}

impl CommandRunner {
    /// Creates a runner over `registry`.
    pub fn new(registry: CommandRegistry) -> Self {
        Self { registry }
    }

    /// Returns the registry commands are resolved from.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Runs one already split command line.
    ///
    /// Returns the command's exit code, or [`FAILURE_EXIT_CODE`] after
    /// writing the reason to `output`'s error stream when the command is
    /// unknown or the input is invalid.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] when the command's definition is invalid or
    /// the command itself fails. A generic failure line naming the command is
    /// written to the error stream first.
    pub fn run<S: AsRef<str>>(
        &self,
        tokens: &[S],
        output: &mut dyn Output,
    ) -> Result<i32, RunnerError> {
        let Some(name) = tokens
            .first()
            .map(|token| token.as_ref())
            .filter(|name| !name.is_empty())
        else {
            report(output, &InputError::MissingCommandName.to_string());
            return Ok(FAILURE_EXIT_CODE);
        };

        let Some(command) = self.registry.get(name) else {
            debug!(command = name, "Unknown command");
            report(output, &format!("Command '{name}' not found"));
            return Ok(FAILURE_EXIT_CODE);
        };

        let definition = match command.input_definition() {
            Ok(definition) => definition,
            Err(source) => {
                report(output, &failure_message(name));
                return Err(RunnerError::Definition {
                    command: name.to_string(),
                    source,
                });
            }
        };

        let input = match InputData::parse(&definition, tokens) {
            Ok(input) => input,
            Err(err) => {
                report(output, &err.to_string());
                return Ok(FAILURE_EXIT_CODE);
            }
        };

        debug!(command = name, "Executing command");
        match command.execute(&input, output) {
            Ok(code) => {
                debug!(command = name, code, "Command finished");
                Ok(code)
            }
            Err(source) => {
                report(output, &failure_message(name));
                Err(RunnerError::Command {
                    command: name.to_string(),
                    source,
                })
            }
        }
    }

    /// Splits `line` with [`split_command_line`] and runs the result.
    ///
    /// # Errors
    ///
    /// Same as [`run`](Self::run).
    pub fn run_line(&self, line: &str, output: &mut dyn Output) -> Result<i32, RunnerError> {
        let tokens = split_command_line(line);
        self.run(&tokens, output)
    }
}

fn failure_message(command: &str) -> String {
    format!("Command '{command}' returned a non-zero exit code")
}

fn report(output: &mut dyn Output, message: &str) {
    if let Err(err) = output.write_err(message) {
        warn!(error = %err, message, "Failed to write to error stream");
    }
}
