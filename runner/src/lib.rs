//! Command registration and dispatch on top of `command-input-core`.
//!
//! - [`Command`] — a runnable command that declares its own input.
//! - [`CommandRegistry`] — name-to-command lookup.
//! - [`CommandRunner`] — resolves, validates and executes one command line,
//!   turning user input errors into messages and a failing exit code.
//! - [`Output`] — the line sink commands and the runner write to, with
//!   [`StdOutput`] and [`BufferedOutput`] implementations.
//! - [`DefinitionCatalog`] — command definitions loaded from YAML or JSON.
//!
//! # Quick start
//!
//! ```
//! use command_input_core::InputData;
//! use command_input_runner::*;
//!
//! struct Version;
//!
//! impl Command for Version {
//!     fn execute(&self, _: &InputData<'_>, output: &mut dyn Output) -> Result<i32, CommandError> {
//!         output.write_out("1.0.0")?;
//!         Ok(0)
//!     }
//! }
//!
//! let mut registry = CommandRegistry::new();
//! registry.register("version", Version).unwrap();
//! let runner = CommandRunner::new(registry);
//!
//! let mut output = BufferedOutput::default();
//! assert_eq!(runner.run(&["version"], &mut output).unwrap(), 0);
//! assert_eq!(output.out_lines(), ["1.0.0"]);
//!
//! let mut output = BufferedOutput::default();
//! assert_eq!(runner.run(&["version", "extra"], &mut output).unwrap(), FAILURE_EXIT_CODE);
//! assert_eq!(output.err_lines(), ["Too many arguments given"]);
//! ```

mod catalog;
mod error;
mod output;
mod registry;
mod runner;

pub use catalog::DefinitionCatalog;
pub use error::{CatalogError, CommandError, RegistryError, RunnerError};
pub use output::{BufferedOutput, Output, StdOutput};
pub use registry::{Command, CommandRegistry};
pub use runner::{CommandRunner, FAILURE_EXIT_CODE};
