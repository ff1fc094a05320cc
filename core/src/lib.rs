//! Command input definitions, tokenization and validation.
//!
//! This crate turns raw command-line tokens into strongly typed values:
//!
//! - [`ValueType`] — the value kinds an entry may hold (`Int`, `String`).
//! - [`ArgumentDefinition`] / [`OptionDefinition`] — declared input slots.
//! - [`CommandInputDefinition`] — the schema a command declares, built with a
//!   [`DefinitionBuilder`] and immutable afterwards.
//! - [`InputData`] — the validated result of one invocation, holding
//!   [`EntryData`] values and the set flags.
//! - [`split_command_line`] — splits a raw line into tokens with backslash
//!   escaping of whitespace.
//!
//! User-facing failures are [`InputError`]s with ready-to-print messages;
//! mistakes in a command's own declarations or accessor calls surface as
//! [`DefinitionError`] and [`UsageError`].
//!
//! # Example
//!
//! ```
//! use command_input_core::*;
//!
//! let definition = CommandInputDefinition::builder()
//!     .argument("intArg", ValueType::Int)
//!     .option("opt1", ValueType::String)
//!     .flag("f1")
//!     .build()
//!     .unwrap();
//!
//! let tokens = split_command_line("cmd 123 --opt1=hello --f1");
//! let input = InputData::parse(&definition, &tokens).unwrap();
//! assert_eq!(input.int_argument("intArg").unwrap(), 123);
//! assert_eq!(input.string_option("opt1").unwrap(), Some("hello"));
//! assert!(input.is_flag_set("f1"));
//!
//! let err = InputData::parse(&definition, &["cmd"]).unwrap_err();
//! assert_eq!(err.to_string(), "Too few arguments given");
//! ```

mod definition;
mod entry;
mod error;
mod input;
mod split;
mod types;

pub use definition::{CommandInputDefinition, DefinitionBuilder};
pub use entry::{EntryData, EntryValue};
pub use error::{DefinitionError, InputError, TypeMismatchError, UsageError};
pub use input::InputData;
pub use split::split_command_line;
pub use types::*;
