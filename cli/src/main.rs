use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use command_input_core::{CommandInputDefinition, DefinitionError, InputData, split_command_line};
use command_input_runner::{
    Command as InputCommand, CommandError, CommandRegistry, CommandRunner, DefinitionCatalog,
    Output, StdOutput,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "cmdin")]
#[command(about = "Check command input definitions and validate command lines against them")]
struct Cli {
    /// Log debug output to stderr (overrides RUST_LOG).
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate a command line against a catalog and print the parsed input as JSON.
    Parse(ParseArgs),
    /// Validate a definition catalog file.
    Check(CheckArgs),
    /// Split a raw command line into tokens and print them as JSON.
    Split(SplitArgs),
}

#[derive(Debug, Args)]
struct ParseArgs {
    /// Definition catalog (YAML, or JSON with a .json extension).
    #[arg(long)]
    catalog: PathBuf,
    /// Raw command line, split with backslash-escaped whitespace.
    #[arg(long, conflicts_with = "tokens")]
    line: Option<String>,
    /// Pre-split tokens after `--`; the first one is the command name.
    #[arg(last = true)]
    tokens: Vec<String>,
}

#[derive(Debug, Args)]
struct CheckArgs {
    /// Definition catalog to validate.
    catalog: PathBuf,
}

#[derive(Debug, Args)]
struct SplitArgs {
    /// Raw command line.
    line: String,
}

/// Prints the validated input of whatever command it is registered as.
struct EchoCommand {
    definition: CommandInputDefinition,
}

impl InputCommand for EchoCommand {
    fn input_definition(&self) -> Result<CommandInputDefinition, DefinitionError> {
        Ok(self.definition.clone())
    }

    fn execute(&self, input: &InputData<'_>, output: &mut dyn Output) -> Result<i32, CommandError> {
        let json = serde_json::to_string_pretty(input)
            .map_err(|err| CommandError::Failed(format!("Failed to serialize input: {err}")))?;
        output.write_out(&json)?;
        Ok(0)
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Parse(args) => run_parse(args),
        Command::Check(args) => run_check(args),
        Command::Split(args) => run_split(args),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_catalog(path: &Path) -> Result<DefinitionCatalog, String> {
    DefinitionCatalog::load(path)
        .map_err(|err| format!("Failed to load catalog '{}': {err}", path.display()))
}

fn run_parse(args: ParseArgs) -> Result<i32, String> {
    let catalog = load_catalog(&args.catalog)?;

    let mut registry = CommandRegistry::new();
    for (name, definition) in catalog.commands {
        registry
            .register_boxed(name, Box::new(EchoCommand { definition }))
            .map_err(|err| err.to_string())?;
    }
    let runner = CommandRunner::new(registry);

    let tokens = match args.line {
        Some(line) => split_command_line(&line),
        None => args.tokens,
    };
    debug!(?tokens, "Running command line");

    runner
        .run(&tokens, &mut StdOutput)
        .map_err(|err| err.to_string())
}

fn run_check(args: CheckArgs) -> Result<i32, String> {
    let catalog = load_catalog(&args.catalog)?;
    println!(
        "Validated {} command definition(s) in '{}'.",
        catalog.len(),
        args.catalog.display()
    );
    for (name, definition) in &catalog.commands {
        println!(
            "  {name}: {} argument(s), {} option(s), {} flag(s)",
            definition.argument_count(),
            definition.options().count(),
            definition.flags().count()
        );
    }
    Ok(0)
}

fn run_split(args: SplitArgs) -> Result<i32, String> {
    let tokens = split_command_line(&args.line);
    let raw = serde_json::to_string(&tokens)
        .map_err(|err| format!("Failed to serialize tokens: {err}"))?;
    println!("{raw}");
    Ok(0)
}
