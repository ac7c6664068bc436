//! Command line front end for the type generator.

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;
use typegen_ir::Dialect;

/// `typegen.toml` loading.
pub mod config;
mod generate;

pub use generate::GenerateArgs;

#[derive(Parser)]
#[command(
    name = "typegen",
    version,
    about = "Generate TypeScript types and zod validators from database metadata"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a types module from introspected metadata
    Generate(GenerateArgs),
    /// List supported dialects
    Dialects,
}

/// Parse `args` (including the program name) and run the command.
pub fn run_cli(args: Vec<String>) -> i32 {
    match Cli::try_parse_from(args) {
        Ok(cli) => match cli.command {
            Some(Commands::Generate(args)) => generate::run(args),
            Some(Commands::Dialects) => {
                for dialect in Dialect::ALL {
                    println!("{dialect}");
                }
                0
            }
            None => {
                let mut cmd = Cli::command();
                let _ = cmd.print_help();
                println!();
                0
            }
        },
        Err(e) => {
            let code = e.exit_code();
            let _ = e.print();
            code
        }
    }
}

/// Install the stderr fmt subscriber, filtered by `TYPEGEN_LOG`.
pub fn init_tracing() {
    // TYPEGEN_LOG controls log level: "trace", "debug", "info", "warn", "error"
    // or a full tracing filter spec like "typegen_core=trace"
    let filter = match std::env::var("TYPEGEN_LOG") {
        Ok(level) if is_plain_level(&level) => scoped_filter(&level),
        Ok(spec) => spec,
        Err(_) => scoped_filter("info"),
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_filter(EnvFilter::new(filter));

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

fn scoped_filter(level: &str) -> String {
    let crate_root = module_path!();
    format!("{crate_root}={level},typegen_core={level}")
}

fn is_plain_level(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_plain_level() {
        assert!(is_plain_level("debug"));
        assert!(is_plain_level("WARN"));
        assert!(!is_plain_level("typegen_core=trace"));
    }

    #[test]
    fn test_scoped_filter() {
        assert_eq!(
            scoped_filter("debug"),
            "typegen_cli=debug,typegen_core=debug"
        );
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }
}
