use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Args;
use tracing::{debug, info};
use typegen_core::{RenderOptions, generate_from_json};
use typegen_ir::Dialect;

use crate::config::Config;

/// Arguments of `typegen generate`.
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Introspected database metadata (JSON)
    #[arg(long, short = 'i', value_name = "FILE")]
    pub input: PathBuf,
    /// Database dialect: bigquery or clickhouse
    #[arg(long, short = 'd')]
    pub dialect: Option<Dialect>,
    /// Output file; stdout when neither this nor `out_file` is set
    #[arg(long, short = 'o', value_name = "FILE")]
    pub out: Option<PathBuf>,
    /// Config file [default: ./typegen.toml if present]
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Emit `import type { ... }` for imports
    #[arg(long)]
    pub type_only_imports: bool,
}

/// Flags merged over the config file
#[derive(Debug, Clone, PartialEq, Eq)]
struct Settings {
    dialect: Dialect,
    options: RenderOptions,
    out_file: Option<PathBuf>,
}

impl Settings {
    fn resolve(args: &GenerateArgs, config: Config) -> Result<Self, String> {
        let dialect = args.dialect.or(config.dialect).ok_or_else(|| {
            "No dialect given. Pass --dialect or set `dialect` in typegen.toml".to_string()
        })?;
        let type_only_imports = args.type_only_imports || config.type_only_imports.unwrap_or(false);

        Ok(Self {
            dialect,
            options: RenderOptions { type_only_imports },
            out_file: args.out.clone().or(config.out_file),
        })
    }
}

/// Run `typegen generate`, returning the process exit code.
pub fn run(args: GenerateArgs) -> i32 {
    match run_inner(&args) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{err}");
            1
        }
    }
}

fn run_inner(args: &GenerateArgs) -> Result<(), String> {
    let cwd = std::env::current_dir()
        .map_err(|err| format!("Failed to determine working directory: {err}"))?;
    let config = Config::load(args.config.as_deref(), &cwd)?;
    let settings = Settings::resolve(args, config)?;
    debug!(?settings, "resolved settings");

    let json = fs::read_to_string(&args.input)
        .map_err(|err| format!("Failed to read {}: {err}", args.input.display()))?;
    let output = generate_from_json(&json, settings.dialect, &settings.options)
        .map_err(|err| format!("Failed to generate types: {err}"))?;

    match &settings.out_file {
        Some(path) => {
            write_output(path, &output)?;
            info!(path = %path.display(), dialect = %settings.dialect, "wrote generated types");
            println!("Generated {}", path.display());
        }
        None => std::io::stdout()
            .write_all(output.as_bytes())
            .map_err(|err| format!("Failed to write to stdout: {err}"))?,
    }
    Ok(())
}

fn write_output(path: &Path, output: &str) -> Result<(), String> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|err| format!("Failed to create {}: {err}", parent.display()))?;
    }
    fs::write(path, output).map_err(|err| format!("Failed to write {}: {err}", path.display()))
}
