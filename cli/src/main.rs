use std::ffi::OsString;
use std::io::{self, Write};

use clap::builder::PossibleValuesParser;
use clap::{ArgAction, Args, Parser, Subcommand};
use shellfront_runner::catalog::{TOOL_NAMES, bundled_tools, find_tool};
use shellfront_runner::{Dispatcher, FsReader, ToolDefinition, exit_codes};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod inspect;

use inspect::InspectEngine;

/// CLI-specific output format enum with clap argument parsing support.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutputFormat {
    Json,
    Yaml,
    Table,
}

#[derive(Debug, Parser)]
#[command(name = "shellfront")]
#[command(version, about = "Single-file beautifier, minifier and linter front ends")]
struct Cli {
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run a front end; every argument after the tool name is passed to it untouched.
    #[command(disable_help_flag = true)]
    Run(RunArgs),
    /// Print a tool's option schema, help text and report style.
    Schema(SchemaArgs),
    /// List the bundled tools.
    List,
}

#[derive(Debug, Args)]
struct RunArgs {
    /// Bundled tool to run.
    #[arg(value_parser = PossibleValuesParser::new(TOOL_NAMES.iter().copied()))]
    tool: String,
    /// Arguments for the tool, e.g. `--indent-size=2 style.css`.
    ///
    /// clap swallows a literal `--`; [`passthrough_args`] recovers the exact
    /// tail from the process arguments.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

#[derive(Debug, Args)]
struct SchemaArgs {
    /// Bundled tool to describe.
    #[arg(value_parser = PossibleValuesParser::new(TOOL_NAMES.iter().copied()))]
    tool: String,
    /// Output format.
    #[arg(long, default_value = "json")]
    format: CliOutputFormat,
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let result = match cli.command {
        Command::Run(args) => run_tool(args),
        Command::Schema(args) => run_schema(args).map(|()| exit_codes::SUCCESS),
        Command::List => run_list().map(|()| exit_codes::SUCCESS),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(exit_codes::FAILURE);
        }
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

fn lookup(name: &str) -> Result<ToolDefinition, String> {
    find_tool(name).ok_or_else(|| format!("Unknown tool '{name}'"))
}

/// Everything after `run <TOOL>` in `argv`, untouched, or `None` when the
/// pair is not found.
fn passthrough_args<I>(argv: I, tool: &str) -> Option<Vec<String>>
where
    I: IntoIterator<Item = OsString>,
{
    let argv: Vec<String> = argv
        .into_iter()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    let start = argv
        .windows(2)
        .position(|pair| pair[0] == "run" && pair[1] == tool)?;
    Some(argv[start + 2..].to_vec())
}

fn run_tool(args: RunArgs) -> Result<i32, String> {
    let tool = lookup(&args.tool)?;
    let engine = InspectEngine::new(&tool);
    let dispatcher = Dispatcher::new(&tool, &FsReader, &engine);
    let tool_args = passthrough_args(std::env::args_os(), &args.tool).unwrap_or(args.args);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = dispatcher
        .run(&tool_args, &mut out)
        .and_then(|outcome| out.flush().map(|()| outcome))
        .map_err(|err| format!("Failed to write output: {err}"))?;

    tracing::debug!(tool = tool.name(), state = ?outcome.state, code = outcome.exit_code, "run finished");
    Ok(outcome.exit_code)
}

fn run_schema(args: SchemaArgs) -> Result<(), String> {
    let tool = lookup(&args.tool)?;
    let raw = match args.format {
        CliOutputFormat::Json => serde_json::to_string_pretty(&tool)
            .map_err(|e| format!("JSON serialization failed: {e}"))?,
        CliOutputFormat::Yaml => {
            serde_yaml::to_string(&tool).map_err(|e| format!("YAML serialization failed: {e}"))?
        }
        CliOutputFormat::Table => schema_to_table(&tool),
    };
    println!("{}", raw.trim_end());
    Ok(())
}

fn run_list() -> Result<(), String> {
    let tools = bundled_tools();
    let width = tools.iter().map(|t| t.name().len()).max().unwrap_or(0);
    for tool in &tools {
        let style = match tool.report {
            shellfront_runner::ReportStyle::Text => "text",
            shellfront_runner::ReportStyle::Diagnostics { .. } => "diagnostics",
        };
        println!(
            "{:<width$}  {:<11}  {} option(s){}",
            tool.name(),
            style,
            tool.schema.options.len(),
            if tool.schema.has_version() { ", --version" } else { "" },
        );
    }
    Ok(())
}

fn schema_to_table(tool: &ToolDefinition) -> String {
    let mut out = String::new();

    out.push_str(&format!("Tool: {}", tool.name()));
    if let Some(ref version) = tool.schema.version {
        out.push_str(&format!("  Version: {version}"));
    }
    out.push('\n');

    if tool.schema.options.is_empty() {
        out.push_str("  (no options)\n");
        return out;
    }

    let width = tool
        .schema
        .options
        .iter()
        .map(|o| o.name.len() + 2)
        .max()
        .unwrap_or(0);
    for option in &tool.schema.options {
        let default = option
            .default
            .as_ref()
            .and_then(|d| serde_json::to_string(d).ok())
            .map(|d| format!(" = {d}"))
            .unwrap_or_default();
        out.push_str(&format!(
            "  {:<width$}  {:<10}  {}{default}\n",
            format!("--{}", option.name),
            option.kind.label(),
            option.key,
        ));
    }

    for derivation in &tool.schema.derivations {
        out.push_str(&format!("  derived: {}\n", derivation.target()));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_passthrough_keeps_double_dash() {
        assert_eq!(
            passthrough_args(argv(&["shellfront", "-v", "run", "jslint", "--", "a.js"]), "jslint"),
            Some(vec!["--".to_string(), "a.js".to_string()])
        );
    }

    #[test]
    fn test_passthrough_empty_tail() {
        assert_eq!(
            passthrough_args(argv(&["shellfront", "run", "cssmin"]), "cssmin"),
            Some(Vec::new())
        );
        assert_eq!(passthrough_args(argv(&["shellfront", "list"]), "cssmin"), None);
    }
}
