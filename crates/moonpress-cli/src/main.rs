#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::uninlined_format_args)]

mod logging;

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use moonpress_render::{from_json, RenderOptions, Renderer};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "moonpress")]
#[command(
    author,
    version,
    about = "Render a parsed Lua syntax tree to compact source with shortened local names",
    long_about = None
)]
struct Cli {
    /// Path to the parser's syntax tree JSON, or "-" for stdin
    input: PathBuf,

    /// Write output to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Keep original local identifier names
    #[arg(long)]
    keep_names: bool,

    /// Increase logging verbosity (-v for DEBUG, -vv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Emit JSON formatted logs (stable, machine-readable)
    #[arg(long)]
    json_logs: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.json_logs);

    let json = read_input(&cli.input)?;
    let chunk = from_json(&json).into_diagnostic()?;
    info!(statements = chunk.body.len(), "rendering chunk");

    let options = RenderOptions {
        rename_locals: !cli.keep_names,
    };
    let rendered = Renderer::new(options).render(&chunk).into_diagnostic()?;
    debug!(bytes = rendered.len(), "rendered output");

    match &cli.output {
        Some(path) => std::fs::write(path, &rendered).into_diagnostic()?,
        None => println!("{rendered}"),
    }
    Ok(())
}

/// Read the AST JSON from a file, or from stdin when the path is `-`.
fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .into_diagnostic()?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).into_diagnostic()
    }
}
