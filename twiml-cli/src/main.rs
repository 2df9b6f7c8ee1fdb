//! TwiML CLI Application
//!
//! Command-line front end for the twiml library:
//! - Renders responses described in TOML files to TwiML documents
//! - Decodes form-encoded callback payloads and prints them as JSON

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

mod config;
mod inspect;
mod render;

use inspect::CallbackKind;

/// TwiML CLI - Build TwiML responses and inspect callbacks
#[derive(Parser, Debug)]
#[command(name = "twiml-cli")]
#[command(about = "Render TwiML responses and decode callback payloads", long_about = None)]
#[command(version)]
struct Args {
    /// Path to a TOML response document to render
    #[arg(short, long, value_name = "FILE")]
    response: Option<PathBuf>,

    /// Path to a form-encoded callback payload to decode
    #[arg(long, value_name = "FILE", conflicts_with = "response")]
    callback: Option<PathBuf>,

    /// Callback shape used with --callback
    #[arg(short, long, value_enum, default_value_t = CallbackKind::Voice)]
    kind: CallbackKind,

    /// Encode despite semantic validation errors
    #[arg(long)]
    ignore_validation_errors: bool,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("TwiML CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using twiml library v{}", twiml::VERSION);

    if let Some(path) = &args.response {
        render_mode(path, &args)?;
    } else if let Some(path) = &args.callback {
        inspect_mode(path, &args)?;
    } else {
        // No arguments - show help
        println!("TwiML CLI - No input specified");
        println!("\nQuick Start:");
        println!("  twiml-cli --response response.toml");
        println!("  twiml-cli --callback payload.txt --kind dial-action");
        println!("\nUse --help for more options");
    }

    Ok(())
}

/// Render mode - load a response document and print its TwiML
fn render_mode(path: &Path, args: &Args) -> Result<()> {
    log::info!("Loading response from: {:?}", path);
    let response = config::load_config(path)?;

    let xml = render::render_document(response, args.ignore_validation_errors)?;
    write_output(args.output.as_deref(), &xml)
}

/// Inspect mode - decode a callback payload and print it as JSON
fn inspect_mode(path: &Path, args: &Args) -> Result<()> {
    log::info!("Decoding {:?} callback from: {:?}", args.kind, path);
    let payload = fs::read_to_string(path)
        .with_context(|| format!("Failed to read callback file: {:?}", path))?;

    let value = inspect::decode_callback(args.kind, &payload)?;
    let json = serde_json::to_string_pretty(&value)?;
    write_output(args.output.as_deref(), &json)
}

fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("Failed to write output file: {:?}", path))?;
            log::info!("Wrote {} bytes to {:?}", content.len(), path);
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", content)?;
        }
    }
    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
