//! jsonmodel CLI.
//!
//! Reads JSON from a file or stdin and writes it back in canonical form.

use clap::{Args, Parser, Subcommand};
use jsonmodel::json::{escape_str, parse_bytes, Limits, Style, Value};
use jsonmodel::{ErrorCode, JsonResult};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jsonmodel")]
#[command(about = "Canonical JSON text from owned value trees", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version information
    Version,

    /// Parse input and print it in canonical form
    Format {
        #[command(flatten)]
        input: InputArgs,

        /// Omit the spaces after `,` and `:`
        #[arg(long)]
        compact: bool,
    },

    /// Parse input and report whether it is valid
    Check {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Print TEXT with string escaping applied
    Escape {
        /// Raw text to escape
        text: String,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Input file (reads stdin when omitted)
    file: Option<PathBuf>,

    /// Use the lenient parser limits
    #[arg(long)]
    lenient: bool,
}

impl InputArgs {
    fn limits(&self) -> Limits {
        if self.lenient {
            Limits::lenient()
        } else {
            Limits::strict()
        }
    }

    fn read(&self) -> JsonResult<Value> {
        let bytes = match &self.file {
            Some(path) => std::fs::read(path)?,
            None => {
                let mut buf = Vec::new();
                std::io::stdin().read_to_end(&mut buf)?;
                buf
            }
        };
        tracing::debug!(bytes = bytes.len(), "read input");
        parse_bytes(&bytes, self.limits())
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn report(err: &ErrorCode) -> ExitCode {
    tracing::warn!(code = err.code(), "{err}");
    println!(
        "{{\"err\":{{\"code\":{},\"name\":\"{}\"}}}}",
        err.code(),
        err.name()
    );
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Version) => {
            println!("jsonmodel v{}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Some(Commands::Format { input, compact }) => match input.read() {
            Ok(value) => {
                let style = if compact { Style::Compact } else { Style::Spaced };
                println!("{}", jsonmodel::json::to_string_with(&value, style));
                ExitCode::SUCCESS
            }
            Err(err) => report(&err),
        },
        Some(Commands::Check { input }) => match input.read() {
            Ok(_) => {
                println!("ok");
                ExitCode::SUCCESS
            }
            Err(err) => report(&err),
        },
        Some(Commands::Escape { text }) => {
            println!("{}", escape_str(&text));
            ExitCode::SUCCESS
        }
        None => {
            println!("jsonmodel v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for usage information");
            ExitCode::SUCCESS
        }
    }
}
