//! LTNS CLI entry point.

mod config;

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use rhizome_ltns_compiler::compile_source;
use rhizome_ltns_syntax_tags::{lex, parse_with};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use config::{Config, OutputFormat};

#[derive(Parser)]
#[command(name = "ltns")]
#[command(about = "LTNS front end: tokenize, parse and compile tag-syntax programs")]
struct Cli {
    /// Configuration file (defaults to ./ltns.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the token stream
    Tokens {
        /// Input file (or - for stdin)
        file: String,
    },

    /// Print the syntax tree as JSON
    Parse {
        /// Input file (or - for stdin)
        file: String,

        /// Reject mismatched closing tag names
        #[arg(long)]
        strict_tags: bool,
    },

    /// Compile to the statement/expression IR
    Compile {
        /// Input file (or - for stdin)
        file: String,

        /// Write to stdout instead of file
        #[arg(long)]
        stdout: bool,

        /// Reject mismatched closing tag names
        #[arg(long)]
        strict_tags: bool,

        /// Output format (overrides the config file)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("ltns=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    debug!(?config, "loaded configuration");

    match cli.command {
        Commands::Tokens { file } => {
            let source = read_input(&file)?;
            let tokens = lex(&source).inspect_err(|err| error!("{}", err))?;
            debug!(count = tokens.len(), "lexed");
            for token in tokens {
                println!("{}\t{}", token.position, token);
            }
        }

        Commands::Parse { file, strict_tags } => {
            let mut options = config.parse;
            options.strict_tags |= strict_tags;

            let source = read_input(&file)?;
            let nodes = parse_with(&source, options).inspect_err(|err| error!("{}", err))?;
            debug!(count = nodes.len(), "parsed top-level terms");
            println!("{}", serde_json::to_string_pretty(&nodes)?);
        }

        Commands::Compile {
            file,
            stdout,
            strict_tags,
            format,
        } => {
            let mut options = config.parse;
            options.strict_tags |= strict_tags;
            let format = format.unwrap_or(config.output.format);

            info!("Compiling {}", file);
            let source = read_input(&file)?;
            let program = compile_source(&source, options).inspect_err(|err| error!("{}", err))?;
            debug!(statements = program.body.len(), "compiled");

            let output = match format {
                OutputFormat::Json => serde_json::to_string_pretty(&program)?,
                OutputFormat::Text => program.to_string(),
            };

            if stdout {
                println!("{}", output.trim_end());
            } else {
                let out_path = output_path(&file, format);
                std::fs::write(&out_path, &output)?;
                info!("Wrote: {}", out_path.display());
            }
        }
    }

    Ok(())
}

fn read_input(file: &str) -> std::io::Result<String> {
    if file == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(file)
    }
}

/// `<stem>.<ext>` next to the input, or `output.<ext>` for stdin.
fn output_path(file: &str, format: OutputFormat) -> PathBuf {
    if file == "-" {
        PathBuf::from(format!("output.{}", format.extension()))
    } else {
        Path::new(file).with_extension(format.extension())
    }
}
