//! headerdoc: render the doc comments of a C++ header as Markdown.
//!
//! Runs in two phases over the public part of the header:
//!
//! 1. **Enums**: every documented `typedef enum` becomes a constants table
//!    and an anchor other sections can link to.
//! 2. **Methods**: every documented one-line declaration becomes a heading,
//!    a description and a table of its `@param`/`@return`/`@throw` fields.
//!
//! Methods are written first, as they are found, then all enums.

mod anchor;
mod config;
mod error;
mod model;
mod parser;
mod render;
mod source;

use anyhow::{Context, Result};
use clap::Parser;
use config::Config;
use error::ExtractError;
use parser::methods::MethodExtractor;
use render::MarkdownRenderer;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "headerdoc",
    about = "Generate Markdown API docs from the doc comments of a C++ header"
)]
struct Cli {
    /// Header file to document
    #[arg(short = 'i', long, default_value = config::DEFAULT_INPUT)]
    input: PathBuf,

    /// Markdown heading level of every section (1-6)
    #[arg(
        short = 'l',
        long,
        default_value_t = config::DEFAULT_HEADING_LEVEL,
        value_parser = clap::value_parser!(u8).range(1..=6)
    )]
    heading_level: u8,

    /// Namespace prefixed to methods, enums and constants
    #[arg(short = 'n', long, default_value = config::DEFAULT_NAMESPACE)]
    namespace: String,

    /// Class name prefixed to methods
    #[arg(short = 'c', long = "class", default_value = config::DEFAULT_CLASS)]
    class_name: String,

    /// Marker of the non-public section; everything after it is ignored
    #[arg(short = 's', long, default_value = config::DEFAULT_SENTINEL)]
    sentinel: String,

    /// Write to this file instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Fail on the first malformed method instead of skipping it
    #[arg(long)]
    strict: bool,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            input: self.input.clone(),
            heading_level: self.heading_level,
            namespace: self.namespace.clone(),
            class_name: self.class_name.clone(),
            sentinel: self.sentinel.clone(),
            strict: self.strict,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let config = cli.config();
    let source = source::load(&config.input, &config.sentinel)?;

    match cli.output {
        Some(ref path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut out = BufWriter::new(file);
            generate(&source, &config, &mut out)?;
            out.flush()
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => {
            let mut out = BufWriter::new(io::stdout().lock());
            generate(&source, &config, &mut out)?;
            out.flush().context("failed to write stdout")?;
        }
    }
    Ok(())
}

/// Diagnostics go to stderr so stdout stays pure Markdown.
/// The filter comes from `HEADERDOC_LOG`, default `warn`.
fn init_logging() {
    let filter =
        EnvFilter::try_from_env("HEADERDOC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .init();
}

/// Extract and render the whole document into `out`.
///
/// Malformed methods are skipped with a warning unless `config.strict`.
fn generate(source: &str, config: &Config, out: &mut impl Write) -> Result<()> {
    let blocks = parser::doc_blocks(source);
    let enums = parser::enums::extract(&blocks, config);
    debug!(blocks = blocks.len(), enums = enums.len(), "scanned header");
    let renderer = MarkdownRenderer::new(config);

    for item in MethodExtractor::new(&blocks, &enums, config) {
        let method = match item {
            Ok(method) => method,
            Err(err) if config.strict || !err.is_recoverable() => return Err(err.into()),
            Err(err) => {
                warn!("skipping method: {}", err);
                continue;
            }
        };

        for name in &method.unknown_params {
            let err = ExtractError::UnknownParameterReference {
                method: method.name.clone(),
                name: name.clone(),
            };
            if config.strict {
                return Err(err.into());
            }
            warn!("{}", err);
        }

        writeln!(out, "{}", renderer.render_method(&method))?;
    }

    for doc in enums.iter() {
        writeln!(out, "{}", renderer.render_enum(doc))?;
    }
    Ok(())
}
