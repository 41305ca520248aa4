//! `yamlite` CLI -- convert and inspect yamlite documents from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Convert to pretty-printed JSON (stdin -> stdout)
//! cat config.yaml | yamlite json
//!
//! # Convert from file to file, compact
//! yamlite json -i config.yaml -o config.json --compact
//!
//! # Print one value as JSON
//! yamlite get server.port -i config.yaml
//!
//! # Show node counts and nesting depth
//! yamlite stats -i config.yaml
//! ```

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::collections::HashMap;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;
use yamlite_core::{Document, IndentMode, Kind, ParseOptions, Value};

#[derive(Parser)]
#[command(
    name = "yamlite",
    version,
    about = "Parse indentation-structured YAML subsets into JSON"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log parser activity to stderr (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a document to JSON
    Json {
        #[command(flatten)]
        source: SourceArgs,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// Print the value at a dotted path (e.g. `server.hosts.0`) as JSON
    Get {
        /// Dotted path to look up
        path: String,
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Show node counts per kind and the maximum nesting depth
    Stats {
        #[command(flatten)]
        source: SourceArgs,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Input file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
    /// Reject indentation that does not line up with the document's unit
    #[arg(long)]
    strict: bool,
    /// Columns a leading tab counts for (at least 1)
    #[arg(
        long,
        default_value_t = yamlite_core::options::DEFAULT_TAB_WIDTH,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    tab_width: usize,
    /// Keep `#` inside quoted text instead of starting a comment
    #[arg(long)]
    quote_aware_comments: bool,
}

impl SourceArgs {
    fn options(&self) -> ParseOptions {
        let mode = if self.strict {
            IndentMode::Strict
        } else {
            IndentMode::Lenient
        };
        ParseOptions::new()
            .with_indent_mode(mode)
            .with_tab_width(self.tab_width)
            .with_quote_aware_comments(self.quote_aware_comments)
    }

    fn load(&self) -> Result<Document> {
        let options = self.options();
        let doc = match self.input.as_deref() {
            Some(path) => yamlite_core::try_load(path, &options).map_err(|err| {
                let context = match &err {
                    yamlite_core::Error::SourceUnavailable { .. } => {
                        format!("Failed to read file: {}", path)
                    }
                    _ => "Failed to parse document".to_string(),
                };
                anyhow::Error::new(err).context(context)
            })?,
            None => {
                let text = read_stdin()?;
                yamlite_core::parse_with_options(&text, &options)
                    .context("Failed to parse document")?
            }
        };
        tracing::debug!(entries = doc.len(), "loaded input");
        Ok(doc)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Json {
            source,
            output,
            compact,
        } => {
            let doc = source.load()?;
            let mut json = if compact {
                doc.to_json_string()
            } else {
                doc.to_json_string_pretty()
            };
            json.push('\n');
            write_output(output.as_deref(), &json)?;
        }
        Commands::Get { path, source } => {
            let doc = source.load()?;
            let value = doc
                .pointer(&path)
                .with_context(|| format!("Failed to look up '{}'", path))?;
            println!("{:#}", value.to_json());
        }
        Commands::Stats { source } => {
            let doc = source.load()?;
            let stats = Stats::collect(&doc);
            println!("Top-level keys:  {}", doc.len());
            for kind in [
                Kind::Mapping,
                Kind::Sequence,
                Kind::Text,
                Kind::Integer,
                Kind::Float,
                Kind::Boolean,
                Kind::Absent,
            ] {
                println!("{:<16} {}", format!("{}:", kind), stats.count(kind));
            }
            println!("Max depth:       {}", stats.max_depth);
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Node counts gathered by a depth-first walk.
#[derive(Default)]
struct Stats {
    counts: HashMap<Kind, usize>,
    max_depth: usize,
}

impl Stats {
    fn collect(doc: &Document) -> Self {
        let mut stats = Stats::default();
        let mut pending: Vec<(&Value, usize)> = doc.iter().map(|(_, value)| (value, 1)).collect();
        while let Some((value, depth)) = pending.pop() {
            *stats.counts.entry(value.kind()).or_default() += 1;
            stats.max_depth = stats.max_depth.max(depth);
            match value {
                Value::Sequence(items) => {
                    pending.extend(items.iter().map(|item| (item, depth + 1)));
                }
                Value::Mapping(entries) => {
                    pending.extend(entries.values().map(|item| (item, depth + 1)));
                }
                _ => {}
            }
        }
        stats
    }

    fn count(&self, kind: Kind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read from stdin")?;
    Ok(buf)
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
