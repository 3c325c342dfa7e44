use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use svgtree::{Element, SerializeConfig};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "svgtree",
    version,
    about = "Parse, query and re-serialize SVG documents"
)]
struct Args {
    /// Input file (defaults to stdin)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,
    /// Print the first descendant with this id
    #[arg(long, group = "query")]
    id: Option<String>,
    /// Print every descendant with this tag name
    #[arg(long, group = "query")]
    name: Option<String>,
    /// Print every descendant whose text contains this (case-insensitive)
    #[arg(long, group = "query")]
    content: Option<String>,
    /// Indent output by this many spaces per level
    #[arg(long, value_name = "SPACES")]
    indent: Option<usize>,
    /// Write attributes sorted by name
    #[arg(long)]
    sort_attributes: bool,
    /// Start the output with an XML declaration
    #[arg(long)]
    declaration: bool,
    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let raw = read_input(&args.input)?;
    let root = svgtree::parse_bytes(&raw).context("failed to parse SVG input")?;
    if root.is_empty() {
        info!("document has no root element");
    }

    let config = SerializeConfig {
        indent: args.indent,
        sort_attributes: args.sort_attributes,
        xml_declaration: args.declaration,
    };

    let selected: Vec<&Element> = if let Some(id) = &args.id {
        root.find_by_id(id).into_iter().collect()
    } else if let Some(name) = &args.name {
        root.find_all(name)
    } else if let Some(text) = &args.content {
        root.find_by_content(text)
    } else {
        vec![&root]
    };
    debug!(matches = selected.len(), "selected elements");

    let mut output = String::new();
    for element in selected.into_iter().filter(|e| !e.is_empty()) {
        output.push_str(&element.to_xml_string_with(config.clone())?);
        output.push('\n');
    }

    write_output(&args.output, output.as_bytes())
}

fn read_input(path: &Option<PathBuf>) -> Result<Vec<u8>> {
    match path {
        Some(path) => std::fs::read(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        None => {
            let mut buffer = Vec::new();
            io::stdin()
                .read_to_end(&mut buffer)
                .context("failed to read stdin")?;
            if buffer.iter().all(u8::is_ascii_whitespace) {
                bail!("no input provided on stdin");
            }
            Ok(buffer)
        }
    }
}

fn write_output(path: &Option<PathBuf>, data: &[u8]) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, data)
            .with_context(|| format!("failed to write output file {}", path.display())),
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(data).context("failed to write stdout")?;
            Ok(())
        }
    }
}
