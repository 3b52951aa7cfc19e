//! `jsontree` CLI — parse JSON documents and print the resulting value tree.
//!
//! ## Usage
//!
//! ```sh
//! # Parse a document (stdin → stdout)
//! echo '{"key": 42}' | jsontree parse
//!
//! # Parse from file to file
//! jsontree parse -i data.json -o tree.txt
//!
//! # Tighten the nesting-depth bound
//! jsontree parse --max-depth 8 -i data.json
//!
//! # Run the built-in sample document
//! jsontree demo
//! ```

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use jsontree_core::ParseOptions;
use std::io::{self, Read};

/// Sample document demonstrating the parse and render entry points.
const DEMO_DOCUMENT: &str = r#"{"key": 42, "array": [1, 2, 3], "message": "hello world"}"#;

#[derive(Parser)]
#[command(name = "jsontree", version, about = "JSON value-tree parser CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a JSON document and print the value tree
    Parse {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Maximum container nesting depth
        #[arg(long)]
        max_depth: Option<usize>,
    },
    /// Parse the built-in sample document and print the result
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            input,
            output,
            max_depth,
        } => {
            let text = read_input(input.as_deref())?;

            let mut options = ParseOptions::default();
            if let Some(depth) = max_depth {
                options.max_depth = depth;
            }

            let (value, end) = jsontree_core::parse_with_options(&text, 0, options)
                .context("Failed to parse JSON input")?;

            // The parser stops after one value; a whole-document reader
            // treats anything left over as an error.
            if let Some(offset) = first_trailing_content(&text, end) {
                bail!("trailing content at offset {offset}");
            }

            write_output(output.as_deref(), &jsontree_core::render(&value))?;
        }
        Commands::Demo => {
            let (value, _) =
                jsontree_core::parse(DEMO_DOCUMENT).context("demo document must parse")?;
            println!("Parsed JSON: {}", jsontree_core::render(&value));
        }
    }

    Ok(())
}

/// Offset of the first non-whitespace byte at or after `end`, if any.
fn first_trailing_content(text: &str, end: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut pos = end;
    while let Some(&b) = bytes.get(pos) {
        match b {
            b' ' | b'\t' | b'\n' | b'\r' => pos += 1,
            _ => return Some(pos),
        }
    }
    None
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
