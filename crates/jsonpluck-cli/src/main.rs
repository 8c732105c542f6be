//! `pluck` CLI — pull typed values out of JSON documents from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Read a member as a signed 32-bit integer (stdin → stdout)
//! echo '{"port":8080}' | pluck get port --as int
//!
//! # Read from a file, falling back to a default when missing or mistyped
//! pluck get -i config.json host --as string --default localhost
//!
//! # Every integer in an array, one per line (non-integers are skipped)
//! pluck get -i data.json key3 --as ints
//!
//! # Follow a JSON pointer instead of a single member name
//! pluck get -i data.json /a/b/0 --pointer --as int
//!
//! # List member names, or just validate the document
//! pluck keys -i data.json
//! pluck check -i data.json
//! ```

use std::fmt;
use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use jsonpluck::{lookup, lookup_pointer, Document, Extract, ExtractError, NodeKind, Value};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "pluck",
    version,
    about = "Pull typed values out of JSON documents"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract one member as a given type
    Get {
        /// Member name (or JSON pointer with --pointer)
        key: String,
        /// Type to read the member as
        #[arg(long = "as", value_enum, default_value_t = Target::Object)]
        target: Target,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Value to print when the member is missing or has the wrong type
        #[arg(long)]
        default: Option<String>,
        /// Treat KEY as an RFC 6901 JSON pointer
        #[arg(long)]
        pointer: bool,
    },
    /// Parse the document and report whether it is valid JSON
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// List the member names of the root object, or of member KEY
    Keys {
        /// Member whose names to list (the root if omitted)
        key: Option<String>,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Target {
    Int,
    Uint,
    Int64,
    Uint64,
    Bool,
    String,
    Float,
    Double,
    /// Raw subtree, printed as compact JSON
    Object,
    /// Array of 64-bit integers, one per line
    Ints,
    /// Array of strings, one per line
    Strings,
    /// Array of doubles, one per line
    Doubles,
    /// Array of booleans, one per line
    Bools,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Target::Int => "int",
            Target::Uint => "uint",
            Target::Int64 => "int64",
            Target::Uint64 => "uint64",
            Target::Bool => "bool",
            Target::String => "string",
            Target::Float => "float",
            Target::Double => "double",
            Target::Object => "object",
            Target::Ints => "ints",
            Target::Strings => "strings",
            Target::Doubles => "doubles",
            Target::Bools => "bools",
        };
        f.write_str(name)
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Get {
            key,
            target,
            input,
            default,
            pointer,
        } => {
            let doc = load(input.as_deref())?;
            let rendered = match render(&doc, &key, pointer, target) {
                Ok(text) => text,
                Err(err) => match default {
                    Some(fallback) => {
                        debug!(%key, %err, "using default");
                        fallback
                    }
                    None => {
                        return Err(anyhow::Error::new(err)
                            .context(format!("cannot get {key} as {target}")));
                    }
                },
            };
            println!("{}", rendered);
        }
        Commands::Check { input } => {
            load(input.as_deref())?;
            println!("ok");
        }
        Commands::Keys { key, input } => {
            let doc = load(input.as_deref())?;
            let node: &Value = match key.as_deref() {
                Some(key) => lookup(&doc, key).with_context(|| format!("cannot list {key}"))?,
                None => doc.root(),
            };
            let members = node
                .as_object()
                .with_context(|| format!("expected an object, found {}", NodeKind::of(node)))?;
            for name in members.keys() {
                println!("{}", name);
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

/// Strict member or pointer lookup, depending on `pointer`.
fn pluck<'a, T: Extract<'a>>(root: &'a Value, key: &str, pointer: bool) -> Result<T, ExtractError> {
    if pointer {
        lookup_pointer(root, key)
    } else {
        lookup(root, key)
    }
}

/// Extract `key` as `target` and format it for stdout.
fn render(root: &Value, key: &str, pointer: bool, target: Target) -> Result<String, ExtractError> {
    let text = match target {
        Target::Int => pluck::<i32>(root, key, pointer)?.to_string(),
        Target::Uint => pluck::<u32>(root, key, pointer)?.to_string(),
        Target::Int64 => pluck::<i64>(root, key, pointer)?.to_string(),
        Target::Uint64 => pluck::<u64>(root, key, pointer)?.to_string(),
        Target::Bool => pluck::<bool>(root, key, pointer)?.to_string(),
        Target::String => pluck::<String>(root, key, pointer)?,
        Target::Float => pluck::<f32>(root, key, pointer)?.to_string(),
        Target::Double => pluck::<f64>(root, key, pointer)?.to_string(),
        Target::Object => pluck::<&Value>(root, key, pointer)?.to_string(),
        Target::Ints => lines(pluck::<Vec<i64>>(root, key, pointer)?),
        Target::Strings => pluck::<Vec<String>>(root, key, pointer)?.join("\n"),
        Target::Doubles => lines(pluck::<Vec<f64>>(root, key, pointer)?),
        Target::Bools => lines(pluck::<Vec<bool>>(root, key, pointer)?),
    };
    Ok(text)
}

fn lines<T: ToString>(items: Vec<T>) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

fn load(path: Option<&str>) -> Result<Document> {
    match path {
        Some(path) => jsonpluck::parse_from_file(path)
            .with_context(|| format!("Failed to load JSON file: {}", path)),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            jsonpluck::parse_from_text(&buf).context("Failed to parse JSON from stdin")
        }
    }
}
