//! Command line front end for YANG path algebra and value conversion
//!
//! Parses, normalises and compares paths, and runs the conversion engine
//! on raw leaf values.

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use sdc_yangpath::{Path, SchemaLeafType, compare_paths, from_string};
use std::cmp::Ordering;
use std::fs;

#[derive(Parser)]
#[command(name = "sdc-yangpath")]
#[command(about = "Inspect YANG xpaths and convert leaf values against schema types")]
#[command(version)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse an xpath and print its canonical forms
    Parse {
        /// Path to parse
        xpath: String,
        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },
    /// Resolve `..` and strip module prefixes
    Normalize {
        /// Path to normalise
        xpath: String,
        /// Current position used to resolve `..`
        #[arg(short, long, default_value = "/")]
        current: String,
    },
    /// Express an absolute path relative to a reference path
    Relative {
        /// Absolute path
        xpath: String,
        /// Absolute reference path
        #[arg(short, long)]
        reference: String,
    },
    /// Resolve a relative path against the current position
    Absolute {
        /// Relative path
        xpath: String,
        /// Current absolute position
        #[arg(short, long)]
        current: String,
    },
    /// Compare two paths, printing -1, 0 or 1
    Compare {
        /// Left path
        a: String,
        /// Right path
        b: String,
    },
    /// Convert a raw value to a typed value
    Convert {
        /// Raw leaf value
        raw: String,
        /// YANG built-in type name
        #[arg(short = 't', long = "type", conflicts_with = "type_file")]
        type_name: Option<String>,
        /// JSON file holding a full leaf type descriptor
        #[arg(short = 'f', long)]
        type_file: Option<String>,
        /// Timestamp to stamp; defaults to now in nanoseconds
        #[arg(long)]
        timestamp: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Commands::Parse { xpath, pretty } => handle_parse(&xpath, pretty),
        Commands::Normalize { xpath, current } => {
            let path = parse_arg(&xpath)?;
            let current = parse_arg(&current)?;
            println!("{}", path.normalized_abs_path(&current));
            Ok(())
        }
        Commands::Relative { xpath, reference } => {
            let path = parse_arg(&xpath)?;
            let reference = parse_arg(&reference)?;
            println!("{}", path.abs_to_relative_path(&reference)?);
            Ok(())
        }
        Commands::Absolute { xpath, current } => {
            let path = parse_arg(&xpath)?;
            let current = parse_arg(&current)?;
            println!("{}", path.relative_to_abs_path(&current));
            Ok(())
        }
        Commands::Compare { a, b } => {
            let a = parse_arg(&a)?;
            let b = parse_arg(&b)?;
            let result = match compare_paths(Some(&a), Some(&b)) {
                Ordering::Less => -1,
                Ordering::Equal => 0,
                Ordering::Greater => 1,
            };
            println!("{result}");
            Ok(())
        }
        Commands::Convert {
            raw,
            type_name,
            type_file,
            timestamp,
        } => handle_convert(&raw, type_name, type_file, timestamp),
    }
}

fn parse_arg(xpath: &str) -> anyhow::Result<Path> {
    Path::parse(xpath).with_context(|| format!("invalid xpath {xpath:?}"))
}

fn handle_parse(xpath: &str, pretty: bool) -> anyhow::Result<()> {
    let path = parse_arg(xpath)?;

    println!("xpath:    {}", path.to_xpath(false));
    println!("no keys:  {}", path.to_xpath(true));
    println!("strings:  {:?}", path.to_strings(true, false));

    let json = if pretty {
        serde_json::to_string_pretty(&path)?
    } else {
        serde_json::to_string(&path)?
    };
    println!("{json}");
    Ok(())
}

fn handle_convert(
    raw: &str,
    type_name: Option<String>,
    type_file: Option<String>,
    timestamp: Option<u64>,
) -> anyhow::Result<()> {
    let leaf_type = match (type_name, type_file) {
        (Some(name), _) => SchemaLeafType::new(name),
        (None, Some(file)) => {
            let content = fs::read_to_string(&file)
                .with_context(|| format!("error reading type file '{file}'"))?;
            serde_json::from_str(&content)
                .with_context(|| format!("error parsing type file '{file}'"))?
        }
        (None, None) => bail!("either --type or --type-file is required"),
    };

    let timestamp = match timestamp {
        Some(ts) => ts,
        None => now_nanos()?,
    };
    log::debug!("converting {raw:?} as {} at {timestamp}", leaf_type.type_name);

    let value = from_string(&leaf_type, raw, timestamp)?;
    println!("{value}");
    println!("{}", serde_json::to_string(&value)?);
    Ok(())
}

fn now_nanos() -> anyhow::Result<u64> {
    let nanos = chrono::Utc::now()
        .timestamp_nanos_opt()
        .context("current time out of range")?;
    Ok(u64::try_from(nanos)?)
}
