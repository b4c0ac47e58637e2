// src/bin/modscan.rs
use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process;

use modscan_core::{config, report, EngineBuilder};

#[derive(Parser)]
#[command(name = "modscan")]
#[command(about = "Discovers binary modules (.dll) and reads their name/version metadata")]
#[command(version)]
struct Cli {
    /// Root directories to scan (appended after any from modscan.toml)
    roots: Vec<PathBuf>,

    /// Exclude any path containing this substring (repeatable)
    #[arg(long = "exclude", short = 'x', value_name = "PATTERN")]
    exclude: Vec<String>,

    /// Emit results as JSON instead of a text listing
    #[arg(long)]
    json: bool,

    /// Skip loading modscan.toml from the working directory
    #[arg(long)]
    no_config: bool,

    /// Print per-root progress to stderr
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder = EngineBuilder::new();

    // Local config first, command line appended after it.
    if !cli.no_config {
        if let Some(loaded) = config::load_local_file() {
            let file_config = loaded.context("failed to load modscan.toml")?;
            for root in file_config.roots {
                builder = builder.add_root_path(root);
            }
            for pattern in file_config.exclude {
                builder = builder.add_exclude_pattern(pattern);
            }
        }
    }

    for root in cli.roots {
        builder = builder.add_root_path(root);
    }
    for pattern in cli.exclude {
        builder = builder.add_exclude_pattern(pattern);
    }

    let engine = match builder.build() {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            process::exit(2);
        }
    };

    if cli.verbose {
        for root in &engine.config().root_paths {
            eprintln!("scanning {}", root.display());
        }
    }

    let modules = engine.discover_modules();

    if cli.json {
        println!("{}", report::render_json(&modules)?);
    } else {
        print!("{}", report::render_text(&modules));
    }

    Ok(())
}
