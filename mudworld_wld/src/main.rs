//! CLI entry point for mudworld_wld.
//!
//! `mudworld_wld convert --from <dir> --to <dir>` batch-converts world
//! files to JSON documents; `mudworld_wld lint <file>…` parses files and
//! reports cross-reference findings without writing output.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use mudworld_data::{ZoneDef, validate_zone};
use mudworld_wld::{convert_rooms, parse_wld_file};

#[derive(Parser)]
#[command(author, version, about = "Convert legacy MUD world files to JSON.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert every world file in a directory into JSON documents.
    Convert {
        /// Directory containing the world files.
        #[arg(long)]
        from: PathBuf,
        /// Directory to write the JSON documents into (created if missing).
        #[arg(long)]
        to: PathBuf,
        /// Extension of the world files to convert.
        #[arg(long, default_value = "wld")]
        ext: String,
    },
    /// Parse world files and report cross-reference findings.
    Lint {
        /// World files to check.
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Convert { from, to, ext } => {
            let written = convert_rooms(&to, &from, &ext)?;
            info!("{} world files converted", written.len());
            println!("converted {} file(s) into {}", written.len(), to.display());
        },
        Commands::Lint { files } => run_lint(&files)?,
    }
    Ok(())
}

fn run_lint(files: &[PathBuf]) -> Result<()> {
    let mut clean = true;
    for path in files {
        let rooms = parse_wld_file(path)?;
        let zone = ZoneDef { rooms };
        let findings = validate_zone(&zone);
        if findings.is_empty() {
            println!("{}: ok ({} rooms)", path.display(), zone.rooms.len());
        } else {
            clean = false;
            for finding in &findings {
                println!("{}: {finding}", path.display());
            }
        }
    }
    if !clean {
        process::exit(1);
    }
    Ok(())
}
