use super::names_table;
use crate::config::CliConfig;
use arisan_core::{roster, sanitize_with, Result};
use clap::Subcommand;
use std::path::PathBuf;

pub const TEMPLATE_FILE: &str = "template_peserta_arisan_nama.xlsx";

#[derive(Subcommand)]
pub enum RosterCommands {
    /// Write a blank roster template spreadsheet
    Template {
        /// Output path (defaults to the data directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Import a roster file and show the cleaned participant list
    Show {
        /// Roster file (csv, xlsx, xls, ods or txt)
        path: PathBuf,
    },
}

pub fn handle_roster_command(cmd: RosterCommands, config: &CliConfig) -> Result<()> {
    match cmd {
        RosterCommands::Template { output } => {
            let path = output.unwrap_or_else(|| config.data_dir.join(TEMPLATE_FILE));
            roster::write_template(&path, &config.core)?;

            println!("Roster template written to {}", path.display());
            println!(
                "Fill in the '{}' column, one participant per row.",
                config.core.name_column
            );
        }

        RosterCommands::Show { path } => {
            let raw = roster::import_file(&path, &config.core.name_column)?;
            let participants = sanitize_with(&raw, config.core.dedup);

            println!(
                "{} rows read, {} participants after cleanup",
                raw.len(),
                participants.len()
            );
            if !participants.is_empty() {
                println!("{}", names_table("Name", participants.as_slice()));
            }
        }
    }

    Ok(())
}
