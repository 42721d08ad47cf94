use mdb_common::note::NoteSettings;
use mdb_providers::prelude::ApiConfig;
use once_cell::sync::OnceCell;
use std::{collections::HashMap, path::PathBuf};

use clap::{Parser, Subcommand};

use self::commands::{add::Add, get::Get, search::Search};
use crate::error::CliError;

pub mod commands;
pub mod extra;

pub static AVAILABLE_APIS: OnceCell<HashMap<String, ApiConfig>> = OnceCell::new();

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search providers by title and list what they found
    Search(Search),
    /// Fetch a single item by its provider id and write its note
    Get(Get),
    /// Search by title, pick one of the results and write its note
    Add(Add),
}

#[derive(Parser, Debug)]
#[clap(name = "Media DB", author, version, about, long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub mode: Option<Commands>,

    /// Print all available providers and exit
    #[clap(long = "providers", id = "list_providers", global = true)]
    pub list_providers: bool,

    /// Read settings from this file instead of the default config path
    ///
    /// If the file doesn't exist, a commented default will be written there.
    #[clap(long, value_name = "FILE", global = true, help_heading = "GENERAL")]
    pub config: Option<PathBuf>,

    /// Where to save notes (If the path doesn't exist, it will be created.)
    #[clap(short = 'o', value_name = "PATH", help_heading = "SAVE", global = true)]
    pub output: Option<PathBuf>,

    /// Always overwrite existing notes
    #[clap(
        short = 'y',
        value_parser,
        default_value_t = false,
        help_heading = "SAVE",
        global = true
    )]
    pub overwrite: bool,
}

impl Cli {
    /// Loads the provider table and the note settings from the config file.
    pub fn load_config(&self) -> Result<NoteSettings, CliError> {
        extra::load_config(self.config.as_deref())
    }

    pub fn generate_save_path(&self) -> Result<PathBuf, std::io::Error> {
        if let Some(output_path) = &self.output {
            Ok(output_path.clone())
        } else {
            std::env::current_dir()
        }
    }
}
