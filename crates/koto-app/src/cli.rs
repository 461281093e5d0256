use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "koto", version, about = "Japanese vocabulary notebook with furigana")]
pub struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Vocabulary store, overrides the config
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add an entry: `word`, `word[reading]` or `sentence with [word] inside`
    Add {
        query: String,
        /// Use this meaning instead of the generated one
        #[arg(long)]
        meaning: Option<String>,
        /// Skip the generator, a reading must be given in brackets
        #[arg(long)]
        no_generate: bool,
    },
    /// List every entry, newest first
    List {
        #[arg(long)]
        html: bool,
    },
    /// Entries whose content, reading or meaning contain the query
    Search {
        query: String,
        #[arg(long)]
        html: bool,
    },
    /// Show one entry with its tokens
    Show { id: String },
    /// Delete an entry
    Delete { id: String },
    /// Replace the reading of one token, an empty value clears it
    SetReading {
        id: String,
        index: usize,
        value: String,
    },
    /// Generate the reading and meaning of an existing entry again
    Regenerate { id: String },
    /// Annotate text without touching the store
    Render {
        content: String,
        #[arg(long)]
        focus: Option<String>,
        /// Flat reading or JSON token array
        #[arg(long, default_value = "")]
        reading: String,
        #[arg(long)]
        html: bool,
    },
    /// Show how a query would be interpreted
    Parse { query: String },
}
