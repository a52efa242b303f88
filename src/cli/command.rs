use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::prelude::STORAGE_PATH;

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Personal contact book")]
pub struct Cli {
    /// Contact file to load and save
    #[arg(long, global = true, env = "CONTACT_BOOK_PATH", default_value = STORAGE_PATH)]
    pub file: PathBuf,

    // None starts the interactive menu
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long)]
        phone: String,

        /// Contact email address
        #[arg(long, default_value = "")]
        email: String,

        /// Contact postal address
        #[arg(long, default_value = "")]
        address: String,
    },
    /// List contacts in the order they were added
    List,
    /// Search contacts by part of the name (any case) or phone number
    Search {
        /// Name or phone fragment
        term: String,
    },
    /// Update the first contact matching a term.
    /// Only the fields you pass are changed; pass an empty value to clear one
    Update {
        /// Name or phone fragment of the contact to update
        term: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New phone number
        #[arg(long)]
        phone: Option<String>,

        /// New email address
        #[arg(long)]
        email: Option<String>,

        /// New postal address
        #[arg(long)]
        address: Option<String>,
    },
    /// Delete the first contact matching a term
    Delete {
        /// Name or phone fragment of the contact to delete
        term: String,
    },
    /// Import contacts from a .csv file
    Import {
        /// File path to the source .csv file
        #[arg(short, long)]
        src: PathBuf,
    },
    /// Export contacts to a .csv file
    Export {
        /// Destination .csv file, or a directory to write contacts.csv into
        #[arg(short, long)]
        dest: PathBuf,
    },
    /// Interactive numbered menu
    Menu,
}
