use crate::prelude::{
    AppError, Contact, ContactBook, ContactPatch, Outcome,
    command::{Cli, Commands},
    menu::{run_menu, write_contacts},
};
use clap::Parser;
use dotenv::dotenv;
use log::debug;
use std::io;

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();
    let cli = Cli::parse();

    debug!("using contact file {}", cli.file.display());
    let mut book = ContactBook::open(&cli.file)?;

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Add {
            name,
            phone,
            email,
            address,
        } => {
            book.add(name, phone, email, address)?;
            println!("Contact added successfully");
            Ok(())
        }

        // Listing contacts
        Commands::List => {
            let contacts: Vec<&Contact> = book.contact_list().iter().collect();
            write_contacts(&mut io::stdout().lock(), &contacts)
        }

        Commands::Search { term } => write_contacts(&mut io::stdout().lock(), &book.search(&term)),

        // Edit Contact
        Commands::Update {
            term,
            name,
            phone,
            email,
            address,
        } => {
            let patch = ContactPatch {
                name,
                phone,
                email,
                address,
            };

            match book.update_contact(&term, patch)? {
                Outcome::Applied => println!("Contact updated successfully"),
                Outcome::NotFound => eprintln!("Contact not found."),
            }
            Ok(())
        }

        // Delete Contact
        Commands::Delete { term } => {
            match book.delete_contact(&term)? {
                Outcome::Applied => println!("Contact deleted successfully"),
                Outcome::NotFound => eprintln!("Contact not found."),
            }
            Ok(())
        }

        // Import contacts into storage from .csv file
        Commands::Import { src } => {
            let total = book.import_csv(&src)?;

            println!("Successfully imported {} contacts from {}", total, src.display());
            Ok(())
        }

        Commands::Export { dest } => {
            let (path, total) = book.export_csv(&dest)?;

            println!("Successfully exported {} contacts to {}", total, path.display());
            Ok(())
        }

        Commands::Menu => {
            let stdin = io::stdin();
            run_menu(&mut book, stdin.lock(), io::stdout())
        }
    }
}
