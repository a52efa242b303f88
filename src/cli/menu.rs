use crate::prelude::{AppError, Contact, ContactBook, ContactPatch, Outcome};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Search,
    Update,
    Delete,
    Exit,
}

pub fn parse_choice(input: &str) -> Option<MenuChoice> {
    match input.trim() {
        "1" => Some(MenuChoice::Add),
        "2" => Some(MenuChoice::View),
        "3" => Some(MenuChoice::Search),
        "4" => Some(MenuChoice::Update),
        "5" => Some(MenuChoice::Delete),
        "6" => Some(MenuChoice::Exit),
        _ => None,
    }
}

pub fn write_contacts<W: Write>(out: &mut W, contacts: &[&Contact]) -> Result<(), AppError> {
    if contacts.is_empty() {
        writeln!(out, "No contacts found.")?;
        return Ok(());
    }

    for contact in contacts {
        writeln!(out, "{contact}")?;
    }
    Ok(())
}

/// Line-oriented prompt over any reader/writer pair.
struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Returns `None` once input is exhausted.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        // Keep the answer as typed, minus the line ending
        let answer = line.strip_suffix('\n').unwrap_or(&line);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        Ok(Some(answer.to_string()))
    }

    fn ask_all<const N: usize>(&mut self, prompts: [&str; N]) -> Result<Option<[String; N]>, AppError> {
        let mut answers: [String; N] = std::array::from_fn(|_| String::new());

        for (answer, prompt) in answers.iter_mut().zip(prompts) {
            match self.ask(prompt)? {
                Some(text) => *answer = text,
                None => return Ok(None),
            }
        }
        Ok(Some(answers))
    }

    fn show_menu(&mut self) -> Result<(), AppError> {
        writeln!(self.output)?;
        writeln!(self.output, "---- Contact Book ----")?;
        writeln!(self.output, "1. Add Contact")?;
        writeln!(self.output, "2. View Contacts")?;
        writeln!(self.output, "3. Search Contacts")?;
        writeln!(self.output, "4. Update Contact")?;
        writeln!(self.output, "5. Delete Contact")?;
        writeln!(self.output, "6. Exit")?;
        Ok(())
    }

    fn report(&mut self, result: Result<Outcome, AppError>, done: &str) -> Result<(), AppError> {
        match result {
            Ok(Outcome::Applied) => writeln!(self.output, "{done}")?,
            Ok(Outcome::NotFound) => writeln!(self.output, "Contact not found.")?,
            Err(e) => writeln!(self.output, "Error: {e}")?,
        }
        Ok(())
    }
}

/// Runs the numbered menu until the user picks Exit or input ends.
///
/// Failed saves are reported and the loop continues; the book has already
/// undone the change at that point.
pub fn run_menu<R, W>(book: &mut ContactBook, input: R, output: W) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
{
    let mut prompter = Prompter { input, output };

    loop {
        prompter.show_menu()?;

        let Some(choice) = prompter.ask("Enter your choice: ")? else {
            return Ok(());
        };

        match parse_choice(&choice) {
            Some(MenuChoice::Add) => {
                let Some([name, phone, email, address]) = prompter.ask_all([
                    "Enter name: ",
                    "Enter phone: ",
                    "Enter email: ",
                    "Enter address: ",
                ])?
                else {
                    return Ok(());
                };

                match book.add(name, phone, email, address) {
                    Ok(()) => writeln!(prompter.output, "Contact added.")?,
                    Err(e) => writeln!(prompter.output, "Error: {e}")?,
                }
            }
            Some(MenuChoice::View) => {
                let contacts: Vec<&Contact> = book.contact_list().iter().collect();
                write_contacts(&mut prompter.output, &contacts)?;
            }
            Some(MenuChoice::Search) => {
                let Some(term) = prompter.ask("Enter name or phone to search: ")? else {
                    return Ok(());
                };
                write_contacts(&mut prompter.output, &book.search(&term))?;
            }
            Some(MenuChoice::Update) => {
                let Some(term) = prompter.ask("Enter name or phone of the contact to update: ")?
                else {
                    return Ok(());
                };
                writeln!(prompter.output, "Leave a field blank to keep its current value.")?;

                let Some([name, phone, email, address]) = prompter.ask_all([
                    "New name: ",
                    "New phone: ",
                    "New email: ",
                    "New address: ",
                ])?
                else {
                    return Ok(());
                };

                let patch = ContactPatch::from_prompt_answers(name, phone, email, address);
                let result = book.update_contact(&term, patch);
                prompter.report(result, "Contact updated.")?;
            }
            Some(MenuChoice::Delete) => {
                let Some(term) = prompter.ask("Enter name or phone of the contact to delete: ")?
                else {
                    return Ok(());
                };
                let result = book.delete_contact(&term);
                prompter.report(result, "Contact deleted.")?;
            }
            Some(MenuChoice::Exit) => {
                writeln!(prompter.output, "Bye!")?;
                return Ok(());
            }
            None => writeln!(prompter.output, "Invalid choice. Please try again.")?,
        }
    }
}
