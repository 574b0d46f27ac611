use std::io::{self, BufRead, Write};
use std::path::Path;

use clap::Parser;
use colored::Colorize;
use rolo::book::AddressBook;
use rolo::storage;

mod args;
mod cli;

use args::Cli;
use cli::commands::{self, Command};

fn main() {
    let cli = Cli::parse();

    let report = storage::load(&cli.file);
    if let Some(cause) = report.fallback {
        eprintln!(
            "{}",
            format!(
                "Could not read {}: {}. Starting with an empty address book.",
                cli.file.display(),
                cause
            )
            .yellow()
        );
    }
    let mut book = report.book;

    if book.is_empty() {
        println!("Welcome to the assistant bot!");
    } else {
        println!(
            "Welcome back! Loaded {} contacts from previous session.",
            book.len()
        );
    }

    run_loop(&mut book, &cli.file);

    // Exit checkpoint: close/exit, EOF, and the input-error path all end
    // here. A failed save must never block shutdown.
    checkpoint(&book, &cli.file);
}

fn run_loop(book: &mut AddressBook, file: &Path) {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("Enter a command: ");
        let _ = io::stdout().flush();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(err)) => {
                eprintln!("{}", format!("Input error: {err}").red());
                return;
            }
            None => return,
        };

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                println!("{}", err.to_string().red());
                continue;
            }
        };

        let leaving = matches!(command, Command::Exit);
        match commands::dispatch(book, &command) {
            Ok(reply) => {
                println!("{reply}");
                if command.mutates() {
                    checkpoint(book, file);
                }
            }
            Err(err) => println!("{}", err.to_string().red()),
        }
        if leaving {
            return;
        }
    }
}

fn checkpoint(book: &AddressBook, file: &Path) {
    if let Err(err) = storage::save(book, file) {
        eprintln!(
            "{}",
            format!(
                "Warning: could not save address book to {}: {err}",
                file.display()
            )
            .yellow()
        );
    }
}
