use rolo::book::AddressBook;
use rolo::error::{Result, RoloError};
use rolo::model::{Name, Record};

use super::render;

/// One parsed user command. Each variant maps 1:1 onto a store or record
/// operation; parsing knows nothing about the book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { name: String, phone: String },
    Change { name: String, old_phone: String, new_phone: String },
    Phone { name: String },
    All,
    AddBirthday { name: String, birthday: String },
    ShowBirthday { name: String },
    Birthdays,
    Hello,
    Exit,
}

impl Command {
    /// Splits a raw input line into a command. `Ok(None)` for a blank line.
    /// Extra trailing arguments are ignored, matching the loose tokenized
    /// input format.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut parts = line.split_whitespace();
        let Some(keyword) = parts.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = parts.collect();

        let command = match keyword.to_lowercase().as_str() {
            "add" => match args.as_slice() {
                [name, phone, ..] => Self::Add {
                    name: (*name).to_string(),
                    phone: (*phone).to_string(),
                },
                _ => return usage("Please provide both name and phone"),
            },
            "change" => match args.as_slice() {
                [name, old, new, ..] => Self::Change {
                    name: (*name).to_string(),
                    old_phone: (*old).to_string(),
                    new_phone: (*new).to_string(),
                },
                _ => return usage("Please provide name, old phone, and new phone"),
            },
            "phone" => match args.as_slice() {
                [name, ..] => Self::Phone {
                    name: (*name).to_string(),
                },
                _ => return usage("Please provide contact name"),
            },
            "all" => Self::All,
            "add-birthday" => match args.as_slice() {
                [name, birthday, ..] => Self::AddBirthday {
                    name: (*name).to_string(),
                    birthday: (*birthday).to_string(),
                },
                _ => return usage("Please provide name and birthday (DD.MM.YYYY)"),
            },
            "show-birthday" => match args.as_slice() {
                [name, ..] => Self::ShowBirthday {
                    name: (*name).to_string(),
                },
                _ => return usage("Please provide contact name"),
            },
            "birthdays" => Self::Birthdays,
            "hello" => Self::Hello,
            "close" | "exit" => Self::Exit,
            _ => return Err(RoloError::Command("Invalid command.".to_string())),
        };
        Ok(Some(command))
    }

    /// Whether a successful run of this command changed the book, and so
    /// warrants a persistence checkpoint.
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            Self::Add { .. } | Self::Change { .. } | Self::AddBirthday { .. }
        )
    }
}

fn usage(message: &str) -> Result<Option<Command>> {
    Err(RoloError::Command(message.to_string()))
}

/// Runs one command against the book. Returns the reply to print, or the
/// error to render as a one-line rejection; a rejected command changes
/// nothing.
pub fn dispatch(book: &mut AddressBook, command: &Command) -> Result<String> {
    match command {
        Command::Add { name, phone } => {
            if let Some(record) = book.find_mut(name) {
                record.add_phone(phone)?;
                Ok("Contact updated.".to_string())
            } else {
                // Validate everything before the record is inserted, so a
                // bad phone never leaves behind a phoneless contact.
                let mut record = Record::new(Name::parse(name)?);
                record.add_phone(phone)?;
                book.add_record(record)?;
                Ok("Contact added.".to_string())
            }
        }
        Command::Change {
            name,
            old_phone,
            new_phone,
        } => {
            let record = book
                .find_mut(name)
                .ok_or_else(|| RoloError::ContactNotFound(name.clone()))?;
            record.edit_phone(old_phone, new_phone)?;
            Ok("Contact updated.".to_string())
        }
        Command::Phone { name } => {
            let record = book
                .find(name)
                .ok_or_else(|| RoloError::ContactNotFound(name.clone()))?;
            Ok(render::phones(record))
        }
        Command::All => Ok(render::all_contacts(book)),
        Command::AddBirthday { name, birthday } => {
            let record = book
                .find_mut(name)
                .ok_or_else(|| RoloError::ContactNotFound(name.clone()))?;
            record.add_birthday(birthday)?;
            Ok(format!("Birthday added for {name}."))
        }
        Command::ShowBirthday { name } => {
            let record = book
                .find(name)
                .ok_or_else(|| RoloError::ContactNotFound(name.clone()))?;
            Ok(render::birthday(record))
        }
        Command::Birthdays => Ok(render::upcoming(&book.upcoming_birthdays())),
        Command::Hello => Ok("How can I help you?".to_string()),
        Command::Exit => Ok("Good bye!".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_blank_line_is_none() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn parse_is_case_insensitive_on_the_keyword() {
        assert_eq!(Command::parse("HELLO").unwrap(), Some(Command::Hello));
        assert_eq!(Command::parse("Exit").unwrap(), Some(Command::Exit));
        assert_eq!(Command::parse("close").unwrap(), Some(Command::Exit));
    }

    #[test]
    fn parse_add_requires_name_and_phone() {
        assert!(matches!(
            Command::parse("add John"),
            Err(RoloError::Command(_))
        ));
        assert_eq!(
            Command::parse("add John 1234567890").unwrap(),
            Some(Command::Add {
                name: "John".to_string(),
                phone: "1234567890".to_string(),
            })
        );
    }

    #[test]
    fn parse_unknown_keyword_is_rejected() {
        assert!(matches!(
            Command::parse("frobnicate"),
            Err(RoloError::Command(_))
        ));
    }

    fn add(book: &mut AddressBook, name: &str, phone: &str) -> Result<String> {
        dispatch(
            book,
            &Command::Add {
                name: name.to_string(),
                phone: phone.to_string(),
            },
        )
    }

    #[test]
    fn add_creates_then_updates() {
        let mut book = AddressBook::new();
        assert_eq!(add(&mut book, "John", "1234567890").unwrap(), "Contact added.");
        assert_eq!(
            add(&mut book, "John", "0987654321").unwrap(),
            "Contact updated."
        );
        assert_eq!(book.find("John").unwrap().phones().len(), 2);
    }

    #[test]
    fn add_with_bad_phone_creates_no_contact() {
        let mut book = AddressBook::new();
        assert!(add(&mut book, "John", "123").is_err());
        assert!(book.find("John").is_none());
    }

    #[test]
    fn change_swaps_the_phone() {
        let mut book = AddressBook::new();
        add(&mut book, "John", "1234567890").unwrap();
        let reply = dispatch(
            &mut book,
            &Command::Change {
                name: "John".to_string(),
                old_phone: "1234567890".to_string(),
                new_phone: "0987654321".to_string(),
            },
        )
        .unwrap();
        assert_eq!(reply, "Contact updated.");
        assert_eq!(book.find("John").unwrap().phones()[0].as_str(), "0987654321");
    }

    #[test]
    fn change_unknown_contact_is_rejected() {
        let mut book = AddressBook::new();
        let err = dispatch(
            &mut book,
            &Command::Change {
                name: "Ghost".to_string(),
                old_phone: "1234567890".to_string(),
                new_phone: "0987654321".to_string(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, RoloError::ContactNotFound(_)));
    }

    #[test]
    fn birthday_flow() {
        let mut book = AddressBook::new();
        add(&mut book, "John", "1234567890").unwrap();
        let reply = dispatch(
            &mut book,
            &Command::AddBirthday {
                name: "John".to_string(),
                birthday: "15.06.1990".to_string(),
            },
        )
        .unwrap();
        assert_eq!(reply, "Birthday added for John.");

        let reply = dispatch(
            &mut book,
            &Command::ShowBirthday {
                name: "John".to_string(),
            },
        )
        .unwrap();
        assert_eq!(reply, "John's birthday: 15.06.1990");
    }

    #[test]
    fn mutating_commands_are_flagged_for_checkpointing() {
        assert!(Command::parse("add John 1234567890")
            .unwrap()
            .unwrap()
            .mutates());
        assert!(!Command::parse("all").unwrap().unwrap().mutates());
        assert!(!Command::parse("birthdays").unwrap().unwrap().mutates());
    }
}
