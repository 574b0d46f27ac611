use rolo::book::{AddressBook, Greeting};
use rolo::model::{Record, BIRTHDAY_FORMAT};

pub fn contact_line(record: &Record) -> String {
    let phones = record
        .phones()
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    let mut line = format!("Contact name: {}, phones: {}", record.name(), phones);
    if let Some(birthday) = record.birthday() {
        line.push_str(&format!(", birthday: {birthday}"));
    }
    line
}

pub fn all_contacts(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts in address book.".to_string();
    }
    book.iter()
        .map(contact_line)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn phones(record: &Record) -> String {
    if record.phones().is_empty() {
        return format!("No phones found for {}", record.name());
    }
    let phones = record
        .phones()
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    format!("{}: {}", record.name(), phones)
}

pub fn birthday(record: &Record) -> String {
    match record.birthday() {
        Some(birthday) => format!("{}'s birthday: {}", record.name(), birthday),
        None => format!("No birthday set for {}", record.name()),
    }
}

pub fn upcoming(greetings: &[Greeting]) -> String {
    if greetings.is_empty() {
        return "No upcoming birthdays in the next week.".to_string();
    }
    let mut out = String::from("Upcoming birthdays:");
    for greeting in greetings {
        out.push_str(&format!(
            "\n{}: {}",
            greeting.name,
            greeting.congratulation_date.format(BIRTHDAY_FORMAT)
        ));
    }
    out
}
