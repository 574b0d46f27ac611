use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};

use crate::error::{Result, RoloError};
use crate::model::Record;

/// Default look-ahead for [`AddressBook::upcoming_birthdays`], in days.
pub const BIRTHDAY_WINDOW_DAYS: i64 = 7;

/// An upcoming-birthday entry: who to greet and on which date.
///
/// The congratulation date is the birthday occurrence itself unless that
/// falls on a weekend, in which case the greeting moves to the following
/// Monday. The birthday is never shifted, only the greeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    pub name: String,
    pub congratulation_date: NaiveDate,
}

/// The contact store: records keyed by name, kept in insertion order.
///
/// The underlying collection is private so every mutation goes through the
/// operations below and the uniqueness invariant cannot be bypassed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record; rejects a name that is already present.
    pub fn add_record(&mut self, record: Record) -> Result<()> {
        if self.find(record.name().as_str()).is_some() {
            return Err(RoloError::DuplicateContact(
                record.name().as_str().to_string(),
            ));
        }
        self.records.push(record);
        Ok(())
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Removes the record with the given name.
    pub fn delete(&mut self, name: &str) -> Result<()> {
        match self.records.iter().position(|r| r.name().as_str() == name) {
            Some(pos) => {
                self.records.remove(pos);
                Ok(())
            }
            None => Err(RoloError::ContactNotFound(name.to_string())),
        }
    }

    /// All records, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts whose next birthday occurrence falls within `window_days`
    /// of `today` (inclusive on both ends), sorted by congratulation date.
    ///
    /// The occurrence is computed first, the weekend shift is applied to the
    /// greeting date second. The sort is stable, so same-day greetings keep
    /// insertion order.
    pub fn upcoming_birthdays_from(&self, today: NaiveDate, window_days: i64) -> Vec<Greeting> {
        let mut greetings: Vec<Greeting> = self
            .records
            .iter()
            .filter_map(|record| {
                let occurrence = record.birthday()?.next_occurrence(today);
                let days_until = (occurrence - today).num_days();
                if !(0..=window_days).contains(&days_until) {
                    return None;
                }
                Some(Greeting {
                    name: record.name().as_str().to_string(),
                    congratulation_date: next_working_day(occurrence),
                })
            })
            .collect();
        greetings.sort_by_key(|g| g.congratulation_date);
        greetings
    }

    pub fn upcoming_birthdays(&self) -> Vec<Greeting> {
        self.upcoming_birthdays_from(Local::now().date_naive(), BIRTHDAY_WINDOW_DAYS)
    }
}

fn next_working_day(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Name;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(name: &str) -> Record {
        Record::new(Name::parse(name).unwrap())
    }

    fn record_with_birthday(name: &str, birthday: &str) -> Record {
        let mut rec = record(name);
        rec.add_birthday(birthday).unwrap();
        rec
    }

    #[test]
    fn add_then_find_returns_equal_record() {
        let mut book = AddressBook::new();
        let mut rec = record("John");
        rec.add_phone("1234567890").unwrap();
        book.add_record(rec.clone()).unwrap();
        assert_eq!(book.find("John"), Some(&rec));
    }

    #[test]
    fn add_duplicate_name_leaves_existing_record_alone() {
        let mut book = AddressBook::new();
        let mut original = record("John");
        original.add_phone("1234567890").unwrap();
        book.add_record(original.clone()).unwrap();

        let err = book.add_record(record("John")).unwrap_err();
        assert!(matches!(err, RoloError::DuplicateContact(_)));
        assert_eq!(book.len(), 1);
        assert_eq!(book.find("John"), Some(&original));
    }

    #[test]
    fn delete_removes_the_record() {
        let mut book = AddressBook::new();
        book.add_record(record("John")).unwrap();
        book.delete("John").unwrap();
        assert!(book.is_empty());
        assert!(matches!(
            book.delete("John"),
            Err(RoloError::ContactNotFound(_))
        ));
    }

    #[test]
    fn iter_preserves_insertion_order() {
        let mut book = AddressBook::new();
        for name in ["Charlie", "Alice", "Bob"] {
            book.add_record(record(name)).unwrap();
        }
        let names: Vec<_> = book.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["Charlie", "Alice", "Bob"]);
    }

    // 2024-06-10 is a Monday; 2024-06-15 is a Saturday.
    #[test]
    fn weekend_birthday_shifts_greeting_to_monday() {
        let mut book = AddressBook::new();
        book.add_record(record_with_birthday("John", "15.06.1990"))
            .unwrap();
        let greetings = book.upcoming_birthdays_from(date(2024, 6, 10), BIRTHDAY_WINDOW_DAYS);
        assert_eq!(
            greetings,
            vec![Greeting {
                name: "John".to_string(),
                congratulation_date: date(2024, 6, 17),
            }]
        );
    }

    #[test]
    fn passed_birthday_is_excluded_until_next_year() {
        let mut book = AddressBook::new();
        book.add_record(record_with_birthday("John", "08.06.1990"))
            .unwrap();
        let greetings = book.upcoming_birthdays_from(date(2024, 6, 10), BIRTHDAY_WINDOW_DAYS);
        assert!(greetings.is_empty());
    }

    #[test]
    fn birthday_today_is_included() {
        let mut book = AddressBook::new();
        book.add_record(record_with_birthday("John", "10.06.1990"))
            .unwrap();
        let greetings = book.upcoming_birthdays_from(date(2024, 6, 10), BIRTHDAY_WINDOW_DAYS);
        assert_eq!(greetings[0].congratulation_date, date(2024, 6, 10));
    }

    #[test]
    fn birthday_outside_window_is_excluded() {
        let mut book = AddressBook::new();
        book.add_record(record_with_birthday("John", "18.06.1990"))
            .unwrap();
        assert!(book
            .upcoming_birthdays_from(date(2024, 6, 10), BIRTHDAY_WINDOW_DAYS)
            .is_empty());
        // An 8-day window picks it up.
        assert_eq!(
            book.upcoming_birthdays_from(date(2024, 6, 10), 8).len(),
            1
        );
    }

    #[test]
    fn records_without_birthdays_are_skipped() {
        let mut book = AddressBook::new();
        book.add_record(record("John")).unwrap();
        assert!(book
            .upcoming_birthdays_from(date(2024, 6, 10), BIRTHDAY_WINDOW_DAYS)
            .is_empty());
    }

    #[test]
    fn greetings_sort_by_congratulation_date() {
        let mut book = AddressBook::new();
        book.add_record(record_with_birthday("Late", "14.06.1990"))
            .unwrap();
        book.add_record(record_with_birthday("Early", "11.06.1990"))
            .unwrap();
        let greetings = book.upcoming_birthdays_from(date(2024, 6, 10), BIRTHDAY_WINDOW_DAYS);
        let names: Vec<_> = greetings.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Early", "Late"]);
    }

    #[test]
    fn same_day_greetings_keep_insertion_order() {
        let mut book = AddressBook::new();
        // Saturday 15.06 shifts to Monday 17.06, colliding with a Monday
        // birthday on 17.06.
        book.add_record(record_with_birthday("Shifted", "15.06.1990"))
            .unwrap();
        book.add_record(record_with_birthday("OnTheDay", "17.06.1985"))
            .unwrap();
        let greetings = book.upcoming_birthdays_from(date(2024, 6, 10), BIRTHDAY_WINDOW_DAYS);
        let names: Vec<_> = greetings.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Shifted", "OnTheDay"]);
        assert!(greetings
            .iter()
            .all(|g| g.congratulation_date == date(2024, 6, 17)));
    }
}
