use std::fmt;

use chrono::{Datelike, Local, NaiveDate};

use crate::error::{Result, RoloError};

/// Textual pattern birthdays are entered and displayed in.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A contact's name. Required, immutable once set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(String);

impl Name {
    /// Trims surrounding whitespace; rejects names that are empty afterwards.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(RoloError::InvalidName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A phone number, kept in the form the user typed it.
///
/// Validation operates on the digit characters only (exactly 10 required),
/// so "123-456-7890" and "(123) 456 7890" are both accepted and displayed
/// as entered. Duplicate detection compares the digit sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phone(String);

impl Phone {
    pub fn parse(raw: &str) -> Result<Self> {
        let digit_count = raw.chars().filter(char::is_ascii_digit).count();
        if digit_count != 10 {
            return Err(RoloError::InvalidPhone(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The normalized form: digit characters only.
    pub fn digits(&self) -> String {
        self.0.chars().filter(char::is_ascii_digit).collect()
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A birthday, parsed from `DD.MM.YYYY` and stored as a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn parse(raw: &str) -> Result<Self> {
        NaiveDate::parse_from_str(raw.trim(), BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| RoloError::InvalidBirthday(raw.to_string()))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// This year's occurrence of the birthday, rolled over to next year if it
    /// has already passed. Feb 29 lands on Mar 1 in non-leap years.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let this_year = self.on_year(today.year());
        if this_year < today {
            self.on_year(today.year() + 1)
        } else {
            this_year
        }
    }

    fn on_year(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
            .expect("Mar 1 is valid in every year")
    }
}

impl From<NaiveDate> for Birthday {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

/// One contact: a name, phone numbers in insertion order, and an optional
/// birthday. All mutation goes through validating operations; a failed
/// operation leaves the record untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Validates and appends a phone number. Rejects a number whose digit
    /// sequence is already present on this record.
    pub fn add_phone(&mut self, raw: &str) -> Result<()> {
        let phone = Phone::parse(raw)?;
        if self.phones.iter().any(|p| p.digits() == phone.digits()) {
            return Err(RoloError::DuplicatePhone(raw.to_string()));
        }
        self.phones.push(phone);
        Ok(())
    }

    /// Removes the first phone stored exactly as `value`.
    pub fn remove_phone(&mut self, value: &str) -> Result<()> {
        match self.phones.iter().position(|p| p.as_str() == value) {
            Some(pos) => {
                self.phones.remove(pos);
                Ok(())
            }
            None => Err(RoloError::PhoneNotFound(value.to_string())),
        }
    }

    /// Replaces the phone stored as `old` with a validated `new_raw`,
    /// preserving its position. The new value is validated before anything
    /// is touched, and may not collide with another phone on this record
    /// (same rule as [`Record::add_phone`]). Re-entering the current value
    /// is allowed.
    pub fn edit_phone(&mut self, old: &str, new_raw: &str) -> Result<()> {
        let new_phone = Phone::parse(new_raw)?;
        let pos = self
            .phones
            .iter()
            .position(|p| p.as_str() == old)
            .ok_or_else(|| RoloError::PhoneNotFound(old.to_string()))?;
        let collision = self
            .phones
            .iter()
            .enumerate()
            .any(|(i, p)| i != pos && p.digits() == new_phone.digits());
        if collision {
            return Err(RoloError::DuplicatePhone(new_raw.to_string()));
        }
        self.phones[pos] = new_phone;
        Ok(())
    }

    /// Exact-match lookup by stored value. A miss is not an error.
    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    /// Validates and sets the birthday, overwriting any previous one.
    pub fn add_birthday(&mut self, raw: &str) -> Result<()> {
        self.birthday = Some(Birthday::parse(raw)?);
        Ok(())
    }

    /// Sets an already-validated birthday. Used when reconstructing records
    /// from storage.
    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    /// Days from `today` to the next birthday occurrence; 0 on the birthday
    /// itself, `None` if no birthday is set.
    pub fn days_until_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.birthday
            .map(|b| (b.next_occurrence(today) - today).num_days())
    }

    pub fn days_until_birthday(&self) -> Option<i64> {
        self.days_until_birthday_from(Local::now().date_naive())
    }
}
