use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoloError {
    #[error("Name cannot be empty")]
    InvalidName,

    #[error("Invalid phone number {0:?}: must contain exactly 10 digits")]
    InvalidPhone(String),

    #[error("Invalid birthday {0:?}: expected DD.MM.YYYY")]
    InvalidBirthday(String),

    #[error("Contact already exists: {0}")]
    DuplicateContact(String),

    #[error("Phone number already exists for this contact: {0}")]
    DuplicatePhone(String),

    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),

    #[error("{0}")]
    Command(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RoloError>;
