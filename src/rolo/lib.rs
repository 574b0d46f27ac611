//! # Rolo Architecture
//!
//! Rolo is a personal contact directory with durable on-disk persistence.
//! The library is UI-agnostic: everything user-facing (the interactive
//! command loop, argument parsing, terminal rendering) lives with the
//! binary under `cli/` and is not part of the lib API.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                    │
//! │  - Reads commands, renders results, owns stdout/stderr │
//! └────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌────────────────────────────────────────────────────────┐
//! │  Store Layer (book.rs, model.rs)                       │
//! │  - AddressBook: name-keyed records, uniqueness         │
//! │  - Record: validated phones and birthday               │
//! │  - All mutation validates; failures change nothing     │
//! └────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌────────────────────────────────────────────────────────┐
//! │  Persistence Layer (storage.rs)                        │
//! │  - Explicit JSON schema, save/load round-trip          │
//! │  - Missing file → empty book; corrupt file → empty     │
//! │    book + diagnostic, never a crash                    │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Recoverable Everything
//!
//! Every fallible operation returns [`error::RoloError`] and leaves all
//! other state untouched. Validation and lookup errors are resolved
//! per-operation; persistence errors stop at the save/load boundary (a
//! failed save leaves the in-memory book authoritative, a failed load
//! starts fresh). Nothing in this crate exits the process.
//!
//! ## Module Overview
//!
//! - [`model`]: Validated field types (`Name`, `Phone`, `Birthday`) and
//!   [`model::Record`]
//! - [`book`]: The [`book::AddressBook`] store and birthday queries
//! - [`storage`]: Save/load with the documented JSON schema
//! - [`error`]: Error types

pub mod book;
pub mod error;
pub mod model;
pub mod storage;
