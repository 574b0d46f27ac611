//! The interactive command loop: line parsing, dispatch onto the store, and
//! textual rendering. Thin glue over the library; owns all user-facing text.

pub mod commands;
pub mod render;
