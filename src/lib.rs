//! Prints a file, counts its lines, or counts how often each word occurs in it.
//!
//! Plain text files are split into whitespace separated words. JSON files
//! are read as a single [`inspect::Person`] record whose string fields are
//! counted as whole words.

pub mod dispatch;
pub mod inspect;

pub use dispatch::{Invocation, dispatch};
