// ABOUTME: Inbox module - LinkedIn thread records and the sources that list them.
// ABOUTME: MockInbox stands in for a real inbox integration.

mod source;
mod types;

pub use source::*;
pub use types::*;

#[cfg(test)]
mod source_test;
