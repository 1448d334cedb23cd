// Pure decision function for adding a journal entry.
//
// Responsibilities
// - Normalize the meal name and enforce its rules.
// - Produce the Journal to persist. Never perform input or output.

use crate::modules::journals::core::journal::Journal;
use crate::modules::journals::use_cases::add_journal::command::AddJournal;

pub const MAX_NAME_LEN: usize = 128;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("meal name must not be empty")]
    EmptyName,

    #[error("meal name must be at most 128 characters, got {0}")]
    NameTooLong(usize),
}

pub fn decide_add(command: AddJournal) -> Result<Journal, DecideError> {
    let name = command.name.trim();
    if name.is_empty() {
        return Err(DecideError::EmptyName);
    }
    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(DecideError::NameTooLong(len));
    }
    Ok(Journal {
        journal_id: command.journal_id,
        name: name.to_string(),
        category: command.category,
        created_at: command.created_at,
    })
}
