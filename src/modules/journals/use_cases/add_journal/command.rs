// Command data type for adding a meal to the journal.
//
// Purpose
// - Carry the meal name and category, plus the identity and timestamp
//   assigned by the caller, to the decider.
// - Stay independent of the transport (no HTTP types here).

use crate::modules::journals::core::journal::MealCategory;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddJournal {
    pub journal_id: String,
    pub name: String,
    pub category: MealCategory,
    pub created_at: i64,
}

#[cfg(test)]
mod add_journal_command_tests {
    use super::*;
    use crate::tests::fixtures::commands::add_journal::AddJournalBuilder;
    use rstest::rstest;

    #[rstest]
    fn it_should_create_the_command() {
        let command = AddJournal {
            journal_id: "journal-fixed-0001".to_string(),
            name: "sunny side up".to_string(),
            category: MealCategory::Breakfast,
            created_at: 1_700_000_000_000,
        };
        assert_eq!(command, AddJournalBuilder::new().build());
    }
}
