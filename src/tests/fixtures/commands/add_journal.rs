// Shared test fixture for the AddJournal command.

use crate::modules::journals::core::journal::MealCategory;
use crate::modules::journals::use_cases::add_journal::command::AddJournal;

pub struct AddJournalBuilder {
    inner: AddJournal,
}

impl Default for AddJournalBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl AddJournalBuilder {
    pub fn new() -> Self {
        Self {
            inner: AddJournal {
                journal_id: "journal-fixed-0001".to_string(),
                name: "sunny side up".to_string(),
                category: MealCategory::Breakfast,
                created_at: 1_700_000_000_000,
            },
        }
    }

    pub fn journal_id(mut self, v: impl Into<String>) -> Self {
        self.inner.journal_id = v.into();
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn category(mut self, v: MealCategory) -> Self {
        self.inner.category = v;
        self
    }

    pub fn created_at(mut self, v: i64) -> Self {
        self.inner.created_at = v;
        self
    }

    pub fn build(self) -> AddJournal {
        self.inner
    }
}

#[cfg(test)]
mod add_journal_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = AddJournalBuilder::default()
            .journal_id("jid-123")
            .name("ramen")
            .category(MealCategory::Dinner)
            .created_at(3333)
            .build();

        assert_eq!(custom.journal_id, "jid-123");
        assert_eq!(custom.name, "ramen");
        assert_eq!(custom.category, MealCategory::Dinner);
        assert_eq!(custom.created_at, 3333);
    }
}
