use crate::modules::journals::core::journal::{Journal, MealCategory};

pub fn make_journal() -> Journal {
    Journal {
        journal_id: "journal-fixed-0001".to_string(),
        name: "sunny side up".to_string(),
        category: MealCategory::Breakfast,
        created_at: 1_700_000_000_000,
    }
}
