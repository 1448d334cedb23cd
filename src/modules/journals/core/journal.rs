// Journal is the record of one meal, as stored and as returned over HTTP.
//
// Notes
// - created_at is epoch milliseconds.
// - MealCategory travels as its integer code, never as a string.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown meal category: {0}")]
pub struct UnknownMealCategory(pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum MealCategory {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealCategory {
    pub fn code(self) -> u8 {
        match self {
            MealCategory::Breakfast => 1,
            MealCategory::Lunch => 2,
            MealCategory::Dinner => 3,
            MealCategory::Snack => 4,
        }
    }
}

impl From<MealCategory> for u8 {
    fn from(category: MealCategory) -> Self {
        category.code()
    }
}

impl TryFrom<u8> for MealCategory {
    type Error = UnknownMealCategory;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(MealCategory::Breakfast),
            2 => Ok(MealCategory::Lunch),
            3 => Ok(MealCategory::Dinner),
            4 => Ok(MealCategory::Snack),
            other => Err(UnknownMealCategory(other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journal {
    pub journal_id: String,
    pub name: String,
    pub category: MealCategory,
    pub created_at: i64,
}
