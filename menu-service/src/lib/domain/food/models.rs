use std::fmt;

use crate::domain::category::models::CategoryId;

/// Food as listed on the menu, with its category resolved to a name.
#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    pub id: FoodId,
    pub name: String,
    pub price: f64,
    pub category: String,
}

/// Food identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FoodId(pub i64);

impl fmt::Display for FoodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Writable fields of a food, used for both creation and full replacement.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodCommand {
    pub name: String,
    pub price: f64,
    pub category_id: CategoryId,
}
