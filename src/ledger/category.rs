use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorises transactions for aggregation and chart display.
///
/// Serialized under the menu labels shown to users, not the variant names.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    #[serde(rename = "Food & Dining")]
    FoodAndDining,
    #[serde(rename = "Transportation")]
    Transportation,
    #[serde(rename = "Salary")]
    Salary,
    #[serde(rename = "Entertainment")]
    Entertainment,
    #[serde(rename = "Freelance")]
    Freelance,
    #[serde(rename = "Other")]
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::FoodAndDining,
        Category::Transportation,
        Category::Salary,
        Category::Entertainment,
        Category::Freelance,
        Category::Other,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::FoodAndDining => "Food & Dining",
            Category::Transportation => "Transportation",
            Category::Salary => "Salary",
            Category::Entertainment => "Entertainment",
            Category::Freelance => "Freelance",
            Category::Other => "Other",
        }
    }

    /// Resolves a menu label back to its category.
    pub fn from_name(name: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::FoodAndDining
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_roundtrip() {
        for category in Category::ALL {
            assert_eq!(Category::from_name(category.name()), Some(category));
        }
        assert_eq!(Category::from_name("Groceries"), None);
    }

    #[test]
    fn serializes_as_menu_label() {
        let json = serde_json::to_string(&Category::FoodAndDining).unwrap();
        assert_eq!(json, "\"Food & Dining\"");
        let parsed: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Category::FoodAndDining);
    }
}
