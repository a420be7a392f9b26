use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Spending/income category of a cash transaction.
///
/// A closed enumeration: the same set drives sign normalization,
/// category filtering, and the expense breakdown. `Salary` is the only
/// income category; every other category is an expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Food,
    Rent,
    Utilities,
    Entertainment,
    Travel,
    Shopping,
    Health,
    Salary,
    /// Catch-all. Records arriving from the remote store with a missing,
    /// empty, or unrecognized category string land here.
    Other,
}

impl Category {
    /// Salary is income; everything else is an expense.
    pub fn is_income(&self) -> bool {
        matches!(self, Category::Salary)
    }

    /// All categories in their display order.
    pub const ALL: [Category; 9] = [
        Category::Food,
        Category::Rent,
        Category::Utilities,
        Category::Entertainment,
        Category::Travel,
        Category::Shopping,
        Category::Health,
        Category::Salary,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Rent => "Rent",
            Category::Utilities => "Utilities",
            Category::Entertainment => "Entertainment",
            Category::Travel => "Travel",
            Category::Shopping => "Shopping",
            Category::Health => "Health",
            Category::Salary => "Salary",
            Category::Other => "Other",
        }
    }

    /// Resolve a wire-format category name. Anything unrecognized —
    /// including the empty string — resolves to `Other`.
    pub fn from_name(name: &str) -> Self {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == name)
            .unwrap_or(Category::Other)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Category::from_name(&name))
    }
}

/// A single signed cash movement.
///
/// The stored `amount` carries the category's sign: positive for `Salary`,
/// negative for every expense category. Raw user input goes through
/// [`TransactionDraft`], which normalizes the sign on the way in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Opaque unique identifier (assigned locally, UUID v4 string)
    pub id: String,

    /// Signed amount: `Salary` ⇒ ≥ 0, all other categories ⇒ ≤ 0
    pub amount: f64,

    #[serde(default = "default_category")]
    pub category: Category,

    /// Date of the transaction (daily granularity)
    pub date: NaiveDate,
}

fn default_category() -> Category {
    Category::Other
}

/// Raw user input for creating or editing a transaction.
///
/// `amount` is the unsigned magnitude as entered; the sign is derived from
/// the category when the draft is materialized.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub amount: f64,
    pub category: Category,
    pub date: NaiveDate,
}

impl TransactionDraft {
    pub fn new(amount: f64, category: Category, date: NaiveDate) -> Self {
        Self {
            amount,
            category,
            date,
        }
    }

    /// The signed amount this draft stores: `+|amount|` for income
    /// categories, `-|amount|` otherwise.
    pub fn signed_amount(&self) -> f64 {
        if self.category.is_income() {
            self.amount.abs()
        } else {
            -self.amount.abs()
        }
    }
}
