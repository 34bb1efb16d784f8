use serde::{Deserialize, Serialize};
use std::fmt;

/// PII category of a detected entity.
///
/// Variants are declared in precedence order: when the same string is
/// claimed by two categories, the one declared first keeps it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Name,
    Email,
    Iban,
    Bic,
    Telephone,
    Numeric,
}

impl Category {
    /// All categories, highest precedence first.
    pub const PRECEDENCE: [Category; 6] = [
        Category::Name,
        Category::Email,
        Category::Iban,
        Category::Bic,
        Category::Telephone,
        Category::Numeric,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Name => "name",
            Category::Email => "email",
            Category::Iban => "iban",
            Category::Bic => "bic",
            Category::Telephone => "telephone",
            Category::Numeric => "numeric",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
