use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DataValidationError;

/// Closed set of classification tags for a Product
///
/// Categories are persisted and serialized by enumeration name
/// (`"CLOTHS"`, `"FOOD"`, ...). Parsing is exact-match; an unknown name
/// fails fast rather than mapping to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Unknown,
    Cloths,
    Food,
    Housewares,
    Automotive,
    Tools,
}

impl Category {
    /// Every member of the closed set, in declaration order
    pub const ALL: [Category; 6] = [
        Category::Unknown,
        Category::Cloths,
        Category::Food,
        Category::Housewares,
        Category::Automotive,
        Category::Tools,
    ];

    /// Get the enumeration name for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Unknown => "UNKNOWN",
            Category::Cloths => "CLOTHS",
            Category::Food => "FOOD",
            Category::Housewares => "HOUSEWARES",
            Category::Automotive => "AUTOMOTIVE",
            Category::Tools => "TOOLS",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Unknown
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DataValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "UNKNOWN" => Ok(Category::Unknown),
            "CLOTHS" => Ok(Category::Cloths),
            "FOOD" => Ok(Category::Food),
            "HOUSEWARES" => Ok(Category::Housewares),
            "AUTOMOTIVE" => Ok(Category::Automotive),
            "TOOLS" => Ok(Category::Tools),
            _ => Err(DataValidationError::UnknownCategory {
                name: s.to_string(),
            }),
        }
    }
}
