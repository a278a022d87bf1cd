use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Task priority. Only affects the badge shown on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Short badge label; low priority has none
    pub fn badge(self) -> Option<&'static str> {
        match self {
            Priority::Low => None,
            Priority::Medium => Some("Med"),
            Priority::High => Some("High"),
        }
    }

    /// Next value in `ALL`, wrapping around
    pub fn next(self) -> Priority {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High => Priority::Low,
        }
    }

    pub fn prev(self) -> Priority {
        match self {
            Priority::Low => Priority::High,
            Priority::Medium => Priority::Low,
            Priority::High => Priority::Medium,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" | "med" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(format!("unknown priority '{}' (expected low, medium or high)", other)),
        }
    }
}

/// Task category. `personal` and `work` are built in; any other name is
/// carried through as `Other` with its case intact. Names compare without
/// regard to case.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    #[default]
    Personal,
    Work,
    Other(String),
}

impl Category {
    /// Categories offered by the filter bar and the creation form
    pub const BUILT_IN: [Category; 2] = [Category::Personal, Category::Work];

    pub fn as_str(&self) -> &str {
        match self {
            Category::Personal => "personal",
            Category::Work => "work",
            Category::Other(name) => name,
        }
    }

    /// Display label with a leading capital ("work" -> "Work")
    pub fn label(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Category::Personal => "🏠",
            Category::Work => "💼",
            Category::Other(_) => "📁",
        }
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        folded(self.as_str()).eq(folded(other.as_str()))
    }
}

impl Eq for Category {}

impl Hash for Category {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in folded(self.as_str()) {
            c.hash(state);
        }
    }
}

fn folded(name: &str) -> impl Iterator<Item = char> + '_ {
    name.chars().flat_map(char::to_lowercase)
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        let name = s.trim();
        if name.eq_ignore_ascii_case("personal") {
            Category::Personal
        } else if name.eq_ignore_ascii_case("work") {
            Category::Work
        } else {
            Category::Other(name.to_string())
        }
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        Category::from(s.to_string())
    }
}

impl From<Category> for String {
    fn from(c: Category) -> Self {
        c.as_str().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single task as persisted under the storage key.
///
/// Field names match the stored JSON layout exactly:
/// `id, title, desc, date, priority, category, completed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    /// Free text; empty means no description
    #[serde(default)]
    pub desc: String,
    /// Due date. Stored as `""` when absent.
    #[serde(default, with = "date_field")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create an incomplete task with no description or date
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Task {
            id,
            title: title.into(),
            desc: String::new(),
            date: None,
            priority: Priority::default(),
            category: Category::default(),
            completed: false,
        }
    }

    pub fn has_desc(&self) -> bool {
        !self.desc.is_empty()
    }

    pub fn is_urgent(&self) -> bool {
        self.priority == Priority::High
    }
}

/// Fields collected for a task that does not exist yet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub desc: String,
    pub date: Option<NaiveDate>,
    pub priority: Priority,
    pub category: Category,
}

/// Parse a `YYYY-MM-DD` date. Empty input means no date.
pub fn parse_date(s: &str) -> Result<Option<NaiveDate>, chrono::ParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map(Some)
}

mod date_field {
    use super::*;

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => s.serialize_str(&d.format("%Y-%m-%d").to_string()),
            None => s.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        match raw {
            None => Ok(None),
            Some(s) => parse_date(&s).map_err(serde::de::Error::custom),
        }
    }
}
