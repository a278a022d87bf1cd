use std::fmt;
use std::str::FromStr;

use super::task::{Category, Task};

/// Which subset of tasks the list shows. Session state only, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    /// High-priority tasks
    Urgent,
    Category(Category),
}

impl Filter {
    /// The pills shown in the filter bar, in display order
    pub fn pills() -> Vec<Filter> {
        let mut pills = vec![Filter::All, Filter::Urgent];
        pills.extend(Category::BUILT_IN.iter().cloned().map(Filter::Category));
        pills
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Urgent => task.is_urgent(),
            Filter::Category(c) => &task.category == c,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Filter::All => "All".to_string(),
            Filter::Urgent => "Urgent".to_string(),
            Filter::Category(c) => c.label(),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str("all"),
            Filter::Urgent => f.write_str("urgent"),
            Filter::Category(c) => f.write_str(c.as_str()),
        }
    }
}

impl FromStr for Filter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(if s.is_empty() || s.eq_ignore_ascii_case("all") {
            Filter::All
        } else if s.eq_ignore_ascii_case("urgent") {
            Filter::Urgent
        } else {
            Filter::Category(Category::from(s))
        })
    }
}
