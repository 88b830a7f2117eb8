//! Calendar month selection for the events view.

#[cfg(test)]
#[path = "period_test.rs"]
mod period_test;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar month. `month` is 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub year: i32,
    pub month: u32,
}

impl Period {
    /// The month containing the local date right now.
    #[must_use]
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self { year: today.year(), month: today.month() }
    }

    #[must_use]
    pub fn next(self) -> Self {
        if self.month >= 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        if self.month <= 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    /// Human label such as `March 2024`.
    #[must_use]
    pub fn label(self) -> String {
        let index = usize::try_from(self.month.saturating_sub(1)).unwrap_or_default();
        let name = MONTH_NAMES.get(index).copied().unwrap_or("?");
        format!("{name} {}", self.year)
    }
}
