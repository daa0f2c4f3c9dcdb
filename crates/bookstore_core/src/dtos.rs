//! Data transfer contracts
//!
//! The read and write shapes exchanged between the view-model layer and the book service, plus
//! the category enumeration and the price bounds the edit form validates against.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lowest price accepted for a book, inclusive.
pub const MIN_PRICE: f64 = 0.01;

/// Highest price accepted for a book, inclusive.
pub const MAX_PRICE: f64 = 10_000.0;

/// The fixed set of book genres. `Undefined` is the sentinel a freshly created edit session
/// starts from.
#[non_exhaustive]
#[derive(Serialize, Debug, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(rename_all = "PascalCase")]
pub enum BookCategory {
    Undefined,
    Adventure,
    Biography,
    Dystopia,
    Fantastic,
    Horror,
    Science,
    ScienceFiction,
    Poetry,
}

impl BookCategory {
    /// All categories in picker order, `Undefined` first.
    pub const ALL: [Self; 9] = [
        Self::Undefined,
        Self::Adventure,
        Self::Biography,
        Self::Dystopia,
        Self::Fantastic,
        Self::Horror,
        Self::Science,
        Self::ScienceFiction,
        Self::Poetry,
    ];

    /// The label shown in category pickers and log lines.
    #[must_use]
    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Undefined => "Undefined",
            Self::Adventure => "Adventure",
            Self::Biography => "Biography",
            Self::Dystopia => "Dystopia",
            Self::Fantastic => "Fantastic",
            Self::Horror => "Horror",
            Self::Science => "Science",
            Self::ScienceFiction => "Science fiction",
            Self::Poetry => "Poetry",
        }
    }
}

impl core::fmt::Display for BookCategory {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl Default for BookCategory {
    #[inline]
    fn default() -> Self {
        Self::Undefined
    }
}

/// A publish date equal to the epoch sentinel counts as "no date chosen".
///
/// INFO: "publish date required" is deliberately implemented as "not equal to the epoch
/// sentinel", not as "explicitly picked by the user". A freshly defaulted date (today) passes.
/// Whether that is intentional or a validation gap is ambiguous; this mirrors the observed
/// behavior instead of tightening it.
#[must_use]
#[inline]
pub fn is_unset_publish_date(date: NaiveDate) -> bool {
    date == NaiveDate::default()
}

/// Read shape of a book, as returned by the service.
#[non_exhaustive]
#[derive(Serialize, Debug, Deserialize, Clone, PartialEq)]
pub struct BookDto {
    pub id: i64,
    pub name: String,
    pub category: BookCategory,
    pub publish_date: NaiveDate,
    pub price: f64,
}

impl BookDto {
    #[must_use]
    #[inline]
    pub const fn new(
        id: i64,
        name: String,
        category: BookCategory,
        publish_date: NaiveDate,
        price: f64,
    ) -> Self {
        Self {
            id,
            name,
            category,
            publish_date,
            price,
        }
    }
}

/// Write shape of a book, carried by both the create and the update operation.
#[non_exhaustive]
#[derive(Serialize, Debug, Deserialize, Clone, PartialEq)]
pub struct CreateUpdateBookDto {
    pub name: String,
    pub category: BookCategory,
    pub publish_date: NaiveDate,
    pub price: f64,
}

impl CreateUpdateBookDto {
    #[must_use]
    #[inline]
    pub const fn new(
        name: String,
        category: BookCategory,
        publish_date: NaiveDate,
        price: f64,
    ) -> Self {
        Self {
            name,
            category,
            publish_date,
            price,
        }
    }
}
