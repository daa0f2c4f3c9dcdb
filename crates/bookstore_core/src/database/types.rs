use crate::dtos::{BookCategory, BookDto};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One row of the `books` table. Carries the bookkeeping timestamps the transfer shape does not.
#[non_exhaustive]
#[derive(Serialize, Debug, Deserialize, Clone, sqlx::FromRow)]
pub struct BookRow {
    pub id: i64,
    pub name: String,
    pub category: BookCategory,
    pub publish_date: NaiveDate,
    pub price: f64,
    pub date_added: NaiveDateTime,
    pub last_modified: NaiveDateTime,
}

impl From<BookRow> for BookDto {
    #[inline]
    fn from(row: BookRow) -> Self {
        Self::new(row.id, row.name, row.category, row.publish_date, row.price)
    }
}
