use crate::database::types::BookRow;
use crate::dtos::{BookDto, CreateUpdateBookDto};
use crate::service::{BookService, BookServiceError};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use std::path::Path;

const BOOK_COLUMNS: &str = "id, name, category, publish_date, price, date_added, last_modified";

pub struct Db {
    pool: SqlitePool,
}

impl Db {
    #[allow(
        clippy::missing_inline_in_public_items,
        reason = "Called once at start of program"
    )]
    pub async fn init(path: &Path) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::new()
            .foreign_keys(true)
            .create_if_missing(true)
            .filename(path);
        let pool = SqlitePool::connect_with(options).await?;
        sqlx::migrate!().run(&pool).await?;
        log::info!("Successfully opened database at {}", path.display());

        Ok(Self { pool })
    }

    #[allow(
        clippy::missing_inline_in_public_items,
        reason = "Called once at end of program"
    )]
    pub async fn close(&self) {
        self.pool.close().await;
    }

    #[allow(
        clippy::missing_inline_in_public_items,
        reason = "Called only when the book list refreshes"
    )]
    pub async fn fetch_books_query(&self) -> Result<Vec<BookRow>, sqlx::Error> {
        sqlx::query_as(
            "SELECT id, name, category, publish_date, price, date_added, last_modified \
             FROM books \
             ORDER BY date_added ASC, id ASC;",
        )
        .fetch_all(&self.pool)
        .await
    }

    #[allow(clippy::missing_inline_in_public_items, reason = "Called rarely")]
    pub async fn fetch_book_query(&self, id: i64) -> Result<Option<BookRow>, sqlx::Error> {
        sqlx::query_as(
            "SELECT id, name, category, publish_date, price, date_added, last_modified \
             FROM books WHERE id = ?;",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    #[allow(clippy::missing_inline_in_public_items, reason = "Called rarely")]
    pub async fn insert_book(&self, input: &CreateUpdateBookDto) -> Result<BookRow, sqlx::Error> {
        let now = Utc::now().naive_utc();
        let row: BookRow = sqlx::query_as(&format!(
            "INSERT INTO books (name, category, publish_date, price, date_added, last_modified) \
             VALUES (?, ?, ?, ?, ?, ?) \
             RETURNING {BOOK_COLUMNS};"
        ))
        .bind(&input.name)
        .bind(input.category)
        .bind(input.publish_date)
        .bind(input.price)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        log::info!("Inserted book {} (id={})", row.name, row.id);
        Ok(row)
    }

    #[allow(clippy::missing_inline_in_public_items, reason = "Called rarely")]
    pub async fn update_book(
        &self,
        id: i64,
        input: &CreateUpdateBookDto,
    ) -> Result<Option<BookRow>, sqlx::Error> {
        let now = Utc::now().naive_utc();
        let row: Option<BookRow> = sqlx::query_as(&format!(
            "UPDATE books \
             SET name = ?, category = ?, publish_date = ?, price = ?, last_modified = ? \
             WHERE id = ? \
             RETURNING {BOOK_COLUMNS};"
        ))
        .bind(&input.name)
        .bind(input.category)
        .bind(input.publish_date)
        .bind(input.price)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        if row.is_some() {
            log::info!("Updated book id={id}");
        }
        Ok(row)
    }

    #[allow(clippy::missing_inline_in_public_items, reason = "Called rarely")]
    pub async fn delete_book(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM books WHERE id = ?;")
            .bind(id)
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            log::info!("Deleted book id={id}");
        }
        Ok(deleted)
    }
}

#[async_trait]
impl BookService for Db {
    async fn list(&self) -> Result<Vec<BookDto>, BookServiceError> {
        let rows = self.fetch_books_query().await?;
        Ok(rows.into_iter().map(BookDto::from).collect())
    }

    async fn get(&self, id: i64) -> Result<BookDto, BookServiceError> {
        let row = self.fetch_book_query(id).await?;
        row.map(BookDto::from)
            .ok_or(BookServiceError::BookNotFound(id))
    }

    async fn create(&self, input: CreateUpdateBookDto) -> Result<BookDto, BookServiceError> {
        let row = self.insert_book(&input).await?;
        Ok(BookDto::from(row))
    }

    async fn update(
        &self,
        id: i64,
        input: CreateUpdateBookDto,
    ) -> Result<BookDto, BookServiceError> {
        let row = self.update_book(id, &input).await?;
        row.map(BookDto::from)
            .ok_or(BookServiceError::BookNotFound(id))
    }

    async fn delete(&self, id: i64) -> Result<(), BookServiceError> {
        if self.delete_book(id).await? {
            Ok(())
        } else {
            Err(BookServiceError::BookNotFound(id))
        }
    }
}
