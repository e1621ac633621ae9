//! Books repository for database operations

use sqlx::{Pool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookQuery},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    /// One page of books ordered by title, with the total count
    pub async fn list(&self, query: &BookQuery) -> AppResult<(Vec<Book>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;

        let books = sqlx::query_as::<_, Book>(
            "SELECT * FROM books ORDER BY title, id LIMIT $1 OFFSET $2",
        )
        .bind(query.per_page())
        .bind(query.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok((books, total))
    }

    /// Insert a book
    pub async fn create(&self, book: &Book) -> AppResult<Book> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (id, isbn, title, author, genre, price, condition)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(book.id)
        .bind(&book.isbn)
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.genre)
        .bind(book.price)
        .bind(book.condition)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Insert many books in a single statement
    pub async fn create_many(&self, books: &[Book]) -> AppResult<u64> {
        if books.is_empty() {
            return Ok(0);
        }

        let mut builder = QueryBuilder::<Postgres>::new(
            "INSERT INTO books (id, isbn, title, author, genre, price, condition) ",
        );
        builder.push_values(books, |mut row, book| {
            row.push_bind(book.id)
                .push_bind(&book.isbn)
                .push_bind(&book.title)
                .push_bind(&book.author)
                .push_bind(&book.genre)
                .push_bind(book.price)
                .push_bind(book.condition);
        });

        let result = builder.build().execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    /// Delete a book
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Book not found".to_string()));
        }
        Ok(())
    }

    /// Remove every book
    pub async fn delete_all(&self) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM books").execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}
