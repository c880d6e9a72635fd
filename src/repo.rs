use anyhow::Result;
use libsql::Connection;

use crate::model::Book;

/// Translation layer between `Book` values and rows in the `books` table.
/// Borrows one connection for its lifetime and holds no other state.
pub struct BookRepo<'a> {
    conn: &'a Connection,
}

impl<'a> BookRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub async fn all(&self) -> Result<Vec<Book>> {
        let query = "SELECT id, title, author_name FROM books";

        let mut rows = self.conn.query(query, ()).await?;
        let mut books = Vec::new();

        while let Some(row) = rows.next().await? {
            books.push(self.row_to_book(&row)?);
        }

        Ok(books)
    }

    pub async fn find(&self, id: i32) -> Result<Option<Book>> {
        let query = "SELECT id, title, author_name FROM books WHERE id = ?";

        let mut rows = self.conn.query(query, libsql::params![id]).await?;

        if let Some(row) = rows.next().await? {
            Ok(Some(self.row_to_book(&row)?))
        } else {
            Ok(None)
        }
    }

    /// Inserts `title` and `author_name`; the store assigns the id. The
    /// assigned id is not reported back, callers re-query to learn it.
    pub async fn create(&self, book: &Book) -> Result<()> {
        let query = "INSERT INTO books (title, author_name) VALUES (?, ?)";

        self.conn
            .execute(query, libsql::params![book.title.as_str(), book.author_name.as_str()])
            .await?;
        Ok(())
    }

    /// Deleting an id with no row is a no-op, not an error.
    pub async fn delete(&self, id: i32) -> Result<()> {
        self.conn
            .execute("DELETE FROM books WHERE id = ?", libsql::params![id])
            .await?;
        Ok(())
    }

    fn row_to_book(&self, row: &libsql::Row) -> Result<Book> {
        Ok(Book {
            id: Some(row.get(0)?),
            title: row.get(1)?,
            author_name: row.get(2)?,
        })
    }
}
