use std::fmt;

use serde::{Deserialize, Serialize};

/// One stored book. `id` is `None` until the store assigns one on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: Option<i32>,
    pub title: String,
    pub author_name: String,
}

impl Book {
    pub fn new(title: &str, author_name: &str) -> Self {
        Book {
            id: None,
            title: title.to_owned(),
            author_name: author_name.to_owned(),
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "Book({}, {}, {})", id, self.title, self.author_name),
            None => write!(f, "Book(unsaved, {}, {})", self.title, self.author_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_all_fields() {
        let book = Book {
            id: Some(7),
            title: "Invisible Cities".to_string(),
            author_name: "Italo Calvino".to_string(),
        };
        assert_eq!(book.to_string(), "Book(7, Invisible Cities, Italo Calvino)");
    }

    #[test]
    fn display_marks_unsaved_books() {
        let book = Book::new("Pedro Paramo", "Juan Rulfo");
        assert_eq!(book.to_string(), "Book(unsaved, Pedro Paramo, Juan Rulfo)");
    }

    #[test]
    fn equality_is_structural() {
        let a = Book::new("Ficciones", "Jorge Luis Borges");
        let b = Book::new("Ficciones", "Jorge Luis Borges");
        assert_eq!(a, b);

        let mut c = b.clone();
        c.id = Some(1);
        assert_ne!(a, c);
    }
}
