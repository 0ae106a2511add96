use serde::{Deserialize, Serialize};

use super::formats::{self, Formats, COVER_IMAGE_FORMAT};
use super::text_source;
use crate::ids::BookId;

/// Placeholder shown when a record lists no authors.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// List-view record of a catalog book.
///
/// Immutable once fetched; a re-fetch replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSummary {
    pub id: BookId,
    pub title: String,
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default, deserialize_with = "formats::null_as_empty")]
    pub formats: Formats,
}

impl BookSummary {
    /// Author names joined for display, or [`UNKNOWN_AUTHOR`].
    pub fn author_line(&self) -> String {
        if self.authors.is_empty() {
            return UNKNOWN_AUTHOR.to_string();
        }
        self.authors
            .iter()
            .map(|author| author.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn cover_image_url(&self) -> Option<&str> {
        self.formats.get(COVER_IMAGE_FORMAT)
    }

    pub fn plain_text_url(&self) -> Option<&str> {
        text_source::resolve(&self.formats)
    }
}

/// Detail record of one book, fetched by id.
///
/// Carries every list-view field plus the optional metadata the catalog adds
/// on the detail endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDetail {
    #[serde(flatten)]
    pub book: BookSummary,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub download_count: Option<u64>,
}

impl BookDetail {
    pub fn id(&self) -> BookId {
        self.book.id
    }

    pub fn title(&self) -> &str {
        &self.book.title
    }

    pub fn author_line(&self) -> String {
        self.book.author_line()
    }

    pub fn formats(&self) -> &Formats {
        &self.book.formats
    }
}

impl From<BookSummary> for BookDetail {
    fn from(book: BookSummary) -> Self {
        Self {
            book,
            subjects: Vec::new(),
            languages: Vec::new(),
            download_count: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_line_joins_names() {
        let book = BookSummary {
            id: BookId::new(1),
            title: "Good Omens".to_string(),
            authors: vec![Author::new("Pratchett, Terry"), Author::new("Gaiman, Neil")],
            formats: Formats::new(),
        };
        assert_eq!(book.author_line(), "Pratchett, Terry, Gaiman, Neil");
    }

    #[test]
    fn test_author_line_without_authors() {
        let book: BookSummary = serde_json::from_str(r#"{"id": 7, "title": "Anon"}"#).unwrap();
        assert_eq!(book.author_line(), UNKNOWN_AUTHOR);
        assert!(book.formats.is_empty());
    }

    #[test]
    fn test_cover_image_uses_exact_jpeg_key() {
        let json = r#"{
            "id": 1342,
            "title": "Pride and Prejudice",
            "authors": [{"name": "Austen, Jane", "birth_year": 1775}],
            "formats": {
                "image/jpeg": "https://example.org/cover.jpg",
                "text/plain; charset=us-ascii": "https://example.org/1342.txt"
            }
        }"#;
        let book: BookSummary = serde_json::from_str(json).unwrap();
        assert_eq!(book.cover_image_url(), Some("https://example.org/cover.jpg"));
        assert_eq!(book.plain_text_url(), Some("https://example.org/1342.txt"));
    }

    #[test]
    fn test_detail_reads_list_fields_and_extras() {
        let json = r#"{
            "id": 84,
            "title": "Frankenstein",
            "authors": [{"name": "Shelley, Mary Wollstonecraft"}],
            "subjects": ["Science fiction"],
            "languages": ["en"],
            "download_count": 90210,
            "formats": {"text/html": "https://example.org/84.html"}
        }"#;
        let detail: BookDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.id(), BookId::new(84));
        assert_eq!(detail.title(), "Frankenstein");
        assert_eq!(detail.languages, vec!["en".to_string()]);
        assert_eq!(detail.download_count, Some(90210));
        assert_eq!(detail.formats().get("text/html"), Some("https://example.org/84.html"));
    }

    #[test]
    fn test_null_formats_read_as_empty() {
        let book: BookSummary =
            serde_json::from_str(r#"{"id": 7, "title": "Anon", "formats": null}"#).unwrap();
        assert!(book.formats.is_empty());
        assert_eq!(book.plain_text_url(), None);

        let detail: BookDetail =
            serde_json::from_str(r#"{"id": 8, "title": "Anon II", "formats": null}"#).unwrap();
        assert!(detail.formats().is_empty());
    }
}
