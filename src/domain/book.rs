//! The book record and the payloads that create or modify it.

use crate::domain::coerce::{is_truthy, parse_int, text_of};
use crate::domain::errors::{CatalogError, CatalogResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use utoipa::ToSchema;

const BOOK_ID: &str = "bookId";
const TITLE: &str = "title";
const AUTHOR: &str = "author";
const PUBLICATION_YEAR: &str = "publicationYear";

/// A single catalog entry, identified by `bookId`.
///
/// Any JSON object converts into a `Book`. Stored values of the four modelled keys that do
/// not fit their type are kept in `extra` next to unknown keys, and `extra` is written back
/// verbatim, so a load -> save cycle never drops data it does not understand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", try_from = "JsonValue", into = "JsonValue")]
pub struct Book {
    pub book_id: String,
    pub title: String,
    pub author: String,
    /// `None` when the supplied year was not a number (stored as `null`).
    pub publication_year: Option<i64>,
    #[serde(skip)]
    pub extra: Map<String, JsonValue>,
}

impl Book {
    pub fn new(
        book_id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        publication_year: Option<i64>,
    ) -> Self {
        Self {
            book_id: book_id.into(),
            title: title.into(),
            author: author.into(),
            publication_year,
            extra: Map::new(),
        }
    }

    fn set_title(&mut self, title: String) {
        self.extra.remove(TITLE);
        self.title = title;
    }

    fn set_author(&mut self, author: String) {
        self.extra.remove(AUTHOR);
        self.author = author;
    }

    fn set_publication_year(&mut self, year: Option<i64>) {
        self.extra.remove(PUBLICATION_YEAR);
        self.publication_year = year;
    }
}

fn text_field(value: JsonValue, key: &str, extra: &mut Map<String, JsonValue>) -> String {
    match value {
        JsonValue::String(s) => s,
        other => {
            let text = if other.is_null() { String::new() } else { text_of(&other) };
            extra.insert(key.to_string(), other);
            text
        }
    }
}

impl TryFrom<JsonValue> for Book {
    type Error = String;

    fn try_from(value: JsonValue) -> Result<Self, Self::Error> {
        let JsonValue::Object(fields) = value else {
            return Err(format!("book record must be a JSON object, got {}", value));
        };

        let mut book = Book::default();
        for (key, value) in fields {
            match key.as_str() {
                BOOK_ID => book.book_id = text_field(value, BOOK_ID, &mut book.extra),
                TITLE => book.title = text_field(value, TITLE, &mut book.extra),
                AUTHOR => book.author = text_field(value, AUTHOR, &mut book.extra),
                PUBLICATION_YEAR => match value.as_i64() {
                    Some(year) => book.publication_year = Some(year),
                    None if value.is_null() => book.publication_year = None,
                    None => {
                        book.publication_year = parse_int(&value);
                        book.extra.insert(key, value);
                    }
                },
                _ => {
                    book.extra.insert(key, value);
                }
            }
        }
        Ok(book)
    }
}

impl From<Book> for JsonValue {
    fn from(book: Book) -> Self {
        let mut out = Map::new();
        out.insert(BOOK_ID.to_string(), JsonValue::String(book.book_id));
        out.insert(TITLE.to_string(), JsonValue::String(book.title));
        out.insert(AUTHOR.to_string(), JsonValue::String(book.author));
        out.insert(
            PUBLICATION_YEAR.to_string(),
            book.publication_year.map(JsonValue::from).unwrap_or(JsonValue::Null),
        );
        // Raw values win over the typed ones they shadow.
        for (key, value) in book.extra {
            out.insert(key, value);
        }
        JsonValue::Object(out)
    }
}

/// Create payload, as sent by a client.
///
/// Fields are kept as raw JSON so that numeric strings, numbers and empty inputs can be
/// told apart before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "B1")]
    pub book_id: Option<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "Dune")]
    pub title: Option<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "Herbert")]
    pub author: Option<JsonValue>,
    /// Number or numeric string; coerced to an integer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "1965")]
    pub publication_year: Option<JsonValue>,
}

impl NewBook {
    pub fn new(
        book_id: impl Into<JsonValue>,
        title: impl Into<JsonValue>,
        author: impl Into<JsonValue>,
        publication_year: impl Into<JsonValue>,
    ) -> Self {
        Self {
            book_id: Some(book_id.into()),
            title: Some(title.into()),
            author: Some(author.into()),
            publication_year: Some(publication_year.into()),
        }
    }

    /// Validates that every field is supplied and builds the record to insert.
    pub fn into_book(self) -> CatalogResult<Book> {
        match (self.book_id, self.title, self.author, self.publication_year) {
            (Some(book_id), Some(title), Some(author), Some(year))
                if is_truthy(&book_id)
                    && is_truthy(&title)
                    && is_truthy(&author)
                    && is_truthy(&year) =>
            {
                Ok(Book::new(
                    text_of(&book_id),
                    text_of(&title),
                    text_of(&author),
                    parse_int(&year),
                ))
            }
            _ => Err(CatalogError::MissingFields),
        }
    }
}

/// Partial update payload.
///
/// A field that is absent or falsy (`null`, `""`, `0`, `false`) keeps the stored value, so a
/// year of `0` can not be written through an update. `bookId` is not updatable; it is ignored
/// if present in the body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub title: Option<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub author: Option<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub publication_year: Option<JsonValue>,
}

impl BookPatch {
    pub fn title(title: impl Into<JsonValue>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Merges supplied fields over `book`.
    pub fn apply(&self, book: &mut Book) {
        if let Some(title) = self.title.as_ref().filter(|v| is_truthy(v)) {
            book.set_title(text_of(title));
        }
        if let Some(author) = self.author.as_ref().filter(|v| is_truthy(v)) {
            book.set_author(text_of(author));
        }
        if let Some(year) = self.publication_year.as_ref().filter(|v| is_truthy(v)) {
            book.set_publication_year(parse_int(year));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dune() -> Book {
        Book::new("B1", "Dune", "Herbert", Some(1965))
    }

    #[test]
    fn string_year_is_coerced() {
        let book = NewBook::new("B1", "Dune", "Herbert", "1965").into_book().unwrap();
        assert_eq!(book, dune());
    }

    #[test]
    fn non_numeric_year_is_kept_as_null() {
        let book = NewBook::new("B1", "Dune", "Herbert", "soon").into_book().unwrap();
        assert_eq!(book.publication_year, None);
        let stored = serde_json::to_value(&book).unwrap();
        assert_eq!(stored["publicationYear"], JsonValue::Null);
    }

    #[test]
    fn every_field_is_required() {
        let missing_author = NewBook {
            author: None,
            ..NewBook::new("B1", "Dune", "Herbert", 1965)
        };
        assert!(matches!(
            missing_author.into_book(),
            Err(CatalogError::MissingFields)
        ));

        let empty_title = NewBook::new("B1", "", "Herbert", 1965);
        assert!(matches!(empty_title.into_book(), Err(CatalogError::MissingFields)));

        let zero_year = NewBook::new("B1", "Dune", "Herbert", 0);
        assert!(matches!(zero_year.into_book(), Err(CatalogError::MissingFields)));
    }

    #[test]
    fn numeric_id_is_stored_as_text() {
        let book = NewBook::new(7, "Dune", "Herbert", 1965).into_book().unwrap();
        assert_eq!(book.book_id, "7");
    }

    #[test]
    fn patch_keeps_omitted_fields() {
        let mut book = dune();
        BookPatch::title("Dune Messiah").apply(&mut book);
        assert_eq!(book.title, "Dune Messiah");
        assert_eq!(book.author, "Herbert");
        assert_eq!(book.publication_year, Some(1965));
        assert_eq!(book.book_id, "B1");
    }

    #[test]
    fn patch_ignores_falsy_values() {
        let mut book = dune();
        let patch: BookPatch = serde_json::from_value(json!({
            "title": "",
            "author": null,
            "publicationYear": 0,
            "bookId": "B9"
        }))
        .unwrap();
        patch.apply(&mut book);
        assert_eq!(book, dune());
    }

    #[test]
    fn patch_coerces_year() {
        let mut book = dune();
        let patch: BookPatch =
            serde_json::from_value(json!({ "publicationYear": "1966" })).unwrap();
        patch.apply(&mut book);
        assert_eq!(book.publication_year, Some(1966));
    }

    #[test]
    fn null_year_on_disk_round_trips() {
        let raw = json!({ "bookId": "B2", "title": "T", "author": "A", "publicationYear": null });
        let book: Book = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(book.publication_year, None);
        assert_eq!(serde_json::to_value(&book).unwrap(), raw);
    }

    #[test]
    fn unknown_keys_survive_a_rewrite() {
        let raw = json!({
            "bookId": "B1", "title": "Dune", "author": "Herbert",
            "publicationYear": 1965, "isbn": "978"
        });
        let mut book = Book::try_from(raw).unwrap();
        assert_eq!(book.extra.get("isbn"), Some(&json!("978")));

        BookPatch::title("Dune Messiah").apply(&mut book);
        let written = JsonValue::from(book);
        assert_eq!(written["isbn"], json!("978"));
        assert_eq!(written["title"], json!("Dune Messiah"));
    }

    #[test]
    fn off_type_values_are_read_leniently_and_kept() {
        let raw = json!({ "bookId": 7, "title": "Emma", "publicationYear": "1900" });
        let book = Book::try_from(raw).unwrap();
        assert_eq!(book.book_id, "7");
        assert_eq!(book.author, "");
        assert_eq!(book.publication_year, Some(1900));

        let written = JsonValue::from(book);
        assert_eq!(written["bookId"], json!(7));
        assert_eq!(written["publicationYear"], json!("1900"));
    }

    #[test]
    fn patched_field_replaces_kept_raw_value() {
        let raw = json!({ "bookId": "B3", "title": "T", "author": "A", "publicationYear": "1900" });
        let mut book = Book::try_from(raw).unwrap();
        let patch: BookPatch =
            serde_json::from_value(json!({ "publicationYear": 1901 })).unwrap();
        patch.apply(&mut book);
        assert_eq!(JsonValue::from(book)["publicationYear"], json!(1901));
    }

    #[test]
    fn non_objects_are_not_books() {
        assert!(Book::try_from(json!("B1")).is_err());
        assert!(serde_json::from_value::<Book>(json!([1, 2])).is_err());
    }
}
