//! Article collection model.

use chrono::NaiveDate;

/// A curated article with a rich-text body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub heading: String,
    pub subheading: String,
    pub author: String,
    pub date: NaiveDate,

    /// Name of the source outlet, if attributed
    pub media_name: Option<String>,

    /// Link to the source, if attributed
    pub media_url: Option<String>,

    /// Body markup, converted to blocks during export
    pub body: String,
}

/// An ordered collection of articles with document-level metadata.
///
/// Articles are exported in the order they appear here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    pub title: String,
    pub description: Option<String>,
    pub articles: Vec<Article>,
}
