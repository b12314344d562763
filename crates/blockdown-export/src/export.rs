//! Build the export document for an article collection.
//!
//! This is the one place article metadata and body content are
//! interleaved. The block order is fixed: collection title, optional
//! description, generation date, then per article its heading,
//! subheading, author line, optional source attribution, converted
//! body, and a separator after every article except the last.

use blockdown::BlockdownService;
use blockdown_core::{BlockStyle, Document, DocumentBlock, Formatting, Run, MUTED_COLOR};
use chrono::NaiveDate;
use log::debug;

use crate::collection::{Article, Collection};
use crate::ExportError;

/// Subheading text color
const SUBHEADING_COLOR: &str = "333333";

/// Separator rule color
const SEPARATOR_COLOR: &str = "CCCCCC";

/// Options for collection export
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Number of rule glyphs in the separator drawn between articles
    pub separator_width: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            separator_width: 50,
        }
    }
}

/// Builds export documents from collections
pub struct CollectionExporter {
    service: BlockdownService,
    options: ExportOptions,
}

impl CollectionExporter {
    /// Create an exporter with default conversion and export options
    pub fn new() -> Self {
        Self {
            service: BlockdownService::new(),
            options: ExportOptions::default(),
        }
    }

    /// Create an exporter with custom options
    pub fn with_options(service: BlockdownService, options: ExportOptions) -> Self {
        Self { service, options }
    }

    /// Build the full export document for a collection.
    ///
    /// `generated_on` is stamped into the document header; callers
    /// wanting the current date can use [`CollectionExporter::export_today`].
    pub fn build_document(
        &self,
        collection: &Collection,
        generated_on: NaiveDate,
    ) -> Result<Document, ExportError> {
        debug!(
            "building export document for \"{}\" ({} articles)",
            collection.title,
            collection.articles.len()
        );

        let mut document = Document::new();

        document.push(styled_paragraph(
            collection.title.clone(),
            Formatting {
                bold: true,
                ..Formatting::default()
            },
            BlockStyle {
                size: 32,
                color: None,
                italic: false,
                spacing_before: 0,
                spacing_after: 200,
            },
        ));

        if let Some(description) = &collection.description {
            document.push(styled_paragraph(
                description.clone(),
                Formatting {
                    italic: true,
                    ..Formatting::default()
                },
                BlockStyle {
                    size: 24,
                    color: None,
                    italic: false,
                    spacing_before: 0,
                    spacing_after: 400,
                },
            ));
        }

        document.push(styled_paragraph(
            format!("Generated on {}", format_date(generated_on)),
            Formatting::default(),
            BlockStyle {
                size: 20,
                color: Some(MUTED_COLOR.to_string()),
                italic: false,
                spacing_before: 0,
                spacing_after: 600,
            },
        ));

        for (index, article) in collection.articles.iter().enumerate() {
            self.push_article(article, &mut document)?;

            if index < collection.articles.len() - 1 {
                document.push(self.separator());
            }
        }

        Ok(document)
    }

    fn push_article(
        &self,
        article: &Article,
        document: &mut Document,
    ) -> Result<(), ExportError> {
        document.push(DocumentBlock::Heading {
            level: 1,
            runs: vec![Run::new(
                article.heading.as_str(),
                Formatting {
                    bold: true,
                    ..Formatting::default()
                },
            )],
            style: BlockStyle {
                size: 28,
                color: None,
                italic: false,
                spacing_before: 400,
                spacing_after: 200,
            },
        });

        document.push(styled_paragraph(
            article.subheading.clone(),
            Formatting {
                bold: true,
                ..Formatting::default()
            },
            BlockStyle {
                size: 22,
                color: Some(SUBHEADING_COLOR.to_string()),
                italic: false,
                spacing_before: 0,
                spacing_after: 200,
            },
        ));

        document.push(styled_paragraph(
            format!("By {} \u{2022} {}", article.author, format_date(article.date)),
            Formatting {
                italic: true,
                ..Formatting::default()
            },
            BlockStyle {
                size: 18,
                color: Some(MUTED_COLOR.to_string()),
                italic: false,
                spacing_before: 0,
                spacing_after: 300,
            },
        ));

        if let Some(attribution) = source_attribution(article) {
            document.push(styled_paragraph(
                attribution,
                Formatting {
                    italic: true,
                    ..Formatting::default()
                },
                BlockStyle {
                    size: 18,
                    color: Some(MUTED_COLOR.to_string()),
                    italic: false,
                    spacing_before: 0,
                    spacing_after: 200,
                },
            ));
        }

        let body = self.service.convert_html(&article.body)?;
        document.extend(body.blocks);

        Ok(())
    }

    fn separator(&self) -> DocumentBlock {
        styled_paragraph(
            "\u{2500}".repeat(self.options.separator_width),
            Formatting::default(),
            BlockStyle {
                size: 22,
                color: Some(SEPARATOR_COLOR.to_string()),
                italic: false,
                spacing_before: 400,
                spacing_after: 400,
            },
        )
    }
}

impl Default for CollectionExporter {
    fn default() -> Self {
        Self::new()
    }
}

/// The article source line, if the article carries any attribution
fn source_attribution(article: &Article) -> Option<String> {
    match (&article.media_name, &article.media_url) {
        (Some(name), Some(url)) => Some(format!("Source: {name} - {url}")),
        (Some(name), None) => Some(format!("Source: {name}")),
        (None, Some(url)) => Some(format!("Source: {url}")),
        (None, None) => None,
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

fn styled_paragraph(text: String, formatting: Formatting, style: BlockStyle) -> DocumentBlock {
    DocumentBlock::Paragraph {
        runs: vec![Run::new(text, formatting)],
        style,
    }
}
