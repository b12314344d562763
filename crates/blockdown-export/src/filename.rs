//! Download filename for exported collections.

/// Deterministic download filename: the collection title with every
/// non-alphanumeric character replaced by `_`, lowercased, plus the
/// word-processor extension.
pub fn export_filename(title: &str) -> String {
    let slug: String = title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{slug}.docx")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_replaces() {
        assert_eq!(export_filename("Weekly Digest"), "weekly_digest.docx");
        assert_eq!(export_filename("Q3: Results!"), "q3__results_.docx");
    }

    #[test]
    fn test_non_ascii_characters_are_replaced() {
        assert_eq!(export_filename("caf\u{e9} news"), "caf__news.docx");
    }

    #[test]
    fn test_plain_title_passes_through() {
        assert_eq!(export_filename("report2024"), "report2024.docx");
    }
}
