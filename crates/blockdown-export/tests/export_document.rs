use blockdown_core::DocumentBlock;
use blockdown_export::{Article, Collection, CollectionExporter};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;

fn sample_collection() -> Collection {
    Collection {
        title: "March Briefing".to_string(),
        description: Some("Selected coverage".to_string()),
        articles: vec![
            Article {
                heading: "Rollout begins".to_string(),
                subheading: "Phase one ships".to_string(),
                author: "R. Chen".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                media_name: Some("The Ledger".to_string()),
                media_url: None,
                body: "<p>The rollout <strong>started</strong> on time.</p>\
                       <ul><li>region one</li><li>region two</li></ul>"
                    .to_string(),
            },
            Article {
                heading: "Follow-up".to_string(),
                subheading: "Early numbers".to_string(),
                author: "M. Ortiz".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
                media_name: None,
                media_url: None,
                body: "<blockquote>Better than expected.</blockquote>".to_string(),
            },
        ],
    }
}

#[test]
fn full_export_block_sequence() {
    let exporter = CollectionExporter::new();
    let generated_on = NaiveDate::from_ymd_opt(2024, 3, 8).unwrap();
    let document = exporter
        .build_document(&sample_collection(), generated_on)
        .unwrap();

    let texts: Vec<String> = document.iter().map(|block| block.plain_text()).collect();
    assert_eq!(
        texts,
        vec![
            // Collection header
            "March Briefing".to_string(),
            "Selected coverage".to_string(),
            "Generated on March 8, 2024".to_string(),
            // First article
            "Rollout begins".to_string(),
            "Phase one ships".to_string(),
            "By R. Chen \u{2022} March 1, 2024".to_string(),
            "Source: The Ledger".to_string(),
            "The rollout started on time.".to_string(),
            "region one".to_string(),
            "region two".to_string(),
            // Separator
            "\u{2500}".repeat(50),
            // Second article
            "Follow-up".to_string(),
            "Early numbers".to_string(),
            "By M. Ortiz \u{2022} March 4, 2024".to_string(),
            "Better than expected.".to_string(),
        ]
    );
}

#[test]
fn body_formatting_survives_export() {
    let exporter = CollectionExporter::new();
    let generated_on = NaiveDate::from_ymd_opt(2024, 3, 8).unwrap();
    let document = exporter
        .build_document(&sample_collection(), generated_on)
        .unwrap();

    let body_paragraph = document
        .iter()
        .find(|block| block.plain_text() == "The rollout started on time.")
        .unwrap();
    let bold_runs: Vec<&str> = body_paragraph
        .runs()
        .iter()
        .filter(|run| run.formatting.bold)
        .map(|run| run.text.as_str())
        .collect();
    assert_eq!(bold_runs, vec!["started"]);

    let quote = document
        .iter()
        .find(|block| matches!(block, DocumentBlock::Quote { .. }))
        .unwrap();
    assert_eq!(quote.plain_text(), "Better than expected.");
}
