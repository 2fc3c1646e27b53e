/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Paragraph classification heuristics.
//!
//! Both classifiers are pure predicates over a paragraph; they hold nothing
//! but their options.

use regex::Regex;
use rhetor_core::{CitationOptions, Paragraph, TagOptions};
use std::sync::LazyLock;

/// A capitalized word, an optional comma, a space and a four-digit number.
static AUTHOR_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z][a-z]+,? \d{4}\b").expect("author-year pattern"));

/// Decides whether a paragraph reads like a citation.
#[derive(Debug, Clone, Default)]
pub struct CitationClassifier {
    options: CitationOptions,
}

impl CitationClassifier {
    pub fn new(options: CitationOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CitationOptions {
        &self.options
    }

    /// True if the text contains any URL marker.
    pub fn has_url(&self, text: &str) -> bool {
        self.options
            .url_markers
            .iter()
            .any(|m| text.contains(m.as_str()))
    }

    /// Count the independent citation signals in the text.
    ///
    /// One point for an author-year shape, one for any keyword.
    pub fn score(&self, text: &str) -> u8 {
        let mut score = 0;
        if AUTHOR_YEAR.is_match(text) {
            score += 1;
        }
        if self
            .options
            .keywords
            .iter()
            .any(|k| text.contains(k.as_str()))
        {
            score += 1;
        }
        score
    }

    pub fn is_citation(&self, paragraph: &Paragraph) -> bool {
        let text = paragraph.trimmed_text();
        if self.has_url(&text) {
            return true;
        }
        self.score(&text) >= self.options.min_score
    }
}

/// Decides whether a paragraph is a short, unstyled lead-in.
#[derive(Debug, Clone, Default)]
pub struct TagClassifier {
    options: TagOptions,
}

impl TagClassifier {
    pub fn new(options: TagOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &TagOptions {
        &self.options
    }

    pub fn is_tag(&self, paragraph: &Paragraph) -> bool {
        let min_size = self.options.min_size_pt;
        let styled = paragraph.runs.iter().any(|run| {
            run.highlight_active || run.size_pt.is_some_and(|size| size <= min_size)
        });
        if styled {
            return false;
        }
        paragraph.text().chars().count() < self.options.max_length
    }
}

/// Classify with the default citation heuristics.
pub fn is_citation(paragraph: &Paragraph) -> bool {
    CitationClassifier::default().is_citation(paragraph)
}

/// Classify with the default tag heuristics.
pub fn is_tag(paragraph: &Paragraph) -> bool {
    TagClassifier::default().is_tag(paragraph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rhetor_core::Run;

    #[test]
    fn test_url_short_circuits() {
        for text in [
            "see www.example.com",
            "http://a.b",
            "https://doi.org/10.1/x",
            "  www. ",
        ] {
            assert!(is_citation(&Paragraph::plain(text)), "{text}");
        }
    }

    #[test]
    fn test_single_signal_is_not_enough() {
        assert!(!is_citation(&Paragraph::plain("Smith, 2020")));
        assert!(!is_citation(&Paragraph::plain("Smith 2020")));
        assert!(!is_citation(&Paragraph::plain("a professor said so")));
        assert!(!is_citation(&Paragraph::plain("nothing here")));
    }

    #[test]
    fn test_two_signals() {
        assert!(is_citation(&Paragraph::plain(
            "Smith, 2020, professor of economics"
        )));
        assert!(is_citation(&Paragraph::plain(
            "Jones 1999 published in Nature"
        )));
    }

    #[test]
    fn test_keywords_are_case_sensitive_substrings() {
        let classifier = CitationClassifier::default();
        assert_eq!(classifier.score("Professor"), 0);
        assert_eq!(classifier.score("phd"), 0);
        assert_eq!(classifier.score("PhDs"), 1);
        assert_eq!(classifier.score("universityville"), 1);
    }

    #[test]
    fn test_author_year_shape() {
        let classifier = CitationClassifier::default();
        assert_eq!(classifier.score("Smith, 2020"), 1);
        assert_eq!(classifier.score("Smith 2020"), 1);
        assert_eq!(classifier.score("smith, 2020"), 0);
        assert_eq!(classifier.score("SMITH 2020"), 0);
        assert_eq!(classifier.score("Smith,2020"), 0);
        assert_eq!(classifier.score("Smith 20201"), 0);
    }

    #[test]
    fn test_text_spans_runs() {
        let para = Paragraph::new(vec![
            Run::new("Smith, ").bold(),
            Run::new("2020"),
            Run::new(" journal"),
        ]);
        assert!(is_citation(&para));
    }

    #[test]
    fn test_custom_min_score() {
        let classifier = CitationClassifier::new(CitationOptions {
            min_score: 1,
            ..Default::default()
        });
        assert!(classifier.is_citation(&Paragraph::plain("Smith, 2020")));
    }

    #[test]
    fn test_tag_plain_short() {
        assert!(is_tag(&Paragraph::plain("Recent findings")));
        assert!(is_tag(&Paragraph::new(vec![
            Run::new("Bold").bold(),
            Run::new(" and underlined").underline(),
            Run::new(" and big").sized(14.0),
        ])));
    }

    #[test]
    fn test_tag_rejects_highlight() {
        let para = Paragraph::new(vec![Run::new("short"), Run::new("x").highlighted()]);
        assert!(!is_tag(&para));
    }

    #[test]
    fn test_tag_rejects_small_text() {
        assert!(!is_tag(&Paragraph::new(vec![Run::new("tiny").sized(10.0)])));
        assert!(!is_tag(&Paragraph::new(vec![Run::new("tiny").sized(8.0)])));
        assert!(is_tag(&Paragraph::new(vec![Run::new("ok").sized(10.5)])));
    }

    #[test]
    fn test_tag_length_limit() {
        assert!(is_tag(&Paragraph::plain("a".repeat(499))));
        assert!(!is_tag(&Paragraph::plain("a".repeat(500))));
        // Characters, not bytes.
        assert!(is_tag(&Paragraph::plain("é".repeat(499))));
    }
}
