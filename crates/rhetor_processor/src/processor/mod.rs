/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Fragment extraction.
//!
//! A single forward pass over the non-empty paragraphs of a document. The
//! scanner alternates between two states:
//!
//! - **Scanning**: skip paragraphs until one classifies as a citation. That
//!   paragraph opens a fragment: its lead-in tag (the paragraph directly
//!   before it, if that one is a tag) and its label (bold or highlighted runs).
//! - **Collecting**: append highlighted runs of the following paragraphs to
//!   the open fragment's body, until the next citation or the end of input.
//!   The citation that ends collection is not consumed; scanning picks it up
//!   again and opens the next fragment from it.


use crate::classify::{CitationClassifier, TagClassifier};
use crate::render::format::OutputFormat;
use crate::render::html::Html;
use crate::render::run::render_paragraph;
use rhetor_core::{Document, ExtractorConfig, Fragment, Paragraph};
use std::marker::PhantomData;
use tracing::debug;

/// Pairs citations with their tags and supporting text.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    citations: CitationClassifier,
    tags: TagClassifier,
}

impl Extractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self {
            citations: CitationClassifier::new(config.citation),
            tags: TagClassifier::new(config.tag),
        }
    }

    pub fn is_citation(&self, paragraph: &Paragraph) -> bool {
        self.citations.is_citation(paragraph)
    }

    pub fn is_tag(&self, paragraph: &Paragraph) -> bool {
        self.tags.is_tag(paragraph)
    }

    /// Extract HTML fragments from already-filtered paragraphs.
    pub fn extract(&self, paragraphs: &[Paragraph]) -> Vec<Fragment> {
        self.extract_with_format::<Html>(paragraphs)
    }

    /// Extract fragments, rendering markup with the given output format.
    pub fn extract_with_format<F>(&self, paragraphs: &[Paragraph]) -> Vec<Fragment>
    where
        F: OutputFormat<Output = String>,
    {
        self.scan::<F>(paragraphs).collect()
    }

    /// Drop blank paragraphs from a document, then extract HTML fragments.
    pub fn extract_document(&self, document: &Document) -> Vec<Fragment> {
        self.extract_document_with_format::<Html>(document)
    }

    pub fn extract_document_with_format<F>(&self, document: &Document) -> Vec<Fragment>
    where
        F: OutputFormat<Output = String>,
    {
        let paragraphs = document.non_empty_paragraphs();
        debug!(
            total = document.paragraphs.len(),
            non_empty = paragraphs.len(),
            "filtered paragraphs"
        );
        self.extract_with_format::<F>(&paragraphs)
    }

    /// Lazily scan paragraphs, yielding one fragment per citation.
    pub fn scan<'a, F>(&'a self, paragraphs: &'a [Paragraph]) -> Scanner<'a, F>
    where
        F: OutputFormat<Output = String>,
    {
        Scanner {
            extractor: self,
            paragraphs,
            position: 0,
            state: ScanState::Scanning,
            _format: PhantomData,
        }
    }

    fn open_fragment<F>(&self, paragraphs: &[Paragraph], index: usize) -> Fragment
    where
        F: OutputFormat<Output = String>,
    {
        let fmt = F::default();

        let tag = match index.checked_sub(1).map(|prev| &paragraphs[prev]) {
            Some(prev) if self.tags.is_tag(prev) => render_paragraph::<F>(prev),
            _ => String::new(),
        };

        // Labels force strong on the raw run text; other run styles are ignored.
        let mut label = String::new();
        for run in &paragraphs[index].runs {
            if run.bold || run.highlight_active {
                label.push_str(&fmt.finish(fmt.strong(fmt.text(&run.text))));
                label.push(' ');
            }
        }

        Fragment::new(tag, label, String::new())
    }

    fn collect_body<F>(&self, body: &mut String, paragraph: &Paragraph)
    where
        F: OutputFormat<Output = String>,
    {
        let fmt = F::default();
        for run in paragraph.runs.iter().filter(|r| r.highlight_active) {
            body.push_str(&fmt.finish(fmt.text(&run.text)));
            body.push(' ');
        }
    }
}

/// Where the scanner is in its two-state cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanState {
    /// Looking for the next citation.
    Scanning,
    /// Gathering body text for an open fragment.
    Collecting(Fragment),
}

/// Iterator over the fragments of a paragraph sequence.
///
/// Created by [`Extractor::scan`].
#[derive(Debug)]
pub struct Scanner<'a, F> {
    extractor: &'a Extractor,
    paragraphs: &'a [Paragraph],
    position: usize,
    state: ScanState,
    _format: PhantomData<F>,
}

impl<F> Scanner<'_, F> {
    /// Index of the next paragraph to examine.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }
}

impl<F> Iterator for Scanner<'_, F>
where
    F: OutputFormat<Output = String>,
{
    type Item = Fragment;

    fn next(&mut self) -> Option<Fragment> {
        loop {
            let current = self.paragraphs.get(self.position);
            match &mut self.state {
                ScanState::Scanning => {
                    let paragraph = current?;
                    if self.extractor.is_citation(paragraph) {
                        debug!(index = self.position, "citation found");
                        let fragment = self
                            .extractor
                            .open_fragment::<F>(self.paragraphs, self.position);
                        self.state = ScanState::Collecting(fragment);
                    }
                    self.position += 1;
                }
                ScanState::Collecting(fragment) => match current {
                    Some(paragraph) if !self.extractor.is_citation(paragraph) => {
                        self.extractor
                            .collect_body::<F>(&mut fragment.body, paragraph);
                        self.position += 1;
                    }
                    // Next citation or end of input: emit without advancing.
                    _ => {
                        let fragment = std::mem::take(fragment);
                        self.state = ScanState::Scanning;
                        debug!(
                            end = self.position,
                            tagged = fragment.has_tag(),
                            "fragment emitted"
                        );
                        return Some(fragment);
                    }
                },
            }
        }
    }
}
