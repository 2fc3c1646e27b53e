/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Rhetor Processor
//!
//! Finds citation paragraphs in a formatted document, pairs each with the
//! short lead-in paragraph before it and the highlighted text after it, and
//! renders the result as fragments ready for display.
//!
//! # Example
//!
//! ```rust
//! use rhetor_processor::{Extractor, Paragraph, Run};
//!
//! let paragraphs = vec![
//!     Paragraph::plain("Recent findings"),
//!     Paragraph::new(vec![
//!         Run::new("Smith, 2020").bold(),
//!         Run::new(" professor of economics"),
//!     ]),
//!     Paragraph::new(vec![Run::new("Key result X").highlighted()]),
//! ];
//!
//! let fragments = Extractor::default().extract(&paragraphs);
//! assert_eq!(
//!     fragments[0].markup(),
//!     "Recent findings <b>Smith, 2020</b> : Key result X"
//! );
//! ```

pub mod classify;
pub mod error;
pub mod io;
pub mod processor;
pub mod publish;
pub mod render;

pub use classify::{is_citation, is_tag, CitationClassifier, TagClassifier};
pub use error::ProcessorError;
pub use processor::{Extractor, ScanState, Scanner};
pub use render::{render, style};

// Re-export the document model for convenience
pub use rhetor_core::{Document, ExtractorConfig, Fragment, Paragraph, Run};
