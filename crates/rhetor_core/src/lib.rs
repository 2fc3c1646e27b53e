/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Rhetor core types.
//!
//! The structured document model handed to the extractor, the fragments it
//! produces, and the options that tune its heuristics.

pub mod document;
pub mod fragment;
pub mod options;

pub use document::{Document, Paragraph, Run};
pub use fragment::Fragment;
pub use options::{CitationOptions, ExtractorConfig, TagOptions};
