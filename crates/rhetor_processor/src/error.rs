/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Errors raised while loading documents and publishing output.
//!
//! Classification and extraction never fail; only the I/O edges do.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse {0}: {1}")]
    ParseError(String, String),

    #[error("invalid document archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("invalid document XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("document archive has no {0} part")]
    MissingPart(String),

    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("no viewer available to open {0}")]
    NoViewer(String),
}
