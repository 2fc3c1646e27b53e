/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Loading documents and configuration from disk.

pub mod docx;

use std::fs;
use std::path::Path;

use rhetor_core::{Document, ExtractorConfig};
use tracing::debug;

use crate::ProcessorError;

/// Source document formats understood by the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// Word OOXML archive.
    Docx,
    /// A serialized [`Document`] in JSON.
    Json,
    /// A serialized [`Document`] in YAML.
    Yaml,
}

impl DocumentFormat {
    /// Pick a format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, ProcessorError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "docx" => Ok(DocumentFormat::Docx),
            "json" => Ok(DocumentFormat::Json),
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            "" => Err(ProcessorError::UnsupportedFormat(
                path.display().to_string(),
            )),
            other => Err(ProcessorError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Load a document from a file given its path.
///
/// The file stem becomes the document title unless the source names one.
pub fn load_document(path: &Path) -> Result<Document, ProcessorError> {
    let format = DocumentFormat::from_path(path)?;
    let bytes = fs::read(path)?;
    let mut document = load_document_bytes(&bytes, format)?;
    if document.title.is_none() {
        document.title = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string());
    }
    debug!(
        path = %path.display(),
        ?format,
        paragraphs = document.paragraphs.len(),
        "loaded document"
    );
    Ok(document)
}

/// Load a document from in-memory bytes.
pub fn load_document_bytes(
    bytes: &[u8],
    format: DocumentFormat,
) -> Result<Document, ProcessorError> {
    match format {
        DocumentFormat::Docx => docx::parse_docx(bytes),
        DocumentFormat::Json => {
            // Check for syntax errors first
            let _: serde_json::Value = serde_json::from_slice(bytes)
                .map_err(|e| ProcessorError::ParseError("JSON".to_string(), e.to_string()))?;
            serde_json::from_slice::<Document>(bytes)
                .map_err(|e| ProcessorError::ParseError("JSON".to_string(), e.to_string()))
        }
        DocumentFormat::Yaml => {
            let content = String::from_utf8_lossy(bytes);
            serde_yaml::from_str::<Document>(&content)
                .map_err(|e| ProcessorError::ParseError("YAML".to_string(), e.to_string()))
        }
    }
}

/// Load extraction options from a YAML or JSON file.
pub fn load_config(path: &Path) -> Result<ExtractorConfig, ProcessorError> {
    let content = fs::read_to_string(path)?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

    match ext {
        "json" => ExtractorConfig::from_json_str(&content)
            .map_err(|e| ProcessorError::ParseError("JSON".to_string(), e.to_string())),
        _ => ExtractorConfig::from_yaml_str(&content)
            .map_err(|e| ProcessorError::ParseError("YAML".to_string(), e.to_string())),
    }
}
