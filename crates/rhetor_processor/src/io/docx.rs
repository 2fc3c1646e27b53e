/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Word (OOXML) document reading.
//!
//! Only direct formatting on runs is read (`w:rPr`); formatting inherited
//! from named styles is not resolved.

use std::io::{Cursor, Read};

use roxmltree::Node;
use rhetor_core::{Document, Paragraph, Run};
use zip::result::ZipError;
use zip::ZipArchive;

use crate::ProcessorError;

/// WordprocessingML main namespace.
pub const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Archive path of the main document part.
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Read a `.docx` archive into a document.
pub fn parse_docx(bytes: &[u8]) -> Result<Document, ProcessorError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut xml = String::new();
    match archive.by_name(DOCUMENT_PART) {
        Ok(mut part) => {
            part.read_to_string(&mut xml)?;
        }
        Err(ZipError::FileNotFound) => {
            return Err(ProcessorError::MissingPart(DOCUMENT_PART.to_string()))
        }
        Err(e) => return Err(e.into()),
    }
    parse_document_xml(&xml)
}

/// Parse the main document part.
///
/// Paragraphs are the direct children of `w:body`, in order.
pub fn parse_document_xml(xml: &str) -> Result<Document, ProcessorError> {
    let doc = roxmltree::Document::parse(xml)?;
    let body = doc
        .root_element()
        .children()
        .find(|n| is_w(n, "body"))
        .ok_or_else(|| {
            ProcessorError::ParseError("DOCX".to_string(), "missing w:body".to_string())
        })?;

    let paragraphs = body
        .children()
        .filter(|n| is_w(n, "p"))
        .map(parse_paragraph)
        .collect();
    Ok(Document::new(paragraphs))
}

fn parse_paragraph(node: Node) -> Paragraph {
    let mut runs = Vec::new();
    for child in node.children() {
        if is_w(&child, "r") {
            runs.push(parse_run(child));
        } else if is_w(&child, "hyperlink") {
            runs.extend(
                child
                    .children()
                    .filter(|n| is_w(n, "r"))
                    .map(parse_run),
            );
        }
    }
    Paragraph::new(runs)
}

fn parse_run(node: Node) -> Run {
    let mut run = Run::default();
    for child in node.children() {
        if !child.is_element() || child.tag_name().namespace() != Some(W_NS) {
            continue;
        }
        match child.tag_name().name() {
            "rPr" => apply_properties(&mut run, child),
            "t" => run.text.push_str(child.text().unwrap_or_default()),
            "tab" => run.text.push('\t'),
            "br" | "cr" => run.text.push('\n'),
            _ => {}
        }
    }
    run
}

fn apply_properties(run: &mut Run, rpr: Node) {
    for prop in rpr.children() {
        if !prop.is_element() || prop.tag_name().namespace() != Some(W_NS) {
            continue;
        }
        let val = prop.attribute((W_NS, "val"));
        match prop.tag_name().name() {
            "b" => run.bold = toggle_on(val),
            "u" => run.underline = !matches!(val, Some("none" | "0" | "false")),
            // "none" and "default" (auto colour) both mean no highlight.
            "highlight" => {
                run.highlight_active = val.is_some_and(|v| !matches!(v, "none" | "default"))
            }
            // Half-points.
            "sz" => run.size_pt = val.and_then(|v| v.parse::<f32>().ok()).map(|hp| hp / 2.0),
            _ => {}
        }
    }
}

/// OOXML on/off property: present without a value means on.
fn toggle_on(val: Option<&str>) -> bool {
    !matches!(val, Some("0" | "false" | "off"))
}

fn is_w(node: &Node, name: &str) -> bool {
    node.is_element()
        && node.tag_name().namespace() == Some(W_NS)
        && node.tag_name().name() == name
}
