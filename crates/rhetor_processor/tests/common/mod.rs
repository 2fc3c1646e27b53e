/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#![allow(dead_code)]

use rhetor_processor::io::docx::{DOCUMENT_PART, W_NS};
use rhetor_processor::{Paragraph, Run};
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

// --- Helper Functions for Test Data Construction ---

/// A short unstyled lead-in paragraph.
pub fn tag(text: &str) -> Paragraph {
    Paragraph::plain(text)
}

/// A citation paragraph: bold author-year label plus a keyword signal.
pub fn citation(label: &str) -> Paragraph {
    Paragraph::new(vec![
        Run::new(label).bold(),
        Run::new(" professor of economics"),
    ])
}

/// A paragraph holding one highlighted run.
pub fn body(text: &str) -> Paragraph {
    Paragraph::new(vec![Run::new(text).highlighted()])
}

/// Serialize one run as WordprocessingML.
pub fn run_xml(run: &Run) -> String {
    let mut props = String::new();
    if run.bold {
        props.push_str("<w:b/>");
    }
    if run.underline {
        props.push_str(r#"<w:u w:val="single"/>"#);
    }
    if run.highlight_active {
        props.push_str(r#"<w:highlight w:val="yellow"/>"#);
    }
    if let Some(size) = run.size_pt {
        props.push_str(&format!(r#"<w:sz w:val="{}"/>"#, (size * 2.0).round() as u32));
    }
    format!(
        r#"<w:r><w:rPr>{}</w:rPr><w:t xml:space="preserve">{}</w:t></w:r>"#,
        props,
        escape(&run.text)
    )
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Serialize paragraphs as a complete `word/document.xml` part.
pub fn document_xml(paragraphs: &[Paragraph]) -> String {
    let body: String = paragraphs
        .iter()
        .map(|p| {
            let runs: String = p.runs.iter().map(run_xml).collect();
            format!("<w:p>{}</w:p>", runs)
        })
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="{}"><w:body>{}<w:sectPr/></w:body></w:document>"#,
        W_NS, body
    )
}

/// Build an in-memory `.docx` archive containing the given paragraphs.
pub fn make_docx(paragraphs: &[Paragraph]) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut zip = ZipWriter::new(&mut buf);
        let opts = SimpleFileOptions::default();
        zip.start_file("[Content_Types].xml", opts).unwrap();
        zip.write_all(br#"<?xml version="1.0"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"/>"#)
            .unwrap();
        zip.start_file(DOCUMENT_PART, opts).unwrap();
        zip.write_all(document_xml(paragraphs).as_bytes()).unwrap();
        zip.finish().unwrap();
    }
    buf.into_inner()
}
