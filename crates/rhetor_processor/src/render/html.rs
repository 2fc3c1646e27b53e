/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! HTML output format.

use super::format::OutputFormat;

#[derive(Default, Clone)]
pub struct Html;

impl OutputFormat for Html {
    type Output = String;

    fn text(&self, s: &str) -> Self::Output {
        // Document text is passed through unescaped so inline markup survives.
        s.to_string()
    }

    fn join(&self, items: Vec<Self::Output>, delimiter: &str) -> Self::Output {
        items.join(delimiter)
    }

    fn finish(&self, output: Self::Output) -> String {
        output
    }

    fn strong(&self, content: Self::Output) -> Self::Output {
        format!("<b>{}</b>", content)
    }

    fn underline(&self, content: Self::Output) -> Self::Output {
        format!("<u>{}</u>", content)
    }

    fn mark(&self, content: Self::Output) -> Self::Output {
        format!("<mark>{}</mark>", content)
    }

    fn font_size(&self, size_pt: f32, content: Self::Output) -> Self::Output {
        format!(r#"<span style="font-size:{}pt">{}</span>"#, size_pt, content)
    }
}
