/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Run and paragraph rendering.

use super::format::OutputFormat;
use rhetor_core::{Paragraph, Run};

/// Render one run, applying its inline effects.
///
/// Wrapping nests in a fixed order: strong innermost, then underline, then
/// highlight, with the font size outermost. Whitespace-only runs render as
/// nothing.
pub fn style_run<F>(run: &Run) -> String
where
    F: OutputFormat<Output = String>,
{
    if run.is_blank() {
        return String::new();
    }
    let fmt = F::default();
    let mut out = fmt.text(&run.text);
    if run.bold {
        out = fmt.strong(out);
    }
    if run.underline {
        out = fmt.underline(out);
    }
    if run.highlight_active {
        out = fmt.mark(out);
    }
    if let Some(size_pt) = run.size_pt {
        out = fmt.font_size(size_pt, out);
    }
    fmt.finish(out)
}

/// Render a paragraph as the concatenation of its styled runs.
pub fn render_paragraph<F>(paragraph: &Paragraph) -> String
where
    F: OutputFormat<Output = String>,
{
    let fmt = F::default();
    let parts = paragraph.runs.iter().map(style_run::<F>).collect();
    fmt.finish(fmt.join(parts, ""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{html::Html, plain::PlainText};

    #[test]
    fn test_blank_runs_render_empty() {
        for text in ["", " ", "\t\n", "   "] {
            let run = Run::new(text).bold().underline().highlighted().sized(14.0);
            assert_eq!(style_run::<Html>(&run), "");
        }
    }

    #[test]
    fn test_unstyled_run_is_raw_text() {
        assert_eq!(style_run::<Html>(&Run::new(" a b ")), " a b ");
    }

    #[test]
    fn test_nesting_order() {
        let run = Run::new("x").bold().underline().highlighted().sized(12.0);
        assert_eq!(
            style_run::<Html>(&run),
            r#"<span style="font-size:12pt"><mark><u><b>x</b></u></mark></span>"#
        );
    }

    #[test]
    fn test_fractional_size() {
        let run = Run::new("note").sized(10.5);
        assert_eq!(
            style_run::<Html>(&run),
            r#"<span style="font-size:10.5pt">note</span>"#
        );
    }

    #[test]
    fn test_partial_styles() {
        assert_eq!(style_run::<Html>(&Run::new("a").underline()), "<u>a</u>");
        assert_eq!(
            style_run::<Html>(&Run::new("a").bold().highlighted()),
            "<mark><b>a</b></mark>"
        );
    }

    #[test]
    fn test_plain_text_drops_markup() {
        let run = Run::new("x").bold().underline().highlighted().sized(12.0);
        assert_eq!(style_run::<PlainText>(&run), "x");
    }

    #[test]
    fn test_render_paragraph_concatenates() {
        let para = Paragraph::new(vec![
            Run::new("Recent "),
            Run::new("  "),
            Run::new("findings").bold(),
        ]);
        assert_eq!(render_paragraph::<Html>(&para), "Recent <b>findings</b>");
    }

    #[test]
    fn test_render_empty_paragraph() {
        assert_eq!(render_paragraph::<Html>(&Paragraph::default()), "");
        let blank = Paragraph::new(vec![Run::new(" ").bold(), Run::new("\t").highlighted()]);
        assert_eq!(render_paragraph::<Html>(&blank), "");
    }
}
